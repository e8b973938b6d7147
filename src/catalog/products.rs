/// Growth stage a feed product is formulated for.
///
/// The catalog is ordered by stage, which is what the pen-size selection
/// rule in [`products_for_pen`] indexes against.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FeedTier {
    Starter,
    Nursery,
    Grower,
    Finisher1,
    Finisher2,
    Finisher3
}

/// An immutable catalog entry for one feed product.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    /// Stock-keeping code as it appears on the invoice line.
    pub code: &'static str,
    /// Localized display name (Thai).
    pub name: &'static str,
    /// List price per bag in whole baht, before per-transaction variation.
    pub base_price: i64,
    /// Growth stage this feed is formulated for.
    pub tier: FeedTier
}

/// The six Jet feed products, ordered from starter to late finisher.
pub const FEED_CATALOG: [Product; 6] = [
    Product { code: "PK64000158", name: "เจ็ท 105 หมูเล็ก 6-15 กก.", base_price: 755, tier: FeedTier::Starter },
    Product { code: "PK64000159", name: "เจ็ท 108 หมูนม 15-25 กก.", base_price: 650, tier: FeedTier::Nursery },
    Product { code: "PK64000160", name: "เจ็ท 110 หมู 25-40 กก.", base_price: 595, tier: FeedTier::Grower },
    Product { code: "PK64000161", name: "เจ็ท 120 หมู 40-60 กก.", base_price: 580, tier: FeedTier::Finisher1 },
    Product { code: "PK64000162", name: "เจ็ท 130 หมู 60-90 กก.", base_price: 565, tier: FeedTier::Finisher2 },
    Product { code: "PK64000163", name: "เจ็ท 153 หมู 90 กก. ขึ้นไป", base_price: 550, tier: FeedTier::Finisher3 }
];

/// Returns the catalog slice a pen of the given head count may order from.
///
/// Small pens stay on starter/nursery/grower feeds, medium pens span the
/// grower/early-finisher range, and large pens only take finisher feeds.
pub fn products_for_pen(pig_count: u32) -> &'static [Product] {
    if pig_count <= 20 {
        &FEED_CATALOG[..3]
    } else if pig_count <= 35 {
        &FEED_CATALOG[2..5]
    } else {
        &FEED_CATALOG[3..]
    }
}
