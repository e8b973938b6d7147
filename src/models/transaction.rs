use serde::Serialize;

use crate::models::OrderItem;

/// One point-of-sale transaction as it appears in the output array.
///
/// This is a denormalized snapshot: buyer and shop details are embedded
/// rather than referenced. The header-level `discount`, `tax_percent` and
/// `sub_total_exclude_vat` fields exist in the POS schema but are always
/// zero-filled here, so `grand_total` always equals `sub_total`.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    /// Random 24-hex-digit document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub discount: i64,
    pub tax_percent: i64,
    /// Human-readable code, `TR68` plus a zero-padded global sequence.
    pub code: String,
    pub order_list: Vec<OrderItem>,
    /// Millisecond-precision UTC ISO-8601, within the past 30 days.
    pub timestamp: String,
    pub comment: String,
    pub return_date: Option<String>,
    pub register_vat: bool,
    pub segment_type: i64,
    /// Sum of line totals.
    pub sub_total: i64,
    pub sub_total_exclude_vat: i64,
    /// Equals `sub_total`; no tax or header discount is applied.
    pub grand_total: i64,
    pub cash_register: Option<String>,
    pub buyer_detail: BuyerDetail,
    pub shop_detail: ShopDetail
}

/// Embedded buyer snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct BuyerDetail {
    /// Member code, `M` plus the zero-padded roster index.
    pub code: String,
    pub firstname: &'static str,
    pub lastname: &'static str,
    pub phone: String
}

/// Embedded shop-branch snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ShopDetail {
    pub shop_id: String,
    pub shop_name: &'static str
}
