use super::{FeedTier, FEED_CATALOG, customers, products_for_pen};
use super::{CUSTOMER_NAMES, PIG_PEN_SIZES, SHOP_NAMES};

use std::collections::HashSet;

use anyhow::Result;

#[test]
fn test_roster_lists_are_parallel_with_100_entries() -> Result<()> {
    assert_eq!(CUSTOMER_NAMES.len(), 100);
    assert_eq!(PIG_PEN_SIZES.len(), 100);

    let roster = customers()?;

    assert_eq!(roster.len(), 100);
    assert_eq!(roster[0].code, "M000001");
    assert_eq!(roster[0].name, "Robert Ranch 1");
    assert_eq!(roster[0].pig_count, 17);
    assert_eq!(roster[99].code, "M000100");
    assert_eq!(roster[99].pig_count, 11);

    Ok(())
}

#[test]
fn test_catalog_has_six_products_with_unique_codes() {
    assert_eq!(FEED_CATALOG.len(), 6);

    let codes: HashSet<&str> = FEED_CATALOG.iter().map(|product| product.code).collect();

    assert_eq!(codes.len(), 6);
    assert_eq!(FEED_CATALOG[0].tier, FeedTier::Starter);
    assert_eq!(FEED_CATALOG[5].tier, FeedTier::Finisher3);
}

#[test]
fn test_small_pens_only_see_starter_through_grower() {
    for pig_count in [1, 17, 20] {
        let tiers: Vec<FeedTier> = products_for_pen(pig_count).iter().map(|product| product.tier).collect();
        assert_eq!(tiers, vec![FeedTier::Starter, FeedTier::Nursery, FeedTier::Grower]);
    }
}

#[test]
fn test_medium_pens_only_see_grower_through_finisher2() {
    for pig_count in [21, 30, 35] {
        let tiers: Vec<FeedTier> = products_for_pen(pig_count).iter().map(|product| product.tier).collect();
        assert_eq!(tiers, vec![FeedTier::Grower, FeedTier::Finisher1, FeedTier::Finisher2]);
    }
}

#[test]
fn test_large_pens_only_see_finisher_feeds() {
    for pig_count in [36, 48, 200] {
        let tiers: Vec<FeedTier> = products_for_pen(pig_count).iter().map(|product| product.tier).collect();
        assert_eq!(tiers, vec![FeedTier::Finisher1, FeedTier::Finisher2, FeedTier::Finisher3]);
    }
}

#[test]
fn test_shop_rotation_list_covers_ten_branches() {
    assert_eq!(SHOP_NAMES.len(), 10);
}
