use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngExt, SeedableRng};
use tracing::debug;

use crate::catalog::{self, Customer, Product, RosterError, PHONE_PREFIXES, SHOP_NAMES};
use crate::models::{BuyerDetail, OrderItem, ShopDetail, Transaction};

/// Seed used by the binary. Fixed so every run emits the same dataset.
pub const RANDOM_SEED: u64 = 42;

const TRANSACTION_CODE_PREFIX: &str = "TR68";
const MAX_TIMESTAMP_AGE_DAYS: i64 = 30;
const MAX_DISCOUNT_PER_BAG: i64 = 15;
const BAGS_PER_PIG_MIN: f64 = 1.8;
const BAGS_PER_PIG_MAX: f64 = 3.2;
const PRICE_VARIATION_MIN: f64 = 0.95;
const PRICE_VARIATION_MAX: f64 = 1.05;

const OBJECT_ID_MIN: u128 = 100_000_000_000_000_000_000_000;
const OBJECT_ID_MAX: u128 = 999_999_999_999_999_999_999_999;

/// Produces the mock point-of-sale dataset for the embedded customer roster.
///
/// All randomness flows through one owned, explicitly seeded generator and
/// the reference clock is captured up front, so a given (seed, now) pair
/// always yields the same transaction list.
pub struct SalesGenerator {
    rng: StdRng,
    now: DateTime<Utc>
}

impl SalesGenerator {
    /// Creates a generator with its own RNG seeded once from `seed`.
    pub fn new(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now
        }
    }

    /// Runs one full generation pass over the customer roster.
    ///
    /// Each customer receives 1-3 transactions; the result is sorted by
    /// transaction code before being returned.
    ///
    /// # Errors
    /// Returns `RosterError` if the embedded roster constants are misaligned.
    pub fn generate(&mut self) -> Result<Vec<Transaction>, RosterError> {
        let roster = catalog::customers()?;
        let mut transactions: Vec<Transaction> = Vec::new();

        for customer in &roster {
            let transaction_count = self.rng.random_range(1..=3);

            debug!("Customer [{}] with {} pigs receives {} transactions", customer.code, customer.pig_count, transaction_count);

            for _ in 0..transaction_count {
                //NOTE: The global 1-based sequence drives the transaction code, the shop rotation
                //      and the warehouse tag. Deriving it from the accumulator keeps the pass free
                //      of hidden counters.
                let sequence = transactions.len() as u64 + 1;
                transactions.push(self.generate_transaction(customer, sequence));
            }
        }

        transactions.sort_by(|a, b| a.code.cmp(&b.code));

        Ok(transactions)
    }

    fn generate_transaction(&mut self, customer: &Customer, sequence: u64) -> Transaction {
        // Each pig needs roughly two to three bags of feed over the period.
        let bags_per_pig = self.rng.random_range(BAGS_PER_PIG_MIN..BAGS_PER_PIG_MAX);
        let total_bags = (customer.pig_count as f64 * bags_per_pig) as i64;
        let item_count = self.rng.random_range(1..=2);

        let order_list = self.generate_order_list(customer.pig_count, total_bags, item_count, sequence);
        let sub_total: i64 = order_list.iter().map(|item| item.total_price_include_discount).sum();

        let days_ago = self.rng.random_range(1..=MAX_TIMESTAMP_AGE_DAYS);
        let timestamp = (self.now - Duration::days(days_ago)).format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        let phone = self.random_phone();
        let shop_index = ((sequence - 1) % SHOP_NAMES.len() as u64) as usize;

        Transaction {
            id: format!("{:024x}", self.rng.random_range(OBJECT_ID_MIN..=OBJECT_ID_MAX)),
            discount: 0,
            tax_percent: 0,
            code: format!("{TRANSACTION_CODE_PREFIX}{sequence:06}"),
            order_list,
            timestamp,
            comment: String::new(),
            return_date: None,
            register_vat: false,
            segment_type: 4,
            sub_total,
            sub_total_exclude_vat: 0,
            grand_total: sub_total,
            cash_register: None,
            buyer_detail: BuyerDetail {
                code: customer.code.clone(),
                firstname: customer.name,
                lastname: "",
                phone
            },
            shop_detail: ShopDetail {
                shop_id: format!("shop{:03}", shop_index + 1),
                shop_name: SHOP_NAMES[shop_index]
            }
        }
    }

    /// Splits `total_bags` across up to `item_count` tier-appropriate line items.
    ///
    /// The final item always takes the full remainder; a non-final item takes a
    /// uniform draw from the middle third of what is left. If the remainder is
    /// exhausted before an item is generated, the list ends short.
    pub(super) fn generate_order_list(&mut self, pig_count: u32, total_bags: i64, item_count: usize, sequence: u64) -> Vec<OrderItem> {
        let mut order_list = Vec::with_capacity(item_count);
        let mut remaining_bags = total_bags;

        for item_index in 0..item_count {
            if remaining_bags <= 0 {
                break;
            }

            let product = self.pick_product(pig_count);

            let stock = if item_index + 1 == item_count {
                remaining_bags
            } else {
                self.rng.random_range(remaining_bags / 3..=remaining_bags * 2 / 3)
            };

            remaining_bags -= stock;
            order_list.push(self.build_order_item(product, stock, sequence));
        }

        order_list
    }

    fn pick_product(&mut self, pig_count: u32) -> Product {
        let products = catalog::products_for_pen(pig_count);

        //NOTE: The tier slices are compile-time constants with three entries each,
        //      so choosing from them cannot fail.
        *products.choose(&mut self.rng).unwrap()
    }

    fn build_order_item(&mut self, product: Product, stock: i64, sequence: u64) -> OrderItem {
        let price_variation = self.rng.random_range(PRICE_VARIATION_MIN..PRICE_VARIATION_MAX);
        let price = (product.base_price as f64 * price_variation) as i64;
        let cost_discount_price = self.rng.random_range(0..=MAX_DISCOUNT_PER_BAG);

        // Warehouse tags rotate A-Z with the global transaction sequence.
        let warehouse = (b'A' + (sequence % 26) as u8) as char;

        OrderItem {
            stock,
            name: product.name,
            price,
            special_price: price,
            discount_type: 1,
            cost_discount_price,
            code: product.code,
            sku_list: Vec::new(),
            topping_in_order: Vec::new(),
            total_price_include_discount: stock * price,
            note_in_order: vec![format!("คลังฟาร์ม {warehouse}")]
        }
    }

    fn random_phone(&mut self) -> String {
        let prefix = PHONE_PREFIXES.choose(&mut self.rng).unwrap();
        let exchange = self.rng.random_range(100..=999);
        let line = self.rng.random_range(1000..=9999);

        format!("{prefix}-{exchange}-{line}")
    }
}
