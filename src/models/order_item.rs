use serde::Serialize;

/// One line of a transaction's order list.
///
/// Field order matches the emitted JSON document. Prices are whole baht;
/// `cost_discount_price` is recorded per bag but never folded into
/// `total_price_include_discount`, mirroring the upstream POS export.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    /// Number of bags on this line.
    pub stock: i64,
    /// Product display name snapshot.
    pub name: &'static str,
    /// Resolved unit price after per-transaction variation.
    pub price: i64,
    /// Identical to `price`; the POS schema carries both.
    pub special_price: i64,
    pub discount_type: i64,
    /// Flat per-bag discount, stored but not applied.
    pub cost_discount_price: i64,
    /// Product stock-keeping code.
    pub code: &'static str,
    pub sku_list: Vec<String>,
    pub topping_in_order: Vec<String>,
    /// Line total, `stock * price`.
    pub total_price_include_discount: i64,
    /// Warehouse tags, one entry rotating A-Z by transaction sequence.
    pub note_in_order: Vec<String>
}
