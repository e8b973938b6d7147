mod order_item;
mod transaction;

pub use order_item::OrderItem;
pub use transaction::{BuyerDetail, ShopDetail, Transaction};
