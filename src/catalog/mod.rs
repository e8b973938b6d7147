mod errors;
mod products;
mod roster;
#[cfg(test)]
mod tests;

pub use errors::RosterError;
pub use products::{FeedTier, Product, FEED_CATALOG, products_for_pen};
pub use roster::{Customer, CUSTOMER_NAMES, PHONE_PREFIXES, PIG_PEN_SIZES, SHOP_NAMES, customers};
