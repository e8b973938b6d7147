mod sales_generator;

pub use sales_generator::{SalesGenerator, RANDOM_SEED};
