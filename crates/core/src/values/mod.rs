//! Value objects: prices, sizes, symbols, timestamps

mod price;
mod quantity;
mod symbol;

pub use price::Price;
pub use quantity::Quantity;
pub use symbol::Symbol;

use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
