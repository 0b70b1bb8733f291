//! Domain enumerations shared across the model
//!
//! All wire forms are uppercase (`"FXCM"`, `"MINUTE"`, `"BID"`) and parsing
//! is case-insensitive.

mod currency;
mod quote_type;
mod resolution;
mod security_type;
mod venue;

pub use currency::Currency;
pub use quote_type::QuoteType;
pub use resolution::Resolution;
pub use security_type::SecurityType;
pub use venue::Venue;
