//! Kestrel Core Domain
//!
//! Pure domain types for the Kestrel trading system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod bars;
pub mod enums;
pub mod error;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use bars::{Bar, BarSpecification, BarType};
pub use enums::{Currency, QuoteType, Resolution, SecurityType, Venue};
pub use error::{ModelError, Result};
pub use instruments::{Instrument, InstrumentId};
pub use values::{Price, Quantity, Symbol, Timestamp};
