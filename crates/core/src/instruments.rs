//! Instrument definitions: static trading rules for a tradeable contract

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{Currency, SecurityType};
use crate::error::ModelError;
use crate::values::{Quantity, Symbol, Timestamp};

/// Unique identifier for an instrument
///
/// A stable reference that can be stored in orders and used as a map key
/// without copying the full instrument definition. The canonical form
/// matches the symbol's `CODE.VENUE` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentId(pub String);

impl InstrumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstrumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstrumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&Symbol> for InstrumentId {
    fn from(symbol: &Symbol) -> Self {
        Self(symbol.to_string())
    }
}

/// A tradeable contract's static definition: price grid, size limits, and
/// financing rates, independent of any live quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: InstrumentId,
    pub symbol: Symbol,
    /// The broker's human-readable form of the pair, e.g. `GBP/USD`.
    pub broker_symbol: String,
    pub quote_currency: Currency,
    pub security_type: SecurityType,
    /// Decimal places of the price grid.
    pub tick_precision: u8,
    /// Minimum price increment.
    pub tick_size: Decimal,
    pub round_lot_size: Quantity,
    pub min_stop_distance_entry: Decimal,
    pub min_limit_distance_entry: Decimal,
    pub min_stop_distance: Decimal,
    pub min_limit_distance: Decimal,
    pub min_trade_size: Quantity,
    pub max_trade_size: Quantity,
    /// Financing rates for positions held over rollover; negative carry is
    /// legal, so these are unconstrained.
    pub rollover_interest_buy: Decimal,
    pub rollover_interest_sell: Decimal,
    pub timestamp: Timestamp,
}

impl Instrument {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: InstrumentId,
        symbol: Symbol,
        broker_symbol: impl Into<String>,
        quote_currency: Currency,
        security_type: SecurityType,
        tick_precision: u8,
        tick_size: Decimal,
        round_lot_size: Quantity,
        min_stop_distance_entry: Decimal,
        min_limit_distance_entry: Decimal,
        min_stop_distance: Decimal,
        min_limit_distance: Decimal,
        min_trade_size: Quantity,
        max_trade_size: Quantity,
        rollover_interest_buy: Decimal,
        rollover_interest_sell: Decimal,
        timestamp: Timestamp,
    ) -> Result<Self, ModelError> {
        if tick_size <= Decimal::ZERO {
            return Err(ModelError::InvalidInstrument(format!(
                "tick size must be positive, was {}",
                tick_size
            )));
        }
        if tick_size.scale() > u32::from(tick_precision) {
            return Err(ModelError::InvalidInstrument(format!(
                "tick size {} exceeds tick precision {}",
                tick_size, tick_precision
            )));
        }
        if round_lot_size.is_zero() {
            return Err(ModelError::InvalidInstrument(
                "round lot size must be positive".into(),
            ));
        }
        if min_trade_size.is_zero() {
            return Err(ModelError::InvalidInstrument(
                "min trade size must be positive".into(),
            ));
        }
        if max_trade_size < min_trade_size {
            return Err(ModelError::InvalidInstrument(format!(
                "max trade size {} below min trade size {}",
                max_trade_size, min_trade_size
            )));
        }
        for (name, distance) in [
            ("min stop distance entry", min_stop_distance_entry),
            ("min limit distance entry", min_limit_distance_entry),
            ("min stop distance", min_stop_distance),
            ("min limit distance", min_limit_distance),
        ] {
            if distance < Decimal::ZERO {
                return Err(ModelError::InvalidInstrument(format!(
                    "{} cannot be negative, was {}",
                    name, distance
                )));
            }
        }

        Ok(Self {
            id,
            symbol,
            broker_symbol: broker_symbol.into(),
            quote_currency,
            security_type,
            tick_precision,
            tick_size,
            round_lot_size,
            min_stop_distance_entry,
            min_limit_distance_entry,
            min_stop_distance,
            min_limit_distance,
            min_trade_size,
            max_trade_size,
            rollover_interest_buy,
            rollover_interest_sell,
            timestamp,
        })
    }

    /// Validate that a price sits on this instrument's tick grid.
    pub fn validate_price(&self, price: crate::values::Price) -> bool {
        (price.inner() % self.tick_size) == Decimal::ZERO
    }

    /// Validate that a quantity is within the tradeable size limits.
    pub fn validate_quantity(&self, quantity: Quantity) -> bool {
        self.min_trade_size <= quantity && quantity <= self.max_trade_size
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
