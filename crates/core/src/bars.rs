//! Bar aggregates: sampling specifications, stream identities, and OHLC bars
//!
//! Canonical string forms follow the venue-agnostic convention used across
//! the platform:
//! - specification: `1-MINUTE[BID]`
//! - bar type:      `AUDUSD.FXCM-1-MINUTE[BID]`
//! - bar:           `1.00002,1.00004,1.00001,1.00003,100000,1970-01-01T00:00:00.000Z`

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{QuoteType, Resolution};
use crate::error::ModelError;
use crate::values::{Price, Quantity, Symbol, Timestamp};

/// How a bar stream is sampled: period count, time unit, and quote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarSpecification {
    pub period: u32,
    pub resolution: Resolution,
    pub quote_type: QuoteType,
}

impl BarSpecification {
    pub const fn new(period: u32, resolution: Resolution, quote_type: QuoteType) -> Self {
        Self {
            period,
            resolution,
            quote_type,
        }
    }
}

impl fmt::Display for BarSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}[{}]", self.period, self.resolution, self.quote_type)
    }
}

impl FromStr for BarSpecification {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed =
            || ModelError::Parse(format!("expected 'P-RESOLUTION[QUOTE]', got '{}'", value));

        let (period, rest) = value.trim().split_once('-').ok_or_else(malformed)?;
        let (resolution, quote) = rest
            .strip_suffix(']')
            .and_then(|r| r.split_once('['))
            .ok_or_else(malformed)?;

        let period = period
            .parse::<u32>()
            .map_err(|e| ModelError::Parse(format!("invalid period '{}': {}", period, e)))?;
        if period == 0 {
            return Err(ModelError::Parse("period must be positive".into()));
        }

        Ok(Self::new(
            period,
            resolution.parse::<Resolution>()?,
            quote.parse::<QuoteType>()?,
        ))
    }
}

/// A bar specification bound to the symbol whose stream it samples.
///
/// Identifies one bar stream, so it hashes and compares by value for use as
/// a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarType {
    pub symbol: Symbol,
    pub specification: BarSpecification,
}

impl BarType {
    pub fn new(symbol: Symbol, specification: BarSpecification) -> Self {
        Self {
            symbol,
            specification,
        }
    }
}

impl fmt::Display for BarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.symbol, self.specification)
    }
}

impl FromStr for BarType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Symbol codes are alphanumeric, so the first '-' always separates
        // the symbol from the specification.
        let (symbol, spec) = value.trim().split_once('-').ok_or_else(|| {
            ModelError::Parse(format!("expected 'CODE.VENUE-SPEC', got '{}'", value))
        })?;
        Ok(Self::new(
            symbol.parse::<Symbol>()?,
            spec.parse::<BarSpecification>()?,
        ))
    }
}

/// One aggregated OHLC price summary with volume and close timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Quantity,
    pub timestamp: Timestamp,
}

impl Bar {
    /// Create a bar, rejecting any OHLC combination where the high is not
    /// the maximum or the low is not the minimum of the four prices.
    pub fn new(
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: Quantity,
        timestamp: Timestamp,
    ) -> Result<Self, ModelError> {
        if high < low {
            return Err(ModelError::InvalidBar(format!(
                "high {} below low {}",
                high, low
            )));
        }
        if high < open || high < close {
            return Err(ModelError::InvalidBar(format!(
                "high {} below open {} or close {}",
                high, open, close
            )));
        }
        if low > open || low > close {
            return Err(ModelError::InvalidBar(format!(
                "low {} above open {} or close {}",
                low, open, close
            )));
        }
        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        })
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

impl FromStr for Bar {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = value.trim().split(',').collect();
        if fields.len() != 6 {
            return Err(ModelError::Parse(format!(
                "expected 6 comma-separated bar fields, got {}",
                fields.len()
            )));
        }
        let timestamp = DateTime::parse_from_rfc3339(fields[5])
            .map_err(|e| ModelError::Parse(format!("invalid timestamp '{}': {}", fields[5], e)))?
            .with_timezone(&Utc);

        Bar::new(
            fields[0].parse::<Price>()?,
            fields[1].parse::<Price>()?,
            fields[2].parse::<Price>()?,
            fields[3].parse::<Price>()?,
            fields[4].parse::<Quantity>()?,
            timestamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Venue;
    use rust_decimal_macros::dec;

    fn price(value: rust_decimal::Decimal) -> Price {
        Price::new(value).unwrap()
    }

    fn gbpusd() -> Symbol {
        Symbol::new("GBPUSD", Venue::Fxcm).unwrap()
    }

    #[test]
    fn test_specification_display() {
        let spec = BarSpecification::new(1, Resolution::Minute, QuoteType::Bid);
        assert_eq!(format!("{}", spec), "1-MINUTE[BID]");
    }

    #[test]
    fn test_specification_parse_round_trip() {
        let spec = "1-SECOND[MID]".parse::<BarSpecification>().unwrap();
        assert_eq!(
            spec,
            BarSpecification::new(1, Resolution::Second, QuoteType::Mid)
        );
        assert_eq!(format!("{}", spec), "1-SECOND[MID]");
    }

    #[test]
    fn test_specification_parse_rejects_malformed() {
        assert!("MINUTE[BID]".parse::<BarSpecification>().is_err());
        assert!("0-MINUTE[BID]".parse::<BarSpecification>().is_err());
        assert!("1-MINUTE-BID".parse::<BarSpecification>().is_err());
        assert!("1-WEEK[BID]".parse::<BarSpecification>().is_err());
    }

    #[test]
    fn test_bartype_display_and_parse() {
        let bar_type = BarType::new(
            gbpusd(),
            BarSpecification::new(1, Resolution::Minute, QuoteType::Bid),
        );
        assert_eq!(format!("{}", bar_type), "GBPUSD.FXCM-1-MINUTE[BID]");
        assert_eq!(
            "GBPUSD.FXCM-1-MINUTE[BID]".parse::<BarType>().unwrap(),
            bar_type
        );
    }

    #[test]
    fn test_bartype_keys_by_value() {
        use std::collections::HashMap;

        let spec = BarSpecification::new(1, Resolution::Minute, QuoteType::Bid);
        let mut streams = HashMap::new();
        streams.insert(BarType::new(gbpusd(), spec), 42);
        assert_eq!(streams.get(&BarType::new(gbpusd(), spec)), Some(&42));
    }

    #[test]
    fn test_bar_new_valid() {
        let bar = Bar::new(
            price(dec!(1.00002)),
            price(dec!(1.00004)),
            price(dec!(1.00001)),
            price(dec!(1.00003)),
            Quantity::new(100_000),
            DateTime::UNIX_EPOCH,
        )
        .unwrap();
        assert_eq!(bar.volume, Quantity::new(100_000));
    }

    #[test]
    fn test_bar_new_rejects_bad_ohlc() {
        let ts = DateTime::UNIX_EPOCH;
        let v = Quantity::new(1);

        // high below low
        assert!(
            Bar::new(
                price(dec!(1.0)),
                price(dec!(0.9)),
                price(dec!(1.0)),
                price(dec!(1.0)),
                v,
                ts
            )
            .is_err()
        );
        // open above high
        assert!(
            Bar::new(
                price(dec!(1.2)),
                price(dec!(1.1)),
                price(dec!(1.0)),
                price(dec!(1.05)),
                v,
                ts
            )
            .is_err()
        );
        // close below low
        assert!(
            Bar::new(
                price(dec!(1.05)),
                price(dec!(1.1)),
                price(dec!(1.0)),
                price(dec!(0.95)),
                v,
                ts
            )
            .is_err()
        );
    }

    #[test]
    fn test_bar_display_and_parse_round_trip() {
        let bar = Bar::new(
            price(dec!(1.00002)),
            price(dec!(1.00004)),
            price(dec!(1.00001)),
            price(dec!(1.00003)),
            Quantity::new(100_000),
            DateTime::UNIX_EPOCH,
        )
        .unwrap();

        let formatted = format!("{}", bar);
        assert_eq!(
            formatted,
            "1.00002,1.00004,1.00001,1.00003,100000,1970-01-01T00:00:00.000Z"
        );
        assert_eq!(formatted.parse::<Bar>().unwrap(), bar);
    }

    #[test]
    fn test_bar_parse_rejects_malformed() {
        assert!("1.0,1.1,0.9,1.05,100".parse::<Bar>().is_err());
        assert!("1.0,1.1,0.9,1.05,100,not-a-time".parse::<Bar>().is_err());
    }

    #[test]
    fn test_bartype_serde_round_trip() {
        let bar_type = BarType::new(
            gbpusd(),
            BarSpecification::new(1, Resolution::Minute, QuoteType::Bid),
        );
        let json = serde_json::to_string(&bar_type).unwrap();
        let back: BarType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bar_type);
    }

    #[test]
    fn test_bar_serde_round_trip() {
        let bar = Bar::new(
            price(dec!(90.002)),
            price(dec!(90.004)),
            price(dec!(90.001)),
            price(dec!(90.003)),
            Quantity::new(100_000),
            DateTime::UNIX_EPOCH,
        )
        .unwrap();

        let json = serde_json::to_string(&bar).unwrap();
        let back: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bar);
    }
}
