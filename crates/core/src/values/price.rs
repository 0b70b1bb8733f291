use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A strictly positive market price.
///
/// The wrapped decimal keeps the scale it was written with, so a 5-decimal
/// quote such as `1.00002` stays a 5-decimal quote through display and
/// serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, ModelError> {
        if value <= Decimal::ZERO {
            return Err(ModelError::InvalidPrice(format!(
                "price must be positive, was {}",
                value
            )));
        }
        Ok(Price(value))
    }

    pub fn inner(&self) -> Decimal {
        self.0
    }

    /// Number of decimal places carried by this price.
    pub fn precision(&self) -> u32 {
        self.0.scale()
    }

    /// Difference between two prices. Fails when the result would not be a
    /// valid (positive) price.
    pub fn subtract(self, rhs: Price) -> Result<Price, ModelError> {
        Price::new(self.0 - rhs.0)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Decimal {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let decimal = value
            .trim()
            .parse::<Decimal>()
            .map_err(|e| ModelError::Parse(format!("invalid price '{}': {}", value, e)))?;
        Price::new(decimal)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_accepts_positive() {
        let price = Price::new(dec!(1.00002)).unwrap();
        assert_eq!(price.inner(), dec!(1.00002));
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        assert!(Price::new(dec!(0)).is_err());
        assert!(Price::new(dec!(-1.5)).is_err());
    }

    #[test]
    fn test_precision_follows_scale() {
        assert_eq!(Price::new(dec!(1.00002)).unwrap().precision(), 5);
        assert_eq!(Price::new(dec!(90.002)).unwrap().precision(), 3);
    }

    #[test]
    fn test_display_keeps_scale() {
        let price = "1.00002".parse::<Price>().unwrap();
        assert_eq!(format!("{}", price), "1.00002");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<Price>().is_err());
        assert!("-3.0".parse::<Price>().is_err());
    }

    #[test]
    fn test_add_and_subtract() {
        let a = Price::new(dec!(1.2)).unwrap();
        let b = Price::new(dec!(0.2)).unwrap();

        assert_eq!(a + b, Price::new(dec!(1.4)).unwrap());
        assert_eq!(a.subtract(b).unwrap(), Price::new(dec!(1.0)).unwrap());
        assert!(b.subtract(a).is_err());
    }

    #[test]
    fn test_equality_is_numeric() {
        // Same value written at different scales compares equal.
        let a = Price::new(dec!(1.0)).unwrap();
        let b = Price::new(dec!(1.00)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Price::new(dec!(1.00002)).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"1.00002\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
        assert_eq!(back.precision(), 5);
    }
}
