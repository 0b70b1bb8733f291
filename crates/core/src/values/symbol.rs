use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::Venue;
use crate::error::ModelError;

/// A ticker code bound to the venue it trades on.
///
/// The canonical string form is `CODE.VENUE`, e.g. `AUDUSD.FXCM`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    code: String,
    venue: Venue,
}

impl Symbol {
    /// Create a symbol from a ticker code and venue. The code is normalized
    /// to uppercase and must be non-empty ASCII alphanumeric, at most 20
    /// characters.
    pub fn new(code: impl Into<String>, venue: Venue) -> Result<Self, ModelError> {
        let code: String = code.into();
        if code.is_empty() {
            return Err(ModelError::InvalidSymbol("code cannot be empty".into()));
        }
        if code.len() > 20 {
            return Err(ModelError::InvalidSymbol(format!(
                "code too long (max 20 chars): '{}'",
                code
            )));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ModelError::InvalidSymbol(format!(
                "code must be alphanumeric: '{}'",
                code
            )));
        }
        Ok(Symbol {
            code: code.to_uppercase(),
            venue,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn venue(&self) -> Venue {
        self.venue
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.code, self.venue)
    }
}

impl FromStr for Symbol {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (code, venue) = value.trim().split_once('.').ok_or_else(|| {
            ModelError::Parse(format!("expected 'CODE.VENUE' form, got '{}'", value))
        })?;
        Symbol::new(code, venue.parse::<Venue>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_normalizes_to_uppercase() {
        let symbol = Symbol::new("audusd", Venue::Fxcm).unwrap();
        assert_eq!(symbol.code(), "AUDUSD");
        assert_eq!(symbol.venue(), Venue::Fxcm);
    }

    #[test]
    fn test_new_rejects_bad_codes() {
        assert!(Symbol::new("", Venue::Fxcm).is_err());
        assert!(Symbol::new("AUD/USD", Venue::Fxcm).is_err());
        assert!(Symbol::new("A".repeat(21), Venue::Fxcm).is_err());
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let symbol = Symbol::new("GBPUSD", Venue::Fxcm).unwrap();
        assert_eq!(format!("{}", symbol), "GBPUSD.FXCM");
        assert_eq!("GBPUSD.FXCM".parse::<Symbol>().unwrap(), symbol);
    }

    #[test]
    fn test_parse_rejects_missing_venue() {
        assert!("GBPUSD".parse::<Symbol>().is_err());
        assert!("GBPUSD.NYSE".parse::<Symbol>().is_err());
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut seen = HashSet::new();
        seen.insert(Symbol::new("USDJPY", Venue::Fxcm).unwrap());
        assert!(seen.contains(&Symbol::new("usdjpy", Venue::Fxcm).unwrap()));
    }
}
