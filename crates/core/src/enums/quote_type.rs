use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Which side of the market a price represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteType {
    Bid,
    Ask,
    /// Midpoint between bid and ask.
    Mid,
    /// Last traded price.
    Last,
}

impl QuoteType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bid => "BID",
            Self::Ask => "ASK",
            Self::Mid => "MID",
            Self::Last => "LAST",
        }
    }
}

impl fmt::Display for QuoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "BID" => Ok(Self::Bid),
            "ASK" => Ok(Self::Ask),
            "MID" => Ok(Self::Mid),
            "LAST" => Ok(Self::Last),
            other => Err(ModelError::Parse(format!("unknown quote type '{}'", other))),
        }
    }
}
