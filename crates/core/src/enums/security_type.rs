use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The asset class an instrument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityType {
    Forex,
    Bond,
    Cfd,
    Equity,
    Future,
    Option,
}

impl SecurityType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forex => "FOREX",
            Self::Bond => "BOND",
            Self::Cfd => "CFD",
            Self::Equity => "EQUITY",
            Self::Future => "FUTURE",
            Self::Option => "OPTION",
        }
    }
}

impl fmt::Display for SecurityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "FOREX" => Ok(Self::Forex),
            "BOND" => Ok(Self::Bond),
            "CFD" => Ok(Self::Cfd),
            "EQUITY" => Ok(Self::Equity),
            "FUTURE" => Ok(Self::Future),
            "OPTION" => Ok(Self::Option),
            other => Err(ModelError::Parse(format!(
                "unknown security type '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for sec in [
            SecurityType::Forex,
            SecurityType::Bond,
            SecurityType::Cfd,
            SecurityType::Equity,
            SecurityType::Future,
            SecurityType::Option,
        ] {
            assert_eq!(sec.as_str().parse::<SecurityType>().unwrap(), sec);
        }
    }
}
