use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The broker or exchange a symbol trades on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Venue {
    Fxcm,
    Dukascopy,
    Simulated,
}

impl Venue {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fxcm => "FXCM",
            Self::Dukascopy => "DUKASCOPY",
            Self::Simulated => "SIMULATED",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Venue {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "FXCM" => Ok(Self::Fxcm),
            "DUKASCOPY" => Ok(Self::Dukascopy),
            "SIMULATED" => Ok(Self::Simulated),
            other => Err(ModelError::Parse(format!("unknown venue '{}'", other))),
        }
    }
}
