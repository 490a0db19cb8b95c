/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment network of an invoice, deposit or withdrawal.
///
/// Values the client does not know are carried through verbatim so the
/// server stays the authority on which networks exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    #[default]
    #[serde(rename = "LN")]
    Lightning,
    #[serde(untagged)]
    Other(String),
}

impl Network {
    pub fn as_str(&self) -> &str {
        match self {
            Network::Lightning => "LN",
            Network::Other(value) => value,
        }
    }
}

impl From<&str> for Network {
    fn from(value: &str) -> Self {
        match value {
            "LN" => Network::Lightning,
            other => Network::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency of a withdrawal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "BTC")]
    Btc,
    #[serde(untagged)]
    Other(String),
}

impl Currency {
    pub fn as_str(&self) -> &str {
        match self {
            Currency::Btc => "BTC",
            Currency::Other(value) => value,
        }
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        match value {
            "BTC" => Currency::Btc,
            other => Currency::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
