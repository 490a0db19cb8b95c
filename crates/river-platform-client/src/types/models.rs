/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::amount::Sats;
use super::enums::{Currency, Network};

/// Balance summary of the configured account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub id: String,
    pub balance: Sats,
    pub available_balance: Sats,
}

impl AccountSummary {
    /// Funds held back from spending: `balance - available_balance`.
    ///
    /// Not clamped at zero; negative when the server reports more available
    /// than total balance. Saturates at the `i64` bounds.
    pub fn reserved_balance(&self) -> Sats {
        self.balance - self.available_balance
    }
}

/// A request for incoming funds (the API calls these deposit intents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositInvoice {
    pub id: String,
    pub destination: String,
    pub network: Network,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositDetail {
    pub network: Network,
    #[serde(default)]
    pub proof: String,
}

/// A settled incoming payment and the invoice it paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: String,
    #[serde(rename = "deposit_intent")]
    pub invoice: DepositInvoice,
    pub amount: Sats,
    #[serde(rename = "deposit_details")]
    pub details: DepositDetail,
    pub state: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalDetail {
    pub network: Network,
    pub destination: String,
    pub fee_limit: Sats,
}

/// An outgoing payment and its lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: String,
    pub amount: Sats,
    pub currency: Currency,
    #[serde(rename = "withdrawal_details")]
    pub details: WithdrawalDetail,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedInvoice {
    pub amount: Sats,
    #[serde(default)]
    pub memo: String,
    pub node_id: String,
    #[serde(rename = "destination")]
    pub invoice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub amount: Sats,
    #[serde(rename = "destination")]
    pub invoice: String,
    pub fee: Sats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub url: String,
    #[serde(default)]
    pub secret: String,
    pub enabled: bool,
}
