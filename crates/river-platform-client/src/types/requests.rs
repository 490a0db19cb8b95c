/*
[INPUT]:  Typed operation arguments
[OUTPUT]: Request bodies and query strings with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::amount::Sats;
use super::enums::{Currency, Network};
use super::models::WithdrawalDetail;

/// Fee limit applied when a withdrawal does not set one.
pub const DEFAULT_FEE_LIMIT: Sats = Sats(300);

/// Query string shared by the paginated list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub next_timestamp: i64,
}

impl PageQuery {
    pub fn new(limit: u32, next_timestamp: i64) -> Self {
        Self {
            limit,
            next_timestamp,
        }
    }
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepositInvoiceRequest {
    pub amount: Sats,
    pub network: Network,
}

/// Body of an outgoing payment.
///
/// `new` fills in currency `BTC`, network `LN` and [`DEFAULT_FEE_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub amount: Sats,
    pub currency: Currency,
    #[serde(rename = "withdrawal_details")]
    pub details: WithdrawalDetail,
}

impl WithdrawalRequest {
    pub fn new(amount: Sats, destination: impl Into<String>) -> Self {
        Self {
            amount,
            currency: Currency::default(),
            details: WithdrawalDetail {
                network: Network::default(),
                destination: destination.into(),
                fee_limit: DEFAULT_FEE_LIMIT,
            },
        }
    }

    pub fn with_fee_limit(mut self, fee_limit: Sats) -> Self {
        self.details.fee_limit = fee_limit;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.details.network = network;
        self
    }
}

/// Body of the Lightning invoice utilities (decode, fee estimate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDestinationRequest {
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSubscriptionRequest {
    pub url: String,
}
