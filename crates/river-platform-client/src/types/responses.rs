/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Paginated list responses with cursor helpers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When list endpoints or pagination fields change
*/

use serde::{Deserialize, Serialize};

use super::models::{Deposit, DepositInvoice};

/// One page of deposits.
///
/// `next_timestamp` is the cursor for the following page; zero when the
/// server has nothing further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositList {
    #[serde(default)]
    pub deposits: Vec<Deposit>,
    #[serde(default)]
    pub next_timestamp: i64,
}

impl DepositList {
    pub fn count(&self) -> usize {
        self.deposits.len()
    }

    pub fn has_more(&self) -> bool {
        self.next_timestamp != 0
    }
}

/// One page of deposit invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositInvoiceList {
    #[serde(rename = "deposit_intents", default)]
    pub invoices: Vec<DepositInvoice>,
    #[serde(default)]
    pub next_timestamp: i64,
}

impl DepositInvoiceList {
    pub fn count(&self) -> usize {
        self.invoices.len()
    }

    pub fn has_more(&self) -> bool {
        self.next_timestamp != 0
    }
}
