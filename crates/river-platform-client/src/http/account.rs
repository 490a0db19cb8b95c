/*
[INPUT]:  Configured account id
[OUTPUT]: Server liveness and account balance summary
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding account endpoints or changing the summary shape
*/

use reqwest::Method;
use tracing::{error, info};

use crate::http::{PlatformClient, Result};
use crate::types::AccountSummary;

impl PlatformClient {
    /// Check that the API answers with a success status
    ///
    /// GET /
    ///
    /// Failures are logged and reported as `false`.
    pub async fn ping(&self) -> bool {
        info!("pinging server");
        let result = match self.request(Method::GET, "/") {
            Ok(builder) => self.send_empty(builder).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                info!("ping succeeded");
                true
            }
            Err(err) => {
                error!(error = %err, "ping failed");
                false
            }
        }
    }

    /// Query the account's balance and available balance
    ///
    /// GET /accounts/{account_id}/
    pub async fn account_balance(&self) -> Result<AccountSummary> {
        info!(account_id = %self.account_id(), "querying account balance");
        let builder = self.request(Method::GET, &self.account_path("/"))?;
        self.send_json(builder).await
    }
}
