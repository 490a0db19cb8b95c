/*
[INPUT]:  Callback URL
[OUTPUT]: Webhook subscription state
[POS]:    HTTP layer - webhook endpoints
[UPDATE]: When adding webhook endpoints or changing the subscription body
*/

use reqwest::Method;
use tracing::info;

use crate::http::{PlatformClient, Result};
use crate::types::{Webhook, WebhookSubscriptionRequest};

impl PlatformClient {
    /// Subscribe `callback_url` to account events
    ///
    /// POST /accounts/{account_id}/webhooks/
    pub async fn subscribe_webhook(&self, callback_url: &str) -> Result<Webhook> {
        info!(callback_url, "subscribing to webhook");
        let body = WebhookSubscriptionRequest {
            url: callback_url.to_string(),
        };
        let builder =
            self.request_with_body(Method::POST, &self.account_path("/webhooks/"), &body)?;
        self.send_json(builder).await
    }

    /// Query the subscribed webhook
    ///
    /// GET /accounts/{account_id}/webhooks/
    pub async fn webhook(&self) -> Result<Webhook> {
        info!("querying webhook");
        let builder = self.request(Method::GET, &self.account_path("/webhooks/"))?;
        self.send_json(builder).await
    }

    /// Remove the subscribed webhook
    ///
    /// DELETE /accounts/{account_id}/webhooks/
    pub async fn delete_webhook(&self) -> Result<()> {
        info!("deleting webhook");
        let builder = self.request(Method::DELETE, &self.account_path("/webhooks/"))?;
        self.send_empty(builder).await
    }
}
