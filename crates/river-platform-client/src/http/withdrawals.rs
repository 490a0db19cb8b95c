/*
[INPUT]:  Withdrawal amounts, destinations and ids
[OUTPUT]: Withdrawal records
[POS]:    HTTP layer - withdrawal endpoints
[UPDATE]: When adding withdrawal endpoints or changing the request body
*/

use reqwest::Method;
use tracing::info;

use crate::http::{PlatformClient, Result};
use crate::types::{Currency, Network, Sats, Withdrawal, WithdrawalRequest};

impl PlatformClient {
    /// Pay `destination` from the account
    ///
    /// POST /accounts/{account_id}/withdrawals
    pub async fn initiate_withdrawal(
        &self,
        amount: Sats,
        destination: &str,
        currency: Currency,
        network: Network,
        fee_limit: Sats,
    ) -> Result<Withdrawal> {
        let request = WithdrawalRequest::new(amount, destination)
            .with_currency(currency)
            .with_network(network)
            .with_fee_limit(fee_limit);
        self.submit_withdrawal(&request).await
    }

    /// Submit a prepared withdrawal request
    ///
    /// POST /accounts/{account_id}/withdrawals
    pub async fn submit_withdrawal(&self, request: &WithdrawalRequest) -> Result<Withdrawal> {
        info!(
            amount = request.amount.value(),
            destination = %request.details.destination,
            "initiating withdrawal"
        );
        let builder =
            self.request_with_body(Method::POST, &self.account_path("/withdrawals"), request)?;
        self.send_json(builder).await
    }

    /// Look up a withdrawal by id
    ///
    /// GET /accounts/{account_id}/withdrawals/{withdrawal_id}
    pub async fn withdrawal(&self, withdrawal_id: &str) -> Result<Withdrawal> {
        info!(withdrawal_id, "querying withdrawal");
        let builder = self.request_with_segment(
            Method::GET,
            &self.account_path("/withdrawals"),
            withdrawal_id,
        )?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::PlatformClient;
    use crate::types::{Currency, Network, Sats, Withdrawal, WithdrawalDetail, WithdrawalRequest};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INVOICE: &str = "lnbcrt40u1pshzfdppp5m8p6s7xzjzp70hnrpzl4hqc2qxmz5k6fh5srcutu3evl9l49fhtq";

    fn withdrawal_json(fee_limit: i64) -> serde_json::Value {
        json!({
            "id": "wd_QLXKQKMP",
            "amount": 4000,
            "currency": "BTC",
            "withdrawal_details": {
                "network": "LN",
                "destination": INVOICE,
                "fee_limit": fee_limit
            },
            "state": "pending"
        })
    }

    #[tokio::test]
    async fn test_submit_withdrawal_defaults() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/accounts/acc_test/withdrawals"))
            .and(body_json(json!({
                "amount": 4000,
                "currency": "BTC",
                "withdrawal_details": {
                    "network": "LN",
                    "destination": INVOICE,
                    "fee_limit": 300
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(withdrawal_json(300)))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let withdrawal = client
            .submit_withdrawal(&WithdrawalRequest::new(Sats(4_000), INVOICE))
            .await
            .expect("submit_withdrawal failed");

        assert_eq!(
            withdrawal,
            Withdrawal {
                id: "wd_QLXKQKMP".to_string(),
                amount: Sats(4_000),
                currency: Currency::Btc,
                details: WithdrawalDetail {
                    network: Network::Lightning,
                    destination: INVOICE.to_string(),
                    fee_limit: Sats(300),
                },
                state: "pending".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_initiate_withdrawal_explicit_fee_limit() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/accounts/acc_test/withdrawals"))
            .and(body_json(json!({
                "amount": 4000,
                "currency": "BTC",
                "withdrawal_details": {
                    "network": "LN",
                    "destination": INVOICE,
                    "fee_limit": 20
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(withdrawal_json(20)))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let withdrawal = client
            .initiate_withdrawal(Sats(4_000), INVOICE, Currency::Btc, Network::Lightning, Sats(20))
            .await
            .expect("initiate_withdrawal failed");

        assert_eq!(withdrawal.details.fee_limit, Sats(20));
    }

    #[tokio::test]
    async fn test_get_withdrawal() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/withdrawals/wd_QLXKQKMP"))
            .respond_with(ResponseTemplate::new(200).set_body_json(withdrawal_json(300)))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let withdrawal = client
            .withdrawal("wd_QLXKQKMP")
            .await
            .expect("withdrawal failed");

        assert_eq!(withdrawal.id, "wd_QLXKQKMP");
        assert_eq!(withdrawal.state, "pending");
    }

    #[tokio::test]
    async fn test_withdrawal_id_sent_as_single_segment() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/withdrawals/a%2Fb%3Fc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(withdrawal_json(300)))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        client.withdrawal("a/b?c").await.expect("withdrawal failed");

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_withdrawal_dot_id_sends_nothing() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(withdrawal_json(300)))
            .expect(0)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let err = client.withdrawal("..").await.unwrap_err();
        assert!(err.is_request_construction());
    }

    #[tokio::test]
    async fn test_get_unknown_withdrawal() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/withdrawals/wd_QLXKQKM"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "withdrawal not found"})),
            )
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let err = client.withdrawal("wd_QLXKQKM").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Error 404: withdrawal not found");
    }
}
