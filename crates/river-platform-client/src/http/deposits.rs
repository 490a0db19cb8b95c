/*
[INPUT]:  Page limits, cursors and invoice parameters
[OUTPUT]: Deposits, deposit invoices and newly created invoices
[POS]:    HTTP layer - deposit endpoints
[UPDATE]: When adding deposit endpoints or changing pagination
*/

use reqwest::Method;
use tracing::info;

use crate::http::{PlatformClient, Result};
use crate::types::{
    CreateDepositInvoiceRequest, DepositInvoice, DepositInvoiceList, DepositList, Network,
    PageQuery, Sats,
};

impl PlatformClient {
    /// List settled deposits
    ///
    /// GET /accounts/{account_id}/deposits?limit={limit}&next_timestamp={next_timestamp}
    ///
    /// `next_timestamp` is omitted from the query when zero.
    pub async fn deposits(&self, limit: u32, next_timestamp: i64) -> Result<DepositList> {
        info!(limit, next_timestamp, "querying deposits");
        let builder = self
            .request(Method::GET, &self.account_path("/deposits"))?
            .query(&PageQuery::new(limit, next_timestamp));
        self.send_json(builder).await
    }

    /// Fetch the page following `previous`
    pub async fn next_deposits(&self, previous: &DepositList, limit: u32) -> Result<DepositList> {
        self.deposits(limit, previous.next_timestamp).await
    }

    /// List deposit invoices
    ///
    /// GET /accounts/{account_id}/deposit_intents?limit={limit}&next_timestamp={next_timestamp}
    pub async fn deposit_invoices(
        &self,
        limit: u32,
        next_timestamp: i64,
    ) -> Result<DepositInvoiceList> {
        info!(limit, next_timestamp, "querying deposit invoices");
        let builder = self
            .request(Method::GET, &self.account_path("/deposit_intents"))?
            .query(&PageQuery::new(limit, next_timestamp));
        self.send_json(builder).await
    }

    /// Fetch the page following `previous`
    pub async fn next_deposit_invoices(
        &self,
        previous: &DepositInvoiceList,
        limit: u32,
    ) -> Result<DepositInvoiceList> {
        self.deposit_invoices(limit, previous.next_timestamp).await
    }

    /// Create an invoice that pays into the account
    ///
    /// POST /accounts/{account_id}/deposit_intents
    pub async fn create_deposit_invoice(
        &self,
        amount: Sats,
        network: Network,
    ) -> Result<DepositInvoice> {
        info!(amount = amount.value(), %network, "requesting deposit invoice");
        let body = CreateDepositInvoiceRequest { amount, network };
        let builder = self.request_with_body(
            Method::POST,
            &self.account_path("/deposit_intents"),
            &body,
        )?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::PlatformClient;
    use crate::types::{DepositInvoice, Network, Sats};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INVOICE: &str = "lnbc2500u1pvjluezsp5zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zygs";

    fn deposit_page(next_timestamp: i64) -> serde_json::Value {
        json!({
            "deposits": [
                {
                    "id": "dep_1",
                    "deposit_intent": {
                        "id": "di_1",
                        "destination": INVOICE,
                        "network": "LN",
                        "timestamp": 1634975794000_i64
                    },
                    "amount": 250000,
                    "deposit_details": {"network": "LN", "proof": "preimage"},
                    "state": "settled",
                    "timestamp": 1634975795000_i64
                }
            ],
            "next_timestamp": next_timestamp
        })
    }

    #[tokio::test]
    async fn test_deposits_first_page() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/deposits"))
            .and(query_param("limit", "10"))
            .and(query_param_is_missing("next_timestamp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(deposit_page(1634975123333)))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let page = client.deposits(10, 0).await.expect("deposits failed");

        assert_eq!(page.count(), 1);
        assert_eq!(page.deposits[0].amount, Sats(250_000));
        assert_eq!(page.next_timestamp, 1634975123333);
        assert!(page.has_more());
    }

    #[tokio::test]
    async fn test_next_deposits_matches_manual_cursor() {
        let server = MockServer::start().await;
        let _first = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/deposits"))
            .and(query_param_is_missing("next_timestamp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(deposit_page(1634975123333)))
            .expect(1)
            .mount(&server)
            .await;
        let _next = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/deposits"))
            .and(query_param("limit", "5"))
            .and(query_param("next_timestamp", "1634975123333"))
            .respond_with(ResponseTemplate::new(200).set_body_json(deposit_page(0)))
            .expect(2)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let first = client.deposits(5, 0).await.expect("first page");
        let via_cursor = client.next_deposits(&first, 5).await.expect("next page");
        let manual = client
            .deposits(5, 1634975123333)
            .await
            .expect("manual page");

        assert_eq!(via_cursor, manual);
        assert!(!via_cursor.has_more());

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests[1].url.query(), requests[2].url.query());
    }

    #[tokio::test]
    async fn test_deposit_invoices_pagination() {
        let server = MockServer::start().await;
        let page = json!({
            "deposit_intents": [
                {"id": "di_1", "destination": INVOICE, "network": "LN", "timestamp": 1634975794000_i64},
                {"id": "di_2", "destination": INVOICE, "network": "LN", "timestamp": 1634975795000_i64}
            ],
            "next_timestamp": 0
        });
        let _mock = Mock::given(method("GET"))
            .and(path("/accounts/acc_test/deposit_intents"))
            .and(query_param("limit", "2"))
            .and(query_param("next_timestamp", "1634975123333"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let invoices = client
            .deposit_invoices(2, 1634975123333)
            .await
            .expect("deposit_invoices failed");

        assert_eq!(invoices.count(), 2);
        assert_eq!(invoices.invoices[1].id, "di_2");
        assert!(!invoices.has_more());
    }

    #[tokio::test]
    async fn test_create_deposit_invoice() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/accounts/acc_test/deposit_intents"))
            .and(body_json(json!({"amount": 250000, "network": "LN"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "di_1",
                "destination": INVOICE,
                "network": "LN",
                "timestamp": 1634975795000_i64
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let invoice = client
            .create_deposit_invoice(Sats(250_000), Network::Lightning)
            .await
            .expect("create_deposit_invoice failed");

        assert_eq!(
            invoice,
            DepositInvoice {
                id: "di_1".to_string(),
                destination: INVOICE.to_string(),
                network: Network::Lightning,
                timestamp: 1634975795000,
            }
        );
    }

    #[tokio::test]
    async fn test_create_deposit_invoice_server_error() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("unable to process request"))
            .mount(&server)
            .await;

        let client = PlatformClient::new(server.uri(), "acc_test", "apisecret").expect("client init");
        let err = client
            .create_deposit_invoice(Sats(-250), Network::Lightning)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error 500: unable to process request");
    }
}
