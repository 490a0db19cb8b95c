/*
[INPUT]:  Lightning invoices
[OUTPUT]: Decoded invoice fields and routing fee estimates
[POS]:    HTTP layer - Lightning utility endpoints (not account scoped)
[UPDATE]: When adding Lightning utilities or changing their bodies
*/

use reqwest::Method;
use tracing::info;

use crate::http::{PlatformClient, Result};
use crate::types::{DecodedInvoice, FeeEstimate, InvoiceDestinationRequest};

impl PlatformClient {
    /// Decode a Lightning invoice
    ///
    /// PUT /lightning/parse_invoice
    pub async fn decode_invoice(&self, invoice: &str) -> Result<DecodedInvoice> {
        info!(invoice, "decoding invoice");
        let body = InvoiceDestinationRequest {
            destination: invoice.to_string(),
        };
        let builder = self.request_with_body(Method::PUT, "/lightning/parse_invoice", &body)?;
        self.send_json(builder).await
    }

    /// Estimate the routing fee for paying a Lightning invoice
    ///
    /// PUT /lightning/estimate_fee/
    pub async fn estimate_fee(&self, invoice: &str) -> Result<FeeEstimate> {
        info!(invoice, "estimating lightning fee");
        let body = InvoiceDestinationRequest {
            destination: invoice.to_string(),
        };
        let builder = self.request_with_body(Method::PUT, "/lightning/estimate_fee/", &body)?;
        self.send_json(builder).await
    }
}
