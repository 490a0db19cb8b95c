/*
[INPUT]:  Raw API key
[OUTPUT]: Encoded credential for the Authorization header
[POS]:    HTTP layer - request authentication
[UPDATE]: When the credential format or header scheme changes
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Authorization scheme prefix expected by the platform
const AUTH_SCHEME: &str = "basic";

/// Credential derived once from the API key.
///
/// The platform expects the key as both user and password:
/// `base64("{key}:{key}")`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn from_api_key(api_key: &str) -> Self {
        Self(BASE64.encode(format!("{api_key}:{api_key}")))
    }

    /// Encoded credential value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full `Authorization` header value
    pub fn header_value(&self) -> String {
        format!("{AUTH_SCHEME} {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
