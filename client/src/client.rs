//! The reqwest-backed signer lookup.

use futures_util::future::BoxFuture;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use stampflow_flow::{LookupError, SignerLookup};
use stampflow_types::{AdditionalSignature, WalletAddress};

use crate::config::VerifierConfig;
use crate::error::ClientError;

/// HTTP client for the alternate-address verifier service.
///
/// Wraps `reqwest::Client` with the service's base URL and implements the
/// flow's [`SignerLookup`] seam: one POST per authorized lookup, settled
/// exactly once.
#[derive(Clone)]
pub struct SignerClient {
    http: reqwest::Client,
    base_url: String,
}

/// Request body for the additional-signer query.
#[derive(Serialize)]
struct SignerQuery<'a> {
    address: &'a str,
}

/// Success body returned by the verifier service.
#[derive(Debug, Deserialize)]
struct SignerResponse {
    signer: String,
    signature: String,
    challenge: String,
}

impl SignerClient {
    /// Create a new client from configuration.
    pub fn new(config: &VerifierConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.verifier_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured verifier base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, address: WalletAddress) -> Result<AdditionalSignature, LookupError> {
        let url = format!("{}/signer/additional", self.base_url);
        tracing::debug!(%address, url, "querying verifier for an additional signer");

        let response = self
            .http
            .post(&url)
            .json(&SignerQuery {
                address: address.as_str(),
            })
            .send()
            .await
            .map_err(|e| LookupError::Service(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(lookup_error_for_status(status));
        }

        let body: SignerResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Service(format!("invalid JSON response: {e}")))?;

        parse_signer_response(body)
    }
}

impl SignerLookup for SignerClient {
    fn fetch_additional_signer(
        &self,
        address: WalletAddress,
    ) -> BoxFuture<'_, Result<AdditionalSignature, LookupError>> {
        Box::pin(self.fetch(address))
    }
}

/// Map a non-success HTTP status onto the lookup error taxonomy.
fn lookup_error_for_status(status: StatusCode) -> LookupError {
    if status == StatusCode::NOT_FOUND {
        LookupError::NoMatchingSigner
    } else if status.is_server_error() {
        LookupError::ServiceUnavailable
    } else {
        LookupError::Service(format!("verifier returned HTTP {status}"))
    }
}

/// Validate a success body into the shared signer record.
fn parse_signer_response(body: SignerResponse) -> Result<AdditionalSignature, LookupError> {
    let signer = WalletAddress::parse(body.signer)
        .map_err(|e| LookupError::Service(format!("invalid signer address in response: {e}")))?;
    Ok(AdditionalSignature {
        signer,
        signature: body.signature,
        challenge: body.challenge,
    })
}
