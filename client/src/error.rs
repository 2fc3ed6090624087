use thiserror::Error;

/// Errors raised while constructing or configuring the client.
///
/// Failures of an issued lookup are not here — those surface as
/// [`stampflow_flow::LookupError`] through the lookup seam.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to create HTTP client: {0}")]
    Http(String),

    #[error("config error: {0}")]
    Config(String),
}
