use thiserror::Error;

/// Refusals and failures surfaced by the flow controller.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("no active session address")]
    NoActiveAddress,

    #[error("an alternate-address lookup is already in flight")]
    VerificationInProgress,

    #[error("an additional signer is already resolved; close the flow before retrying")]
    AlreadyResolved,

    #[error("alternate-address lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Failure modes of the external alternate-address lookup.
///
/// The controller never branches on the variant — every failure returns the
/// flow to `Idle` — but hosts and clients need the taxonomy for logging and
/// HTTP status mapping.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("verifier service unavailable")]
    ServiceUnavailable,

    #[error("no additional signer holds an eligible credential")]
    NoMatchingSigner,

    #[error("verifier service error: {0}")]
    Service(String),
}
