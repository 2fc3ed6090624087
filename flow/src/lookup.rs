//! Seam to the external alternate-address verification service.
//!
//! The flow controller specifies *that* an alternate address gets checked,
//! not *how*. The HTTP client and the nullable test double both plug in
//! behind this trait.

use crate::error::LookupError;
use futures_util::future::BoxFuture;
use stampflow_types::{AdditionalSignature, WalletAddress};

/// A pluggable alternate-address lookup.
///
/// Contract: called with a well-formed, non-empty address (the controller's
/// guard never issues a lookup without one), and the returned future
/// settles exactly once per call.
pub trait SignerLookup: Send + Sync {
    /// Query for an additional signer controlled by the holder of `address`.
    fn fetch_additional_signer(
        &self,
        address: WalletAddress,
    ) -> BoxFuture<'_, Result<AdditionalSignature, LookupError>>;
}
