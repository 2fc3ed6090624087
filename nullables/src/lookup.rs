//! Nullable signer lookup — settle with scripted outcomes, no network.

use futures_util::future::BoxFuture;
use stampflow_flow::{LookupError, SignerLookup};
use stampflow_types::{AdditionalSignature, WalletAddress};
use std::sync::Mutex;

type Settlement = Result<AdditionalSignature, LookupError>;

/// A test lookup that records queries and settles from a script.
///
/// Scripted settlements are consumed in FIFO order; with an empty script
/// every query settles `ServiceUnavailable`. `Mutex` rather than `RefCell`
/// because [`SignerLookup`] futures must be `Send`.
pub struct NullSignerLookup {
    /// Outcomes to settle with, front first.
    script: Mutex<Vec<Settlement>>,
    /// All addresses queried so far.
    queried: Mutex<Vec<WalletAddress>>,
}

impl NullSignerLookup {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(Vec::new()),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Enqueue the outcome for the next query.
    pub fn enqueue(&self, settlement: Settlement) {
        self.script.lock().unwrap().push(settlement);
    }

    /// All addresses queried so far (for assertions).
    pub fn queried(&self) -> Vec<WalletAddress> {
        self.queried.lock().unwrap().clone()
    }

    /// Number of lookups issued.
    pub fn call_count(&self) -> usize {
        self.queried.lock().unwrap().len()
    }

    /// Clear the script and the recorded queries.
    pub fn reset(&self) {
        self.script.lock().unwrap().clear();
        self.queried.lock().unwrap().clear();
    }
}

impl SignerLookup for NullSignerLookup {
    fn fetch_additional_signer(
        &self,
        address: WalletAddress,
    ) -> BoxFuture<'_, Result<AdditionalSignature, LookupError>> {
        self.queried.lock().unwrap().push(address);
        let mut script = self.script.lock().unwrap();
        let settlement = if script.is_empty() {
            Err(LookupError::ServiceUnavailable)
        } else {
            script.remove(0)
        };
        Box::pin(std::future::ready(settlement))
    }
}

impl Default for NullSignerLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> WalletAddress {
        WalletAddress::parse(format!("0x{}", "01".repeat(20))).unwrap()
    }

    #[test]
    fn settles_scripted_outcomes_in_order() {
        let lookup = NullSignerLookup::new();
        lookup.enqueue(Err(LookupError::NoMatchingSigner));
        lookup.enqueue(Err(LookupError::Service("boom".into())));

        let first = futures_util::FutureExt::now_or_never(
            lookup.fetch_additional_signer(address()),
        )
        .unwrap();
        let second = futures_util::FutureExt::now_or_never(
            lookup.fetch_additional_signer(address()),
        )
        .unwrap();

        assert_eq!(first, Err(LookupError::NoMatchingSigner));
        assert_eq!(second, Err(LookupError::Service("boom".into())));
        assert_eq!(lookup.call_count(), 2);
    }

    #[test]
    fn empty_script_settles_service_unavailable() {
        let lookup = NullSignerLookup::new();
        let outcome = futures_util::FutureExt::now_or_never(
            lookup.fetch_additional_signer(address()),
        )
        .unwrap();
        assert_eq!(outcome, Err(LookupError::ServiceUnavailable));
        assert_eq!(lookup.queried(), vec![address()]);
    }
}
