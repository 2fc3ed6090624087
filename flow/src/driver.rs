//! Async driver for one verification attempt.

use crate::controller::FlowController;
use crate::error::FlowError;
use crate::lookup::SignerLookup;

/// Runs verification attempts against a [`SignerLookup`] implementation.
///
/// The single suspension point of the flow lives here: the controller
/// itself is synchronous, and the driver awaits the external lookup between
/// authorizing it and applying its settlement. A host that closes the flow
/// while the lookup is outstanding simply calls
/// [`FlowController::request_close`]; the settlement the driver applies
/// afterwards is then stale and gets discarded.
pub struct AttemptDriver<L> {
    lookup: L,
}

impl<L: SignerLookup> AttemptDriver<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Run one attempt end to end: authorize, await the lookup, settle.
    ///
    /// Returns the lookup failure after the controller has already recovered
    /// to `Idle`, so callers can report it while the flow stays retry-ready.
    pub async fn run_attempt(&self, controller: &mut FlowController) -> Result<(), FlowError> {
        let request = controller.start_alternate_verification()?;
        let outcome = self
            .lookup
            .fetch_additional_signer(request.address().clone())
            .await;
        let failure = outcome.as_ref().err().cloned();
        controller.apply_settlement(request, outcome);
        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
