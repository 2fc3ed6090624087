//! Verification flow controller — the state machine around one
//! alternate-address verification attempt.

use crate::error::{FlowError, LookupError};
use crate::state::{FlowState, FlowView};
use stampflow_types::{AdditionalSignature, WalletAddress};

/// A lookup the controller has authorized.
///
/// Returned by [`FlowController::start_alternate_verification`]; the caller
/// performs the external call and hands the settled outcome back via
/// [`FlowController::apply_settlement`] together with this token. The token
/// is consumed on application, so a settlement can be applied at most once;
/// its generation ties it to the attempt it was issued for, so a settlement
/// arriving after the flow closed is recognized as stale and discarded.
#[derive(Debug)]
pub struct LookupRequest {
    address: WalletAddress,
    generation: u64,
}

impl LookupRequest {
    /// The address the lookup must be issued for.
    pub fn address(&self) -> &WalletAddress {
        &self.address
    }
}

/// Drives the alternate-signer verification flow.
///
/// Owns the flow state exclusively; the session address is injected at
/// construction and never mutated, and the host-supplied close notification
/// is invoked as the final step of every close.
pub struct FlowController {
    /// The wallet address active in the ambient session, if any.
    session_address: Option<WalletAddress>,
    state: FlowState,
    /// Bumped on every close; settlements from earlier generations are stale.
    generation: u64,
    on_close: Box<dyn FnMut() + Send>,
}

impl FlowController {
    pub fn new(
        session_address: Option<WalletAddress>,
        on_close: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            session_address,
            state: FlowState::Idle,
            generation: 0,
            on_close: Box::new(on_close),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_verifying(&self) -> bool {
        self.state.is_verifying()
    }

    /// The resolved additional signer, if the flow has reached `Resolved`.
    pub fn additional_signer(&self) -> Option<&AdditionalSignature> {
        self.state.additional_signer()
    }

    /// Select the view the host should render for the current state.
    pub fn view(&self) -> FlowView<'_> {
        self.state.view()
    }

    /// Begin a verification attempt against an alternate address.
    ///
    /// Valid only from `Idle` with a session address present. On success the
    /// flow moves to `Verifying` and the returned [`LookupRequest`] carries
    /// the address to query; the caller must issue exactly one external
    /// lookup for it and feed the outcome to [`apply_settlement`].
    ///
    /// [`apply_settlement`]: FlowController::apply_settlement
    pub fn start_alternate_verification(&mut self) -> Result<LookupRequest, FlowError> {
        match self.state {
            FlowState::Verifying => return Err(FlowError::VerificationInProgress),
            FlowState::Resolved(_) => return Err(FlowError::AlreadyResolved),
            FlowState::Idle => {}
        }

        let address = self
            .session_address
            .clone()
            .ok_or(FlowError::NoActiveAddress)?;

        self.state = FlowState::Verifying;
        tracing::debug!(address = %address, "starting alternate-signer verification");

        Ok(LookupRequest {
            address,
            generation: self.generation,
        })
    }

    /// Apply the settled outcome of a previously authorized lookup.
    ///
    /// Success stores the discovered signer and moves to `Resolved`; failure
    /// returns the flow to `Idle` so the user can retry. A settlement whose
    /// request predates the last close is stale and is discarded without
    /// touching state. In every case the in-flight condition ends here.
    pub fn apply_settlement(
        &mut self,
        request: LookupRequest,
        outcome: Result<AdditionalSignature, LookupError>,
    ) {
        if request.generation != self.generation {
            tracing::debug!(
                address = %request.address,
                "discarding lookup settlement for a closed flow"
            );
            return;
        }

        match outcome {
            Ok(signer) => {
                tracing::info!(signer = %signer.signer, "additional signer verified");
                self.state = FlowState::Resolved(signer);
            }
            Err(err) => {
                tracing::warn!(address = %request.address, error = %err, "alternate-address lookup failed");
                self.state = FlowState::Idle;
            }
        }
    }

    /// Close the flow from any state.
    ///
    /// Clears the resolved signer and the in-flight condition, invalidates
    /// any outstanding lookup, then notifies the host — in that order, so a
    /// host that reopens immediately observes a fresh flow. Idempotent:
    /// repeated calls leave the same end state.
    pub fn request_close(&mut self) {
        self.state = FlowState::Idle;
        self.generation += 1;
        (self.on_close)();
    }
}
