//! Flow state tracking.

use stampflow_types::AdditionalSignature;

/// The current state of an alternate-signer verification flow.
///
/// A tagged union rather than independent booleans, so impossible
/// combinations (verifying and resolved at once) cannot be represented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState {
    /// No result and no lookup in flight. Initial state, and the state
    /// every close returns to.
    Idle,
    /// An alternate-address lookup is in flight.
    Verifying,
    /// The lookup succeeded; an additional signer was discovered.
    Resolved(AdditionalSignature),
}

impl FlowState {
    pub fn is_verifying(&self) -> bool {
        matches!(self, FlowState::Verifying)
    }

    /// The resolved additional signer, if any.
    pub fn additional_signer(&self) -> Option<&AdditionalSignature> {
        match self {
            FlowState::Resolved(sig) => Some(sig),
            _ => None,
        }
    }

    /// Select the view for this state: confirmation when a result is
    /// present, the prompt otherwise.
    pub fn view(&self) -> FlowView<'_> {
        match self {
            FlowState::Resolved(sig) => FlowView::Confirmation { signer: sig },
            state => FlowView::Prompt {
                verifying: state.is_verifying(),
            },
        }
    }
}

/// Which view the host should render, as a pure function of state.
#[derive(Debug, PartialEq, Eq)]
pub enum FlowView<'a> {
    /// The "no eligible credential" prompt. `verifying` drives the busy
    /// indicator and disables the retry control against re-entry.
    Prompt { verifying: bool },
    /// The confirmation view for a discovered additional signer.
    Confirmation { signer: &'a AdditionalSignature },
}
