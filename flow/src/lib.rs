//! Alternate-signer verification flow.
//!
//! Shown to a user whose current wallet address failed a stamp eligibility
//! check, the flow lets them attempt verification against a different,
//! additionally-controlled wallet address without leaving the session.
//!
//! The core is the [`FlowController`] state machine:
//! `Idle -> Verifying -> Resolved`, with a close operation reachable from
//! every state that resets all local state before notifying the host. How
//! eligibility is computed and how the additional signer proves control of
//! its address are external concerns behind the [`SignerLookup`] seam.

pub mod controller;
pub mod driver;
pub mod error;
pub mod lookup;
pub mod state;

pub use controller::{FlowController, LookupRequest};
pub use driver::AttemptDriver;
pub use error::{FlowError, LookupError};
pub use lookup::SignerLookup;
pub use state::{FlowState, FlowView};
