//! Fundamental types for the stampflow verification flow.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: the wallet address and the additional-signer record
//! returned by the alternate-address verifier service.

pub mod address;
pub mod signature;

pub use address::{AddressError, WalletAddress};
pub use signature::AdditionalSignature;
