//! HTTP client for the alternate-address verifier service.

pub mod client;
pub mod config;
pub mod error;

pub use client::SignerClient;
pub use config::VerifierConfig;
pub use error::ClientError;
