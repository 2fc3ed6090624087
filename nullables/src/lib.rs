//! Nullable infrastructure for deterministic testing.
//!
//! The flow's one external dependency — the alternate-address lookup — is
//! abstracted behind a trait. This crate provides a test-friendly
//! implementation that:
//! - Settles with scripted outcomes, programmatically enqueued
//! - Records every query for assertions
//! - Never touches the network
//!
//! Usage: swap the real client for the nullable in tests.

pub mod lookup;

pub use lookup::NullSignerLookup;
