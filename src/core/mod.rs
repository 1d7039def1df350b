//! Core components of the `hltb-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`HltbClient`] and its builder.
//! - The primary [`HltbError`] type.
//! - Token acquisition and search endpoint resolution.
//! - Internal request building and response extraction.

/// The main client (`HltbClient`), builder, and endpoint resolution.
pub mod client;
/// The primary error type (`HltbError`) for the crate.
pub mod error;
pub(crate) mod extract;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::HltbClient`
pub use client::{HltbClient, HltbClientBuilder, ResolveStrategy, ResolvedConfig};
pub use error::HltbError;
