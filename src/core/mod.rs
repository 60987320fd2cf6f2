//! Core components of the `igscout` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`IgClient`] and its builder.
//! - The primary [`IgError`] type.
//! - Internal transport and request-fingerprint helpers.

/// The main client (`IgClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IgError`) for the crate.
pub mod error;
pub(crate) mod fingerprint;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IgClient`
pub use client::{IgClient, IgClientBuilder, ProxyAuth, ScrapeConfig, SessionCookies};
pub use error::IgError;
