//! Core components of the `marketpulse` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`PulseClient`] and its builder.
//! - The primary [`PulseError`] type.
//! - The [`Sector`] and [`RiskLevel`] filter enums shared by the fetch surfaces.
//! - Internal wire mapping for the `generateContent` contract and the shared
//!   JSON extractor that digs structured payloads out of free-form replies.

/// The main client (`PulseClient`), builder, and configuration.
pub mod client;
/// The primary error type (`PulseError`) for the crate.
pub mod error;
/// Filter enums used to parameterize prompts (`Sector`, `RiskLevel`).
pub mod models;

pub(crate) mod extract;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::PulseClient`
pub use client::{PulseClient, PulseClientBuilder};
pub use error::PulseError;
pub use models::{RiskLevel, Sector};
