//! Engine boundary concerns
//!
//! This module contains everything that is not move resolution itself:
//! - Error types shared across the crate
//! - Runtime constants and defaults
//! - The demo command-line shell that consumes the engine

/// Command-line interface for playing a session in the terminal
pub mod cli;
/// Runtime constants and configurable defaults
pub mod configuration;
/// Error types for engine and front-end operations
pub mod error;
