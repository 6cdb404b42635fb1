//! CLI launcher for the UW Companion terminal client.
//!
//! Resolves configuration from the environment and flags, sets up logging
//! and the terminal, and hands control to `uwc-tui`.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError};
