//! Typed HTTP client for the UW Companion backend.
//!
//! The backend owns document parsing, chunking, retrieval, generation and
//! hallucination scoring; this crate only speaks its HTTP contract and maps
//! responses into typed structs. It keeps no state beyond the base URL.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
