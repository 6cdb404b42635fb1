//! UW Companion TUI - terminal client for the underwriting backend
//!
//! Owns the chat/upload orchestration state machine and the document-list
//! view, built with ratatui. All backend I/O goes through `uwc-client` and
//! is folded back into state on a single event-loop thread.

pub mod app;
pub mod chat;
pub mod commands;
pub mod documents;
pub mod events;
pub mod input;
pub mod session;
pub mod state;
pub mod ui;
pub mod uploads;

pub use app::App;
pub use state::AppState;
