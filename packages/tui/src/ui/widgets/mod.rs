pub mod chat;
pub mod status_bar;

pub use chat::{InputWidget, TranscriptWidget};
pub use status_bar::StatusBarWidget;
