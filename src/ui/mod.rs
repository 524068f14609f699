//! UI Bridge
//!
//! Types at the boundary between the session core and whatever host UI
//! framework renders it.

pub mod host;

// Re-export key types
pub use host::{HeadlessUi, UiError, UiHost, VisualHandle};
