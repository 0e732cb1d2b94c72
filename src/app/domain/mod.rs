//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and its editing mode
//! - The pending task queue
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod editor_mode;
pub mod messages;
pub mod settings;
pub mod tasks;

pub use document::Document;
pub use editor_mode::EditorMode;
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, SyntaxTheme, ThemeMode};
pub use tasks::{TaskQueue, FALLBACK_TASK};
