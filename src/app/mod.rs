//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages, Tasks)
//! - `services/` - Business operations (api, requests, preview, highlight)
//! - `infrastructure/` - External integrations (platform, error)
//! - `state.rs` - Main application coordinator

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Document, EditorMode, FontChoice, Message, SyntaxTheme, TaskQueue, ThemeMode};
pub use infrastructure::error::{ApiError, AppError};
pub use infrastructure::platform::detect_system_dark_mode;
pub use services::{RemoteFile, RequestKind, SpecDocument, WorkspaceApi};
pub use state::AppState;
