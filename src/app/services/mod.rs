//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Workspace backend client
//! - Request generation tracking
//! - Preview publishing
//! - Syntax highlighting

pub mod api;
pub mod highlight;
pub mod preview;
pub mod requests;

pub use api::{RemoteFile, SpecDocument, WorkspaceApi};
pub use highlight::SyntaxHighlighter;
pub use preview::PreviewPublisher;
pub use requests::{RequestKind, RequestToken, RequestTracker};
