use crate::app::infrastructure::error::{ApiError, AppError};
use crate::app::services::api::{RemoteFile, SpecDocument};
use crate::app::services::requests::RequestToken;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and background workers send these; the dispatch loop in
/// main handles them. Completion messages carry the token of the request
/// that produced them so stale responses can be dropped on arrival.
#[derive(Debug)]
pub enum Message {
    // Workspace files
    RefreshFiles,
    FilesLoaded(RequestToken, Result<Vec<String>, ApiError>),
    OpenFile(String),
    FileOpened(RequestToken, Result<RemoteFile, ApiError>),
    CreateFile,
    FileCreated(RequestToken, Result<(), ApiError>),
    SaveFile,
    FileSaved(RequestToken, String, Result<(), ApiError>),
    DeleteFile,
    FileDeleted(RequestToken, String, Result<(), ApiError>),
    DownloadWorkspace,
    WorkspaceSaved(String, Result<(), AppError>),

    // Preview
    RefreshPreview,
    PreviewLoaded(RequestToken, Result<RemoteFile, ApiError>),
    OpenPreviewInBrowser,

    // Planner
    GenerateSpec,
    SpecGenerated(RequestToken, Result<SpecDocument, ApiError>),
    DeriveTasks,
    TasksDerived(RequestToken, Result<Vec<String>, ApiError>),
    ApplyTask,
    TaskApplied(RequestToken, String, Result<(), ApiError>),

    // Editor
    BufferModified,
    RehighlightTick,

    // View
    ToggleLineNumbers,
    ToggleWordWrap,
    ToggleDarkMode,
    ToggleHighlighting,

    // Settings & Help
    OpenSettings,
    ShowAbout,
    DismissBanner,
    Quit,
}
