use thiserror::Error;

/// Errors from talking to the workspace backend. Every variant carries the
/// request URL so banner messages can say which endpoint misbehaved.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: minreq::Error,
    },

    #[error("server returned {status} for {url}")]
    Status { url: String, status: i32 },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode request body for {url}: {source}")]
    Encode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True for an HTTP status in the 4xx range (e.g. a missing file).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if (400..500).contains(status))
    }

    /// True when the server answered 404 for the request.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Preview error: {0}")]
    Preview(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Settings("invalid font size".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid font size");

        let err = AppError::Preview("temp dir unavailable".to_string());
        assert_eq!(err.to_string(), "Preview error: temp dir unavailable");
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            url: "http://127.0.0.1:5050/api/files".to_string(),
            status: 500,
        };
        assert_eq!(
            err.to_string(),
            "server returned 500 for http://127.0.0.1:5050/api/files"
        );
    }

    #[test]
    fn test_not_found_detection() {
        let missing = ApiError::Status {
            url: "http://localhost/api/files?path=index.html".to_string(),
            status: 404,
        };
        assert!(missing.is_not_found());
        assert!(missing.is_client_error());

        let server_side = ApiError::Status {
            url: "http://localhost/api/apply".to_string(),
            status: 500,
        };
        assert!(!server_side.is_not_found());
        assert!(!server_side.is_client_error());
    }

    #[test]
    fn test_api_error_wraps_into_app_error() {
        let api = ApiError::Status {
            url: "http://localhost/api/tasks".to_string(),
            status: 502,
        };
        let app: AppError = api.into();
        assert!(app.to_string().contains("502"));
    }
}
