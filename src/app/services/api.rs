use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::app::infrastructure::error::ApiError;

/// Response to `GET /api/files`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileListing {
    pub files: Vec<String>,
}

/// Response to `GET /api/files?path=...`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteFile {
    pub path: String,
    pub content: String,
}

/// Response to `POST /api/spec`. The backend also returns a structured
/// breakdown next to `raw`; the client only displays the raw text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpecDocument {
    pub raw: String,
}

/// Response to `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<String>,
}

#[derive(Serialize)]
struct WritePayload<'a> {
    path: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct PathPayload<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct PromptPayload<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
struct RawPayload<'a> {
    raw: &'a str,
}

#[derive(Serialize)]
struct TaskPayload<'a> {
    task: &'a str,
}

/// Blocking client for the workspace backend.
///
/// Cheap to clone; every user action clones one onto a worker thread so the
/// UI never waits on the network. All calls are single-shot with a timeout,
/// no retries.
#[derive(Debug, Clone)]
pub struct WorkspaceApi {
    base_url: String,
    timeout_secs: u64,
}

impl WorkspaceApi {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// List every file in the workspace, in backend order.
    pub fn list_files(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("/api/files");
        let response = self.get(&url)?;
        let listing: FileListing = parse_body(&url, body_str(&url, &response)?)?;
        Ok(listing.files)
    }

    /// Fetch one file's content. A missing path comes back as a 404
    /// `ApiError::Status`.
    pub fn read_file(&self, path: &str) -> Result<RemoteFile, ApiError> {
        let url = format!(
            "{}/api/files?path={}",
            self.base_url,
            urlencoding::encode(path)
        );
        let response = self.get(&url)?;
        parse_body(&url, body_str(&url, &response)?)
    }

    /// Create or overwrite a file. The backend replaces content wholesale.
    pub fn write_file(&self, path: &str, content: &str) -> Result<(), ApiError> {
        let url = self.endpoint("/api/files");
        self.send_json(minreq::post(&url), &url, &WritePayload { path, content })?;
        Ok(())
    }

    pub fn delete_file(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint("/api/files");
        self.send_json(minreq::delete(&url), &url, &PathPayload { path })?;
        Ok(())
    }

    /// Ask the backend to turn a free-text prompt into a spec document.
    pub fn generate_spec(&self, prompt: &str) -> Result<SpecDocument, ApiError> {
        let url = self.endpoint("/api/spec");
        let response = self.send_json(minreq::post(&url), &url, &PromptPayload { prompt })?;
        parse_body(&url, body_str(&url, &response)?)
    }

    /// Derive an ordered task list from raw spec text.
    pub fn derive_tasks(&self, raw: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("/api/tasks");
        let response = self.send_json(minreq::post(&url), &url, &RawPayload { raw })?;
        let list: TaskList = parse_body(&url, body_str(&url, &response)?)?;
        Ok(list.tasks)
    }

    /// Submit one task for the backend to apply. The response body is
    /// deliberately ignored; success is the status code.
    pub fn apply_task(&self, task: &str) -> Result<(), ApiError> {
        let url = self.endpoint("/api/apply");
        self.send_json(minreq::post(&url), &url, &TaskPayload { task })?;
        Ok(())
    }

    /// Download the whole workspace as a zip archive.
    pub fn download_workspace(&self) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint("/api/download");
        let response = self.get(&url)?;
        Ok(response.into_bytes())
    }

    fn get(&self, url: &str) -> Result<minreq::Response, ApiError> {
        let response = minreq::get(url)
            .with_timeout(self.timeout_secs)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url, &response)?;
        Ok(response)
    }

    fn send_json<B: Serialize>(
        &self,
        request: minreq::Request,
        url: &str,
        body: &B,
    ) -> Result<minreq::Response, ApiError> {
        let payload = serde_json::to_string(body).map_err(|source| ApiError::Encode {
            url: url.to_string(),
            source,
        })?;
        let response = request
            .with_timeout(self.timeout_secs)
            .with_header("Content-Type", "application/json")
            .with_body(payload)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check_status(url, &response)?;
        Ok(response)
    }
}

fn check_status(url: &str, response: &minreq::Response) -> Result<(), ApiError> {
    let status = response.status_code;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}

fn body_str<'a>(url: &str, response: &'a minreq::Response) -> Result<&'a str, ApiError> {
    response.as_str().map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })
}

/// Parse a response body into its expected schema. A body that does not
/// match is a `Decode` error naming the URL, never a silent fallback.
fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = WorkspaceApi::new("http://127.0.0.1:5050/", 10);
        assert_eq!(api.base_url(), "http://127.0.0.1:5050");
        assert_eq!(api.endpoint("/api/files"), "http://127.0.0.1:5050/api/files");
    }

    #[test]
    fn test_read_url_percent_encodes_path() {
        let encoded = urlencoding::encode("sub dir/app.js");
        assert_eq!(encoded, "sub%20dir%2Fapp.js");
    }

    #[test]
    fn test_parse_file_listing() {
        let listing: FileListing =
            parse_body("u", r#"{"files": ["index.html", "app.js"]}"#).unwrap();
        assert_eq!(listing.files, vec!["index.html", "app.js"]);
    }

    #[test]
    fn test_parse_file_listing_missing_field_is_decode_error() {
        let result: Result<FileListing, ApiError> = parse_body("http://x/api/files", r#"{}"#);
        match result {
            Err(ApiError::Decode { url, .. }) => assert_eq!(url, "http://x/api/files"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_remote_file() {
        let file: RemoteFile =
            parse_body("u", r#"{"path": "app.js", "content": "let x = 1;"}"#).unwrap();
        assert_eq!(file.path, "app.js");
        assert_eq!(file.content, "let x = 1;");
    }

    #[test]
    fn test_parse_tolerates_unknown_fields() {
        // The backend sends a structured spec next to the raw text.
        let body = r##"{"raw": "# My App", "spec": {"name": "My App", "features": []}}"##;
        let doc: SpecDocument = parse_body("u", body).unwrap();
        assert_eq!(doc.raw, "# My App");
    }

    #[test]
    fn test_parse_task_list() {
        let list: TaskList = parse_body("u", r#"{"tasks": ["Add header", "Add footer"]}"#).unwrap();
        assert_eq!(list.tasks, vec!["Add header", "Add footer"]);
    }

    #[test]
    fn test_parse_task_list_rejects_wrong_shape() {
        let result: Result<TaskList, ApiError> = parse_body("u", r#"{"tasks": "not a list"}"#);
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_write_payload_shape() {
        let json = serde_json::to_string(&WritePayload {
            path: "app.js",
            content: "x",
        })
        .unwrap();
        assert_eq!(json, r#"{"path":"app.js","content":"x"}"#);
    }

    #[test]
    fn test_task_payload_shape() {
        let json = serde_json::to_string(&TaskPayload { task: "Add header" }).unwrap();
        assert_eq!(json, r#"{"task":"Add header"}"#);
    }

    #[test]
    fn test_prompt_and_raw_payload_shapes() {
        let prompt = serde_json::to_string(&PromptPayload { prompt: "todo app" }).unwrap();
        assert_eq!(prompt, r#"{"prompt":"todo app"}"#);

        let raw = serde_json::to_string(&RawPayload { raw: "# Spec" }).unwrap();
        assert_eq!(raw, r##"{"raw":"# Spec"}"##);
    }
}
