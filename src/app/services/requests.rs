use std::collections::HashMap;

/// The logical action a request belongs to. Requests of different kinds
/// never invalidate each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    ListFiles,
    OpenFile,
    CreateFile,
    SaveFile,
    DeleteFile,
    Preview,
    GenerateSpec,
    DeriveTasks,
    ApplyTask,
}

/// Handed out when a request starts; its completion message carries it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    kind: RequestKind,
    seq: u64,
}

/// Guards against out-of-order completions: starting a new request of a kind
/// invalidates every token previously issued for that kind, so a slow first
/// response cannot overwrite the result of a quick second one.
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: HashMap<RequestKind, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request of the given kind and get its token.
    pub fn begin(&mut self, kind: RequestKind) -> RequestToken {
        let seq = self.current.entry(kind).or_insert(0);
        *seq += 1;
        RequestToken { kind, seq: *seq }
    }

    /// Whether the token still belongs to the latest request of its kind.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.get(&token.kind) == Some(&token.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin(RequestKind::ListFiles);
        assert!(tracker.is_current(token));
    }

    #[test]
    fn test_new_request_invalidates_older_token() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(RequestKind::OpenFile);
        let second = tracker.begin(RequestKind::OpenFile);

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = RequestTracker::new();
        let open = tracker.begin(RequestKind::OpenFile);
        let preview = tracker.begin(RequestKind::Preview);
        tracker.begin(RequestKind::Preview);

        // A newer preview request leaves the open-file token intact.
        assert!(tracker.is_current(open));
        assert!(!tracker.is_current(preview));
    }

    #[test]
    fn test_rapid_double_trigger_keeps_only_the_last() {
        let mut tracker = RequestTracker::new();
        let tokens: Vec<_> = (0..5).map(|_| tracker.begin(RequestKind::ApplyTask)).collect();

        for stale in &tokens[..4] {
            assert!(!tracker.is_current(*stale));
        }
        assert!(tracker.is_current(tokens[4]));
    }
}
