/// Submitted when the user applies with no tasks derived yet; the backend
/// treats it like any other task.
pub const FALLBACK_TASK: &str = "Scaffold minimal app";

/// Ordered list of pending tasks, consumed front-first by "Apply Next Task".
///
/// The queue is replaced wholesale every time tasks are derived. A task is
/// removed only after the backend confirms the apply, and only if the head
/// still matches what was submitted, so a re-derive that lands mid-flight
/// cannot lose an unrelated task.
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<String>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue with a freshly derived task list.
    pub fn replace(&mut self, tasks: Vec<String>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// The task to submit next: the head of the queue, or the fallback
    /// when nothing has been derived.
    pub fn next_task(&self) -> String {
        self.tasks
            .first()
            .cloned()
            .unwrap_or_else(|| FALLBACK_TASK.to_string())
    }

    /// Mark `applied` as done. Removes the head only if it still equals the
    /// submitted task; returns whether anything was removed.
    pub fn complete(&mut self, applied: &str) -> bool {
        if self.tasks.first().is_some_and(|t| t == applied) {
            self.tasks.remove(0);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_task_from_head() {
        let mut queue = TaskQueue::new();
        queue.replace(vec!["Add header".to_string(), "Add footer".to_string()]);
        assert_eq!(queue.next_task(), "Add header");
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_empty_queue_falls_back() {
        let queue = TaskQueue::new();
        assert_eq!(queue.next_task(), FALLBACK_TASK);
        assert_eq!(queue.next_task(), "Scaffold minimal app");
    }

    #[test]
    fn test_complete_removes_exactly_the_head() {
        let mut queue = TaskQueue::new();
        queue.replace(vec!["Add header".to_string(), "Add footer".to_string()]);

        let applied = queue.next_task();
        assert!(queue.complete(&applied));
        assert_eq!(queue.tasks(), &["Add footer".to_string()]);
    }

    #[test]
    fn test_complete_skips_when_head_changed() {
        let mut queue = TaskQueue::new();
        queue.replace(vec!["Add header".to_string()]);
        let applied = queue.next_task();

        // A re-derive lands while the apply is in flight.
        queue.replace(vec!["Wire routing".to_string(), "Add tests".to_string()]);

        assert!(!queue.complete(&applied));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.next_task(), "Wire routing");
    }

    #[test]
    fn test_complete_on_empty_queue() {
        let mut queue = TaskQueue::new();
        assert!(!queue.complete(FALLBACK_TASK));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_replace_discards_previous_tasks() {
        let mut queue = TaskQueue::new();
        queue.replace(vec!["old".to_string()]);
        queue.replace(vec!["new a".to_string(), "new b".to_string()]);
        assert_eq!(queue.tasks(), &["new a".to_string(), "new b".to_string()]);
    }

    #[test]
    fn test_clear() {
        let mut queue = TaskQueue::new();
        queue.replace(vec!["one".to_string()]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_task(), FALLBACK_TASK);
    }
}
