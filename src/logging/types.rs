//! Core logging types: task entries, status, and the [`Log`] trait.

/// Outcome of one top-level component for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Component (or aggregate step) name.
    pub name: String,
    /// Final status of the entry.
    pub status: TaskStatus,
    /// Optional detail message (e.g. error description).
    pub message: Option<String>,
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Every item of the component was created.
    Ok,
    /// The component was never attempted because an earlier one failed.
    Skipped,
    /// The component ran against the dry-run client.
    DryRun,
    /// A create call failed while provisioning the component.
    Failed,
}

/// Abstraction over logging backends.
///
/// The provisioner only sees `&dyn Log`, so tests can swap in a silent
/// implementation.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a task result for the summary.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn task_status_equality() {
        assert_eq!(TaskStatus::Ok, TaskStatus::Ok);
        assert_ne!(TaskStatus::Ok, TaskStatus::Failed);
        assert_ne!(TaskStatus::Skipped, TaskStatus::DryRun);
    }

    #[test]
    fn task_entry_clone() {
        let entry = TaskEntry {
            name: "HeroBanner".to_string(),
            status: TaskStatus::Failed,
            message: Some("HTTP 500".to_string()),
        };
        let cloned = entry.clone();
        assert_eq!(cloned.name, entry.name);
        assert_eq!(cloned.status, entry.status);
        assert_eq!(cloned.message, entry.message);
    }
}
