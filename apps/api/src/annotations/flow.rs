use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::VideoTask;
use crate::models::annotation::AnnotationRow;

/// What the page should render for a given email, computed fresh on every
/// request. No session object; the email in the request is the whole state.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SessionView {
    /// Email matches the configured admin address.
    Admin,
    /// Email has no catalog assignments. Terminal; the page shows a warning.
    NoTasks,
    /// The participant's next unanswered video.
    Task {
        video: VideoTask,
        completed_count: usize,
        assigned_count: usize,
    },
    /// Every assigned video has a submission. Shows the participant's own
    /// history, oldest first.
    Done { submissions: Vec<AnnotationRow> },
}

/// First-not-done policy: the first task in catalog order whose id has no
/// submission yet. Not most-recent, not random.
pub fn next_task<'a>(
    assigned: &'a [VideoTask],
    completed: &HashSet<String>,
) -> Option<&'a VideoTask> {
    assigned.iter().find(|task| !completed.contains(&task.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<VideoTask> {
        vec![
            VideoTask {
                id: "v1".into(),
                url: "u1".into(),
            },
            VideoTask {
                id: "v2".into(),
                url: "u2".into(),
            },
            VideoTask {
                id: "v3".into(),
                url: "u3".into(),
            },
        ]
    }

    #[test]
    fn test_empty_completed_picks_first() {
        let assigned = tasks();
        let next = next_task(&assigned, &HashSet::new()).unwrap();
        assert_eq!(next.id, "v1");
    }

    #[test]
    fn test_completed_video_never_presented_again() {
        let assigned = tasks();
        let mut completed = HashSet::new();

        completed.insert("v1".to_string());
        assert_eq!(next_task(&assigned, &completed).unwrap().id, "v2");

        // Progress is monotonic: adding more completions never goes back.
        completed.insert("v2".to_string());
        assert_eq!(next_task(&assigned, &completed).unwrap().id, "v3");
    }

    #[test]
    fn test_gap_in_completion_falls_back_to_first_gap() {
        let assigned = tasks();
        let completed: HashSet<String> = ["v1", "v3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(next_task(&assigned, &completed).unwrap().id, "v2");
    }

    #[test]
    fn test_all_done_yields_none() {
        let assigned = tasks();
        let completed: HashSet<String> =
            ["v1", "v2", "v3"].iter().map(|s| s.to_string()).collect();
        assert!(next_task(&assigned, &completed).is_none());
    }

    #[test]
    fn test_unassigned_completions_are_ignored() {
        let assigned = tasks();
        let completed: HashSet<String> = ["v9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(next_task(&assigned, &completed).unwrap().id, "v1");
    }
}
