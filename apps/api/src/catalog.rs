use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One video assigned to a participant. Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoTask {
    pub id: String,
    pub url: String,
}

/// The static email → assigned-videos mapping, loaded once at startup.
///
/// Keys are normalized to lowercase so lookups are case-insensitive.
/// There is no reload path; changing assignments requires a restart.
#[derive(Debug)]
pub struct Catalog {
    assignments: HashMap<String, Vec<VideoTask>>,
}

impl Catalog {
    /// Reads and parses the catalog JSON file. A missing or malformed file
    /// is fatal: the caller (main) aborts before the listener binds.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let parsed: HashMap<String, Vec<VideoTask>> = serde_json::from_str(&raw)
            .with_context(|| format!("Catalog file {} is not valid JSON", path.display()))?;

        let assignments = parsed
            .into_iter()
            .map(|(email, tasks)| (normalize_email(&email), tasks))
            .collect();

        Ok(Catalog { assignments })
    }

    /// The ordered task list for a (normalized) email, or None if the email
    /// has no assignments.
    pub fn tasks_for(&self, email: &str) -> Option<&[VideoTask]> {
        self.assignments.get(email).map(Vec::as_slice)
    }

    pub fn participant_count(&self) -> usize {
        self.assignments.len()
    }

    #[cfg(test)]
    pub fn from_assignments(assignments: HashMap<String, Vec<VideoTask>>) -> Self {
        Catalog {
            assignments: assignments
                .into_iter()
                .map(|(email, tasks)| (normalize_email(&email), tasks))
                .collect(),
        }
    }
}

/// The single place email normalization happens: trim + lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_lowercases_keys() {
        let file = write_catalog(r#"{" A@X.Com ": [{"id": "v1", "url": "u1"}]}"#);
        let catalog = Catalog::load(file.path()).unwrap();

        let tasks = catalog.tasks_for("a@x.com").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "v1");
        assert_eq!(tasks[0].url, "u1");
    }

    #[test]
    fn test_unknown_email_has_no_tasks() {
        let file = write_catalog(r#"{"a@x.com": []}"#);
        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.tasks_for("z@x.com").is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Catalog::load("/nonexistent/catalog.json").is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_catalog("{not json");
        assert!(Catalog::load(file.path()).is_err());
    }

    #[test]
    fn test_task_order_is_preserved() {
        let file = write_catalog(
            r#"{"a@x.com": [{"id": "v2", "url": "u2"}, {"id": "v1", "url": "u1"}]}"#,
        );
        let catalog = Catalog::load(file.path()).unwrap();
        let ids: Vec<&str> = catalog
            .tasks_for("a@x.com")
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["v2", "v1"]);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Admin@Lab.EDU "), "admin@lab.edu");
    }
}
