//! Resume data files.
//!
//! The host application reads experiences from a JSON document of the form
//! `{ "experiences": [ ... ] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::experience::Experience;

/// Default data file name, looked up in the current directory.
pub const DEFAULT_DATA_FILE: &str = "resume.json";

/// Error type for resume data operations.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file already exists: {0}")]
    AlreadyExists(String),
}

/// The experiences shown on the card, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

impl ResumeData {
    /// Load resume data from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ResumeError> {
        let content = std::fs::read_to_string(path)?;
        let data: Self = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            count = data.experiences.len(),
            "loaded resume data"
        );
        Ok(data)
    }

    /// Save resume data as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ResumeError> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write sample data to `path`, refusing to overwrite unless `force`.
    pub fn write_sample(path: &Path, force: bool) -> Result<Self, ResumeError> {
        if path.exists() && !force {
            return Err(ResumeError::AlreadyExists(path.display().to_string()));
        }
        let sample = Self::sample();
        sample.save(path)?;
        Ok(sample)
    }

    /// A small data set useful for first runs and demos.
    pub fn sample() -> Self {
        Self {
            experiences: vec![
                Experience::new("2022", "Present", "Senior Engineer", "Acme Corp")
                    .with_link("https://acme.example")
                    .with_projects([
                        "Led the migration of billing to an event-sourced ledger",
                        "Cut p99 checkout latency by 40%",
                    ]),
                Experience::new("2019", "2022", "Software Engineer", "Initech")
                    .with_link("https://initech.example")
                    .with_projects(["Built the internal deploy dashboard"]),
                Experience::new("2017", "2019", "Junior Developer", "Globex"),
            ],
        }
    }

    /// Number of experiences.
    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    /// Whether there are no experiences.
    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(
            &path,
            r#"{"experiences":[
                {"from":"2021","to":"2023","position":"B","company":"Beta"},
                {"from":"2019","to":"2021","position":"A","company":"Alpha"}
            ]}"#,
        )
        .unwrap();

        let data = ResumeData::load(&path).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.experiences[0].company, "Beta");
        assert_eq!(data.experiences[1].company, "Alpha");
    }

    #[test]
    fn test_missing_experiences_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, r#"{"name":"Someone"}"#).unwrap();

        let data = ResumeData::load(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ResumeData::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ResumeError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(ResumeData::load(&path), Err(ResumeError::Json(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/resume.json");

        let data = ResumeData::sample();
        data.save(&path).unwrap();

        let loaded = ResumeData::load(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_write_sample_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "{}").unwrap();

        let result = ResumeData::write_sample(&path, false);
        assert!(matches!(result, Err(ResumeError::AlreadyExists(_))));

        let written = ResumeData::write_sample(&path, true).unwrap();
        assert_eq!(written, ResumeData::sample());
    }

    #[test]
    fn test_sample_has_entry_without_projects() {
        let sample = ResumeData::sample();
        assert!(sample.experiences.iter().any(|e| !e.has_projects()));
    }
}
