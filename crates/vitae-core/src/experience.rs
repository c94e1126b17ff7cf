//! Experience records.
//!
//! An [`Experience`] is one job or role on the timeline. Records arrive
//! already sanitized; this module only describes their shape and the
//! display strings derived from them.

use serde::{Deserialize, Serialize};

/// One entry on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Start of the time range (free-form, e.g. "2020" or "Jan 2020").
    pub from: String,

    /// End of the time range (free-form, e.g. "Present").
    pub to: String,

    /// Position or title held.
    pub position: String,

    /// Company name.
    pub company: String,

    /// Link to the company. Empty strings count as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_link: Option<String>,

    /// Project bullets shown when the entry is expanded.
    ///
    /// Frequently absent from real data files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
}

impl Experience {
    /// Create an experience with no link and no projects.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        position: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            position: position.into(),
            company: company.into(),
            company_link: None,
            projects: None,
        }
    }

    /// Set the company link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.company_link = Some(link.into());
        self
    }

    /// Set the project list.
    #[must_use]
    pub fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects = Some(projects.into_iter().map(Into::into).collect());
        self
    }

    /// Time range label, joined as `"<from> - <to>"`.
    pub fn time_label(&self) -> String {
        format!("{} - {}", self.from, self.to)
    }

    /// The company link, if one is present and non-empty.
    pub fn link(&self) -> Option<&str> {
        self.company_link.as_deref().filter(|l| !l.is_empty())
    }

    /// Projects to show when expanded. Empty when none are recorded.
    pub fn projects(&self) -> &[String] {
        self.projects.as_deref().unwrap_or_default()
    }

    /// Whether expanding this entry reveals anything.
    pub fn has_projects(&self) -> bool {
        !self.projects().is_empty()
    }
}
