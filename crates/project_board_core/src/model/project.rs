//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record created by form submissions.
//! - Define the status partition used by list views.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - New projects always start as `ProjectStatus::Active`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project.
pub type ProjectId = Uuid;

/// Lifecycle partition a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work that is still in progress.
    Active,
    /// Work that has been completed.
    Finished,
}

impl ProjectStatus {
    /// Lowercase name used for element ids and wire values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Section heading shown above the list for this partition.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_ascii_uppercase())
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical record created by one accepted submission.
///
/// `people` keeps the parsed numeric form of the team-size field, so
/// fractional values accepted by the range check are stored unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: f64,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: f64) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates an active project with a caller-provided id.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project belongs to `status`.
    pub fn is_in(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_starts_active() {
        let project = Project::new("Build API", "Implement REST endpoints", 3.0);
        assert!(!project.id.is_nil());
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.is_in(ProjectStatus::Active));
        assert!(!project.is_in(ProjectStatus::Finished));
    }

    #[test]
    fn status_heading_is_uppercase() {
        assert_eq!(ProjectStatus::Active.heading(), "ACTIVE PROJECTS");
        assert_eq!(ProjectStatus::Finished.heading(), "FINISHED PROJECTS");
    }
}
