//! Board wiring: one store, one host, one form and two lists.
//!
//! # Responsibility
//! - Construct the store explicitly and hand it to every view.
//! - Mount the form first, then the active and finished lists.
//!
//! # Invariants
//! - Each board owns its own store; boards never share state.

use crate::config::{BoardConfig, ConfigError};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::project_state::{ProjectState, StateError};
use crate::ui::host::{Notifier, SharedHost};
use crate::ui::project_input::{FormField, ProjectInput, SubmitError};
use crate::ui::project_list::ProjectList;
use crate::ui::UiError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Board construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Config(ConfigError),
    Ui(UiError),
    State(StateError),
    Snapshot(String),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Ui(err) => write!(f, "{err}"),
            Self::State(err) => write!(f, "{err}"),
            Self::Snapshot(message) => write!(f, "invalid project snapshot: {message}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Ui(err) => Some(err),
            Self::State(err) => Some(err),
            Self::Snapshot(_) => None,
        }
    }
}

impl From<ConfigError> for BoardError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<StateError> for BoardError {
    fn from(value: StateError) -> Self {
        Self::State(value)
    }
}

impl From<UiError> for BoardError {
    fn from(value: UiError) -> Self {
        Self::Ui(value)
    }
}

/// Fully wired project board.
pub struct ProjectBoard {
    state: ProjectState,
    host: SharedHost,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl ProjectBoard {
    /// Builds the host from `config` and mounts every view.
    pub fn new(config: &BoardConfig) -> Result<Self, BoardError> {
        let host = config.build_host()?.into_shared();
        let mut state = ProjectState::new();
        let input = ProjectInput::new(Rc::clone(&host))?;
        let active = ProjectList::new(ProjectStatus::Active, Rc::clone(&host), &mut state)?;
        let finished =
            ProjectList::new(ProjectStatus::Finished, Rc::clone(&host), &mut state)?;
        info!(
            "event=board_ready module=app status=ok host_id={} listeners={}",
            config.host_id,
            state.listener_count()
        );
        Ok(Self {
            state,
            host,
            input,
            active,
            finished,
        })
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    /// Submits the form as currently filled in.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<ProjectId, SubmitError> {
        self.input.submit(&mut self.state, notifier)
    }

    /// Fills all three fields with raw values, then submits.
    pub fn submit_fields(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<ProjectId, SubmitError> {
        self.input.set_field(FormField::Title, title);
        self.input.set_field(FormField::Description, description);
        self.input.set_field(FormField::People, people);
        self.submit(notifier)
    }

    /// Every stored project in insertion order.
    pub fn projects(&self) -> &[Project] {
        self.state.projects()
    }

    pub fn active_projects(&self) -> Vec<Project> {
        self.active.assigned_projects()
    }

    pub fn finished_projects(&self) -> Vec<Project> {
        self.finished.assigned_projects()
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Shared host handle, for callers that inspect mounted markup.
    pub fn host(&self) -> SharedHost {
        Rc::clone(&self.host)
    }

    /// Renders the host container with the form and both lists.
    pub fn render_page(&self) -> Result<String, UiError> {
        self.input.refresh()?;
        Ok(self.host.borrow().render_page())
    }

    /// Loads projects previously written by `snapshot_json`.
    ///
    /// The snapshot is imported whole or not at all. Returns the number of
    /// imported projects.
    pub fn import_snapshot_json(&mut self, raw: &str) -> Result<usize, BoardError> {
        let projects: Vec<Project> =
            serde_json::from_str(raw).map_err(|err| BoardError::Snapshot(err.to_string()))?;
        Ok(self.state.import_projects(projects)?)
    }

    /// Pretty JSON of every stored project.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.state.projects())
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectBoard;
    use crate::config::BoardConfig;
    use crate::model::project::ProjectStatus;

    #[test]
    fn new_board_mounts_form_before_lists() {
        let board = ProjectBoard::new(&BoardConfig::default()).expect("default board");
        let host = board.host();
        assert_eq!(
            host.borrow().element_ids(),
            vec!["user-input", "active-projects", "finished-projects"]
        );
        assert_eq!(board.list(ProjectStatus::Active).status(), ProjectStatus::Active);
    }

    #[test]
    fn snapshot_import_rejects_malformed_json() {
        let mut board = ProjectBoard::new(&BoardConfig::default()).expect("default board");
        let err = board
            .import_snapshot_json("{ not json")
            .expect_err("malformed snapshot must fail");
        assert!(matches!(err, super::BoardError::Snapshot(_)));
        assert!(board.projects().is_empty());
    }
}
