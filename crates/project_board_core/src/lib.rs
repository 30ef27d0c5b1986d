//! Core of the project board: a validated input form feeding an in-memory
//! project store whose listeners redraw the active and finished lists.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod ui;
pub mod validation;

pub use app::{BoardError, ProjectBoard};
pub use config::{BoardConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use state::project_state::{ListenerId, ProjectState, StateError};
pub use ui::component::{mount, Component, MountSpec};
pub use ui::host::{HostSurface, InsertPosition, Notifier, RecordingNotifier, SharedHost};
pub use ui::project_input::{FormField, ProjectInput, SubmitError, INVALID_INPUT_MESSAGE};
pub use ui::project_list::ProjectList;
pub use ui::template::{Template, TemplateRegistry, TemplateValues};
pub use ui::UiError;
pub use validation::validatable::{validate, FieldValue, Validatable};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
