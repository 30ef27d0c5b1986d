//! Input form view.
//!
//! # Responsibility
//! - Own the title, description and people fields of the form.
//! - Validate a submission and hand accepted input to the store.
//!
//! # Invariants
//! - A rejected submission creates nothing and leaves every field unchanged.
//! - An accepted submission clears every field after the store is updated.

use crate::model::project::ProjectId;
use crate::state::project_state::ProjectState;
use crate::ui::component::{mount, Component, MountSpec};
use crate::ui::host::{HostSurface, InsertPosition, Notifier, SharedHost};
use crate::ui::template::TemplateValues;
use crate::ui::{UiError, PROJECT_INPUT_TEMPLATE_ID};
use crate::validation::validatable::{validate, FieldValue, Validatable};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Alert shown when any field fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";
/// Element id of the mounted form.
pub const INPUT_ELEMENT_ID: &str = "user-input";

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 1.0;
const PEOPLE_MAX: f64 = 5.0;

/// Editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Title, Self::Description, Self::People];

    /// Field id inside the form template.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// `field` is the first field that failed validation.
    InvalidInput { field: FormField },
    /// The form could not be redrawn after a rejected submission.
    Ui(UiError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field } => write!(f, "invalid input in field `{field}`"),
            Self::Ui(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ui(err) => Some(err),
            Self::InvalidInput { .. } => None,
        }
    }
}

impl From<UiError> for SubmitError {
    fn from(value: UiError) -> Self {
        Self::Ui(value)
    }
}

/// Validated form values ready for the store.
#[derive(Debug, Clone, PartialEq)]
struct UserInput {
    title: String,
    description: String,
    people: f64,
}

/// Form collecting one new project.
pub struct ProjectInput {
    spec: MountSpec,
    host: SharedHost,
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    /// Mounts an empty form at the start of the host container.
    pub fn new(host: SharedHost) -> Result<Self, UiError> {
        let host_id = host.borrow().host_id().to_string();
        let input = Self {
            spec: MountSpec {
                template_id: PROJECT_INPUT_TEMPLATE_ID.to_string(),
                host_id,
                element_id: INPUT_ELEMENT_ID.to_string(),
                position: InsertPosition::AfterBegin,
            },
            host,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        };
        mount(&input, &mut input.host.borrow_mut())?;
        Ok(input)
    }

    /// Sets the raw value of one field, as typed.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::People => self.people = value,
        }
    }

    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    /// Redraws the form so the host shows the current field values.
    pub fn refresh(&self) -> Result<(), UiError> {
        let mut host = self.host.borrow_mut();
        mount(self, &mut host)
    }

    /// Validates the fields and, when valid, adds a project to `state`.
    ///
    /// # Errors
    /// - `InvalidInput` after alerting through `notifier`; fields are kept.
    /// - `Ui` when the form cannot be redrawn after a rejection.
    pub fn submit(
        &mut self,
        state: &mut ProjectState,
        notifier: &mut dyn Notifier,
    ) -> Result<ProjectId, SubmitError> {
        let input = match self.gather_user_input() {
            Ok(input) => input,
            Err(field) => {
                warn!(
                    "event=submit_rejected module=input status=invalid field={}",
                    field
                );
                notifier.alert(INVALID_INPUT_MESSAGE);
                self.refresh()?;
                return Err(SubmitError::InvalidInput { field });
            }
        };

        let id = state.add_project(input.title, input.description, input.people);
        self.clear_inputs();
        // The project is stored at this point; a failed redraw must not
        // report the submission as failed.
        if let Err(err) = self.refresh() {
            error!(
                "event=form_rendered module=input status=error project_id={} error={}",
                id, err
            );
        }
        info!(
            "event=submit_accepted module=input status=ok project_id={}",
            id
        );
        Ok(id)
    }

    fn gather_user_input(&self) -> Result<UserInput, FormField> {
        let people = FieldValue::parse_number(&self.people);
        let checks = [
            (FormField::Title, Validatable::new(self.title.as_str()).required()),
            (
                FormField::Description,
                Validatable::new(self.description.as_str())
                    .required()
                    .min_length(DESCRIPTION_MIN_LENGTH),
            ),
            (
                FormField::People,
                Validatable::new(people.clone())
                    .required()
                    .min(PEOPLE_MIN)
                    .max(PEOPLE_MAX),
            ),
        ];

        if let Some((field, _)) = checks.iter().find(|(_, check)| !validate(check)) {
            return Err(*field);
        }

        Ok(UserInput {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people.as_number().unwrap_or(f64::NAN),
        })
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectInput {
    fn mount_spec(&self) -> &MountSpec {
        &self.spec
    }

    fn render(&self, host: &HostSurface) -> Result<String, UiError> {
        host.template(&self.spec.template_id)?.render(
            &TemplateValues::new()
                .text("element_id", self.spec.element_id.as_str())
                .text(FormField::Title.as_str(), self.title.as_str())
                .text(FormField::Description.as_str(), self.description.as_str())
                .text(FormField::People.as_str(), self.people.as_str()),
        )
    }
}
