//! View layer over the host rendering surface.
//!
//! # Responsibility
//! - Model the host surface (templates, mounted elements, alerts).
//! - Provide the list and input views that render projects through it.
//!
//! # Invariants
//! - Views hold cloned snapshots only, never references into the store.
//! - Every mounted element id is unique within its host.

pub mod component;
pub mod host;
pub mod project_input;
pub mod project_list;
pub mod template;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Template id of the list section markup.
pub const PROJECT_LIST_TEMPLATE_ID: &str = "project-list";
/// Template id of the single list entry markup.
pub const PROJECT_ITEM_TEMPLATE_ID: &str = "single-project";
/// Template id of the input form markup.
pub const PROJECT_INPUT_TEMPLATE_ID: &str = "project-input";
/// Default host container id.
pub const DEFAULT_HOST_ID: &str = "app";

/// Host surface and template wiring errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    TemplateNotFound(String),
    DuplicateTemplate(String),
    MissingSlot { template: String, slot: String },
    HostNotFound(String),
    DuplicateElement(String),
    ElementNotFound(String),
}

impl Display for UiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(id) => write!(f, "template not found: {id}"),
            Self::DuplicateTemplate(id) => write!(f, "template already registered: {id}"),
            Self::MissingSlot { template, slot } => {
                write!(f, "template `{template}` slot `{slot}` has no value")
            }
            Self::HostNotFound(id) => write!(f, "host element not found: {id}"),
            Self::DuplicateElement(id) => write!(f, "element already mounted: {id}"),
            Self::ElementNotFound(id) => write!(f, "element not mounted: {id}"),
        }
    }
}

impl Error for UiError {}
