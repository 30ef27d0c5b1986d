//! Board configuration: host container id and structural templates.
//!
//! # Responsibility
//! - Provide built-in templates for the form, list section and list entry.
//! - Load overrides from JSON and validate them before any view mounts.
//!
//! # Invariants
//! - A validated config always yields templates with every slot the views bind.

use crate::ui::host::HostSurface;
use crate::ui::template::{Template, TemplateRegistry};
use crate::ui::{
    DEFAULT_HOST_ID, PROJECT_INPUT_TEMPLATE_ID, PROJECT_ITEM_TEMPLATE_ID,
    PROJECT_LIST_TEMPLATE_ID,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Built-in markup for one list section.
pub const DEFAULT_LIST_TEMPLATE: &str = r#"<section class="projects" id="{{element_id}}">
  <header>
    <h2>{{heading}}</h2>
  </header>
  <ul id="{{list_id}}">{{items}}</ul>
</section>"#;

/// Built-in markup for one list entry.
pub const DEFAULT_ITEM_TEMPLATE: &str = r#"<li id="{{project_id}}">
  <h2>{{title}}</h2>
  <h3>{{people}}</h3>
  <p>{{description}}</p>
</li>"#;

/// Built-in markup for the input form.
pub const DEFAULT_INPUT_TEMPLATE: &str = r#"<form id="{{element_id}}">
  <div class="form-control">
    <label for="title">Title</label>
    <input type="text" id="title" value="{{title}}" />
  </div>
  <div class="form-control">
    <label for="description">Description</label>
    <textarea id="description" rows="3">{{description}}</textarea>
  </div>
  <div class="form-control">
    <label for="people">People</label>
    <input type="number" id="people" step="1" min="0" max="10" value="{{people}}" />
  </div>
  <button type="submit">ADD PROJECT</button>
</form>"#;

const LIST_SLOTS: &[&str] = &["element_id", "heading", "list_id", "items"];
const ITEM_SLOTS: &[&str] = &["title", "people", "description"];
const ITEM_OPTIONAL_SLOTS: &[&str] = &["project_id"];
const INPUT_SLOTS: &[&str] = &["element_id", "title", "description", "people"];

/// Host and template settings for one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Id of the container every view mounts into.
    pub host_id: String,
    pub list_template: String,
    pub item_template: String,
    pub input_template: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host_id: DEFAULT_HOST_ID.to_string(),
            list_template: DEFAULT_LIST_TEMPLATE.to_string(),
            item_template: DEFAULT_ITEM_TEMPLATE.to_string(),
            input_template: DEFAULT_INPUT_TEMPLATE.to_string(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON config. Missing keys keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    /// Checks that every template carries the slots the views bind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host_id.trim().is_empty() {
            return Err(ConfigError::EmptyHostId);
        }
        check_slots(PROJECT_LIST_TEMPLATE_ID, &self.list_template, LIST_SLOTS, &[])?;
        check_slots(
            PROJECT_ITEM_TEMPLATE_ID,
            &self.item_template,
            ITEM_SLOTS,
            ITEM_OPTIONAL_SLOTS,
        )?;
        check_slots(PROJECT_INPUT_TEMPLATE_ID, &self.input_template, INPUT_SLOTS, &[])?;
        Ok(())
    }

    /// Validates this config and builds an empty host surface from it.
    pub fn build_host(&self) -> Result<HostSurface, ConfigError> {
        self.validate()?;
        let mut templates = TemplateRegistry::new();
        for (id, markup) in [
            (PROJECT_LIST_TEMPLATE_ID, &self.list_template),
            (PROJECT_ITEM_TEMPLATE_ID, &self.item_template),
            (PROJECT_INPUT_TEMPLATE_ID, &self.input_template),
        ] {
            templates
                .register(Template::new(id, markup.as_str()))
                .map_err(|err| ConfigError::InvalidTemplate(err.to_string()))?;
        }
        Ok(HostSurface::new(self.host_id.trim(), templates))
    }
}

fn check_slots(
    template_id: &'static str,
    markup: &str,
    required: &[&'static str],
    optional: &[&'static str],
) -> Result<(), ConfigError> {
    let template = Template::new(template_id, markup);
    for &slot in required {
        if !template.has_slot(slot) {
            return Err(ConfigError::MissingSlot {
                template: template_id,
                slot,
            });
        }
    }
    for slot in template.slots() {
        let known = required.iter().chain(optional).any(|name| *name == slot);
        if !known {
            return Err(ConfigError::UnknownSlot {
                template: template_id,
                slot,
            });
        }
    }
    Ok(())
}

/// Configuration load/validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: String, message: String },
    Parse(String),
    EmptyHostId,
    MissingSlot {
        template: &'static str,
        slot: &'static str,
    },
    UnknownSlot {
        template: &'static str,
        slot: String,
    },
    InvalidTemplate(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "failed to read config `{path}`: {message}"),
            Self::Parse(message) => write!(f, "invalid config json: {message}"),
            Self::EmptyHostId => write!(f, "host_id cannot be empty"),
            Self::MissingSlot { template, slot } => {
                write!(f, "template `{template}` must contain slot `{{{{{slot}}}}}`")
            }
            Self::UnknownSlot { template, slot } => {
                write!(f, "template `{template}` uses unknown slot `{{{{{slot}}}}}`")
            }
            Self::InvalidTemplate(message) => write!(f, "invalid template: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError};

    #[test]
    fn default_config_is_valid() {
        BoardConfig::default()
            .validate()
            .expect("built-in templates must validate");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config =
            BoardConfig::from_json_str(r#"{ "host_id": "board" }"#).expect("partial config");
        assert_eq!(config.host_id, "board");
        assert_eq!(config.list_template, BoardConfig::default().list_template);
    }

    #[test]
    fn rejects_template_without_required_slot() {
        let err = BoardConfig::from_json_str(r#"{ "list_template": "<section></section>" }"#)
            .expect_err("list template without slots must fail");
        assert_eq!(
            err,
            ConfigError::MissingSlot {
                template: "project-list",
                slot: "element_id",
            }
        );
        assert_eq!(
            err.to_string(),
            "template `project-list` must contain slot `{{element_id}}`"
        );
    }

    #[test]
    fn rejects_template_with_unknown_slot() {
        let markup = r#"<li>{{title}} {{people}} {{description}} {{owner}}</li>"#;
        let raw = serde_json::json!({ "item_template": markup }).to_string();
        let err = BoardConfig::from_json_str(&raw).expect_err("unknown slot must fail");
        assert_eq!(
            err,
            ConfigError::UnknownSlot {
                template: "single-project",
                slot: "owner".to_string(),
            }
        );
    }

    #[test]
    fn rejects_blank_host_and_unknown_keys() {
        assert_eq!(
            BoardConfig::from_json_str(r#"{ "host_id": "  " }"#),
            Err(ConfigError::EmptyHostId)
        );
        assert!(matches!(
            BoardConfig::from_json_str(r#"{ "theme": "dark" }"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
