//! Structural templates with `{{slot}}` placeholders.
//!
//! # Invariants
//! - Text slot values are HTML-escaped; markup slot values are inserted as-is.
//! - Rendering fails instead of leaving a placeholder unfilled.

use crate::ui::UiError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

static SLOT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([a-z_][a-z0-9_]*)\s*\}\}").expect("valid template slot regex")
});

/// Value bound to one template slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    /// Plain text, escaped on render.
    Text(String),
    /// Pre-rendered child markup, inserted verbatim.
    Markup(String),
}

/// Slot bindings for one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    values: BTreeMap<String, SlotValue>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, slot: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(slot.to_string(), SlotValue::Text(value.into()));
        self
    }

    pub fn markup(mut self, slot: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(slot.to_string(), SlotValue::Markup(value.into()));
        self
    }

    fn get(&self, slot: &str) -> Option<&SlotValue> {
        self.values.get(slot)
    }
}

/// Named markup fragment cloned by views on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: String,
    markup: String,
}

impl Template {
    pub fn new(id: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            markup: markup.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns distinct slot names in order of first appearance.
    pub fn slots(&self) -> Vec<String> {
        let mut seen = Vec::<String>::new();
        for caps in SLOT_RE.captures_iter(&self.markup) {
            let name = caps[1].to_string();
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        SLOT_RE
            .captures_iter(&self.markup)
            .any(|caps| &caps[1] == slot)
    }

    /// Renders the template, filling every slot from `values`.
    ///
    /// # Errors
    /// - Returns `UiError::MissingSlot` when a slot has no binding.
    pub fn render(&self, values: &TemplateValues) -> Result<String, UiError> {
        if let Some(missing) = self
            .slots()
            .into_iter()
            .find(|slot| values.get(slot).is_none())
        {
            return Err(UiError::MissingSlot {
                template: self.id.clone(),
                slot: missing,
            });
        }

        let rendered = SLOT_RE.replace_all(&self.markup, |caps: &Captures<'_>| {
            match values.get(&caps[1]) {
                Some(SlotValue::Text(text)) => escape_html(text),
                Some(SlotValue::Markup(markup)) => markup.clone(),
                None => String::new(),
            }
        });
        Ok(rendered.into_owned())
    }
}

/// Template id → template lookup.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, template: Template) -> Result<(), UiError> {
        if self.templates.contains_key(template.id()) {
            return Err(UiError::DuplicateTemplate(template.id().to_string()));
        }
        self.templates.insert(template.id().to_string(), template);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Template, UiError> {
        self.templates
            .get(id)
            .ok_or_else(|| UiError::TemplateNotFound(id.to_string()))
    }
}

/// Escapes text for insertion into element content or attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
