//! Host rendering surface and user notification channel.
//!
//! # Responsibility
//! - Hold the template registry views clone their markup from.
//! - Keep mounted elements of the host container in document order.
//! - Deliver blocking user notifications (alerts).

use crate::ui::template::{Template, TemplateRegistry};
use crate::ui::UiError;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the host surface used by views and their listeners.
pub type SharedHost = Rc<RefCell<HostSurface>>;

/// Where a new element lands inside the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the current first child.
    AfterBegin,
    /// After the current last child.
    BeforeEnd,
}

/// One element mounted into the host container.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MountedElement {
    id: String,
    markup: String,
}

/// In-memory stand-in for the page a board renders into.
#[derive(Debug, Clone)]
pub struct HostSurface {
    host_id: String,
    templates: TemplateRegistry,
    elements: Vec<MountedElement>,
}

impl HostSurface {
    pub fn new(host_id: impl Into<String>, templates: TemplateRegistry) -> Self {
        Self {
            host_id: host_id.into(),
            templates,
            elements: Vec::new(),
        }
    }

    /// Wraps this surface in the shared handle views expect.
    pub fn into_shared(self) -> SharedHost {
        Rc::new(RefCell::new(self))
    }

    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    pub fn template(&self, id: &str) -> Result<&Template, UiError> {
        self.templates.get(id)
    }

    /// Inserts a new element into the container named `host_id`.
    ///
    /// # Errors
    /// - `HostNotFound` when `host_id` is not this surface's container.
    /// - `DuplicateElement` when `id` is already mounted.
    pub fn insert(
        &mut self,
        host_id: &str,
        position: InsertPosition,
        id: impl Into<String>,
        markup: impl Into<String>,
    ) -> Result<(), UiError> {
        if host_id != self.host_id {
            return Err(UiError::HostNotFound(host_id.to_string()));
        }
        let id = id.into();
        if self.contains(&id) {
            return Err(UiError::DuplicateElement(id));
        }
        let element = MountedElement {
            id,
            markup: markup.into(),
        };
        match position {
            InsertPosition::AfterBegin => self.elements.insert(0, element),
            InsertPosition::BeforeEnd => self.elements.push(element),
        }
        Ok(())
    }

    /// Replaces the markup of a mounted element in place.
    pub fn replace(&mut self, id: &str, markup: impl Into<String>) -> Result<(), UiError> {
        let element = self
            .elements
            .iter_mut()
            .find(|element| element.id == id)
            .ok_or_else(|| UiError::ElementNotFound(id.to_string()))?;
        element.markup = markup.into();
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.iter().any(|element| element.id == id)
    }

    pub fn element(&self, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.markup.as_str())
    }

    /// Mounted element ids in document order.
    pub fn element_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .map(|element| element.id.as_str())
            .collect()
    }

    /// Renders the host container with every mounted child in order.
    pub fn render_page(&self) -> String {
        let mut page = format!("<div id=\"{}\">\n", self.host_id);
        for element in &self.elements {
            page.push_str(element.markup.trim_end());
            page.push('\n');
        }
        page.push_str("</div>\n");
        page
    }
}

/// Blocking user-facing notification channel.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Notifier that keeps every alert for later inspection.
///
/// Clones share the same alert log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    alerts: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.alerts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{HostSurface, InsertPosition, Notifier, RecordingNotifier};
    use crate::ui::template::TemplateRegistry;
    use crate::ui::UiError;

    fn host() -> HostSurface {
        HostSurface::new("app", TemplateRegistry::new())
    }

    #[test]
    fn insert_respects_position() {
        let mut host = host();
        host.insert("app", InsertPosition::BeforeEnd, "a", "<a/>")
            .expect("insert a");
        host.insert("app", InsertPosition::BeforeEnd, "b", "<b/>")
            .expect("insert b");
        host.insert("app", InsertPosition::AfterBegin, "form", "<form/>")
            .expect("insert form");
        assert_eq!(host.element_ids(), vec!["form", "a", "b"]);
    }

    #[test]
    fn insert_rejects_unknown_host_and_duplicates() {
        let mut host = host();
        assert_eq!(
            host.insert("root", InsertPosition::BeforeEnd, "a", ""),
            Err(UiError::HostNotFound("root".to_string()))
        );
        host.insert("app", InsertPosition::BeforeEnd, "a", "")
            .expect("first insert");
        assert_eq!(
            host.insert("app", InsertPosition::BeforeEnd, "a", ""),
            Err(UiError::DuplicateElement("a".to_string()))
        );
    }

    #[test]
    fn replace_updates_markup_in_place() {
        let mut host = host();
        host.insert("app", InsertPosition::BeforeEnd, "a", "old")
            .expect("insert");
        host.replace("a", "new").expect("replace mounted element");
        assert_eq!(host.element("a"), Some("new"));
        assert_eq!(
            host.replace("b", "x"),
            Err(UiError::ElementNotFound("b".to_string()))
        );
    }

    #[test]
    fn render_page_wraps_children() {
        let mut host = host();
        host.insert("app", InsertPosition::BeforeEnd, "a", "<p>a</p>\n")
            .expect("insert");
        assert_eq!(host.render_page(), "<div id=\"app\">\n<p>a</p>\n</div>\n");
    }

    #[test]
    fn recording_notifier_clones_share_log() {
        let notifier = RecordingNotifier::new();
        let mut sender = notifier.clone();
        sender.alert("first");
        assert_eq!(notifier.alerts(), vec!["first".to_string()]);
    }
}
