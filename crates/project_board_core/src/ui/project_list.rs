//! List view for one project partition.
//!
//! # Responsibility
//! - Subscribe to the store and keep the projects of one status.
//! - Redraw the whole list section on every notification.
//!
//! # Invariants
//! - The retained subset is replaced entirely on each notification.
//! - Entries keep the order of the store snapshot.

use crate::model::project::{Project, ProjectStatus};
use crate::state::project_state::{ListenerId, ProjectState};
use crate::ui::component::{mount, Component, MountSpec};
use crate::ui::host::{HostSurface, InsertPosition, SharedHost};
use crate::ui::template::TemplateValues;
use crate::ui::{UiError, PROJECT_ITEM_TEMPLATE_ID, PROJECT_LIST_TEMPLATE_ID};
use log::{debug, error};
use std::cell::RefCell;
use std::rc::Rc;

/// Render state shared between the view and its store listener.
#[derive(Debug, Clone)]
struct ListRenderer {
    status: ProjectStatus,
    spec: MountSpec,
}

impl ListRenderer {
    fn render(&self, projects: &[Project], host: &HostSurface) -> Result<String, UiError> {
        let item_template = host.template(PROJECT_ITEM_TEMPLATE_ID)?;
        let mut items = String::new();
        for project in projects {
            items.push_str(&item_template.render(
                &TemplateValues::new()
                    .text("project_id", project.id.to_string())
                    .text("title", project.title.as_str())
                    .text("people", people_label(project.people))
                    .text("description", project.description.as_str()),
            )?);
        }

        host.template(&self.spec.template_id)?.render(
            &TemplateValues::new()
                .text("element_id", self.spec.element_id.as_str())
                .text("heading", self.status.heading())
                .text("list_id", list_id(self.status))
                .markup("items", items),
        )
    }
}

/// Section listing every project of one status.
pub struct ProjectList {
    renderer: ListRenderer,
    assigned: Rc<RefCell<Vec<Project>>>,
    host: SharedHost,
    listener: Option<ListenerId>,
}

impl ProjectList {
    /// Mounts an empty list section and subscribes it to `state`.
    pub fn new(
        status: ProjectStatus,
        host: SharedHost,
        state: &mut ProjectState,
    ) -> Result<Self, UiError> {
        let host_id = host.borrow().host_id().to_string();
        let mut list = Self {
            renderer: ListRenderer {
                status,
                spec: MountSpec {
                    template_id: PROJECT_LIST_TEMPLATE_ID.to_string(),
                    host_id,
                    element_id: format!("{}-projects", status.as_str()),
                    position: InsertPosition::BeforeEnd,
                },
            },
            assigned: Rc::new(RefCell::new(Vec::new())),
            host,
            listener: None,
        };
        mount(&list, &mut list.host.borrow_mut())?;
        list.configure(state);
        Ok(list)
    }

    pub fn status(&self) -> ProjectStatus {
        self.renderer.status
    }

    pub fn listener_id(&self) -> Option<ListenerId> {
        self.listener
    }

    /// Projects currently shown by this list.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }
}

impl Component for ProjectList {
    fn mount_spec(&self) -> &MountSpec {
        &self.renderer.spec
    }

    fn configure(&mut self, state: &mut ProjectState) {
        if self.listener.is_some() {
            return;
        }
        let renderer = self.renderer.clone();
        let assigned = Rc::clone(&self.assigned);
        let host = Rc::clone(&self.host);
        let id = state.subscribe(move |projects| {
            let relevant: Vec<Project> = projects
                .iter()
                .filter(|project| project.is_in(renderer.status))
                .cloned()
                .collect();
            *assigned.borrow_mut() = relevant;

            let rendered = renderer.render(&assigned.borrow(), &host.borrow());
            let element_id = renderer.spec.element_id.as_str();
            match rendered.and_then(|markup| host.borrow_mut().replace(element_id, markup)) {
                Ok(()) => debug!(
                    "event=list_rendered module=ui status=ok list={} items={}",
                    renderer.status,
                    assigned.borrow().len()
                ),
                Err(err) => error!(
                    "event=list_rendered module=ui status=error list={} error={}",
                    renderer.status, err
                ),
            }
        });
        self.listener = Some(id);
    }

    fn render(&self, host: &HostSurface) -> Result<String, UiError> {
        self.renderer.render(&self.assigned.borrow(), host)
    }
}

/// Element id of the `<ul>` inside a list section.
pub fn list_id(status: ProjectStatus) -> String {
    format!("{}-projects-list", status.as_str())
}

fn people_label(people: f64) -> String {
    if people == 1.0 {
        "1 person assigned".to_string()
    } else {
        format!("{people} persons assigned")
    }
}

#[cfg(test)]
mod tests {
    use super::people_label;

    #[test]
    fn people_label_uses_singular_for_one() {
        assert_eq!(people_label(1.0), "1 person assigned");
        assert_eq!(people_label(3.0), "3 persons assigned");
    }
}
