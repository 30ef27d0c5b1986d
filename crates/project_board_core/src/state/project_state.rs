//! Project store and listener registry.

use crate::model::project::{Project, ProjectId};
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Identity of one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Store mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    DuplicateId(ProjectId),
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "project id already stored: {id}"),
        }
    }
}

impl Error for StateError {}

/// Callback invoked with a snapshot of every stored project.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Single-threaded project store.
///
/// Listeners only ever see `&[Project]`, so a listener cannot re-enter
/// `add_project` while a notification is in flight.
#[derive(Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for future mutations.
    ///
    /// The listener is not called for projects added before registration.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Project]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(
            "event=listener_registered module=state status=ok listener_id={} listeners={}",
            id.get(),
            self.listeners.len()
        );
        id
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// Inputs are expected to be validated by the caller.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: f64,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.push(project);
        id
    }

    /// Appends an externally created project, keeping its id and status.
    ///
    /// Used by snapshot import, where identity already exists.
    ///
    /// # Errors
    /// - `DuplicateId` when a project with the same id is already stored.
    pub fn import_project(&mut self, project: Project) -> Result<ProjectId, StateError> {
        if self.projects.iter().any(|stored| stored.id == project.id) {
            return Err(StateError::DuplicateId(project.id));
        }
        let id = project.id;
        self.push(project);
        Ok(id)
    }

    /// Appends every project of a snapshot, or none of them.
    ///
    /// All ids are checked against the store and against each other before
    /// the first project is stored. Listeners fire once per project.
    ///
    /// # Errors
    /// - `DuplicateId` for the first id already stored or repeated in `projects`.
    pub fn import_projects(&mut self, projects: Vec<Project>) -> Result<usize, StateError> {
        let mut seen: HashSet<ProjectId> = self.projects.iter().map(|stored| stored.id).collect();
        if let Some(duplicate) = projects.iter().find(|project| !seen.insert(project.id)) {
            return Err(StateError::DuplicateId(duplicate.id));
        }
        let count = projects.len();
        for project in projects {
            self.push(project);
        }
        Ok(count)
    }

    /// Returns stored projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn push(&mut self, project: Project) {
        let id = project.id;
        let status = project.status;
        self.projects.push(project);
        info!(
            "event=project_added module=state status=ok project_id={} project_status={} total={}",
            id,
            status,
            self.projects.len()
        );
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.projects.clone();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

impl Debug for ProjectState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectState")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
