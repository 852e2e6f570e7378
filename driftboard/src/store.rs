//! Observable project store
//!
//! [`ProjectStore`] owns the ordered project list and its change
//! notifications. It is constructed explicitly and passed by reference
//! (or shared through [`SharedProjectStore`] in the single-threaded UI);
//! there is no global instance.
//!
//! Notification contract:
//!
//! 1. Listeners run synchronously, in subscription order.
//! 2. Every listener observes the identical snapshot per mutation.
//! 3. The snapshot is a defensive copy - listeners can never reach the
//!    store's own list through it.
//! 4. A mutation that matches no project (unknown id) notifies nobody.

use crate::types::{Project, ProjectId, ProjectStatus};
use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving the full project snapshot after each mutation
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Shared handle to a store for single-threaded UI wiring
pub type SharedProjectStore = Rc<RefCell<ProjectStore>>;

/// Owner of the project list and its subscriber callbacks
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared single-threaded handle
    pub fn shared() -> SharedProjectStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Create a project in the Active column and notify subscribers.
    ///
    /// Returns a copy of the created project so callers can reference it
    /// without scanning the snapshot.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Project {
        let project = Project::new(title, description, people);
        tracing::debug!(id = %project.id, title = %project.title, "project added");
        self.projects.push(project.clone());
        self.notify();
        project
    }

    /// Set the status of the project with the given id and notify.
    ///
    /// Unknown ids are ignored: no error, no notification. Returns whether
    /// the id matched a project. Moving a project to the status it already
    /// has is accepted and still notifies.
    pub fn move_project(&mut self, id: &ProjectId, status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(id = %id, "move ignored: unknown project");
            return false;
        };
        tracing::debug!(id = %id, status = %status, "project moved");
        project.status = status;
        self.notify();
        true
    }

    /// Register a callback for every future mutation.
    ///
    /// There is no unsubscribe and no replay of the current list; use
    /// [`projects`](Self::projects) for the state at subscription time.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Snapshot of the current list, in insertion order
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Look up a project by id
    pub fn find(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    fn notify(&mut self) {
        // One copy per mutation; every listener sees the same list.
        let snapshot = self.projects.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
