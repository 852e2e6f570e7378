//! ListProjects command

use crate::error::{DriftboardError, Result};
use crate::ops::Execute;
use crate::store::ProjectStore;
use crate::types::ProjectStatus;
use serde::Deserialize;
use serde_json::Value;

/// List projects, optionally filtered to one column.
///
/// This is the same filter the column views apply to every snapshot.
#[derive(Debug, Default, Deserialize)]
pub struct ListProjects {
    /// Keep only projects with this status
    pub status: Option<ProjectStatus>,
}

impl ListProjects {
    /// List every project
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the listing to one column
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl Execute<ProjectStore, DriftboardError> for ListProjects {
    fn execute(&self, store: &mut ProjectStore) -> Result<Value> {
        let mut projects = store.projects();
        if let Some(status) = self.status {
            projects.retain(|p| p.has_status(status));
        }

        Ok(serde_json::to_value(&projects)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{AddProject, MoveProject};
    use crate::types::ProjectId;

    fn setup() -> ProjectStore {
        let mut store = ProjectStore::new();
        for title in ["one", "two", "three"] {
            AddProject::new(title)
                .with_description("desc text")
                .with_people(3)
                .execute(&mut store)
                .unwrap();
        }
        store
    }

    #[test]
    fn test_list_all() {
        let mut store = setup();
        let result = ListProjects::new().execute(&mut store).unwrap();
        assert_eq!(result.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_list_filters_by_status() {
        let mut store = setup();
        let id = ProjectId::from_string(store.projects()[0].id.as_str());
        MoveProject::new(id, ProjectStatus::Finished)
            .execute(&mut store)
            .unwrap();

        let active = ListProjects::new()
            .with_status(ProjectStatus::Active)
            .execute(&mut store)
            .unwrap();
        let finished = ListProjects::new()
            .with_status(ProjectStatus::Finished)
            .execute(&mut store)
            .unwrap();

        assert_eq!(active.as_array().unwrap().len(), 2);
        assert_eq!(finished.as_array().unwrap().len(), 1);
        assert_eq!(finished[0]["title"], "one");
    }
}
