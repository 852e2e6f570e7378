//! MoveProject command

use crate::error::{DriftboardError, Result};
use crate::ops::Execute;
use crate::store::ProjectStore;
use crate::types::{ProjectId, ProjectStatus};
use serde::Deserialize;
use serde_json::{json, Value};

/// Move a project to a column.
///
/// An unknown id is not an error: the store ignores it and the result
/// reports `"moved": false`. Moving a project onto the column it is
/// already in is accepted as a plain re-notification.
#[derive(Debug, Deserialize)]
pub struct MoveProject {
    /// The project id to move
    pub id: ProjectId,
    /// The target column
    pub status: ProjectStatus,
}

impl MoveProject {
    /// Create a new MoveProject command
    pub fn new(id: impl Into<ProjectId>, status: ProjectStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }
}

impl Execute<ProjectStore, DriftboardError> for MoveProject {
    fn execute(&self, store: &mut ProjectStore) -> Result<Value> {
        let moved = store.move_project(&self.id, self.status);

        Ok(json!({
            "id": self.id.as_str(),
            "status": self.status.as_str(),
            "moved": moved,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::AddProject;

    fn setup() -> (ProjectStore, ProjectId) {
        let mut store = ProjectStore::new();
        let result = AddProject::new("Build site")
            .with_description("design and build")
            .with_people(4)
            .execute(&mut store)
            .unwrap();
        let id = ProjectId::from_string(result["id"].as_str().unwrap());
        (store, id)
    }

    #[test]
    fn test_move_project_to_finished() {
        let (mut store, id) = setup();

        let result = MoveProject::new(id.clone(), ProjectStatus::Finished)
            .execute(&mut store)
            .unwrap();

        assert_eq!(result["moved"], true);
        assert_eq!(store.find(&id).unwrap().status, ProjectStatus::Finished);
    }

    #[test]
    fn test_move_unknown_id_reports_not_moved() {
        let (mut store, _id) = setup();

        let result = MoveProject::new("no-such-project", ProjectStatus::Finished)
            .execute(&mut store)
            .unwrap();

        assert_eq!(result["moved"], false);
    }

    #[test]
    fn test_move_back_to_active() {
        let (mut store, id) = setup();

        MoveProject::new(id.clone(), ProjectStatus::Finished)
            .execute(&mut store)
            .unwrap();
        MoveProject::new(id.clone(), ProjectStatus::Active)
            .execute(&mut store)
            .unwrap();

        assert_eq!(store.find(&id).unwrap().status, ProjectStatus::Active);
    }
}
