//! AddProject command

use crate::error::{DriftboardError, Result};
use crate::ops::Execute;
use crate::store::ProjectStore;
use crate::validation::{Constraints, Field, FieldValue};
use serde::Deserialize;
use serde_json::Value;

/// Minimum description length, in characters
const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Allowed team size range, inclusive
const PEOPLE_RANGE: (f64, f64) = (2.0, 8.0);

/// Create a new project in the Active column.
///
/// All three fields are validated before the store is touched: the title
/// must be present, the description must be present and at least five
/// characters, and the team size must be between two and eight people.
#[derive(Debug, Deserialize)]
pub struct AddProject {
    /// The project title (required)
    pub title: String,
    /// What the project is about
    #[serde(default)]
    pub description: String,
    /// Team size
    #[serde(default)]
    pub people: u32,
}

impl AddProject {
    /// Create a new AddProject command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            people: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the team size
    pub fn with_people(mut self, people: u32) -> Self {
        self.people = people;
        self
    }

    fn fields(&self) -> [Field; 3] {
        [
            Field::new(
                "title",
                FieldValue::text(self.title.clone()),
                Constraints::required(),
            ),
            Field::new(
                "description",
                FieldValue::text(self.description.clone()),
                Constraints::required().with_min_length(DESCRIPTION_MIN_LENGTH),
            ),
            Field::new(
                "people",
                FieldValue::number(self.people),
                Constraints::required()
                    .with_min(PEOPLE_RANGE.0)
                    .with_max(PEOPLE_RANGE.1),
            ),
        ]
    }

    fn check_fields(&self) -> Result<()> {
        for field in self.fields() {
            if field.is_blank() {
                return Err(DriftboardError::missing_field(field.label));
            }
            if !field.is_valid() {
                return Err(DriftboardError::invalid_value(
                    field.label,
                    "does not satisfy its constraints",
                ));
            }
        }
        Ok(())
    }
}

impl Execute<ProjectStore, DriftboardError> for AddProject {
    fn execute(&self, store: &mut ProjectStore) -> Result<Value> {
        self.check_fields()?;

        let project = store.add_project(self.title.clone(), self.description.clone(), self.people);
        tracing::info!(id = %project.id, title = %project.title, "project created");

        Ok(serde_json::to_value(&project)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_project() {
        let mut store = ProjectStore::new();

        let cmd = AddProject::new("Build site")
            .with_description("design and build")
            .with_people(4);
        let result = cmd.execute(&mut store).unwrap();

        assert_eq!(result["title"], "Build site");
        assert_eq!(result["people"], 4);
        assert_eq!(result["status"], "active");
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut store = ProjectStore::new();

        let cmd = AddProject::new("  ")
            .with_description("long enough")
            .with_people(4);
        let result = cmd.execute(&mut store);

        assert!(matches!(
            result,
            Err(DriftboardError::MissingField { ref field }) if field == "title"
        ));
        assert!(store.projects().is_empty(), "store must stay untouched");
    }

    #[test]
    fn test_short_description_is_rejected() {
        let mut store = ProjectStore::new();

        let cmd = AddProject::new("Build site")
            .with_description("hi")
            .with_people(4);
        let result = cmd.execute(&mut store);

        assert!(matches!(
            result,
            Err(DriftboardError::InvalidValue { ref field, .. }) if field == "description"
        ));
        assert!(store.projects().is_empty());
    }

    #[test]
    fn test_people_out_of_range_is_rejected() {
        let mut store = ProjectStore::new();

        for people in [0, 1, 9] {
            let cmd = AddProject::new("Build site")
                .with_description("long enough")
                .with_people(people);
            let result = cmd.execute(&mut store);
            assert!(
                matches!(result, Err(DriftboardError::InvalidValue { ref field, .. }) if field == "people"),
                "people = {people} must be rejected"
            );
        }

        for people in [2, 8] {
            let cmd = AddProject::new("Build site")
                .with_description("long enough")
                .with_people(people);
            assert!(cmd.execute(&mut store).is_ok(), "people = {people} is valid");
        }
    }

    #[test]
    fn test_rejected_add_does_not_notify() {
        let mut store = ProjectStore::new();
        let notified = std::rc::Rc::new(std::cell::Cell::new(0));
        let sink = std::rc::Rc::clone(&notified);
        store.subscribe(Box::new(move |_| sink.set(sink.get() + 1)));

        let _ = AddProject::new("Build site")
            .with_description("hi")
            .with_people(4)
            .execute(&mut store);

        assert_eq!(notified.get(), 0);
    }
}
