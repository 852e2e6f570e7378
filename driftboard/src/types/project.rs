//! Project entity and status

use super::ids::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The workflow state of a project - one of the two board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked project on the board.
///
/// Identity is the `id`; everything except `status` is fixed at creation.
/// Projects are only ever constructed through
/// [`ProjectStore::add_project`](crate::store::ProjectStore::add_project)
/// and live until the process ends - there is no delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Team size
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new project in the Active column with a fresh id
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Check whether the project sits in the given column
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}
