//! Core types for the board engine

mod ids;
mod project;

pub use ids::ProjectId;
pub use project::{Project, ProjectStatus};
