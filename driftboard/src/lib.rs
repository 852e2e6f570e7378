//! In-memory kanban board engine
//!
//! This crate provides the state layer for a two-column project tracker:
//! an observable store of projects, field validation for project input, and
//! command-style operations that mutate the store.
//!
//! ## Overview
//!
//! - **Explicit state** - [`ProjectStore`] is constructed by the caller and
//!   passed by reference; there is no global instance
//! - **Change notification** - every mutation hands each subscriber a
//!   defensive copy of the full project list, synchronously and in
//!   subscription order
//! - **Operations as structs** - [`AddProject`], [`MoveProject`] and
//!   [`ListProjects`] carry their parameters as fields and execute against
//!   a `&mut ProjectStore`
//!
//! ## Basic Usage
//!
//! ```
//! use driftboard::{AddProject, Execute, MoveProject, ProjectStatus, ProjectStore};
//!
//! # fn main() -> driftboard::Result<()> {
//! let mut store = ProjectStore::new();
//!
//! let created = AddProject::new("Ship the beta")
//!     .with_description("cut a release branch")
//!     .with_people(3)
//!     .execute(&mut store)?;
//!
//! let id = created["id"].as_str().unwrap().to_string();
//! MoveProject::new(id, ProjectStatus::Finished).execute(&mut store)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ops;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{DriftboardError, Result};
pub use ops::{AddProject, Execute, ListProjects, MoveProject};
pub use store::{Listener, ProjectStore, SharedProjectStore};
pub use types::{Project, ProjectId, ProjectStatus};
pub use validation::{validate, Constraints, Field, FieldValue};
