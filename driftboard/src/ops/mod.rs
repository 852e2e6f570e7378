//! Board operations
//!
//! Operations are structs where the fields are the parameters. Each one
//! implements [`Execute`] against a `&mut ProjectStore` and returns its
//! result as JSON.

mod add;
mod execute;
mod list;
mod mv;

pub use add::AddProject;
pub use execute::Execute;
pub use list::ListProjects;
pub use mv::MoveProject;
