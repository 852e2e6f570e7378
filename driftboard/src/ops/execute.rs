//! Execute trait for board operations

use serde_json::Value;

/// Run an operation against a context, producing a JSON result.
///
/// The context is borrowed mutably for the duration of the call; the store
/// is in-memory and single-threaded, so execution is synchronous and every
/// notification it triggers completes before `execute` returns.
pub trait Execute<C, E> {
    fn execute(&self, ctx: &mut C) -> std::result::Result<Value, E>;
}
