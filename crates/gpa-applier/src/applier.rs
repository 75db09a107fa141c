// applier.rs — The Applier trait and its lifecycle states.

use crate::error::ApplierError;

/// Lifecycle of a single applier instance.
///
/// `Constructed` → `Applied` on success, `Constructed` → `Failed` on the first
/// action fault. `Applied` may be applied again (the same fixed bindings are
/// re-rendered); `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplierState {
    Constructed,
    Applied,
    Failed,
}

/// A unit of policy enforcement.
///
/// All storage reads happen when the applier is built; `apply` only performs
/// the side effects. A driver can hold a `Vec<Box<dyn Applier>>` and run
/// them uniformly.
pub trait Applier: Send {
    /// Applier display name (for logging and CLI output).
    fn name(&self) -> &str;

    /// Execute every prepared enforcement action, in order.
    fn apply(&mut self) -> Result<(), ApplierError>;
}
