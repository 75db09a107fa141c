//! # gpa-applier
//!
//! Policy appliers: each one turns stored Group Policy settings into
//! enforcement actions on the local system.
//!
//! Every applier follows the same two-phase pattern:
//!
//! 1. **Construction** reads every setting it cares about from a
//!    [`PolicyStorage`](gpa_storage::PolicyStorage), resolves one
//!    [`TemplateBinding`](gpa_template::TemplateBinding) per row of its
//!    mapping table, and prepares one enforcement action per binding.
//!    Nothing on the system changes yet.
//! 2. **[`Applier::apply`]** runs the prepared actions in table order and
//!    stops at the first failure.
//!
//! ## Key invariants
//!
//! - **One action per mapped path**: a missing setting selects the table
//!   defaults; it never skips the action.
//! - **Fresh defaults**: mapping tables are `const` and never mutated, so
//!   two appliers built from the same storage resolve identical bindings.
//! - **Fail fast**: storage faults abort construction, template faults abort
//!   `apply`, and a failed applier refuses to run again.

pub mod applier;
pub mod error;
pub mod mapped;
pub mod mapping;
pub mod polkit;

#[cfg(test)]
pub(crate) mod test_support;

pub use applier::{Applier, ApplierState};
pub use error::ApplierError;
pub use mapped::MappedApplier;
pub use mapping::PolicyMapping;
pub use polkit::{PolkitApplier, DENY_ALL, POLKIT_MAPPINGS};
