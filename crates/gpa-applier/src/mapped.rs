// mapped.rs — Generic table-driven applier.
//
// MappedApplier implements the lookup → binding → action pattern shared by
// every template-backed applier:
//
//   for each row in the mapping table:
//     1. look the row's policy path up in storage (exactly once)
//     2. log whether the setting was found, and its raw value if so
//     3. resolve a binding: fresh defaults, override key replaced if found
//     4. ask the factory for one enforcement action
//
// Concrete appliers only supply a name, a table and a factory.

use gpa_storage::{PolicyPath, PolicyStorage};
use gpa_template::{ActionFactory, Enforcement, TemplateBinding};

use crate::applier::{Applier, ApplierState};
use crate::error::ApplierError;
use crate::mapping::PolicyMapping;

/// An applier whose actions are derived from a static mapping table.
pub struct MappedApplier {
    name: String,
    bindings: Vec<TemplateBinding>,
    actions: Vec<Box<dyn Enforcement>>,
    state: ApplierState,
}

impl MappedApplier {
    /// Resolve every row of `table` against `storage` and prepare its action.
    ///
    /// Storage is only borrowed for the duration of this call. A storage
    /// fault aborts construction and is returned as-is; no actions survive.
    pub fn new(
        name: impl Into<String>,
        table: &[PolicyMapping],
        storage: &dyn PolicyStorage,
        factory: &dyn ActionFactory,
    ) -> Result<Self, ApplierError> {
        let name = name.into();
        let mut bindings = Vec::with_capacity(table.len());
        let mut actions = Vec::with_capacity(table.len());

        for mapping in table {
            let entry = storage.lookup(&PolicyPath::new(mapping.path))?;
            match &entry {
                Some(found) => {
                    tracing::debug!("{} setting found: {}", mapping.override_key, found.data)
                }
                None => tracing::debug!("{} setting not found", mapping.override_key),
            }

            let binding = mapping.resolve(entry.as_ref())?;
            actions.push(factory.create(binding.clone()));
            bindings.push(binding);
        }

        Ok(Self {
            name,
            bindings,
            actions,
            state: ApplierState::Constructed,
        })
    }

    /// Resolved bindings, one per table row, in table order.
    pub fn bindings(&self) -> &[TemplateBinding] {
        &self.bindings
    }

    /// Number of prepared enforcement actions.
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn state(&self) -> ApplierState {
        self.state
    }
}

impl Applier for MappedApplier {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&mut self) -> Result<(), ApplierError> {
        if self.state == ApplierState::Failed {
            return Err(ApplierError::Failed {
                name: self.name.clone(),
            });
        }

        for action in &self.actions {
            if let Err(e) = action.generate() {
                self.state = ApplierState::Failed;
                return Err(e.into());
            }
        }

        self.state = ApplierState::Applied;
        Ok(())
    }
}
