// mapping.rs — Static policy-path → template mapping records.
//
// Each applier embeds a `const` table of PolicyMapping rows. A row names
// the policy path to look up, the template it drives, the default template
// variables, and the one variable the stored setting overrides.
//
// Tables are never written to. `resolve()` copies the defaults into a new
// binding on every call, so no state leaks from one construction to the next.

use gpa_storage::{PolicyEntry, PolicyValue};
use gpa_template::TemplateBinding;

use crate::error::ApplierError;

/// One row of an applier's mapping table.
#[derive(Debug, Clone, Copy)]
pub struct PolicyMapping {
    /// Policy path looked up in storage.
    pub path: &'static str,
    /// Template rendered for this setting.
    pub template_id: &'static str,
    /// Variable replaced by the stored value when the setting exists.
    pub override_key: &'static str,
    /// Template variables used when nothing overrides them.
    pub defaults: &'static [(&'static str, PolicyValue)],
}

impl PolicyMapping {
    /// Build the binding for this row from an optional stored entry.
    ///
    /// The override key must be one of the declared defaults; otherwise the
    /// binding could reach a template without a value for it.
    pub fn resolve(&self, entry: Option<&PolicyEntry>) -> Result<TemplateBinding, ApplierError> {
        if !self.defaults.iter().any(|(name, _)| *name == self.override_key) {
            return Err(ApplierError::UnresolvedVariable {
                path: self.path.to_string(),
                key: self.override_key.to_string(),
            });
        }

        let mut binding = TemplateBinding::new(self.template_id);
        for (name, value) in self.defaults {
            binding.variables.insert((*name).to_string(), value.clone());
        }
        if let Some(entry) = entry {
            binding
                .variables
                .insert(self.override_key.to_string(), entry.data.clone());
        }
        Ok(binding)
    }
}
