// binding.rs — Template bindings and the enforcement action traits.

use std::collections::BTreeMap;

use gpa_storage::PolicyValue;
use serde::Serialize;

use crate::error::TemplateError;

/// A template id paired with the variables it is rendered with.
///
/// Variable names are unique; insertion order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateBinding {
    pub template_id: String,
    pub variables: BTreeMap<String, PolicyValue>,
}

impl TemplateBinding {
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Set (or replace) a variable, returning the binding for chaining.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<PolicyValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn variable(&self, name: &str) -> Option<&PolicyValue> {
        self.variables.get(name)
    }
}

/// A prepared "render template T with variables V and activate it" step.
///
/// Actions are immutable once built; `generate` may be called again to
/// re-render the same binding.
pub trait Enforcement: Send + Sync {
    /// Template this action renders.
    fn template_id(&self) -> &str;

    /// Render the template and activate the result.
    fn generate(&self) -> Result<(), TemplateError>;
}

/// Builds enforcement actions for a particular backend.
pub trait ActionFactory {
    fn create(&self, binding: TemplateBinding) -> Box<dyn Enforcement>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_variable_replaces_existing_value() {
        let binding = TemplateBinding::new("99-test")
            .with_variable("Deny_All", 0)
            .with_variable("Deny_All", 1);
        assert_eq!(binding.variables.len(), 1);
        assert_eq!(binding.variable("Deny_All"), Some(&PolicyValue::Int(1)));
        assert!(binding.variable("Other").is_none());
    }
}
