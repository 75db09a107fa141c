// polkit.rs — Removable storage restrictions via polkit.
//
// Reads the RemovableStorageDevices\Deny_All machine policy and renders the
// `99-gpoa_disk_permissions` polkit rule. When the setting is absent the
// rule is still generated with `Deny_All = 0`, which leaves udisks2 actions
// to the system defaults.

use gpa_storage::{PolicyStorage, PolicyValue};
use gpa_template::{ActionFactory, PolkitConfig, PolkitRuleFactory, TemplateBinding};

use crate::applier::{Applier, ApplierState};
use crate::error::ApplierError;
use crate::mapped::MappedApplier;
use crate::mapping::PolicyMapping;

/// "All Removable Storage classes: Deny all access".
pub const DENY_ALL: &str = r"Software\Policies\Microsoft\Windows\RemovableStorageDevices\Deny_All";

/// Policy paths handled by [`PolkitApplier`] and the rules they drive.
pub const POLKIT_MAPPINGS: &[PolicyMapping] = &[PolicyMapping {
    path: DENY_ALL,
    template_id: "99-gpoa_disk_permissions",
    override_key: "Deny_All",
    defaults: &[("Deny_All", PolicyValue::Int(0))],
}];

/// Applier that generates polkit rules from machine policy.
pub struct PolkitApplier {
    inner: MappedApplier,
}

impl PolkitApplier {
    pub const NAME: &'static str = "polkit";

    /// Resolve polkit settings from `storage`, writing rules per `config`.
    pub fn new(storage: &dyn PolicyStorage, config: &PolkitConfig) -> Result<Self, ApplierError> {
        Self::with_factory(storage, &PolkitRuleFactory::new(config.clone()))
    }

    /// Like [`PolkitApplier::new`], with a caller-supplied action backend.
    pub fn with_factory(
        storage: &dyn PolicyStorage,
        factory: &dyn ActionFactory,
    ) -> Result<Self, ApplierError> {
        let inner = MappedApplier::new(Self::NAME, POLKIT_MAPPINGS, storage, factory)?;
        Ok(Self { inner })
    }

    pub fn bindings(&self) -> &[TemplateBinding] {
        self.inner.bindings()
    }

    pub fn state(&self) -> ApplierState {
        self.inner.state()
    }
}

impl Applier for PolkitApplier {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn apply(&mut self) -> Result<(), ApplierError> {
        tracing::debug!("PolkitApplier: applying {} rule(s)", self.inner.action_count());
        self.inner.apply()
    }
}
