// apply.rs — Resolve policy and activate the generated system policy files.

use anyhow::Context;
use gpa_applier::{Applier, PolkitApplier};
use gpa_storage::SnapshotStorage;

use crate::config::GpaConfig;

pub fn execute(config: &GpaConfig) -> anyhow::Result<()> {
    let storage = SnapshotStorage::open(&config.storage.snapshot)
        .with_context(|| format!("failed to open {}", config.storage.snapshot.display()))?;
    if storage.is_empty() {
        tracing::warn!(
            "{} holds no policy entries; applying defaults",
            config.storage.snapshot.display()
        );
    } else {
        tracing::info!(
            "Loaded {} policy entries from {}",
            storage.len(),
            config.storage.snapshot.display()
        );
    }

    let mut appliers: Vec<Box<dyn Applier>> =
        vec![Box::new(PolkitApplier::new(&storage, &config.polkit).context("polkit applier")?)];

    for applier in appliers.iter_mut() {
        let name = applier.name().to_string();
        applier
            .apply()
            .with_context(|| format!("applier '{}' failed", name))?;
        tracing::info!("Applier '{}' done", name);
    }

    println!(
        "Applied {} applier(s); rules in {}",
        appliers.len(),
        config.polkit.rules_dir.display()
    );
    Ok(())
}
