// show.rs — Print resolved bindings without generating anything.

use anyhow::Context;
use gpa_applier::PolkitApplier;
use gpa_storage::SnapshotStorage;
use gpa_template::TemplateBinding;

use crate::config::GpaConfig;

pub fn execute(config: &GpaConfig, json: bool) -> anyhow::Result<()> {
    let storage = SnapshotStorage::open(&config.storage.snapshot)
        .with_context(|| format!("failed to open {}", config.storage.snapshot.display()))?;
    let applier = PolkitApplier::new(&storage, &config.polkit).context("polkit applier")?;
    print!("{}", format_bindings(applier.bindings(), json)?);
    Ok(())
}

fn format_bindings(bindings: &[TemplateBinding], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(bindings)?));
    }

    let mut out = format!("{:<32} VARIABLES\n{}\n", "TEMPLATE", "-".repeat(60));
    for binding in bindings {
        let vars = binding
            .variables
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("{:<32} {}\n", binding.template_id, vars));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use gpa_template::PolkitConfig;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn config_in(root: &Path) -> GpaConfig {
        GpaConfig {
            storage: StorageConfig {
                snapshot: root.join("policy.jsonl"),
            },
            polkit: PolkitConfig {
                templates_dir: root.join("templates"),
                rules_dir: root.join("rules.d"),
            },
        }
    }

    fn bindings_for(snapshot: &str) -> Vec<TemplateBinding> {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.storage.snapshot, snapshot).unwrap();
        let storage = SnapshotStorage::open(&config.storage.snapshot).unwrap();
        PolkitApplier::new(&storage, &config.polkit)
            .unwrap()
            .bindings()
            .to_vec()
    }

    #[test]
    fn show_writes_no_rules() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(
            &config.storage.snapshot,
            r#"{"path":"Software\\Policies\\Microsoft\\Windows\\RemovableStorageDevices\\Deny_All","data":1}"#,
        )
        .unwrap();

        execute(&config, false).unwrap();
        execute(&config, true).unwrap();
        assert!(!config.polkit.rules_dir.exists());
    }

    #[test]
    fn json_lists_template_and_variables() {
        let bindings = bindings_for(
            r#"{"path":"Software\\Policies\\Microsoft\\Windows\\RemovableStorageDevices\\Deny_All","data":1}"#,
        );
        let text = format_bindings(&bindings, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["template_id"], "99-gpoa_disk_permissions");
        assert_eq!(value[0]["variables"]["Deny_All"], 1);
    }

    #[test]
    fn table_shows_defaults_for_empty_snapshot() {
        let text = format_bindings(&bindings_for(""), false).unwrap();
        assert!(text.starts_with("TEMPLATE"));
        assert!(text.contains("99-gpoa_disk_permissions"));
        assert!(text.contains("Deny_All=0"));
    }

    #[test]
    fn missing_snapshot_names_the_file() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let err = execute(&config, false).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to open"), "{message}");
        assert!(message.contains("policy.jsonl"), "{message}");
    }
}
