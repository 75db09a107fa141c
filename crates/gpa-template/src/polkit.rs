// polkit.rs — polkit rules backend.
//
// A PolkitRule renders `<templates_dir>/<id>.rules.tmpl` (or the built-in
// template with the same id) and writes `<rules_dir>/<id>.rules`. polkitd
// watches its rules directory, so writing the file is what activates it.
//
// The output file is replaced atomically: rendered text goes to a temp file
// in the rules directory, which is then renamed over the target. polkitd
// never observes a half-written rule.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::binding::{ActionFactory, Enforcement, TemplateBinding};
use crate::error::TemplateError;
use crate::render::{builtin, render};
use gpa_storage::PolicyValue;

/// Where polkit templates are read from and rules are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolkitConfig {
    /// Directory holding `*.rules.tmpl` templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// polkit rules directory receiving generated `*.rules` files.
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,
}

impl Default for PolkitConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            rules_dir: default_rules_dir(),
        }
    }
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("/usr/share/gpa/templates")
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from("/etc/polkit-1/rules.d")
}

/// Format a value as a JavaScript literal for a polkit rule.
///
/// Strings are emitted as quoted, escaped JSON strings so stored policy data
/// can never become rule code. Numbers and booleans stay bare.
pub fn js_literal(value: &PolicyValue) -> String {
    match value {
        PolicyValue::Bool(v) => v.to_string(),
        PolicyValue::Int(v) => v.to_string(),
        PolicyValue::Str(v) => serde_json::Value::String(v.to_string()).to_string(),
    }
}

/// One polkit rule file generated from a template binding.
#[derive(Debug, Clone)]
pub struct PolkitRule {
    binding: TemplateBinding,
    template_path: PathBuf,
    output_path: PathBuf,
}

impl PolkitRule {
    pub fn new(binding: TemplateBinding, config: &PolkitConfig) -> Self {
        let template_path = config
            .templates_dir
            .join(format!("{}.rules.tmpl", binding.template_id));
        let output_path = config
            .rules_dir
            .join(format!("{}.rules", binding.template_id));
        Self {
            binding,
            template_path,
            output_path,
        }
    }

    /// Rules file this action writes.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn load_source(&self) -> Result<String, TemplateError> {
        if self.template_path.exists() {
            return fs::read_to_string(&self.template_path).map_err(|source| TemplateError::Io {
                path: self.template_path.clone(),
                source,
            });
        }
        builtin(&self.binding.template_id)
            .map(str::to_string)
            .ok_or_else(|| TemplateError::NotFound {
                template_id: self.binding.template_id.clone(),
                searched: self.template_path.clone(),
            })
    }

    fn write_output(&self, text: &str) -> Result<(), TemplateError> {
        let io_err = |source: std::io::Error| TemplateError::Io {
            path: self.output_path.clone(),
            source,
        };

        let dir = self
            .output_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir).map_err(|source| TemplateError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(text.as_bytes()).map_err(io_err)?;

        // polkitd reads rules as its own user; temp files start out 0600.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(io_err)?;
        }

        tmp.persist(&self.output_path)
            .map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl Enforcement for PolkitRule {
    fn template_id(&self) -> &str {
        &self.binding.template_id
    }

    fn generate(&self) -> Result<(), TemplateError> {
        let source = self.load_source()?;
        let text = render(
            &self.binding.template_id,
            &source,
            &self.binding.variables,
            js_literal,
        )?;
        self.write_output(&text)?;
        tracing::debug!(
            "Generated file {} with arguments {:?}",
            self.output_path.display(),
            self.binding.variables
        );
        Ok(())
    }
}

/// [`ActionFactory`] producing [`PolkitRule`]s for one configuration.
#[derive(Debug, Clone, Default)]
pub struct PolkitRuleFactory {
    config: PolkitConfig,
}

impl PolkitRuleFactory {
    pub fn new(config: PolkitConfig) -> Self {
        Self { config }
    }
}

impl ActionFactory for PolkitRuleFactory {
    fn create(&self, binding: TemplateBinding) -> Box<dyn Enforcement> {
        Box::new(PolkitRule::new(binding, &self.config))
    }
}
