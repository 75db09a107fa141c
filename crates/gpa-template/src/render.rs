// render.rs — Placeholder substitution and built-in template sources.
//
// Templates are plain text with `{{ Name }}` placeholders. Each placeholder
// is replaced by the matching binding variable, formatted by the backend
// (the polkit backend emits JavaScript literals). There
// are no conditionals or loops; anything that needs logic is written in the
// target language of the generated file (JavaScript for polkit rules).

use std::collections::BTreeMap;

use gpa_storage::PolicyValue;
use regex::Regex;

use crate::error::TemplateError;

const PLACEHOLDER: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";

/// Render `source` by substituting every placeholder from `variables`.
///
/// `format` turns each value into the text written in place of its
/// placeholder. Fails with [`TemplateError::MissingVariable`] on the first
/// placeholder that has no matching variable.
pub fn render(
    template_id: &str,
    source: &str,
    variables: &BTreeMap<String, PolicyValue>,
    format: impl Fn(&PolicyValue) -> String,
) -> Result<String, TemplateError> {
    let re = Regex::new(PLACEHOLDER)?;
    let mut out = String::with_capacity(source.len());
    let mut last = 0;

    for caps in re.captures_iter(source) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = variables
            .get(name.as_str())
            .ok_or_else(|| TemplateError::MissingVariable {
                template_id: template_id.to_string(),
                name: name.as_str().to_string(),
            })?;
        out.push_str(&source[last..whole.start()]);
        out.push_str(&format(value));
        last = whole.end();
    }
    out.push_str(&source[last..]);

    Ok(out)
}

/// Template sources compiled into the binary, keyed by template id.
pub(crate) fn builtin(template_id: &str) -> Option<&'static str> {
    match template_id {
        "99-gpoa_disk_permissions" => Some(include_str!(
            "../templates/99-gpoa_disk_permissions.rules.tmpl"
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, PolicyValue)]) -> BTreeMap<String, PolicyValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn substitutes_placeholders_with_and_without_spaces() {
        let text = render(
            "t",
            "a={{ A }}; b={{B}}; a again={{A  }}",
            &vars(&[("A", PolicyValue::Int(1)), ("B", PolicyValue::str("x"))]),
            PolicyValue::to_string,
        )
        .unwrap();
        assert_eq!(text, "a=1; b=x; a again=1");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = render(
            "99-t",
            "{{ Missing }}",
            &BTreeMap::new(),
            PolicyValue::to_string,
        )
        .unwrap_err();
        match err {
            TemplateError::MissingVariable { template_id, name } => {
                assert_eq!(template_id, "99-t");
                assert_eq!(name, "Missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let src = "polkit.addRule(function () { return; });\n";
        let text = render("t", src, &BTreeMap::new(), PolicyValue::to_string).unwrap();
        assert_eq!(text, src);
    }

    #[test]
    fn formatter_controls_substituted_text() {
        let text = render(
            "t",
            "v={{ V }}",
            &vars(&[("V", PolicyValue::str("x"))]),
            |v| format!("<{}>", v),
        )
        .unwrap();
        assert_eq!(text, "v=<x>");
    }

    #[test]
    fn builtin_disk_permissions_renders_deny_all() {
        let src = builtin("99-gpoa_disk_permissions").unwrap();
        let text = render(
            "99-gpoa_disk_permissions",
            src,
            &vars(&[("Deny_All", PolicyValue::Int(1))]),
            PolicyValue::to_string,
        )
        .unwrap();
        assert!(text.contains("var denyAll = 1;"));
        assert!(!text.contains("{{"));
        assert!(builtin("unknown").is_none());
    }
}
