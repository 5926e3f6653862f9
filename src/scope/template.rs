// src/scope/template.rs

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};

use crate::config::model::TEMPLATE_DIRECTIVE;

/// Directive value used when a scope carries no `$template` directive.
pub const DEFAULT_TEMPLATE: &str = "#{{ }}";

/// The placeholder shape for one scope: `prefix` and `suffix` wrapped
/// around a variable name form the literal string searched for in file
/// contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePattern {
    prefix: String,
    suffix: String,
}

impl TemplatePattern {
    /// The literal placeholder for a variable name, e.g. `#{{host}}`.
    pub fn placeholder(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

/// Resolve the placeholder shape for a merged scope.
///
/// The `$template` directive value (or [`DEFAULT_TEMPLATE`] when absent)
/// must be a prefix and a suffix separated by exactly one space; any other
/// token count is an error. The error is scoped to the substitutions that
/// need the template; callers must not let it abort the rest of the file.
pub fn resolve_template(directives: &BTreeMap<String, String>) -> Result<TemplatePattern> {
    let value = directives
        .get(TEMPLATE_DIRECTIVE)
        .map(String::as_str)
        .unwrap_or(DEFAULT_TEMPLATE);

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [prefix, suffix] => Ok(TemplatePattern {
            prefix: (*prefix).to_string(),
            suffix: (*suffix).to_string(),
        }),
        _ => Err(anyhow!("malformed template format: {value:?}")),
    }
}
