// casemark/src/resolver.rs
//! Minimal named-placeholder template resolution.
//!
//! Replacement templates use `{placeholder}` syntax, e.g.
//! `"[REDACTED {entity_name}]"`. This is a thin wrapper over a template
//! engine configured for plain-text output, not a general templating
//! surface.

use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::errors::CasemarkError;

/// Holds named placeholder values and resolves templates against them.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderResolver {
    values: BTreeMap<String, String>,
}

impl PlaceholderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or replaces) the value substituted for `{key}`.
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Removes all placeholder values.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Resolves the given template against the current placeholder values.
    /// Parse and render failures surface as [`CasemarkError::Template`].
    pub fn resolve_template(&self, template: &str) -> Result<String> {
        let mut tt = TinyTemplate::new();
        // Plain text output; HTML escaping would mangle redaction text.
        tt.set_default_formatter(&format_unescaped);
        tt.add_template("template", template)
            .map_err(|e| CasemarkError::Template(e.to_string()))?;
        let context: Value = serde_json::to_value(&self.values)
            .map_err(|e| CasemarkError::Template(e.to_string()))?;
        let resolved = tt
            .render("template", &context)
            .map_err(|e| CasemarkError::Template(e.to_string()))?;
        Ok(resolved)
    }
}
