// casemark/src/settings.rs
//! Configuration for named-entity redaction runs.
//!
//! Settings can be built programmatically or loaded from a YAML file, in
//! which case unspecified fields fall back to their defaults and the loaded
//! settings are validated before use.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::resolver::PlaceholderResolver;

/// Entity types the host platform detects out of the box.
pub const BUILT_IN_ENTITY_NAMES: [&str; 10] = [
    "company",
    "country",
    "credit-card-num",
    "email",
    "ip-address",
    "money",
    "person",
    "personal-id-num",
    "phone-number",
    "url",
];

/// Settings controlling how redacted copies are produced and recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionSettings {
    /// Named entity types whose matches will be redacted.
    pub entity_names: BTreeSet<String>,
    /// Whether metadata property values are processed.
    pub redact_properties: bool,
    /// Whether the item's content text is processed.
    pub redact_content_text: bool,
    /// When present and non-empty, only properties named here are processed.
    pub specific_properties: Option<BTreeSet<String>>,
    /// Replacement written over each match. The `{entity_name}` placeholder
    /// receives the uppercased entity name.
    pub redaction_replacement_template: String,
    /// Prefix for the custom metadata fields holding redacted copies.
    pub custom_metadata_field_prefix: String,
    /// When true, a redacted copy is only recorded if it differs from the
    /// original value. When false, a copy is recorded for every processed
    /// field.
    pub only_record_changes: bool,
    /// Whether updated items get a field recording when the run happened.
    pub record_time_of_redaction: bool,
    /// Name of the timestamp field written when `record_time_of_redaction`
    /// is set.
    pub time_of_redaction_field_name: String,
}

impl Default for RedactionSettings {
    fn default() -> Self {
        Self {
            entity_names: BTreeSet::new(),
            redact_properties: true,
            redact_content_text: true,
            specific_properties: None,
            redaction_replacement_template: "[REDACTED {entity_name}]".to_string(),
            custom_metadata_field_prefix: "R_".to_string(),
            only_record_changes: true,
            record_time_of_redaction: true,
            time_of_redaction_field_name: "TextualRedactionTime".to_string(),
        }
    }
}

impl RedactionSettings {
    /// Loads settings from a YAML file, applying defaults for omitted
    /// fields and validating the result.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading redaction settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: RedactionSettings = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Adds the given entity names to the set to search for.
    pub fn add_entity_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_names.extend(names.into_iter().map(Into::into));
    }

    /// Adds every entity type the host platform ships with.
    pub fn add_all_built_in_entities(&mut self) {
        self.add_entity_names(BUILT_IN_ENTITY_NAMES);
    }

    /// True when a non-empty property allow-list is configured.
    pub fn has_specific_properties(&self) -> bool {
        self.specific_properties
            .as_ref()
            .map_or(false, |properties| !properties.is_empty())
    }

    /// Whether the named property should be processed under the current
    /// allow-list.
    pub fn should_process_property(&self, property_name: &str) -> bool {
        match &self.specific_properties {
            Some(properties) if !properties.is_empty() => properties.contains(property_name),
            _ => true,
        }
    }

    /// Checks the settings are usable: the replacement template must
    /// resolve. An empty entity name set is allowed but pointless, so it
    /// only warns.
    pub fn validate(&self) -> Result<()> {
        let mut resolver = PlaceholderResolver::new();
        resolver.set("entity_name", "PROBE");
        resolver
            .resolve_template(&self.redaction_replacement_template)
            .context("Replacement template failed to resolve")?;

        if self.entity_names.is_empty() {
            warn!("No entity names configured; redaction passes will match nothing.");
        }
        Ok(())
    }
}
