// casemark/src/redactor.rs
//! Named-entity textual redaction.
//!
//! [`NamedEntityRedactor`] creates redacted copies of metadata property
//! values and item content text by finding the named-entity matches the
//! host has already detected on an item and replacing them with a
//! template-resolved redaction string. Match strings are escaped into
//! regex literals before compilation, so a match containing metacharacters
//! is replaced verbatim and never interpreted as a pattern. Redacted
//! copies are recorded back onto the item as custom metadata fields named
//! `<prefix><PropertyName>` (or `<prefix>ContentText`).
//!
//! Single items are processed by [`NamedEntityRedactor::redact_item`],
//! which propagates any host error. The batch and case-scoped forms catch
//! per-item failures, report them, skip the item, and continue.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use chrono::Utc;
use log::{error, info};
use regex::{NoExpand, Regex};
use std::collections::{BTreeMap, BTreeSet};

use crate::host::{HostCase, HostItem};
use crate::query;
use crate::resolver::PlaceholderResolver;
use crate::results::RedactionResults;
use crate::settings::RedactionSettings;

/// Invoked after each item in a batch with the current index (1-based),
/// the total item count, and the running merged results.
pub type ProgressCallback = Box<dyn FnMut(usize, usize, &RedactionResults)>;

/// Invoked with free-text log lines generated during processing.
pub type MessageCallback = Box<dyn FnMut(&str)>;

/// Applies named-entity redaction to items, batches of items, or whole
/// cases, with optional progress and message callbacks.
#[derive(Default)]
pub struct NamedEntityRedactor {
    progress_callback: Option<ProgressCallback>,
    message_callback: Option<MessageCallback>,
}

impl NamedEntityRedactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the callback invoked when batch processing makes progress.
    pub fn when_progress_updated<F>(&mut self, callback: F)
    where
        F: FnMut(usize, usize, &RedactionResults) + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
    }

    /// Registers the callback invoked when a log line is generated. When no
    /// callback is registered, lines go to the `log` facade instead.
    pub fn when_message_generated<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.message_callback = Some(Box::new(callback));
    }

    fn fire_progress(&mut self, current: usize, total: usize, results: &RedactionResults) {
        if let Some(callback) = self.progress_callback.as_mut() {
            callback(current, total, results);
        }
    }

    fn fire_message(&mut self, message: &str) {
        match self.message_callback.as_mut() {
            Some(callback) => callback(message),
            None => info!("{}", message),
        }
    }

    /// Creates redacted copies for a single item and records them as custom
    /// metadata fields. Returns the tallies for this item alone. Any host
    /// or template error propagates to the caller.
    pub fn redact_item(
        &self,
        item: &dyn HostItem,
        settings: &RedactionSettings,
    ) -> Result<RedactionResults> {
        let mut item_results = RedactionResults::new();

        let entity_patterns = compile_entity_patterns(item, settings)?;
        let entity_replacements = resolve_entity_replacements(&entity_patterns, settings)?;

        let mut item_was_updated = false;

        if settings.redact_properties {
            for (property_name, original_value) in item.properties()? {
                if !settings.should_process_property(&property_name) {
                    continue;
                }

                let redacted_value =
                    apply_entity_patterns(&original_value, &entity_patterns, &entity_replacements);
                let custom_field = format!(
                    "{}{}",
                    settings.custom_metadata_field_prefix, property_name
                );

                let property_was_modified = original_value != redacted_value;
                if !settings.only_record_changes || property_was_modified {
                    item.set_custom_metadata(&custom_field, &redacted_value)?;
                    item_was_updated = true;
                }
                if property_was_modified {
                    item_results.tally_updated_property(&property_name);
                }
            }
        }

        if settings.redact_content_text {
            let original_text = item.content_text()?;
            let redacted_text =
                apply_entity_patterns(&original_text, &entity_patterns, &entity_replacements);
            let custom_field = format!("{}ContentText", settings.custom_metadata_field_prefix);

            let content_text_was_modified = original_text != redacted_text;
            if !settings.only_record_changes || content_text_was_modified {
                item.set_custom_metadata(&custom_field, &redacted_text)?;
                item_was_updated = true;
            }
            if content_text_was_modified {
                item_results.tally_content_text_updated();
            }
        }

        if settings.record_time_of_redaction && item_was_updated {
            item.set_custom_metadata(
                &settings.time_of_redaction_field_name,
                &Utc::now().to_rfc3339(),
            )?;
        }

        if item_was_updated {
            item_results.tally_updated_item();
        }

        Ok(item_results)
    }

    /// Processes a batch of items by repeated calls to
    /// [`NamedEntityRedactor::redact_item`], merging the per-item tallies.
    ///
    /// A failing item is logged, reported through the message callback, and
    /// skipped without being counted; it never aborts the batch. The
    /// progress callback fires after every item, including skipped ones.
    pub fn redact_items(
        &mut self,
        items: &[&dyn HostItem],
        settings: &RedactionSettings,
    ) -> RedactionResults {
        let mut overall_results = RedactionResults::new();
        let total = items.len();

        self.fire_message(&format!("Items provided: {}", total));
        let entity_list: Vec<&str> = settings.entity_names.iter().map(String::as_str).collect();
        self.fire_message(&format!("Using named entities: {}", entity_list.join("; ")));

        if settings.has_specific_properties() {
            info!("Specific properties to be processed:");
            for property_name in settings.specific_properties.iter().flatten() {
                info!("{}", property_name);
            }
        }

        self.fire_message("Beginning textual redaction...");
        for (index, item) in items.iter().enumerate() {
            match self.redact_item(*item, settings) {
                Ok(item_results) => overall_results.merge(&item_results),
                Err(e) => {
                    let message = format!(
                        "Error while generating redacted copies for item {} - '{}'",
                        item.guid(),
                        item.localised_name()
                    );
                    error!("{}: {:#}", message, e);
                    self.fire_message(&message);
                }
            }
            self.fire_progress(index + 1, total, &overall_results);
        }
        self.fire_message("Completed textual redaction");

        overall_results
    }

    /// Locates every item in the case carrying the configured named
    /// entities and processes them as a batch. Search failures propagate.
    pub fn redact_case(
        &mut self,
        case: &dyn HostCase,
        settings: &RedactionSettings,
    ) -> Result<RedactionResults> {
        let query = query::named_entity_query(&settings.entity_names);
        self.fire_message(&format!("Locating items with named entities using: {}", query));
        let items = case
            .search_unsorted(&query)
            .context("Named entity search failed")?;
        let item_refs: Vec<&dyn HostItem> = items.iter().map(|item| item.as_ref()).collect();
        Ok(self.redact_items(&item_refs, settings))
    }

    /// Like [`NamedEntityRedactor::redact_case`], but restricted to the
    /// caller-supplied selection: the named-entity search hits are
    /// intersected with the selection by GUID before batch processing.
    pub fn redact_case_items(
        &mut self,
        case: &dyn HostCase,
        selection: &[&dyn HostItem],
        settings: &RedactionSettings,
    ) -> Result<RedactionResults> {
        let query = query::named_entity_query(&settings.entity_names);
        self.fire_message(&format!("Locating items with named entities using: {}", query));
        let items = case
            .search_unsorted(&query)
            .context("Named entity search failed")?;

        let selected_guids: BTreeSet<String> =
            selection.iter().map(|item| item.guid()).collect();
        let item_refs: Vec<&dyn HostItem> = items
            .iter()
            .map(|item| item.as_ref())
            .filter(|item| selected_guids.contains(&item.guid()))
            .collect();
        Ok(self.redact_items(&item_refs, settings))
    }
}

/// Fetches the match strings detected on the item for each configured
/// entity name and compiles every one into an escaped, literal-only regex,
/// grouped by entity name.
fn compile_entity_patterns(
    item: &dyn HostItem,
    settings: &RedactionSettings,
) -> Result<BTreeMap<String, Vec<Regex>>> {
    let mut entity_patterns = BTreeMap::new();
    for entity_name in &settings.entity_names {
        let entity_matches = item
            .entity_matches(entity_name)
            .with_context(|| format!("Failed to fetch '{}' entity matches", entity_name))?;
        let mut patterns = Vec::with_capacity(entity_matches.len());
        for entity_match in &entity_matches {
            let pattern = Regex::new(&regex::escape(entity_match)).with_context(|| {
                format!("Failed to compile literal pattern for a '{}' match", entity_name)
            })?;
            patterns.push(pattern);
        }
        entity_patterns.insert(entity_name.clone(), patterns);
    }
    Ok(entity_patterns)
}

/// Resolves the replacement template once per entity name, substituting the
/// uppercased entity name for the `{entity_name}` placeholder.
fn resolve_entity_replacements(
    entity_patterns: &BTreeMap<String, Vec<Regex>>,
    settings: &RedactionSettings,
) -> Result<BTreeMap<String, String>> {
    let mut resolver = PlaceholderResolver::new();
    let mut replacements = BTreeMap::new();
    for entity_name in entity_patterns.keys() {
        resolver.set("entity_name", &entity_name.to_uppercase());
        let redaction_text = resolver
            .resolve_template(&settings.redaction_replacement_template)
            .with_context(|| {
                format!("Failed to resolve replacement for entity '{}'", entity_name)
            })?;
        replacements.insert(entity_name.clone(), redaction_text);
    }
    Ok(replacements)
}

/// Runs every compiled pattern over the value, replacing all occurrences
/// with the entity's redaction text. Replacement is literal on both sides.
fn apply_entity_patterns(
    original: &str,
    entity_patterns: &BTreeMap<String, Vec<Regex>>,
    entity_replacements: &BTreeMap<String, String>,
) -> String {
    let mut redacted = original.to_string();
    for (entity_name, patterns) in entity_patterns {
        let replacement = entity_replacements[entity_name].as_str();
        for pattern in patterns {
            redacted = pattern
                .replace_all(&redacted, NoExpand(replacement))
                .into_owned();
        }
    }
    redacted
}
