// casemark/src/results.rs
//! Tallies describing what a redaction run touched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Counters and sets describing the outcome of one or more redaction runs.
///
/// Results from individual items are merged additively into batch results,
/// so merging is associative and order-independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionResults {
    /// Number of items that had at least one custom field written.
    pub updated_item_count: usize,
    /// Number of items whose content text was actually modified.
    pub content_text_updated_count: usize,
    /// Names of metadata properties whose values were modified on any item.
    pub updated_properties: BTreeSet<String>,
}

impl RedactionResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that an item had custom metadata written to it.
    pub fn tally_updated_item(&mut self) {
        self.updated_item_count += 1;
    }

    /// Records that an item's content text was modified.
    pub fn tally_content_text_updated(&mut self) {
        self.content_text_updated_count += 1;
    }

    /// Records that the named property was modified on some item.
    pub fn tally_updated_property(&mut self, property_name: &str) {
        self.updated_properties.insert(property_name.to_string());
    }

    /// Folds another result set into this one: counts add, property name
    /// sets union.
    pub fn merge(&mut self, other: &RedactionResults) {
        self.updated_item_count += other.updated_item_count;
        self.content_text_updated_count += other.content_text_updated_count;
        self.updated_properties
            .extend(other.updated_properties.iter().cloned());
    }
}

impl fmt::Display for RedactionResults {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Updated items: {}", self.updated_item_count)?;
        writeln!(
            f,
            "Content text updates: {}",
            self.content_text_updated_count
        )?;
        let properties: Vec<&str> = self
            .updated_properties
            .iter()
            .map(String::as_str)
            .collect();
        write!(f, "Updated properties: {}", properties.join("; "))
    }
}
