// casemark/src/host.rs
//! Trait seams over the host platform's case, item, and markup APIs.
//!
//! The host platform owns item storage, named-entity detection, rendered
//! page images, and search. This library only orchestrates calls against
//! those facilities, so each one is expressed here as a trait the embedding
//! application implements over its platform bindings. Host failures are
//! opaque to us and are surfaced as `anyhow::Error`.
//!
//! All operations are synchronous and single-threaded; implementations are
//! expected to manage any interior state themselves, which is why every
//! method takes `&self`.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};

/// A named collection of visual markups (redactions, highlights) applied to
/// rendered item pages. Opaque handle owned by the host.
pub trait MarkupSet {
    /// The markup set's display name.
    fn name(&self) -> &str;
}

/// A single rendered page of an item's printed image.
pub trait PrintedPage {
    /// Adds a redaction box covering the given rectangle to the page.
    fn create_redaction(
        &self,
        markup_set: &dyn MarkupSet,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()>;

    /// Adds a highlight box covering the given rectangle to the page.
    fn create_highlight(
        &self,
        markup_set: &dyn MarkupSet,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()>;
}

/// A single evidence item managed by the host case.
pub trait HostItem {
    /// Stable unique identifier of the item.
    fn guid(&self) -> String;

    /// Human-readable item name, used in log and error messages.
    fn localised_name(&self) -> String;

    /// The item's metadata properties, with values already converted to
    /// their string form by the host.
    fn properties(&self) -> Result<BTreeMap<String, String>>;

    /// The literal match strings the host has previously detected on this
    /// item for the given entity name (e.g. every email address found).
    /// Unknown entity names yield an empty set.
    fn entity_matches(&self, entity_name: &str) -> Result<BTreeSet<String>>;

    /// The item's full extracted document text.
    fn content_text(&self) -> Result<String>;

    /// Writes a custom metadata field back onto the item.
    fn set_custom_metadata(&self, field_name: &str, value: &str) -> Result<()>;

    /// The ordered rendered pages of the item's printed image.
    fn printed_pages(&self) -> Result<Vec<Box<dyn PrintedPage + '_>>>;
}

/// A host case against which item searches can be run.
pub trait HostCase {
    /// Runs a query and returns the matching items in no particular order.
    fn search_unsorted(&self, query: &str) -> Result<Vec<Box<dyn HostItem>>>;
}
