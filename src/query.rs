// casemark/src/query.rs
//! Query string helpers for the host's search syntax.

use std::collections::BTreeSet;

/// Builds a query matching every item carrying at least one detected match
/// for any of the given entity names.
///
/// Names are double-quoted and OR-joined in lexicographic order, e.g.
/// `named-entities:("email" OR "phone-number")`.
pub fn named_entity_query(entity_names: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = entity_names
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect();
    format!("named-entities:({})", quoted.join(" OR "))
}
