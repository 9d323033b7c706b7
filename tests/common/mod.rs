// tests/common/mod.rs
//! Mock host platform used by the integration tests.

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use casemark::host::{HostCase, HostItem, MarkupSet, PrintedPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupKind {
    Redaction,
    Highlight,
}

/// One markup creation call recorded by a mock page.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupCall {
    pub kind: MarkupKind,
    pub markup_set: String,
    pub page_index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub struct MockMarkupSet {
    name: String,
}

impl MockMarkupSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl MarkupSet for MockMarkupSet {
    fn name(&self) -> &str {
        &self.name
    }
}

struct MockPage {
    index: usize,
    calls: Rc<RefCell<Vec<MarkupCall>>>,
}

impl MockPage {
    fn record(
        &self,
        kind: MarkupKind,
        markup_set: &dyn MarkupSet,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        self.calls.borrow_mut().push(MarkupCall {
            kind,
            markup_set: markup_set.name().to_string(),
            page_index: self.index,
            x,
            y,
            width,
            height,
        });
    }
}

impl PrintedPage for MockPage {
    fn create_redaction(
        &self,
        markup_set: &dyn MarkupSet,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.record(MarkupKind::Redaction, markup_set, x, y, width, height);
        Ok(())
    }

    fn create_highlight(
        &self,
        markup_set: &dyn MarkupSet,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.record(MarkupKind::Highlight, markup_set, x, y, width, height);
        Ok(())
    }
}

/// In-memory item with shared interior state so tests can observe custom
/// metadata writes and markup calls after processing.
#[derive(Clone)]
pub struct MockItem {
    pub guid: String,
    pub name: String,
    pub properties: BTreeMap<String, String>,
    pub entities: BTreeMap<String, BTreeSet<String>>,
    pub text: String,
    pub page_count: usize,
    pub fail_content_text: bool,
    pub custom_metadata: Rc<RefCell<BTreeMap<String, String>>>,
    pub markup_calls: Rc<RefCell<Vec<MarkupCall>>>,
}

impl MockItem {
    pub fn new(guid: &str) -> Self {
        Self {
            guid: guid.to_string(),
            name: format!("item {}", guid),
            properties: BTreeMap::new(),
            entities: BTreeMap::new(),
            text: String::new(),
            page_count: 0,
            fail_content_text: false,
            custom_metadata: Rc::new(RefCell::new(BTreeMap::new())),
            markup_calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_entity_match(mut self, entity_name: &str, matched: &str) -> Self {
        self.entities
            .entry(entity_name.to_string())
            .or_default()
            .insert(matched.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_page_count(mut self, page_count: usize) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn failing_content_text(mut self) -> Self {
        self.fail_content_text = true;
        self
    }

    pub fn custom_field(&self, field_name: &str) -> Option<String> {
        self.custom_metadata.borrow().get(field_name).cloned()
    }

    pub fn custom_field_count(&self) -> usize {
        self.custom_metadata.borrow().len()
    }

    pub fn recorded_markups(&self) -> Vec<MarkupCall> {
        self.markup_calls.borrow().clone()
    }
}

impl HostItem for MockItem {
    fn guid(&self) -> String {
        self.guid.clone()
    }

    fn localised_name(&self) -> String {
        self.name.clone()
    }

    fn properties(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.properties.clone())
    }

    fn entity_matches(&self, entity_name: &str) -> Result<BTreeSet<String>> {
        Ok(self.entities.get(entity_name).cloned().unwrap_or_default())
    }

    fn content_text(&self) -> Result<String> {
        if self.fail_content_text {
            return Err(anyhow!("text store offline for item {}", self.guid));
        }
        Ok(self.text.clone())
    }

    fn set_custom_metadata(&self, field_name: &str, value: &str) -> Result<()> {
        self.custom_metadata
            .borrow_mut()
            .insert(field_name.to_string(), value.to_string());
        Ok(())
    }

    fn printed_pages(&self) -> Result<Vec<Box<dyn PrintedPage + '_>>> {
        Ok((0..self.page_count)
            .map(|index| {
                Box::new(MockPage {
                    index,
                    calls: Rc::clone(&self.markup_calls),
                }) as Box<dyn PrintedPage>
            })
            .collect())
    }
}

/// Mock case that records the queries it receives and returns clones of
/// its items (interior state stays shared with the originals).
pub struct MockCase {
    pub items: Vec<MockItem>,
    pub queries: Rc<RefCell<Vec<String>>>,
    pub fail_search: bool,
}

impl MockCase {
    pub fn new(items: Vec<MockItem>) -> Self {
        Self {
            items,
            queries: Rc::new(RefCell::new(Vec::new())),
            fail_search: false,
        }
    }

    pub fn recorded_queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl HostCase for MockCase {
    fn search_unsorted(&self, query: &str) -> Result<Vec<Box<dyn HostItem>>> {
        if self.fail_search {
            return Err(anyhow!("search backend unavailable"));
        }
        self.queries.borrow_mut().push(query.to_string());
        Ok(self
            .items
            .iter()
            .cloned()
            .map(|item| Box::new(item) as Box<dyn HostItem>)
            .collect())
    }
}
