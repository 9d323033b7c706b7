// casemark/src/annotations.rs
//! Rectangular image annotation regions.
//!
//! An [`ImageAnnotationRegion`] carries a rectangle, the text found inside
//! it, and the 1-based page number it belongs to. Applying it adds a
//! redaction or highlight markup to that page of an item's rendered image.
//! Regions are typically deserialized from a layout produced by a separate
//! detection step, applied once, and discarded.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CasemarkError;
use crate::host::{HostItem, MarkupSet, PrintedPage};

/// A rectangular region on a specific rendered page of an item.
///
/// Geometry is expressed in the host's page coordinate space. `page_number`
/// is 1-based; page 1 maps to the first rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAnnotationRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// The text the region covers, carried along for reporting.
    pub text: String,
    pub page_number: u32,
}

impl Default for ImageAnnotationRegion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            text: String::new(),
            page_number: 0,
        }
    }
}

impl fmt::Display for ImageAnnotationRegion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "region [x={}, y={}, width={}, height={}, text={}, page_number={}]",
            self.x, self.y, self.width, self.height, self.text, self.page_number
        )
    }
}

impl ImageAnnotationRegion {
    /// Applies a redaction markup based on this region to the item's
    /// rendered page. Host errors propagate untouched; no retry.
    pub fn apply_redaction(&self, markup_set: &dyn MarkupSet, item: &dyn HostItem) -> Result<()> {
        info!("Applying redaction based on {}", self);
        let pages = item.printed_pages()?;
        let page = self.locate_page(&pages)?;
        page.create_redaction(markup_set, self.x, self.y, self.width, self.height)
    }

    /// Applies a highlight markup based on this region to the item's
    /// rendered page.
    pub fn apply_highlight(&self, markup_set: &dyn MarkupSet, item: &dyn HostItem) -> Result<()> {
        info!("Applying highlight based on {}", self);
        let pages = item.printed_pages()?;
        let page = self.locate_page(&pages)?;
        page.create_highlight(markup_set, self.x, self.y, self.width, self.height)
    }

    /// Resolves the 1-based page number against the rendered page list.
    /// Page 0 is rejected rather than silently annotating a wrong page.
    fn locate_page<'a>(
        &self,
        pages: &'a [Box<dyn PrintedPage + 'a>],
    ) -> Result<&'a dyn PrintedPage, CasemarkError> {
        let index = self
            .page_number
            .checked_sub(1)
            .ok_or(CasemarkError::InvalidPageNumber(self.page_number))? as usize;
        pages
            .get(index)
            .map(|page| page.as_ref())
            .ok_or(CasemarkError::PageOutOfRange {
                requested: self.page_number,
                available: pages.len(),
            })
    }
}
