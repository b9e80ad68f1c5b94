//! Math shorthand table extraction
//!
//! Reads the math shorthand grid of the symbols overview page. Every item
//! looks like
//!
//! ```html
//! <li id="symbol-arrow.r" data-math-shorthand="-&gt;"><button>...</button></li>
//! ```
//!
//! and becomes the table line `['arrow.r', '->'],`. Lines keep page order
//! and duplicates are passed through.

use std::fmt;
use std::io::Write;

use html_escape::decode_html_entities;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::grid::{grid_items, nth_symbol_grid};
use crate::data::constants::{ATTR_MATH_SHORTHAND, SHORTHAND_PAGE};
use crate::utils::attrs::{get_required_attr, symbol_id};
use crate::utils::error::ScrapeResult;

/// One math shorthand: a Typst identifier and the character sequence
/// Typst turns into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorthandEntry {
    pub id: String,
    pub shorthand: String,
}

impl ShorthandEntry {
    pub fn new(id: impl Into<String>, shorthand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shorthand: shorthand.into(),
        }
    }

    /// Build an entry from a grid item. Both `id` and
    /// `data-math-shorthand` are required.
    pub fn from_item(li: ElementRef<'_>) -> ScrapeResult<Self> {
        let id = symbol_id(li)?;
        // Decoded once by the tokenizer and once more here: `&amp;lt;` is `<`
        let raw = get_required_attr(li, ATTR_MATH_SHORTHAND)?;
        let shorthand = decode_html_entities(raw);
        Ok(Self::new(id, shorthand))
    }
}

impl fmt::Display for ShorthandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}', '{}'],", self.id, self.shorthand)
    }
}

/// Lazily extract entries from the math shorthand grid of a parsed page.
///
/// Fails up front if the page has fewer than two symbol grids; per-item
/// attribute errors surface as the iterator reaches the item.
pub fn shorthand_entries(
    doc: &Html,
) -> ScrapeResult<impl Iterator<Item = ScrapeResult<ShorthandEntry>> + '_> {
    let grid = nth_symbol_grid(doc, SHORTHAND_PAGE.grid_index)?;
    Ok(grid_items(grid).map(ShorthandEntry::from_item))
}

/// Extract every math shorthand of the page
pub fn extract_shorthands(html: &str) -> ScrapeResult<Vec<ShorthandEntry>> {
    let doc = Html::parse_document(html);
    let entries = shorthand_entries(&doc)?;
    entries.collect()
}

/// Write one table line per shorthand, as each item is read.
///
/// Returns the number of lines written. On a malformed item the lines
/// before it have already been written.
pub fn write_shorthands<W: Write>(html: &str, out: &mut W) -> ScrapeResult<usize> {
    let doc = Html::parse_document(html);
    let mut count = 0;
    for entry in shorthand_entries(&doc)? {
        writeln!(out, "{}", entry?)?;
        count += 1;
    }
    out.flush()?;
    debug!(count, "wrote shorthand table");
    Ok(count)
}
