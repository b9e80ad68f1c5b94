//! LaTeX macro to Typst symbol table extraction
//!
//! Reads the single grid of the `sym` module page. Items look like
//!
//! ```html
//! <li id="symbol-brace.r.double" data-latex-name="\rBrace" data-codepoint="10628">...</li>
//! ```
//!
//! Items without `data-latex-name` are skipped. Some macros are attached to
//! several symbols (`\equiv` to both `equal` and `equiv.triple`); only the
//! first one in page order is kept. The table is printed sorted by macro
//! name, ignoring case.

use std::fmt;
use std::io::Write;

use indexmap::map::Entry;
use indexmap::IndexMap;
use scraper::{ElementRef, Html};
use tracing::debug;

use super::grid::{grid_items, nth_symbol_grid};
use crate::data::constants::{ATTR_CODEPOINT, ATTR_LATEX_NAME, SYMBOL_PAGE};
use crate::utils::attrs::{describe, get_optional_attr, get_required_attr, symbol_id};
use crate::utils::error::{ScrapeError, ScrapeResult};

/// A LaTeX macro and the Typst symbol it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// Raw macro name, including the leading backslash
    pub latex_name: String,
    /// Typst identifier, e.g. `brace.r.double`
    pub id: String,
    /// Value of `data-codepoint`. Not part of the table.
    pub codepoint: i64,
}

impl SymbolEntry {
    pub fn new(latex_name: impl Into<String>, id: impl Into<String>, codepoint: i64) -> Self {
        Self {
            latex_name: latex_name.into(),
            id: id.into(),
            codepoint,
        }
    }

    /// Macro name without its leading backslash
    pub fn macro_name(&self) -> &str {
        self.latex_name
            .strip_prefix('\\')
            .unwrap_or(&self.latex_name)
    }

    /// Build an entry from a grid item.
    ///
    /// Returns `Ok(None)` for items without a LaTeX name. Kept items need
    /// both `id` and a numeric `data-codepoint`.
    pub fn from_item(li: ElementRef<'_>) -> ScrapeResult<Option<Self>> {
        let Some(latex_name) = get_optional_attr(li, ATTR_LATEX_NAME) else {
            return Ok(None);
        };
        let id = symbol_id(li)?;
        let codepoint = parse_codepoint(li, get_required_attr(li, ATTR_CODEPOINT)?)?;

        Ok(Some(Self {
            latex_name: latex_name.to_string(),
            id: id.to_string(),
            codepoint,
        }))
    }
}

impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "['{}', '{}'],", self.macro_name(), self.id)
    }
}

fn parse_codepoint(li: ElementRef<'_>, raw: &str) -> ScrapeResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ScrapeError::invalid(describe(li), ATTR_CODEPOINT, raw, e.to_string()))
}

/// Mapping from LaTeX macro name to symbol entry.
///
/// The first entry inserted for a name wins; later ones are dropped.
#[derive(Debug, Clone, Default)]
pub struct SymbolMap {
    entries: IndexMap<String, SymbolEntry>,
}

impl SymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless its macro name is already present.
    ///
    /// Returns `false` if the entry was dropped.
    pub fn insert(&mut self, entry: SymbolEntry) -> bool {
        match self.entries.entry(entry.latex_name.clone()) {
            Entry::Occupied(kept) => {
                debug!(
                    latex = %entry.latex_name,
                    kept = %kept.get().id,
                    dropped = %entry.id,
                    "dropping alias"
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn get(&self, latex_name: &str) -> Option<&SymbolEntry> {
        self.entries.get(latex_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by lowercased macro name.
    ///
    /// The sort is stable, so names equal up to case keep their page order.
    pub fn sorted(&self) -> Vec<&SymbolEntry> {
        let mut sorted: Vec<&SymbolEntry> = self.entries.values().collect();
        sorted.sort_by_cached_key(|e| e.latex_name.to_lowercase());
        sorted
    }

    /// Build the map from the symbol grid of a parsed page
    pub fn from_document(doc: &Html) -> ScrapeResult<Self> {
        let grid = nth_symbol_grid(doc, SYMBOL_PAGE.grid_index)?;
        let mut map = Self::new();
        let mut skipped = 0usize;
        for li in grid_items(grid) {
            match SymbolEntry::from_item(li)? {
                Some(entry) => {
                    map.insert(entry);
                }
                None => skipped += 1,
            }
        }
        debug!(kept = map.len(), skipped, "built symbol map");
        Ok(map)
    }
}

/// Extract the symbol map of the page
pub fn extract_symbol_map(html: &str) -> ScrapeResult<SymbolMap> {
    let doc = Html::parse_document(html);
    SymbolMap::from_document(&doc)
}

/// Write the sorted table.
///
/// The whole page is read before anything is written, so a malformed item
/// produces no output. Returns the number of lines written.
pub fn write_symbol_map<W: Write>(html: &str, out: &mut W) -> ScrapeResult<usize> {
    let map = extract_symbol_map(html)?;
    let sorted = map.sorted();
    for entry in &sorted {
        writeln!(out, "{}", entry)?;
    }
    out.flush()?;
    Ok(sorted.len())
}
