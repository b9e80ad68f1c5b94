//! Locating symbol grids in a parsed page

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::data::constants::SYMBOL_GRID_CLASS;
use crate::utils::error::{ScrapeError, ScrapeResult};

lazy_static! {
    static ref SYMBOL_GRID: Selector = Selector::parse(&format!("ul.{}", SYMBOL_GRID_CLASS))
        .expect("symbol grid selector is valid");
}

/// All `ul.symbol-grid` lists of the page, in document order
pub fn symbol_grids(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&SYMBOL_GRID).collect()
}

/// The grid at `index`, failing if the page has fewer grids
pub fn nth_symbol_grid(doc: &Html, index: usize) -> ScrapeResult<ElementRef<'_>> {
    let grids = symbol_grids(doc);
    debug!(found = grids.len(), index, "located symbol grids");
    grids.get(index).copied().ok_or_else(|| {
        ScrapeError::structure(format!(
            "expected at least {} <ul class=\"{}\"> list(s), found {}",
            index + 1,
            SYMBOL_GRID_CLASS,
            grids.len()
        ))
    })
}

/// Direct `li` children of a grid, in document order
pub fn grid_items<'a>(grid: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    grid.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li")
}
