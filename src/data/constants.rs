//! Constants describing the Typst symbol reference pages
//!
//! The generators depend on a handful of structural conventions of the
//! documentation site. They are collected here so that a layout change
//! upstream only needs to be fixed in one place.

// ============================================================================
// Pages
// ============================================================================

/// A documentation page holding one or more symbol grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    /// Absolute URL of the page
    pub url: &'static str,
    /// Index of the `ul.symbol-grid` to read, in document order
    pub grid_index: usize,
}

/// Symbols overview page.
///
/// The first grid lists markup shorthands, the second one lists math
/// shorthands. Only the math grid is read.
pub const SHORTHAND_PAGE: PageSpec = PageSpec {
    url: "https://typst.app/docs/reference/symbols/",
    grid_index: 1,
};

/// The `sym` module page, with a single grid of every symbol.
pub const SYMBOL_PAGE: PageSpec = PageSpec {
    url: "https://typst.app/docs/reference/symbols/sym/",
    grid_index: 0,
};

// ============================================================================
// Markup conventions
// ============================================================================

/// Class carried by every symbol grid list
pub const SYMBOL_GRID_CLASS: &str = "symbol-grid";

/// Prefix of each list item's `id`, followed by the Typst identifier
pub const SYMBOL_ID_PREFIX: &str = "symbol-";

/// Item id, `symbol-` followed by the Typst identifier
pub const ATTR_ID: &str = "id";
/// Shorthand typed in math mode, e.g. `-&gt;`
pub const ATTR_MATH_SHORTHAND: &str = "data-math-shorthand";
/// LaTeX macro with its backslash, absent on symbols without one
pub const ATTR_LATEX_NAME: &str = "data-latex-name";
/// Decimal Unicode codepoint of the symbol
pub const ATTR_CODEPOINT: &str = "data-codepoint";
