//! # tylax-symgen
//!
//! Generators for the LaTeX ↔ Typst symbol tables, scraped from the Typst
//! symbol reference.
//!
//! ## Tables
//!
//! - **Math shorthands**: `['arrow.r', '->'],`, one line per entry of the
//!   math shorthand grid, in page order
//! - **LaTeX symbols**: `['equiv', 'equal'],`, one line per LaTeX macro,
//!   first symbol wins, sorted by macro name ignoring case
//!
//! The lines are meant to be pasted into a source table as they are.
//!
//! ## Usage Examples
//!
//! Extraction works on markup, so it can run without the network:
//!
//! ```rust
//! use tylax_symgen::{extract_shorthands, extract_symbol_map};
//!
//! let page = r#"
//!     <ul class="symbol-grid"></ul>
//!     <ul class="symbol-grid">
//!       <li id="symbol-arrow.r" data-math-shorthand="-&gt;"></li>
//!     </ul>"#;
//! let shorthands = extract_shorthands(page).unwrap();
//! assert_eq!(shorthands[0].to_string(), "['arrow.r', '->'],");
//!
//! let page = r#"
//!     <ul class="symbol-grid">
//!       <li id="symbol-equal" data-latex-name="\equiv" data-codepoint="61"></li>
//!       <li id="symbol-equiv.triple" data-latex-name="\equiv" data-codepoint="8801"></li>
//!     </ul>"#;
//! let map = extract_symbol_map(page).unwrap();
//! assert_eq!(map.sorted()[0].to_string(), "['equiv', 'equal'],");
//! ```
//!
//! With the default `fetch` feature, [`fetch_page`] downloads the live pages
//! listed in [`data::constants`].

/// Core extraction modules
pub mod core;

/// Data layer - page locations and markup conventions
pub mod data;

/// Utility modules
pub mod utils;

// Re-export extraction functions
#[cfg(feature = "fetch")]
pub use core::fetch_page;
pub use core::{
    extract_shorthands, extract_symbol_map, shorthand_entries, write_shorthands,
    write_symbol_map, ShorthandEntry, SymbolEntry, SymbolMap,
};

// Re-export data
pub use data::constants;
pub use data::{PageSpec, SHORTHAND_PAGE, SYMBOL_PAGE};

// Re-export utilities
pub use utils::error::{ScrapeError, ScrapeResult};
pub use utils::logging::init_logging;
