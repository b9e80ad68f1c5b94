//! Core extraction modules
//!
//! This module contains the table generators:
//! - `shorthand`: math shorthand table (`['arrow.r', '->'],`)
//! - `symbol`: LaTeX macro to Typst symbol table (`['equiv', 'equal'],`)
//! - `grid`: locating symbol grids in a parsed page
//! - `fetch`: blocking page retrieval (requires the `fetch` feature)

#[cfg(feature = "fetch")]
pub mod fetch;
pub mod grid;
pub mod shorthand;
pub mod symbol;

#[cfg(feature = "fetch")]
pub use fetch::fetch_page;
pub use grid::{grid_items, nth_symbol_grid, symbol_grids};
pub use shorthand::{extract_shorthands, shorthand_entries, write_shorthands, ShorthandEntry};
pub use symbol::{extract_symbol_map, write_symbol_map, SymbolEntry, SymbolMap};
