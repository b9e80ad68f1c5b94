//! Data layer - Static constants
//!
//! This module contains the fixed page locations and markup conventions
//! of the Typst symbol reference.

pub mod constants;

// Re-export commonly used items
pub use constants::{PageSpec, SHORTHAND_PAGE, SYMBOL_GRID_CLASS, SYMBOL_ID_PREFIX, SYMBOL_PAGE};
