//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Attribute accessors for parsed markup
//! - Logging setup for the binaries

pub mod attrs;
pub mod error;
pub mod logging;

// Re-export commonly used items
pub use attrs::{get_optional_attr, get_required_attr, symbol_id};
pub use error::{ScrapeError, ScrapeResult};
pub use logging::init_logging;
