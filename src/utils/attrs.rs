//! Typed attribute accessors for parsed list items

use scraper::ElementRef;

use super::error::{ScrapeError, ScrapeResult};
use crate::data::constants::{ATTR_ID, SYMBOL_ID_PREFIX};

/// Short description of an element for error messages, e.g. `li#symbol-arrow.r`
pub fn describe(node: ElementRef<'_>) -> String {
    let el = node.value();
    match el.id() {
        Some(id) => format!("{}#{}", el.name(), id),
        None => el.name().to_string(),
    }
}

/// Read an attribute that every item is expected to carry
pub fn get_required_attr<'a>(node: ElementRef<'a>, name: &str) -> ScrapeResult<&'a str> {
    node.value()
        .attr(name)
        .ok_or_else(|| ScrapeError::missing(describe(node), name))
}

/// Read an attribute that only some items carry
#[inline]
pub fn get_optional_attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

/// Typst identifier of a symbol item, taken from its `id` attribute.
///
/// `symbol-arrow.r` yields `arrow.r`. An id without the prefix is an error.
pub fn symbol_id(node: ElementRef<'_>) -> ScrapeResult<&str> {
    let raw = get_required_attr(node, ATTR_ID)?;
    raw.strip_prefix(SYMBOL_ID_PREFIX).ok_or_else(|| {
        ScrapeError::invalid(
            describe(node),
            ATTR_ID,
            raw,
            format!("expected the '{}' prefix", SYMBOL_ID_PREFIX),
        )
    })
}
