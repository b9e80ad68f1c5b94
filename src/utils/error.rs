//! Error handling for the symbol table generators
//!
//! This module provides a unified error type and result type for fetching,
//! parsing and printing symbol tables.

use thiserror::Error;

/// Scrape error type
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The page could not be fetched, or the server answered with a
    /// non-success status
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// An expected structural element is missing from the page
    #[error("Page structure changed: {message}")]
    Structure { message: String },

    /// A required attribute is absent on a list item
    #[error("Missing attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute is present but its value is unusable
    #[error("Invalid attribute {attribute}=\"{value}\" on <{element}>: {reason}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
        reason: String,
    },

    /// Writing the generated table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scrape operations
pub type ScrapeResult<T> = Result<T, ScrapeError>;

// Convenience constructors for errors
impl ScrapeError {
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        ScrapeError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        ScrapeError::Structure {
            message: message.into(),
        }
    }

    pub fn missing(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        ScrapeError::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    pub fn invalid(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ScrapeError::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        ScrapeError::Network {
            url,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_display() {
        let err = ScrapeError::structure("expected 2 symbol grids, found 1");
        assert!(err.to_string().contains("Page structure changed"));
        assert!(err.to_string().contains("found 1"));
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = ScrapeError::missing("li", "data-math-shorthand");
        assert_eq!(
            err.to_string(),
            "Missing attribute 'data-math-shorthand' on <li>"
        );
    }

    #[test]
    fn test_invalid_attribute_display() {
        let err = ScrapeError::invalid("li", "data-codepoint", "12ab", "not an integer");
        let msg = err.to_string();
        assert!(msg.contains("data-codepoint=\"12ab\""));
        assert!(msg.contains("not an integer"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ScrapeError = io.into();
        assert!(matches!(err, ScrapeError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
