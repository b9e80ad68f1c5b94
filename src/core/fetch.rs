//! Page retrieval
//!
//! One blocking GET per run. No retries, no custom headers.

use tracing::info;

use crate::utils::error::{ScrapeError, ScrapeResult};

/// Fetch a page and return its body as text.
///
/// A non-2xx status is reported as a network error.
pub fn fetch_page(url: &str) -> ScrapeResult<String> {
    info!(url, "fetching page");
    let response = reqwest::blocking::get(url)
        .map_err(|e| ScrapeError::network(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::network(url, format!("HTTP {}", status)));
    }

    let body = response.text()?;
    info!(url, bytes = body.len(), "fetched page");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_network_error() {
        let err = fetch_page("not a url").unwrap_err();
        assert!(matches!(err, ScrapeError::Network { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}
