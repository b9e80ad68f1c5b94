//! Print the Typst math shorthand table
//!
//! Output lines look like `['arrow.r', '->'],`, in the order of the
//! documentation page.

use std::io;

use tylax_symgen::{fetch_page, init_logging, write_shorthands, ScrapeResult, SHORTHAND_PAGE};

fn run() -> ScrapeResult<usize> {
    let html = fetch_page(SHORTHAND_PAGE.url)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_shorthands(&html, &mut out)
}

fn main() {
    init_logging();

    match run() {
        Ok(count) => tracing::info!(count, "shorthand table written"),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
