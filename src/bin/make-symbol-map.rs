//! Print the LaTeX macro to Typst symbol table
//!
//! Output lines look like `['equiv', 'equal'],`, sorted by macro name
//! ignoring case. Nothing is printed if the page cannot be read in full.

use std::io;

use tylax_symgen::{fetch_page, init_logging, write_symbol_map, ScrapeResult, SYMBOL_PAGE};

fn run() -> ScrapeResult<usize> {
    let html = fetch_page(SYMBOL_PAGE.url)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_symbol_map(&html, &mut out)
}

fn main() {
    init_logging();

    match run() {
        Ok(count) => tracing::info!(count, "symbol table written"),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
