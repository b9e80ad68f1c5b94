//! Integration tests for the symbol table generators

use tylax_symgen::{
    extract_shorthands, extract_symbol_map, write_shorthands, write_symbol_map, ScrapeError,
};

const SYMBOLS_PAGE: &str = include_str!("fixtures/symbols.html");
const SYM_PAGE: &str = include_str!("fixtures/sym.html");

fn shorthand_output(html: &str) -> String {
    let mut out = Vec::new();
    write_shorthands(html, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn symbol_output(html: &str) -> String {
    let mut out = Vec::new();
    write_symbol_map(html, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// Math Shorthand Table
// ============================================================================

mod shorthands {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_page() {
        let expected = "\
['bracket.l.stroked', '[|'],
['bracket.r.stroked', '|]'],
['bar.v.double', '||'],
['ast.op', '*'],
['colon.eq', ':='],
['arrow.r', '->'],
['arrow.r.bar', '|->'],
['arrow.l.r', '<->'],
['arrow.l.r.double.long', '<==>'],
['gt.eq', '>='],
['eq.not', '!='],
['dots.h', '...'],
";
        assert_eq!(shorthand_output(SYMBOLS_PAGE), expected);
    }

    #[test]
    fn test_markup_shorthands_are_not_printed() {
        let entries = extract_shorthands(SYMBOLS_PAGE).unwrap();
        assert!(entries.iter().all(|e| !e.id.starts_with("dash.")));
        assert!(entries.iter().all(|e| e.id != "space.nobreak"));
    }

    #[test]
    fn test_output_follows_page_order() {
        let entries = extract_shorthands(SYMBOLS_PAGE).unwrap();
        let positions: Vec<usize> = entries
            .iter()
            .map(|e| {
                SYMBOLS_PAGE
                    .find(&format!("id=\"symbol-{}\"", e.id))
                    .unwrap()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(shorthand_output(SYMBOLS_PAGE), shorthand_output(SYMBOLS_PAGE));
    }

    #[test]
    fn test_end_to_end_single_item() {
        let html = r#"
            <ul class="symbol-grid"></ul>
            <ul class="symbol-grid">
              <li id="symbol-arrow.r" data-math-shorthand="-&gt;"></li>
            </ul>"#;
        assert_eq!(shorthand_output(html), "['arrow.r', '->'],\n");
    }

    #[test]
    fn test_symbols_sub_page_has_no_math_grid() {
        let err = extract_shorthands(SYM_PAGE).unwrap_err();
        assert!(matches!(err, ScrapeError::Structure { .. }));
    }
}

// ============================================================================
// LaTeX Symbol Table
// ============================================================================

mod symbols {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_page() {
        let expected = "\
['alpha', 'alpha'],
['beta', 'beta'],
['Delta', 'Delta'],
['delta', 'delta'],
['equiv', 'equal'],
['lBrace', 'brace.l.double'],
['leftarrow', 'arrow.l'],
['rBrace', 'brace.r.double'],
['rightarrow', 'arrow.r'],
";
        assert_eq!(symbol_output(SYM_PAGE), expected);
    }

    #[test]
    fn test_sorted_ignoring_case() {
        let map = extract_symbol_map(SYM_PAGE).unwrap();
        let names: Vec<String> = map
            .sorted()
            .iter()
            .map(|e| e.macro_name().to_lowercase())
            .collect();
        for pair in names.windows(2) {
            assert!(pair[0] <= pair[1], "{} printed before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_alias_printed_once() {
        let output = symbol_output(SYM_PAGE);
        let equiv_lines: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("['equiv',"))
            .collect();
        assert_eq!(equiv_lines, vec!["['equiv', 'equal'],"]);
        assert!(!output.contains("equiv.triple"));
    }

    #[test]
    fn test_items_without_latex_name_are_absent() {
        let output = symbol_output(SYM_PAGE);
        assert!(!output.contains("space.nobreak"));
        assert!(!output.contains("arrow.r.curve"));
    }

    #[test]
    fn test_codepoints_are_kept() {
        let map = extract_symbol_map(SYM_PAGE).unwrap();
        assert_eq!(map.get("\\rBrace").unwrap().codepoint, 10628);
        assert_eq!(map.get("\\equiv").unwrap().codepoint, 61);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(symbol_output(SYM_PAGE), symbol_output(SYM_PAGE));
    }

    #[test]
    fn test_end_to_end_first_wins() {
        let html = r#"
            <ul class="symbol-grid">
              <li id="symbol-equal" data-latex-name="\equiv" data-codepoint="61"></li>
              <li id="symbol-equiv.triple" data-latex-name="\equiv" data-codepoint="8801"></li>
            </ul>"#;
        assert_eq!(symbol_output(html), "['equiv', 'equal'],\n");
    }

    #[test]
    fn test_overview_page_reads_first_grid() {
        // The markup grid carries no LaTeX names, so nothing is printed
        assert_eq!(symbol_output(SYMBOLS_PAGE), "");
    }
}
