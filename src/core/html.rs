// src/core/html.rs
use scraper::{ElementRef, Selector};

use crate::error::{Error, Result};

use super::sanitize::normalize_ws;

/// Parse a CSS selector. Selectors here are constants, so a failure is a
/// programming error, but it still surfaces as a `Structure` error rather than a panic.
pub fn sel(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::structure(format!("bad selector `{css}`: {e:?}")))
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Closest preceding sibling element with the given tag name (`find_previous_sibling`).
pub fn prev_sibling_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name().eq_ignore_ascii_case(tag))
}

/// Direct `<td>` cells of a row.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn finds_previous_paragraph_skipping_other_tags() {
        let doc = Html::parse_document(
            r#"<!DOCTYPE html><body><div><p>Mining</p><br><span>x</span><table id="t"><tr><td>1</td></tr></table></div></body>"#,
        );
        let table = doc.select(&sel("#t").unwrap()).next().unwrap();
        let p = prev_sibling_named(table, "p").unwrap();
        assert_eq!(text_of(p), "Mining");
    }

    #[test]
    fn cells_are_direct_children_only() {
        let doc = Html::parse_document(
            r#"<!DOCTYPE html><table><tr><td>a</td><td><b>b</b> c</td></tr></table>"#,
        );
        let row = doc.select(&sel("tr").unwrap()).next().unwrap();
        let tds = cells(row);
        assert_eq!(tds.len(), 2);
        assert_eq!(text_of(tds[1]), "b c");
    }
}
