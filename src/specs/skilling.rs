//! Scraping *spec* for the skilling (EHP) page.
//!
//! Page layout relied upon:
//! - Every rate table carries `id="comp-table"`; the **first** one is the summary table.
//! - Each skill table is preceded by `<p>Skill name</p>`, optionally followed by a
//!   `<p class="small-red-text-ehp">Starting exp: N</p>` marker.
//! - "More info+" boxes are also `comp-table`s, holding a `div.news-post-container`.
//! - Rows: `Starting exp | Exp/hr | Method | Bonus exp`, where the bonus cell is
//!   `-`/empty or pairs of `<img title="Skill">` + `<p>ratio</p>`.

use std::time::Instant;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{INFO_PANEL, START_EXP_MARKER, TABLE_ANCHOR};
use crate::config::GameMode;
use crate::core::html::{cells, has_class, prev_sibling_named, sel, text_of};
use crate::core::sanitize::{is_blank_cell, to_float, to_int};
use crate::core::Fetch;
use crate::error::{Error, Result};
use crate::model::{Bonus, Method, RateEntry};

const METHOD_COLUMNS: usize = 4;

struct Selectors {
    table: Selector,
    panel: Selector,
    row: Selector,
    img: Selector,
    para: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            table: sel(TABLE_ANCHOR)?,
            panel: sel(INFO_PANEL)?,
            row: sel("tr")?,
            img: sel("img")?,
            para: sel("p")?,
        })
    }
}

pub fn fetch(fetcher: &dyn Fetch, mode: GameMode) -> Result<Vec<RateEntry>> {
    let url = mode.skilling_url();
    let html_doc = fetcher.get(&url)?;
    let t = Instant::now();
    let entries = parse_doc(&html_doc)?;
    logd!("EHP {mode}: parsed {} skills in {:?}", entries.len(), t.elapsed());
    Ok(entries)
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str) -> Result<Vec<RateEntry>> {
    let doc = Html::parse_document(html_doc);
    let sels = Selectors::new()?;

    let tables: Vec<ElementRef<'_>> = doc.select(&sels.table).collect();
    if tables.is_empty() {
        return Err(Error::structure("skilling page has no #comp-table"));
    }

    let mut entries = Vec::with_capacity(tables.len().saturating_sub(1));

    // First table is the summary table
    for table in tables.into_iter().skip(1) {
        if table.select(&sels.panel).next().is_some() {
            continue;
        }

        let (name, start_exp) = entry_heading(table)?;
        let mut entry = RateEntry::new(name, start_exp);

        for row in table.select(&sels.row) {
            let tds = cells(row);
            if tds.is_empty() {
                continue; // header row
            }
            entry.methods.push(parse_method(&entry.name, &tds, &sels)?);
        }

        if !entry.methods.is_sorted_by_key(|m| m.start_exp) {
            logw!("EHP: {} methods out of order, sorting by start exp", entry.name);
            entry.methods.sort_by_key(|m| m.start_exp);
        }
        entries.push(entry);
    }

    Ok(entries)
}

/// Name and starting exp for a skill table, from the `<p>`s right above it.
fn entry_heading(table: ElementRef<'_>) -> Result<(String, u64)> {
    let maybe_name = prev_sibling_named(table, "p")
        .ok_or_else(|| Error::structure("skill table without a heading <p>"))?;

    if !has_class(maybe_name, START_EXP_MARKER) {
        return Ok((text_of(maybe_name).to_lowercase(), 0));
    }

    // The marker sits between the name and the table
    let start_exp = to_int(&text_of(maybe_name));
    let name = prev_sibling_named(maybe_name, "p")
        .ok_or_else(|| Error::structure("starting exp marker without a skill name <p>"))?;
    Ok((text_of(name).to_lowercase(), start_exp))
}

fn parse_method(skill: &str, tds: &[ElementRef<'_>], sels: &Selectors) -> Result<Method> {
    let [xp, rate, description, bxp] = tds else {
        return Err(Error::structure(format!(
            "{skill}: method row has {} cells, expected {METHOD_COLUMNS}",
            tds.len()
        )));
    };

    let mut method = Method::new(to_int(&text_of(*xp)), to_int(&text_of(*rate)), text_of(*description));
    method.bonuses = parse_bonuses(skill, *bxp, sels);
    Ok(method)
}

fn parse_bonuses(skill: &str, bxp: ElementRef<'_>, sels: &Selectors) -> Vec<Bonus> {
    if is_blank_cell(&text_of(bxp)) {
        return Vec::new();
    }

    let skills = bxp
        .select(&sels.img)
        .map(|img| img.value().attr("title").unwrap_or_default().trim().to_lowercase());
    let ratios = bxp.select(&sels.para).map(|p| to_float(&text_of(p)));

    skills
        .zip(ratios)
        .filter(|(bonus_skill, ratio)| {
            let keep = !bonus_skill.is_empty() && *ratio > 0.0;
            if !keep {
                logw!("EHP: {skill}: dropping bonus '{bonus_skill}' with ratio {ratio}");
            }
            keep
        })
        .map(|(skill, ratio)| Bonus { skill, ratio })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = include_str!("../../tests/fixtures/skilling.html");

    fn entry<'a>(entries: &'a [RateEntry], name: &str) -> &'a RateEntry {
        entries.iter().find(|e| e.name == name).unwrap()
    }

    #[test]
    fn skips_summary_and_info_tables() {
        let entries = parse_doc(PAGE).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["mining", "smithing", "woodcutting", "firemaking", "runecraft"]);
    }

    #[test]
    fn start_exp_marker_sets_offset_and_name_comes_from_previous_p() {
        let entries = parse_doc(PAGE).unwrap();
        assert_eq!(entry(&entries, "smithing").start_exp, 13_034_431);
        assert_eq!(entry(&entries, "mining").start_exp, 0);
    }

    #[test]
    fn rows_parse_thresholds_rates_and_bonuses() {
        let entries = parse_doc(PAGE).unwrap();
        let mining = entry(&entries, "mining");
        assert_eq!(mining.methods.len(), 3);

        let first = &mining.methods[0];
        assert_eq!(first.start_exp, 0);
        assert_eq!(first.rate, 10_000);
        assert_eq!(first.description, "Iron ore");
        assert_eq!(first.bonuses, vec![Bonus { skill: s!("smithing"), ratio: 0.5 }]);

        let last = &mining.methods[2];
        assert_eq!(last.start_exp, 101_333);
        assert!(last.bonuses.is_empty()); // "-"
    }

    #[test]
    fn empty_bonus_cell_yields_no_bonuses() {
        let entries = parse_doc(PAGE).unwrap();
        assert!(entry(&entries, "smithing").methods[0].bonuses.is_empty());
    }

    #[test]
    fn multiple_bonus_icons_zip_with_ratios() {
        let entries = parse_doc(PAGE).unwrap();
        let rc = entry(&entries, "runecraft");
        let skills: Vec<(&str, f64)> = rc.methods[0]
            .bonuses
            .iter()
            .map(|b| (b.skill.as_str(), b.ratio))
            .collect();
        assert_eq!(skills, [("mining", 0.1), ("crafting", 0.05)]);
    }

    #[test]
    fn missing_anchor_is_a_structure_error() {
        let err = parse_doc("<!DOCTYPE html><html><body><p>moved</p></body></html>").unwrap_err();
        assert!(matches!(err, Error::Structure(_)));
    }

    #[test]
    fn skill_table_without_heading_is_a_structure_error() {
        let doc = r#"<!DOCTYPE html><body>
            <table id="comp-table"><tr><td>summary</td></tr></table>
            <div><table id="comp-table"><tr><td>0</td><td>1</td><td>a</td><td>-</td></tr></table></div>
        </body>"#;
        assert!(matches!(parse_doc(doc), Err(Error::Structure(_))));
    }

    #[test]
    fn start_exp_marker_without_name_is_a_structure_error() {
        let doc = r#"<!DOCTYPE html><body>
            <table id="comp-table"><tr><td>summary</td></tr></table>
            <div>
              <p class="small-red-text-ehp">Starting exp: 13,034,431</p>
              <table id="comp-table"><tr><td>13,034,431</td><td>1</td><td>a</td><td>-</td></tr></table>
            </div>
        </body>"#;
        assert!(matches!(parse_doc(doc), Err(Error::Structure(_))));
    }

    #[test]
    fn wrong_cell_count_is_a_structure_error() {
        let doc = r#"<!DOCTYPE html><body>
            <table id="comp-table"><tr><td>summary</td></tr></table>
            <p>Mining</p>
            <table id="comp-table"><tr><td>0</td><td>10,000</td></tr></table>
        </body>"#;
        assert!(matches!(parse_doc(doc), Err(Error::Structure(_))));
    }

    #[test]
    fn rows_out_of_order_are_sorted() {
        let doc = r#"<!DOCTYPE html><body>
            <table id="comp-table"><tr><td>summary</td></tr></table>
            <p>Fishing</p>
            <table id="comp-table">
              <tr><td>5,000</td><td>40,000</td><td>Barbarian</td><td>-</td></tr>
              <tr><td>0</td><td>20,000</td><td>Shrimp</td><td>-</td></tr>
            </table>
        </body>"#;
        let entries = parse_doc(doc).unwrap();
        let starts: Vec<u64> = entries[0].methods.iter().map(|m| m.start_exp).collect();
        assert_eq!(starts, [0, 5_000]);
    }
}
