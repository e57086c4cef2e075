//! Scraping *spec* for the kills-per-hour pages (`pvm.php` and `misc.php`).
//!
//! Both pages share one layout: the first `comp-table`, one row per boss or
//! activity, with the name in the icon's `title` and kills/hr in the second cell.
//! Trailing columns (pet rate etc.) are ignored.

use std::time::Instant;

use scraper::Html;

use crate::config::consts::TABLE_ANCHOR;
use crate::core::html::{cells, sel, text_of};
use crate::core::sanitize::{normalize_ws, to_float};
use crate::core::Fetch;
use crate::error::{Error, Result};
use crate::model::KillRate;

pub fn fetch(fetcher: &dyn Fetch, url: &str) -> Result<Vec<KillRate>> {
    let html_doc = fetcher.get(url)?;
    let t = Instant::now();
    let rates = parse_doc(&html_doc)?;
    logd!("Kill rates: parsed {} rows from {url} in {:?}", rates.len(), t.elapsed());
    Ok(rates)
}

/// Split out for unit tests.
pub fn parse_doc(html_doc: &str) -> Result<Vec<KillRate>> {
    let doc = Html::parse_document(html_doc);
    let table = doc
        .select(&sel(TABLE_ANCHOR)?)
        .next()
        .ok_or_else(|| Error::structure("kill-rate page has no #comp-table"))?;

    let row_sel = sel("tr")?;
    let img_sel = sel("img")?;
    let mut out = Vec::new();

    for row in table.select(&row_sel) {
        let tds = cells(row);
        if tds.is_empty() {
            continue; // header row
        }
        let [name_td, rate_td, ..] = tds.as_slice() else {
            return Err(Error::structure(format!("kill-rate row has {} cell(s)", tds.len())));
        };

        let name = name_td
            .select(&img_sel)
            .find_map(|img| img.value().attr("title"))
            .map(normalize_ws)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::structure("kill-rate row without a titled icon"))?;

        out.push(KillRate::new(name.to_lowercase(), to_float(&text_of(*rate_td))));
    }

    Ok(out)
}
