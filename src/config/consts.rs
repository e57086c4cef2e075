// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://templeosrs.com/efficiency/";
pub const SKILLING_PAGE: &str = "skilling.php";
pub const PVM_PAGE: &str = "pvm.php";
pub const MISC_PAGE: &str = "misc.php";
pub const USER_AGENT: &str = concat!("rate_dump/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 15;
pub const READ_TIMEOUT_SECS: u64 = 15;

// Page anchors
pub const TABLE_ANCHOR: &str = "#comp-table";
pub const START_EXP_MARKER: &str = "small-red-text-ehp";
pub const INFO_PANEL: &str = "div.news-post-container";

// Rates
pub const MAX_EXP: u64 = 200_000_000;

// Output module
pub const MODULE_EXT: &str = "ts";
pub const MODULE_PREAMBLE: &str = "export default\n";
pub const MODULE_TERMINATOR: &str = ";";
pub const INDENT: usize = 2;
