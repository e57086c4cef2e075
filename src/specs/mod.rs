// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the
//! TempleOSRS efficiency pages. Each spec focuses on a single page layout and
//! encodes *where the ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **HTML parsing** of the remote pages (`skilling.php`, `pvm.php`, `misc.php`).
//! - **Selector choice**: the `#comp-table` anchor, the heading `<p>`s above each
//!   skill table, the starting-exp marker, the "More info+" boxes to skip.
//! - **Tolerant cell parsing** via `core::sanitize` (digits only, `-` reads as zero).
//! - Results as plain `model` records, names as the site spells them (lowercased).
//!
//! ## What does **not** live here
//! - **Renaming** to the consumer's identifiers, bonus windows, iron corrections –
//!   that's `convert`.
//! - **Output formatting or files** – `emit` and `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → specs::<page>::fetch(fetcher, …) → parse_doc(html)
//!        → convert::… → file::PendingModule → disk
//! ```
//!
//! ## Conventions & invariants
//! - A missing anchor or heading is an `Error::Structure`: the page changed and
//!   nothing should be written from it.
//! - A cell without digits is a zero, not an error.
//!
//! ## Testing notes
//! - Each spec exposes `parse_doc` so it can be tested **offline** against the
//!   fixtures in `tests/fixtures/`.
pub mod kill_rates;
pub mod skilling;
