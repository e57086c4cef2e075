// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{Category, DumpOptions};
use crate::core::HttpFetcher;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Dump TempleOSRS efficiency rates as TypeScript rate modules.
#[derive(Debug, Parser)]
#[command(name = "rate_dump", version, about)]
pub struct Args {
    /// The rate category to dump
    #[arg(value_enum)]
    pub category: Category,

    /// The path to the output folder
    pub path: PathBuf,
}

impl Args {
    pub fn into_options(self) -> DumpOptions {
        DumpOptions::new(self.category, self.path)
    }
}

/// Prints progress lines to stdout; logs go to stderr.
pub struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, path: &Path) {
        println!("  wrote {}", path.display());
    }
}

pub fn run() -> Result<RunSummary> {
    let options = Args::parse().into_options();
    let fetcher = HttpFetcher::new();
    runner::run(&options, &fetcher, Some(&mut CliProgress))
        .inspect_err(|e| loge!("{} dump failed: {e}", options.category))
}
