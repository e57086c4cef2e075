// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::{options::misc_url, Category, DumpOptions, GameMode},
    convert::{self, iron, BossRate, MetricRate, SkillRates, Transform},
    core::Fetch,
    emit::Layout,
    error::Result,
    file::{ensure_directory, module_path, write_modules, PendingModule},
    model::{KillRate, RateEntry},
    progress::{NullProgress, Progress},
    specs,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: dispatch on category and dump.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// Each category is fetched, parsed and rendered in full before any of its
/// files is written; an error leaves that category's files untouched.
pub fn run(
    options: &DumpOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    ensure_directory(&options.out_dir)?;
    let dir = options.out_dir.as_path();
    let mut files_written = Vec::new();

    for &category in options.category.expand() {
        progress.begin(category, GameMode::ALL.len());
        note(progress, &format!("Dumping {category}..."));

        let pending = match category {
            Category::Ehp => plan_ehp(dir, fetcher, progress)?,
            Category::Ehb => plan_ehb(dir, fetcher, progress)?,
            Category::Misc => plan_misc(dir, fetcher, progress)?,
            Category::All => continue, // expand() never yields All
        };

        let written = write_modules(&pending, progress)?;
        logf!("{category}: wrote {} modules to {}", written.len(), dir.display());
        files_written.extend(written);
    }

    progress.finish();
    logf!("Done in {}", crate::log::elapsed());
    Ok(RunSummary { files_written })
}

fn note(progress: &mut dyn Progress, msg: &str) {
    logd!("{msg}");
    progress.log(msg);
}

/* ---------------- EHP: one skilling page per mode ---------------- */

fn plan_ehp(dir: &Path, fetcher: &dyn Fetch, progress: &mut dyn Progress) -> Result<Vec<PendingModule>> {
    let skills: Transform<RateEntry, SkillRates> = Transform::ContextAware(convert::skill_rates);
    let mut pending = Vec::with_capacity(GameMode::ALL.len());

    for mode in GameMode::ALL {
        note(progress, &format!("Dumping {mode} EHP..."));
        let entries = specs::skilling::fetch(fetcher, mode)?;
        let rates = skills.apply(&entries);
        pending.push(PendingModule::render(
            module_path(dir, mode, Category::Ehp),
            &rates,
            Layout::Pretty,
        )?);
    }
    Ok(pending)
}

/* ---------------- EHB: main + ironman pages, the rest derived ---------------- */

fn plan_ehb(dir: &Path, fetcher: &dyn Fetch, progress: &mut dyn Progress) -> Result<Vec<PendingModule>> {
    // Both pages up front: ironman is corrected against main
    note(progress, "Dumping main EHB...");
    let main = specs::kill_rates::fetch(fetcher, &GameMode::Main.pvm_url())?;
    note(progress, "Dumping ironman EHB...");
    let iron_raw = specs::kill_rates::fetch(fetcher, &GameMode::Ironman.pvm_url())?;

    let iron = iron::correct_iron_rates(&main, &iron_raw);
    let zeroed = iron::zeroed_rates(&main);

    let bosses: Transform<KillRate, BossRate> = Transform::ContextFree(convert::boss_rate);
    let mut pending = Vec::with_capacity(GameMode::ALL.len());

    for mode in GameMode::ALL {
        let rows = match mode {
            GameMode::Main => &main,
            GameMode::Ironman => &iron,
            GameMode::F2p | GameMode::Lvl3 => &zeroed,
        };
        pending.push(PendingModule::render(
            module_path(dir, mode, Category::Ehb),
            &bosses.apply(rows),
            Layout::Compact,
        )?);
    }
    Ok(pending)
}

/* ---------------- Misc: one page shared by every mode ---------------- */

fn plan_misc(dir: &Path, fetcher: &dyn Fetch, progress: &mut dyn Progress) -> Result<Vec<PendingModule>> {
    note(progress, "Dumping misc rates...");
    let entries = specs::kill_rates::fetch(fetcher, &misc_url())?;

    let metrics: Transform<KillRate, MetricRate> = Transform::ContextFree(convert::metric_rate);
    let rates = metrics.apply(&entries);

    GameMode::ALL
        .into_iter()
        .map(|mode| PendingModule::render(module_path(dir, mode, Category::Misc), &rates, Layout::Compact))
        .collect()
}
