// src/convert/mod.rs
//
// Extracted page records → the shapes the rates consumer imports.

pub mod bonus;
pub mod iron;
pub mod names;

use serde::Serialize;

use crate::model::{KillRate, RateEntry};

pub use bonus::BonusWindow;
pub use names::{activity_id, skill_id};

/// How a converter sees the page.
/// Picked explicitly where it is used; a converter that needs the whole page
/// says so by being `ContextAware`.
pub enum Transform<E, T> {
    /// Each record on its own.
    ContextFree(fn(&E) -> T),
    /// Each record plus every record on the same page.
    ContextAware(fn(&E, &[E]) -> T),
}

impl<E, T> Transform<E, T> {
    pub fn apply(&self, entries: &[E]) -> Vec<T> {
        match self {
            Transform::ContextFree(f) => entries.iter().map(|e| f(e)).collect(),
            Transform::ContextAware(f) => entries.iter().map(|e| f(e, entries)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillRates {
    pub skill: String,
    pub methods: Vec<MethodRate>,
    pub bonuses: Vec<BonusWindow>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRate {
    pub start_exp: u64,
    pub rate: u64,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BossRate {
    pub boss: String,
    pub rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricRate {
    pub metric: String,
    pub rate: f64,
}

/// Needs the whole page: a bonus window's `end` flag looks at other skills.
pub fn skill_rates(entry: &RateEntry, entries: &[RateEntry]) -> SkillRates {
    SkillRates {
        skill: skill_id(&entry.name),
        methods: entry
            .methods
            .iter()
            .map(|m| MethodRate {
                start_exp: m.start_exp,
                rate: m.rate,
                description: m.description.clone(),
            })
            .collect(),
        bonuses: bonus::reconcile(entry, entries),
    }
}

pub fn boss_rate(entry: &KillRate) -> BossRate {
    BossRate { boss: activity_id(&entry.name), rate: entry.rate }
}

pub fn metric_rate(entry: &KillRate) -> MetricRate {
    MetricRate { metric: activity_id(&entry.name), rate: entry.rate }
}
