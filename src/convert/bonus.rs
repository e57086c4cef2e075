// src/convert/bonus.rs
//
// Per-method bonus grants → explicit [startExp, endExp) windows per bonus skill.
//
// A page row only says "from here on, this method also gives ratio × xp in S".
// The consumer wants one window per (bonus skill, ratio) run:
//   1. every bonus of every method becomes a raw window ending where the next
//      method starts (or at MAX_EXP for the last method);
//   2. raw windows are grouped by bonus skill, first-seen order;
//   3. within a group, runs of equal ratio collapse into the run's first start
//      and last end.

use serde::Serialize;

use crate::config::consts::MAX_EXP;
use crate::model::RateEntry;

use super::names::skill_id;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusWindow {
    pub origin_skill: String,
    pub bonus_skill: String,
    pub start_exp: u64,
    pub end_exp: u64,
    /// The bonus skill has its own table starting from zero exp, so bonus
    /// exp counts toward that skill's total rather than a capped sub-range.
    pub end: bool,
    pub ratio: f64,
}

/// `(a, Some(b)), (b, Some(c)), (c, None)`
fn pairwise<T>(items: &[T]) -> impl Iterator<Item = (&T, Option<&T>)> {
    items.iter().enumerate().map(move |(i, item)| (item, items.get(i + 1)))
}

/// Reconciled bonus windows for `entry`. `entries` is the whole page,
/// needed to decide each window's `end` flag.
pub fn reconcile(entry: &RateEntry, entries: &[RateEntry]) -> Vec<BonusWindow> {
    group_by_bonus_skill(raw_windows(entry, entries))
        .iter()
        .flat_map(|group| merge_group(group))
        .collect()
}

/// One window per (method, bonus), in method order.
pub fn raw_windows(entry: &RateEntry, entries: &[RateEntry]) -> Vec<BonusWindow> {
    let origin = skill_id(&entry.name);
    let origin = origin.as_str();

    pairwise(&entry.methods)
        .flat_map(|(method, next)| {
            let end_exp = next.map_or(MAX_EXP, |n| n.start_exp);
            method.bonuses.iter().map(move |bonus| BonusWindow {
                origin_skill: s!(origin),
                bonus_skill: skill_id(&bonus.skill),
                start_exp: method.start_exp,
                end_exp,
                end: starts_from_zero(&bonus.skill, entries),
                ratio: bonus.ratio,
            })
        })
        .collect()
}

fn starts_from_zero(skill: &str, entries: &[RateEntry]) -> bool {
    entries.iter().any(|e| e.name == skill && e.start_exp == 0)
}

/// Stable grouping; groups come out in the order their skill first appeared.
fn group_by_bonus_skill(windows: Vec<BonusWindow>) -> Vec<Vec<BonusWindow>> {
    let mut groups: Vec<Vec<BonusWindow>> = Vec::new();
    for window in windows {
        match groups.iter_mut().find(|g| g[0].bonus_skill == window.bonus_skill) {
            Some(group) => group.push(window),
            None => groups.push(vec![window]),
        }
    }
    groups
}

/// Collapse equal-ratio neighbours. The accumulator carries the start of the
/// run currently being merged; it is always empty again at the end of a group.
/// Ratios come from a handful of fixed game constants, so `==` is exact on purpose.
fn merge_group(group: &[BonusWindow]) -> Vec<BonusWindow> {
    let (merged, _) = pairwise(group).fold(
        (Vec::with_capacity(group.len()), None::<u64>),
        |(mut out, run_start), (cur, next)| match next {
            Some(next) if next.ratio == cur.ratio => (out, run_start.or(Some(cur.start_exp))),
            _ => {
                let mut window = cur.clone();
                if let Some(start) = run_start {
                    window.start_exp = start;
                }
                out.push(window);
                (out, None)
            }
        },
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Method;

    fn mining(second_ratio: f64) -> RateEntry {
        RateEntry::new("mining", 0).with_methods(vec![
            Method::new(0, 10, "a").with_bonus("smithing", 0.5),
            Method::new(1_000, 20, "b").with_bonus("smithing", second_ratio),
        ])
    }

    fn spans(windows: &[BonusWindow]) -> Vec<(u64, u64, f64)> {
        windows.iter().map(|w| (w.start_exp, w.end_exp, w.ratio)).collect()
    }

    #[test]
    fn equal_ratios_merge_into_one_window() {
        let entry = mining(0.5);
        let out = reconcile(&entry, std::slice::from_ref(&entry));
        assert_eq!(spans(&out), [(0, MAX_EXP, 0.5)]);
        assert_eq!(out[0].origin_skill, "mining");
        assert_eq!(out[0].bonus_skill, "smithing");
    }

    #[test]
    fn different_ratios_stay_separate() {
        let entry = mining(0.8);
        let out = reconcile(&entry, std::slice::from_ref(&entry));
        assert_eq!(spans(&out), [(0, 1_000, 0.5), (1_000, MAX_EXP, 0.8)]);
    }

    #[test]
    fn singleton_group_emits_as_is() {
        let entry = RateEntry::new("fishing", 0).with_methods(vec![
            Method::new(0, 10, "a").with_bonus("cooking", 0.2),
            Method::new(500, 20, "b"),
        ]);
        let out = reconcile(&entry, &[]);
        assert_eq!(spans(&out), [(0, 500, 0.2)]);
    }

    #[test]
    fn run_in_the_middle_keeps_earliest_start() {
        let entry = RateEntry::new("woodcutting", 0).with_methods(vec![
            Method::new(0, 1, "a").with_bonus("firemaking", 0.1),
            Method::new(100, 1, "b").with_bonus("firemaking", 0.3),
            Method::new(200, 1, "c").with_bonus("firemaking", 0.3),
            Method::new(300, 1, "d").with_bonus("firemaking", 0.3),
            Method::new(400, 1, "e").with_bonus("firemaking", 0.1),
        ]);
        let out = reconcile(&entry, &[]);
        assert_eq!(spans(&out), [(0, 100, 0.1), (100, 400, 0.3), (400, MAX_EXP, 0.1)]);
    }

    #[test]
    fn groups_follow_first_seen_order_and_do_not_share_runs() {
        let entry = RateEntry::new("runecraft", 0).with_methods(vec![
            Method::new(0, 1, "a").with_bonus("mining", 0.1).with_bonus("crafting", 0.05),
            Method::new(10, 1, "b").with_bonus("crafting", 0.05).with_bonus("mining", 0.2),
        ]);
        let out = reconcile(&entry, &[]);
        let seen: Vec<(&str, u64, u64)> = out
            .iter()
            .map(|w| (w.bonus_skill.as_str(), w.start_exp, w.end_exp))
            .collect();
        assert_eq!(seen, [("mining", 0, 10), ("mining", 10, MAX_EXP), ("crafting", 0, MAX_EXP)]);
        // Consumer keys skills by id, so the origin is `runecrafting`, not the page's `runecraft`
        assert!(out.iter().all(|w| w.origin_skill == "runecrafting"));
    }

    #[test]
    fn equal_ratios_merge_across_a_bonus_free_method() {
        let entry = RateEntry::new("mining", 0).with_methods(vec![
            Method::new(0, 1, "a").with_bonus("smithing", 0.5),
            Method::new(1_000, 1, "b"),
            Method::new(2_000, 1, "c").with_bonus("smithing", 0.5),
        ]);
        let out = reconcile(&entry, &[]);
        // Neighbours within the group, not neighbours on the page: the gap is covered
        assert_eq!(spans(&out), [(0, MAX_EXP, 0.5)]);
    }

    #[test]
    fn end_flag_needs_a_zero_start_entry_for_the_bonus_skill() {
        let entry = mining(0.5);
        let smithing_from_zero = RateEntry::new("smithing", 0);
        let smithing_offset = RateEntry::new("smithing", 13_034_431);

        let with_zero = [entry.clone(), smithing_from_zero];
        assert!(reconcile(&with_zero[0], &with_zero)[0].end);

        let with_offset = [entry.clone(), smithing_offset];
        assert!(!reconcile(&with_offset[0], &with_offset)[0].end);

        assert!(!reconcile(&entry, std::slice::from_ref(&entry))[0].end);
    }

    #[test]
    fn no_methods_or_no_bonuses_yield_nothing() {
        assert!(reconcile(&RateEntry::new("agility", 0), &[]).is_empty());
        let entry = RateEntry::new("agility", 0).with_methods(vec![Method::new(0, 1, "laps")]);
        assert!(reconcile(&entry, &[]).is_empty());
    }

    #[test]
    fn windows_are_contiguous_and_cover_the_raw_range() {
        let patterns: &[&[f64]] = &[
            &[0.5],
            &[0.5, 0.5, 0.5],
            &[0.1, 0.2, 0.3],
            &[0.1, 0.1, 0.2, 0.2, 0.1],
            &[0.3, 0.1, 0.1, 0.1, 0.3, 0.3],
        ];
        for ratios in patterns {
            let methods = ratios
                .iter()
                .enumerate()
                .map(|(i, r)| Method::new(i as u64 * 1_000, 1, "m").with_bonus("smithing", *r))
                .collect();
            let entry = RateEntry::new("mining", 0).with_methods(methods);

            let raw = raw_windows(&entry, &[]);
            let out = reconcile(&entry, &[]);

            assert_eq!(out.first().map(|w| w.start_exp), raw.first().map(|w| w.start_exp));
            assert_eq!(out.last().map(|w| w.end_exp), raw.last().map(|w| w.end_exp));
            for pair in out.windows(2) {
                assert_eq!(pair[0].end_exp, pair[1].start_exp, "gap or overlap for {ratios:?}");
                assert_ne!(pair[0].ratio, pair[1].ratio, "unmerged run for {ratios:?}");
            }
        }
    }

    #[test]
    fn reconciling_the_output_again_changes_nothing() {
        let entry = RateEntry::new("runecraft", 0).with_methods(vec![
            Method::new(0, 1, "a").with_bonus("mining", 0.1),
            Method::new(100, 1, "b").with_bonus("mining", 0.1),
            Method::new(200, 1, "c").with_bonus("mining", 0.2),
            Method::new(300, 1, "d").with_bonus("mining", 0.1),
        ]);
        let once = reconcile(&entry, &[]);

        // Feed each emitted window back in as a single method
        let again = RateEntry::new("runecraft", 0).with_methods(
            once.iter()
                .map(|w| Method::new(w.start_exp, 1, "w").with_bonus(w.bonus_skill.clone(), w.ratio))
                .collect(),
        );
        assert_eq!(reconcile(&again, &[]), once);
    }
}
