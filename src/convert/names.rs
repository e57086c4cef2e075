// src/convert/names.rs
//
// Site names → identifiers the rates consumer enumerates.
// Anything not listed passes through after key normalization.

/// Skill spellings that differ between the site and the consumer.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("runecraft", "runecrafting"),
];

/// Boss/activity keys (already normalized) that differ from the consumer's.
const ACTIVITY_ALIASES: &[(&str, &str)] = &[
    ("the_nightmare", "nightmare"),
    ("gauntlet", "the_gauntlet"),
    ("corrupted_gauntlet", "the_corrupted_gauntlet"),
    ("chambers_of_xeric_cm", "chambers_of_xeric_challenge_mode"),
    ("theatre_of_blood_challenge_mode", "theatre_of_blood_hard_mode"),
    ("theatre_of_blood_hm", "theatre_of_blood_hard_mode"),
    ("tombs_of_amascut_expert_mode", "tombs_of_amascut_expert"),
    ("the_inferno", "tzkal_zuk"),
    ("the_fight_caves", "tztok_jad"),
];

fn alias<'a>(table: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(from, _)| *from == key).map(|(_, to)| *to)
}

pub fn skill_id(name: &str) -> String {
    let key = name.trim().to_lowercase();
    match alias(SKILL_ALIASES, &key) {
        Some(id) => s!(id),
        None => key,
    }
}

/// Boss and misc-activity identifier: lowercase, apostrophes dropped, every
/// other run of separators (space, hyphen, colon, …) joined as a single `_`.
pub fn activity_id(name: &str) -> String {
    let key = activity_key(name);
    match alias(ACTIVITY_ALIASES, &key) {
        Some(id) => s!(id),
        None => key,
    }
}

fn activity_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars() {
        if ch == '\'' || ch == '’' {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}
