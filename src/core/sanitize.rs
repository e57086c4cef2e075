// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Keep only ASCII digits and parse them. `"12,345 xp"` → 12345.
/// No digits at all (`"-"`, `""`) reads as zero: a missing rate is a zero rate.
pub fn to_int(s: &str) -> u64 {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Like `to_int`, but keeps the decimal point. `"1,234.5"` → 1234.5.
pub fn to_float(s: &str) -> f64 {
    let kept: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    kept.parse().unwrap_or(0.0)
}

/// Cell text that means "nothing here".
pub fn is_blank_cell(s: &str) -> bool {
    matches!(s.trim(), "" | "-")
}
