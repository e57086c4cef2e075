// src/emit.rs
//
// serde_json::Value → the rates consumer's module text.
//
// Not JSON: the consumer's build step runs the output through a code formatter,
// so we only need something that parses as an object literal:
//   { startExp: 200_000_000, ratio: 0.5, description: 'Iron ore' }
// - keys bare (quoted only if not an identifier)
// - strings single-quoted
// - integers grouped with `_`
// - floats in `%g` form

use serde_json::{Number, Value};

use crate::config::consts::{INDENT, MODULE_PREAMBLE, MODULE_TERMINATOR};

/// Significant digits for floats, as printf's `%g`.
const G_PRECISION: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// One item per line, indented.
    Pretty,
    /// Everything on one line; the formatter picks the compact style for it.
    Compact,
}

/// A whole module: preamble, value, terminator.
pub fn render_module(value: &Value, layout: Layout) -> String {
    join!(MODULE_PREAMBLE, &render(value, layout), MODULE_TERMINATOR)
}

pub fn render(value: &Value, layout: Layout) -> String {
    let mut out = s!();
    write_value(&mut out, value, 0, layout);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, layout: Layout) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_str(out, s),
        Value::Array(items) => write_block(
            out,
            ('[', ']'),
            items.len(),
            items.iter().map(|v| (None, v)),
            depth,
            layout,
        ),
        Value::Object(map) => write_block(
            out,
            ('{', '}'),
            map.len(),
            map.iter().map(|(k, v)| (Some(k.as_str()), v)),
            depth,
            layout,
        ),
    }
}

fn write_block<'a>(
    out: &mut String,
    (open, close): (char, char),
    len: usize,
    items: impl Iterator<Item = (Option<&'a str>, &'a Value)>,
    depth: usize,
    layout: Layout,
) {
    out.push(open);
    if len == 0 {
        out.push(close);
        return;
    }

    for (i, (key, value)) in items.enumerate() {
        if i > 0 {
            out.push(',');
            if layout == Layout::Compact {
                out.push(' ');
            }
        }
        if layout == Layout::Pretty {
            out.push('\n');
            indent(out, depth + 1);
        }
        if let Some(key) = key {
            write_key(out, key);
            out.push_str(": ");
        }
        write_value(out, value, depth + 1, layout);
    }

    if layout == Layout::Pretty {
        out.push('\n');
        indent(out, depth);
    }
    out.push(close);
}

fn indent(out: &mut String, depth: usize) {
    out.extend(std::iter::repeat_n(' ', depth * INDENT));
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_str(out, key);
    }
}

fn write_str(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn format_number(n: &Number) -> String {
    if let Some(u) = n.as_u64() {
        group_digits(&u.to_string())
    } else if let Some(i) = n.as_i64() {
        join!("-", &group_digits(&i.unsigned_abs().to_string()))
    } else {
        format_g(n.as_f64().unwrap_or_default())
    }
}

/// `200000000` → `200_000_000`
pub fn group_digits(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }
    out
}

/// printf `%g`: six significant digits, trailing zeros dropped, exponent form
/// below 1e-4 or from 1e6 up (`1e+06`).
pub fn format_g(x: f64) -> String {
    if x.is_nan() {
        return s!("NaN");
    }
    if x.is_infinite() {
        return s!(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if x == 0.0 {
        return s!("0");
    }

    // Round to the precision first; the exponent of the *rounded* value decides the form
    let sci = format!("{:.*e}", G_PRECISION - 1, x);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= G_PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.unsigned_abs())
    } else {
        let decimals = (G_PRECISION as i32 - 1 - exp) as usize;
        s!(trim_fraction(&format!("{x:.decimals$}")))
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
