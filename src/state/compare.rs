use std::cmp::Ordering;

use chrono::{NaiveDate, TimeDelta};
use serde_json::Value;

use crate::state::data_model::display_value;
use crate::state::normalize::normalize;

/// Orders two cells of the same column.
///
/// Checks run in a fixed order: both cells `DD/MM/YYYY` (or `-`-separated)
/// dates compare chronologically, both numeric compare by value, anything
/// else falls back to a case- and accent-aware text ordering. Missing cells
/// behave as empty text. Never panics on mixed types.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(left), Some(right)) = (date_text(a), date_text(b)) {
        return compare_dates(left, right);
    }

    if let (Some(left), Some(right)) = (numeric_value(a), numeric_value(b)) {
        return left.partial_cmp(&right).unwrap_or(Ordering::Equal);
    }

    compare_text(&cell_text(a), &cell_text(b))
}

/// Dates never compare equal: the left side wins only when strictly later,
/// every other case (equal or unparseable) reports `Less`. Callers that sort
/// must tolerate that, see `sort::stable_sort_by`.
fn compare_dates(left: &str, right: &str) -> Ordering {
    match (parse_date(left), parse_date(right)) {
        (Some(a), Some(b)) if a > b => Ordering::Greater,
        _ => Ordering::Less,
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    normalize(left)
        .cmp(&normalize(right))
        .then_with(|| left.cmp(right))
}

fn cell_text(value: Option<&Value>) -> String {
    value.map(display_value).unwrap_or_default()
}

fn date_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if is_date_string(s) => Some(s.as_str()),
        _ => None,
    }
}

/// `DD/DD/DDDD` or `DD-DD-DDDD`; each separator is checked on its own.
pub fn is_date_string(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            2 | 5 => *b == b'/' || *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Days past the end of the month roll into the next one (`31/02/2020` is
/// 2 March 2020) and day `00` is the last day of the previous month. Months
/// outside 1..=12 do not parse.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let day: i64 = text.get(0..2)?.parse().ok()?;
    let month = text.get(3..5)?.parse().ok()?;
    let year = text.get(6..10)?.parse().ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::days(day - 1))
}

fn numeric_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric_text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Optional sign, digits, optional fraction, optional exponent; surrounding
/// whitespace allowed.
pub fn is_numeric_text(text: &str) -> bool {
    let mut chars = text.trim().chars().peekable();

    if matches!(chars.peek(), Some('+' | '-')) {
        chars.next();
    }
    if !take_digits(&mut chars) {
        return false;
    }
    if chars.peek() == Some(&'.') {
        chars.next();
        if !take_digits(&mut chars) {
            return false;
        }
    }
    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        if !take_digits(&mut chars) {
            return false;
        }
    }
    chars.next().is_none()
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> bool {
    let mut seen = false;
    while chars.peek().is_some_and(char::is_ascii_digit) {
        chars.next();
        seen = true;
    }
    seen
}
