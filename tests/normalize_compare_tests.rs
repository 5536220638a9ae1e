use std::cmp::Ordering;

use serde_json::{json, Value};

use tablequick::state::compare::{compare_cells, is_date_string, is_numeric_text};
use tablequick::state::normalize::normalize;

fn cmp(a: Value, b: Value) -> Ordering {
    compare_cells(Some(&a), Some(&b))
}

#[test]
fn test_normalize_strips_accents_and_case() {
    assert_eq!(normalize("Ábçdé"), "abcde");
    assert_eq!(normalize("ÉCOLE"), "ecole");
    assert_eq!(normalize("Ñandú"), "nandu");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_normalize_leaves_plain_ascii_lowercase() {
    assert_eq!(normalize("already plain 123"), "already plain 123");
}

#[test]
fn test_date_string_shapes() {
    assert!(is_date_string("01/02/2024"));
    assert!(is_date_string("01-02-2024"));
    assert!(is_date_string("01/02-2024"));
    assert!(!is_date_string("1/2/2024"));
    assert!(!is_date_string("2024-01-02"));
    assert!(!is_date_string("01/02/24"));
}

#[test]
fn test_numeric_text_grammar() {
    assert!(is_numeric_text("42"));
    assert!(is_numeric_text(" -1.5e3 "));
    assert!(is_numeric_text("+3"));
    assert!(is_numeric_text("2E-7"));
    assert!(!is_numeric_text("1."));
    assert!(!is_numeric_text(".5"));
    assert!(!is_numeric_text("1e"));
    assert!(!is_numeric_text("abc"));
    assert!(!is_numeric_text(""));
}

#[test]
fn test_dates_compare_day_month_year() {
    assert_eq!(cmp(json!("01/02/2024"), json!("15/01/2024")), Ordering::Greater);
    assert_eq!(cmp(json!("15/01/2024"), json!("01/02/2024")), Ordering::Less);
    assert_eq!(cmp(json!("31-12-1999"), json!("01-01-2000")), Ordering::Less);
}

#[test]
fn test_impossible_days_roll_into_next_month() {
    assert_eq!(cmp(json!("31/02/2020"), json!("01/03/2020")), Ordering::Greater);
    assert_eq!(cmp(json!("31/02/2020"), json!("03/03/2020")), Ordering::Less);
    assert_eq!(cmp(json!("00/03/2020"), json!("28/02/2020")), Ordering::Greater);
    assert_eq!(cmp(json!("30/02/2021"), json!("01/03/2021")), Ordering::Greater);
}

#[test]
fn test_out_of_range_month_reports_less_both_ways() {
    assert_eq!(cmp(json!("01/13/2020"), json!("01/01/2020")), Ordering::Less);
    assert_eq!(cmp(json!("01/01/2020"), json!("01/13/2020")), Ordering::Less);
}

#[test]
fn test_equal_dates_report_less() {
    assert_eq!(cmp(json!("10/10/2010"), json!("10/10/2010")), Ordering::Less);
}

#[test]
fn test_numeric_strings_compare_by_value() {
    assert_eq!(cmp(json!("10"), json!("9")), Ordering::Greater);
    assert_eq!(cmp(json!(2), json!("10")), Ordering::Less);
    assert_eq!(cmp(json!(1.5), json!(1.5)), Ordering::Equal);
}

#[test]
fn test_text_fallback_ignores_case_and_accents_first() {
    assert_eq!(cmp(json!("apple"), json!("Banana")), Ordering::Less);
    assert_eq!(cmp(json!("éclair"), json!("Eclipse")), Ordering::Less);
}

#[test]
fn test_mixed_types_do_not_panic() {
    assert_eq!(cmp(Value::Null, json!(5)), Ordering::Less);
    assert_eq!(cmp(json!(true), json!("abc")), Ordering::Greater);
    assert_eq!(compare_cells(None, Some(&json!("x"))), Ordering::Less);
    assert_eq!(compare_cells(None, None), Ordering::Equal);
}
