use serde_json::{json, Value};

use tablequick::state::config::TableConfig;
use tablequick::state::data_model::{Header, Row, RowId};
use tablequick::state::error::TableError;
use tablequick::state::filter::{build_pattern, compile_pattern, FilterState, RegExpType};
use tablequick::state::table_state::TableState;

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => Row::new(map.into_iter().collect()),
        other => panic!("fixture row must be an object, got {other}"),
    }
}

fn sample_state() -> TableState {
    let mut state = TableState::new(
        vec![
            Header::new("Name", "name", true),
            Header::new("City", "city", true),
            Header::new("Age", "age", true),
        ],
        TableConfig::default(),
    );
    state.set_rows(vec![
        row(json!({ "name": "José", "city": "Málaga", "age": 30 })),
        row(json!({ "name": "Ana", "city": "Sevilla", "age": 25 })),
        row(json!({ "name": "Jose Luis", "city": "Madrid", "age": 41 })),
        row(json!({ "name": "Lucía", "city": "Malaga", "age": 25 })),
    ]);
    state
}

fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn pattern_matches(mode: RegExpType, subject: &str) -> bool {
    let source = build_pattern(mode, &fields(&["ab", "cd"]));
    compile_pattern(&source).unwrap().is_match(subject).unwrap()
}

#[test]
fn test_pattern_templates() {
    let f = fields(&["ab", "cd"]);
    assert_eq!(build_pattern(RegExpType::Contains, &f), "ab|cd");
    assert_eq!(build_pattern(RegExpType::NotContains, &f), "^((?!(ab|cd)).)*$");
    assert_eq!(build_pattern(RegExpType::Equals, &f), "^(ab|cd)$");
    assert_eq!(build_pattern(RegExpType::NotEquals, &f), "^(?!(ab|cd)$).*$");
    assert_eq!(build_pattern(RegExpType::StartsWith, &f), "^(ab|cd)");
    assert_eq!(build_pattern(RegExpType::NotStartsWith, &f), "^(?!(ab|cd).*$).*$");
    assert_eq!(build_pattern(RegExpType::EndsWith, &f), "(ab|cd)$");
    assert_eq!(build_pattern(RegExpType::NotEndsWith, &f), "^(?!.*(ab|cd)$).*$");
}

#[test]
fn test_contains_pattern() {
    assert!(pattern_matches(RegExpType::Contains, "xaby"));
    assert!(pattern_matches(RegExpType::Contains, "zcdq"));
    assert!(!pattern_matches(RegExpType::Contains, "xyz"));
}

#[test]
fn test_not_contains_pattern() {
    assert!(!pattern_matches(RegExpType::NotContains, "xaby"));
    assert!(pattern_matches(RegExpType::NotContains, "xyz"));
}

#[test]
fn test_equals_patterns() {
    assert!(pattern_matches(RegExpType::Equals, "ab"));
    assert!(pattern_matches(RegExpType::Equals, "cd"));
    assert!(!pattern_matches(RegExpType::Equals, "xaby"));
    assert!(!pattern_matches(RegExpType::NotEquals, "ab"));
    assert!(pattern_matches(RegExpType::NotEquals, "abc"));
}

#[test]
fn test_starts_and_ends_patterns() {
    assert!(pattern_matches(RegExpType::StartsWith, "abxyz"));
    assert!(!pattern_matches(RegExpType::StartsWith, "xab"));
    assert!(!pattern_matches(RegExpType::NotStartsWith, "abx"));
    assert!(pattern_matches(RegExpType::NotStartsWith, "xab"));
    assert!(pattern_matches(RegExpType::EndsWith, "xcd"));
    assert!(!pattern_matches(RegExpType::EndsWith, "cdx"));
    assert!(!pattern_matches(RegExpType::NotEndsWith, "xab"));
    assert!(pattern_matches(RegExpType::NotEndsWith, "abx"));
}

#[test]
fn test_fragments_keep_regex_syntax() {
    let source = build_pattern(RegExpType::Equals, &fields(&["a.c"]));
    let regex = compile_pattern(&source).unwrap();
    assert!(regex.is_match("abc").unwrap());
}

#[test]
fn test_pattern_source_is_normalized_before_compiling() {
    let regex = compile_pattern("^MÁLAGA$").unwrap();
    assert!(regex.is_match("malaga").unwrap());
}

#[test]
fn test_empty_contains_is_not_a_filter() {
    let mut filter = FilterState::new("name");
    assert!(!filter.apply_advanced().unwrap());
    assert!(!filter.is_regexp);
    assert!(!filter.is_active());
}

#[test]
fn test_first_fragment_cannot_be_removed() {
    let mut filter = FilterState::new("name");
    filter.add_field();
    assert_eq!(filter.regexp_fields.len(), 2);
    assert!(!filter.remove_field(0));
    assert!(filter.remove_field(1));
    assert!(!filter.remove_field(1));
    assert_eq!(filter.regexp_fields.len(), 1);
}

#[test]
fn test_simple_filter_ignores_case_and_accents() {
    let mut state = sample_state();
    state.set_filter_text("name", "JOSE").unwrap();
    assert_eq!(state.working_set(), &[RowId(0), RowId(2)]);

    state.set_filter_text("name", "jOsÉ").unwrap();
    assert_eq!(state.working_set(), &[RowId(0), RowId(2)]);
}

#[test]
fn test_filters_combine_with_and() {
    let mut state = sample_state();
    state.set_filter_text("city", "malaga").unwrap();
    assert_eq!(state.working_set(), &[RowId(0), RowId(3)]);

    state.set_filter_text("age", "25").unwrap();
    assert_eq!(state.working_set(), &[RowId(3)]);
}

#[test]
fn test_empty_filter_text_keeps_every_row() {
    let mut state = sample_state();
    state.set_filter_text("name", "ana").unwrap();
    assert_eq!(state.working_set().len(), 1);

    state.set_filter_text("name", "").unwrap();
    assert_eq!(state.working_set().len(), 4);
}

#[test]
fn test_whitespace_in_filter_text_is_significant() {
    let mut state = TableState::new(vec![Header::new("Name", "name", true)], TableConfig::default());
    state.set_rows(vec![
        row(json!({ "name": "ana maria" })),
        row(json!({ "name": "ana" })),
    ]);

    state.set_filter_text("name", "ana ").unwrap();
    assert_eq!(state.working_set(), &[RowId(0)]);

    state.set_filter_text("name", " ").unwrap();
    assert_eq!(state.working_set(), &[RowId(0)]);

    state.set_filter_text("name", " ana").unwrap();
    assert!(state.working_set().is_empty());
}

#[test]
fn test_numbers_filter_by_their_text() {
    let mut state = sample_state();
    state.set_filter_text("age", "4").unwrap();
    assert_eq!(state.working_set(), &[RowId(2)]);
}

#[test]
fn test_unknown_column_filter_is_rejected() {
    let mut state = sample_state();
    let err = state.set_filter_text("missing", "x").unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn(key) if key == "missing"));
}

#[test]
fn test_apply_advanced_filter_on_column() {
    let mut state = sample_state();
    state.set_advanced_type("city", RegExpType::Equals).unwrap();
    state
        .set_advanced_field("city", 0, "malaga".to_string())
        .unwrap();
    state.add_advanced_field("city").unwrap();
    state
        .set_advanced_field("city", 1, "MADRID".to_string())
        .unwrap();

    assert!(state.apply_advanced_filter("city").unwrap());
    assert!(state.has_applied_filters());
    assert_eq!(state.filter("city").unwrap().text, "^(malaga|MADRID)$");
    assert_eq!(state.working_set(), &[RowId(0), RowId(2), RowId(3)]);
}

#[test]
fn test_invalid_pattern_fails_and_keeps_previous_state() {
    let mut state = sample_state();
    state
        .set_advanced_field("name", 0, "ana".to_string())
        .unwrap();
    assert!(state.apply_advanced_filter("name").unwrap());
    assert_eq!(state.working_set(), &[RowId(1)]);

    state
        .set_advanced_field("name", 0, "(unclosed".to_string())
        .unwrap();
    let err = state.apply_advanced_filter("name").unwrap_err();
    assert!(matches!(err, TableError::InvalidPattern { ref key, .. } if key == "name"));

    let filter = state.filter("name").unwrap();
    assert!(filter.is_regexp);
    assert_eq!(filter.text, "ana");
    assert_eq!(state.working_set(), &[RowId(1)]);
}

#[test]
fn test_unapply_advanced_filter() {
    let mut state = sample_state();
    state
        .set_advanced_field("name", 0, "ana".to_string())
        .unwrap();
    state.apply_advanced_filter("name").unwrap();

    state.unapply_advanced_filter("name").unwrap();
    let filter = state.filter("name").unwrap();
    assert!(!filter.is_regexp);
    assert!(filter.text.is_empty());
    assert_eq!(state.working_set().len(), 4);
}

#[test]
fn test_advanced_edits_on_hidden_column_are_rejected() {
    let mut state = sample_state();
    state.set_column_visible("city", false).unwrap();

    let err = state.unapply_advanced_filter("city").unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn(key) if key == "city"));
    assert!(state.add_advanced_field("city").is_err());
    assert!(state.remove_advanced_field("city", 1).is_err());
    assert_eq!(state.working_set().len(), 4);
}

#[test]
fn test_unapply_all_only_clears_advanced_filters() {
    let mut state = sample_state();
    state.set_filter_text("city", "mal").unwrap();
    state
        .set_advanced_field("name", 0, "^jos".to_string())
        .unwrap();
    state.apply_advanced_filter("name").unwrap();
    state.set_advanced_type("age", RegExpType::NotContains).unwrap();
    state.set_advanced_field("age", 0, "3".to_string()).unwrap();
    state.apply_advanced_filter("age").unwrap();
    assert_eq!(state.working_set(), &[] as &[RowId]);

    state.unapply_all_filters();
    assert!(!state.has_applied_filters());
    assert_eq!(state.filter("city").unwrap().text, "mal");
    assert_eq!(state.working_set(), &[RowId(0), RowId(3)]);
}

#[test]
fn test_typing_simple_text_replaces_advanced_filter() {
    let mut state = sample_state();
    state
        .set_advanced_field("name", 0, "ana".to_string())
        .unwrap();
    state.apply_advanced_filter("name").unwrap();

    state.set_filter_text("name", "luc").unwrap();
    assert!(!state.has_applied_filters());
    assert_eq!(state.working_set(), &[RowId(3)]);
}
