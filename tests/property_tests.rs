use proptest::prelude::*;
use serde_json::json;

use tablequick::state::config::TableConfig;
use tablequick::state::data_model::{Header, Row, RowId};
use tablequick::state::normalize::normalize;
use tablequick::state::table_state::TableState;

fn state_with(values: &[i64], page_size: usize) -> TableState {
    let config = TableConfig {
        page_size,
        ..TableConfig::default()
    };
    let mut state = TableState::new(vec![Header::new("V", "v", true)], config);
    state.set_rows(
        values
            .iter()
            .map(|v| Row::new([("v".to_string(), json!(v))].into_iter().collect()))
            .collect(),
    );
    state
}

proptest! {
    #[test]
    fn prop_pages_partition_working_set(
        values in prop::collection::vec(-50i64..50, 0..40),
        page_size in 1usize..12,
    ) {
        let mut state = state_with(&values, page_size);
        prop_assert_eq!(state.page_count(), values.len().div_ceil(page_size));

        let mut seen: Vec<RowId> = state.page_rows().to_vec();
        while state.next_page() {
            prop_assert!(state.page_rows().len() <= page_size);
            seen.extend_from_slice(state.page_rows());
        }
        prop_assert_eq!(seen.as_slice(), state.working_set());
    }

    #[test]
    fn prop_three_toggles_restore_order(values in prop::collection::vec(-50i64..50, 0..30)) {
        let mut state = state_with(&values, 10);
        let before = state.working_set().to_vec();
        for _ in 0..3 {
            state.sort_by_column_toggle("v").unwrap();
        }
        prop_assert_eq!(state.working_set(), before.as_slice());
        prop_assert!(state.sort_spec().is_none());
    }

    #[test]
    fn prop_ascending_sort_is_ordered(values in prop::collection::vec(-50i64..50, 0..30)) {
        let mut state = state_with(&values, 10);
        state.sort_by_column_toggle("v").unwrap();
        let sorted: Vec<i64> = state
            .working_set()
            .iter()
            .map(|id| values[id.0])
            .collect();
        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_filter_result_is_subsequence(
        values in prop::collection::vec(0i64..200, 0..30),
        needle in "[0-9]{1,2}",
    ) {
        let mut state = state_with(&values, 10);
        state.set_filter_text("v", &needle).unwrap();
        let working = state.working_set();
        prop_assert!(working.windows(2).all(|pair| pair[0] < pair[1]));
        for (idx, value) in values.iter().enumerate() {
            let expected = value.to_string().contains(needle.as_str());
            prop_assert_eq!(working.contains(&RowId(idx)), expected);
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(text in "[a-zA-Z0-9À-ÿ ]{0,20}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
