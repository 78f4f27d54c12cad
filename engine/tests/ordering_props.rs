//! Property tests for the ordering engine.
//!
//! These check the ordering invariants over arbitrary collections: the
//! output is a permutation of the input, sorting is idempotent, direction
//! reversal flips everything except the null tail, and nulls always land
//! last.

use proptest::prelude::*;
use syndic_engine::ordering::{self, SortConfig, SortDirection, SortValue};

/// A minimal record with a nullable sort field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Row {
    id: u32,
    amount: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowField {
    Amount,
}

fn row_value(row: &Row, _field: RowField) -> SortValue {
    row.amount
        .map(|a| SortValue::Number(a as f64))
        .unwrap_or(SortValue::Null)
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (any::<u32>(), prop::option::of(-1_000_000i64..1_000_000)),
        0..64,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, amount)| Row { id, amount })
            .collect()
    })
}

fn sorted(rows: &[Row], direction: SortDirection) -> Vec<Row> {
    let config = SortConfig::new(RowField::Amount, direction);
    ordering::sort(rows, &config, row_value)
}

proptest! {
    #[test]
    fn output_is_permutation_of_input(rows in arb_rows()) {
        let ordered = sorted(&rows, SortDirection::Ascending);

        let mut expected = rows.clone();
        let mut actual = ordered.clone();
        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn sorting_is_idempotent(rows in arb_rows()) {
        let once = sorted(&rows, SortDirection::Descending);
        let twice = sorted(&once, SortDirection::Descending);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nulls_always_last(rows in arb_rows()) {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let ordered = sorted(&rows, direction);
            let first_null = ordered.iter().position(|r| r.amount.is_none());
            if let Some(pos) = first_null {
                prop_assert!(
                    ordered[pos..].iter().all(|r| r.amount.is_none()),
                    "present value after a null at {} in {:?}",
                    pos,
                    direction
                );
            }
        }
    }

    #[test]
    fn descending_reverses_present_keys(rows in arb_rows()) {
        let asc = sorted(&rows, SortDirection::Ascending);
        let desc = sorted(&rows, SortDirection::Descending);

        let asc_keys: Vec<i64> = asc.iter().filter_map(|r| r.amount).collect();
        let mut desc_keys: Vec<i64> = desc.iter().filter_map(|r| r.amount).collect();
        desc_keys.reverse();

        prop_assert_eq!(asc_keys, desc_keys);
    }

    #[test]
    fn length_and_null_count_preserved(rows in arb_rows()) {
        let ordered = sorted(&rows, SortDirection::Ascending);
        prop_assert_eq!(ordered.len(), rows.len());
        prop_assert_eq!(
            ordered.iter().filter(|r| r.amount.is_none()).count(),
            rows.iter().filter(|r| r.amount.is_none()).count()
        );
    }
}
