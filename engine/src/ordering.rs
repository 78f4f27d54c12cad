//! Generic ordering engine for table views.
//!
//! Given a collection of records and a declarative [`SortConfig`], produces
//! a new ordered collection without mutating the input. Records expose their
//! fields through a caller-supplied accessor returning a [`SortValue`], so
//! the engine needs no runtime type inspection.
//!
//! # Comparison rules
//!
//! 1. Two absent values are equal
//! 2. An absent value sorts after a present one, in BOTH directions
//! 3. Numbers compare numerically
//! 4. Strings compare case-insensitively, case-sensitive tiebreak
//! 5. Booleans: false < true
//! 6. Mixed types compare by their text rendering
//!
//! Rule 2 is intentionally exempt from direction reversal: a column of
//! mostly-empty cells keeps its empty tail at the bottom whichever way the
//! header is toggled.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Natural order (default)
    #[default]
    Ascending,
    /// Reversed order
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A scalar value extracted from a record for comparison.
///
/// Accessors map absent or unknown fields to [`SortValue::Null`], which
/// always sorts last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum SortValue {
    /// Absent or unknown
    Null,
    /// Numeric field
    Number(f64),
    /// Textual field
    Text(String),
    /// Boolean field
    Flag(bool),
}

impl SortValue {
    /// Build from an optional string slice.
    pub fn from_opt_text(value: Option<&str>) -> Self {
        match value {
            Some(s) => SortValue::Text(s.to_string()),
            None => SortValue::Null,
        }
    }

    /// Check whether this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, SortValue::Null)
    }

    /// Render as text, for mixed-type comparison.
    fn to_text(&self) -> String {
        match self {
            SortValue::Null => String::new(),
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.clone(),
            SortValue::Flag(b) => b.to_string(),
        }
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Flag(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

/// Active sort configuration: one field, one direction.
///
/// Generic over the caller's field enum. Remembers the configuration it was
/// constructed with, so [`SortConfig::reset`] can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig<F> {
    /// Currently active field
    pub field: F,
    /// Currently active direction
    pub direction: SortDirection,
    default_field: F,
    default_direction: SortDirection,
}

impl<F: Copy + PartialEq> SortConfig<F> {
    /// Create a configuration; the given pair is also the reset target.
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self {
            field,
            direction,
            default_field: field,
            default_direction: direction,
        }
    }

    /// Activate a field, header-click style.
    ///
    /// Re-activating the current field flips the direction; a different
    /// field becomes active ascending.
    pub fn set_field(&mut self, field: F) {
        if field == self.field {
            self.direction = self.direction.flip();
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Set field and direction unconditionally, bypassing the toggle rule.
    pub fn set_explicit(&mut self, field: F, direction: SortDirection) {
        self.field = field;
        self.direction = direction;
    }

    /// Restore the construction-time field and direction.
    pub fn reset(&mut self) {
        self.field = self.default_field;
        self.direction = self.default_direction;
    }
}

/// Compare two values under a direction.
///
/// Null handling is NOT negated by direction; everything else is.
pub fn compare(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    use SortValue::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Null, _) => Ordering::Greater,
        (_, Null) => Ordering::Less,
        _ => {
            let ordering = match (a, b) {
                (Number(x), Number(y)) => x.total_cmp(y),
                (Text(x), Text(y)) => compare_text(x, y),
                (Flag(x), Flag(y)) => x.cmp(y),
                _ => compare_text(&a.to_text(), &b.to_text()),
            };
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Case-insensitive text comparison with a case-sensitive tiebreak.
fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Produce an ordered copy of `items` under `config`.
///
/// `key` extracts the sortable value for a record and field. The sort is
/// stable, so records comparing equal keep their input order. The input is
/// never mutated; an empty input yields an empty output.
pub fn sort<T, F>(
    items: &[T],
    config: &SortConfig<F>,
    key: impl Fn(&T, F) -> SortValue,
) -> Vec<T>
where
    T: Clone,
    F: Copy + PartialEq,
{
    let mut ordered: Vec<T> = items.to_vec();
    ordered.sort_by(|a, b| {
        compare(
            &key(a, config.field),
            &key(b, config.field),
            config.direction,
        )
    });
    ordered
}
