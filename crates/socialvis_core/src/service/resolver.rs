//! Boolean tuple resolver.
//!
//! # Invariants
//! - Subjects match on the raw atom label (suffix included).
//! - Membership keeps relation order and drops repeated objects.
//! - Unary lookups take the first matching tuple; later duplicates are ignored.

use crate::model::label::is_true_label;
use crate::relation::Row;

/// Objects related to `subject` by a `(subject, object, boolean)` predicate
/// whose boolean column cleans to `True`.
pub fn member_objects<'a>(rows: &'a [Row], subject: &str) -> Vec<&'a str> {
    let mut objects: Vec<&'a str> = Vec::new();
    for row in rows {
        let [row_subject, object, flag] = row.as_slice() else {
            continue;
        };
        if row_subject == subject && is_true_label(flag) && !objects.contains(&object.as_str()) {
            objects.push(object.as_str());
        }
    }
    objects
}

/// Value of a `(subject, value)` attribute for `subject`, or `default` when
/// no tuple mentions it.
pub fn unary_value<'a>(rows: &'a [Row], subject: &str, default: &'a str) -> &'a str {
    rows.iter()
        .find_map(|row| match row.as_slice() {
            [row_subject, value] if row_subject == subject => Some(value.as_str()),
            _ => None,
        })
        .unwrap_or(default)
}

/// First column of every row of an entity relation.
pub fn entity_atoms(rows: &[Row]) -> Vec<&str> {
    rows.iter()
        .filter_map(|row| row.first().map(String::as_str))
        .collect()
}
