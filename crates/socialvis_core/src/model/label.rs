//! Atom label normalization.
//!
//! The upstream model engine disambiguates atom instances by appending a
//! `$N` marker (`Alice$0`, `Public$1`). Canonical identity is the text
//! before the first marker.

/// Separator introduced by the model engine between a name and its index.
pub const DISAMBIGUATION_MARKER: char = '$';

/// Canonical label text for a boolean `true` atom.
pub const TRUE_LABEL: &str = "True";
/// Canonical label text for a boolean `false` atom.
pub const FALSE_LABEL: &str = "False";

/// Returns the canonical form of `label`.
///
/// # Contract
/// - Returns the substring before the first `$`.
/// - Returns the whole label when no marker is present.
/// - Idempotent: `clean_label(clean_label(x)) == clean_label(x)`.
pub fn clean_label(label: &str) -> &str {
    match label.find(DISAMBIGUATION_MARKER) {
        Some(index) => &label[..index],
        None => label,
    }
}

/// Cleans an optional label; an absent label cleans to the empty string.
pub fn clean_optional_label(label: Option<&str>) -> &str {
    label.map(clean_label).unwrap_or("")
}

/// Returns whether a boolean column label canonically reads `True`.
pub fn is_true_label(label: &str) -> bool {
    clean_label(label) == TRUE_LABEL
}
