//! Independent boolean tests over one record's fields.
//!
//! Every predicate is opt-in: an absent constraint passes. Missing fields are
//! never errors. A numeric bound against a value with no number fails; a text
//! filter against a missing value compares against the empty string.

use super::fields::{exact_or_resolve, resolve_field};
use super::numeric::extract_number;
use super::query::{NumericRange, QuantityMode};
use crate::record::{FieldValue, Fields};

/// Exact keys tried before flexible matching for the activity column.
pub const ACTIVITY_KEYS: &[&str] = &["Actin Disruption Activity"];
pub const ACTIVITY_FIELD: &str = "actindisruptionactivity";

/// "Reversibilty" is how the column is spelled in the source data.
pub const REVERSIBILITY_KEYS: &[&str] = &["Reversibilty", "Reversibility"];
pub const REVERSIBILITY_FIELD: &str = "reversibility";

pub const QUANTITY_FIELD: &str = "quantity";

const NOT_TESTED: &str = "not tested";
const AVAILABLE: &str = "available";

fn lowercase_text(value: Option<&FieldValue>) -> String {
    value.map(FieldValue::to_text).unwrap_or_default().to_lowercase()
}

/// Inclusive min/max test on the number extracted from `value`.
#[must_use]
pub fn numeric_range(value: Option<&FieldValue>, range: NumericRange) -> bool {
    if range.is_unbounded() {
        return true;
    }
    value
        .and_then(extract_number)
        .is_some_and(|number| range.contains(number))
}

/// Case-insensitive containment of `needle` in the stringified value.
#[must_use]
pub fn text_contains(value: Option<&FieldValue>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    lowercase_text(value).contains(&needle.to_lowercase())
}

/// Case-insensitive containment in the actin disruption activity column.
#[must_use]
pub fn activity_matches(fields: &Fields, activity: Option<&str>) -> bool {
    let Some(activity) = activity.filter(|activity| !activity.is_empty()) else {
        return true;
    };
    text_contains(exact_or_resolve(fields, ACTIVITY_KEYS, ACTIVITY_FIELD), activity)
}

/// Reversibility uses literal sign matching before falling back to containment.
///
/// Branches are tried in order: `"+"`, `"-"`, `"not tested"` (any case), then
/// generic case-insensitive containment. A filter of `"+"` therefore matches
/// `"+/-"` but not `"-"`.
#[must_use]
pub fn reversibility_matches(fields: &Fields, reversibility: Option<&str>) -> bool {
    let Some(filter) = reversibility.filter(|filter| !filter.is_empty()) else {
        return true;
    };

    let value = exact_or_resolve(fields, REVERSIBILITY_KEYS, REVERSIBILITY_FIELD)
        .map(FieldValue::to_text)
        .unwrap_or_default();
    let value = value.trim();

    match filter {
        "+" => value.contains('+'),
        "-" => value.contains('-'),
        _ if filter.eq_ignore_ascii_case(NOT_TESTED) => value.to_lowercase().contains(NOT_TESTED),
        _ => value.to_lowercase().contains(&filter.to_lowercase()),
    }
}

/// Quantity test for the selected [`QuantityMode`]; no mode passes everything.
#[must_use]
pub fn quantity_matches(fields: &Fields, mode: Option<QuantityMode>, range: NumericRange) -> bool {
    let Some(mode) = mode else {
        return true;
    };

    let value = resolve_field(fields, QUANTITY_FIELD);
    let is_available = || lowercase_text(value) == AVAILABLE;

    match mode {
        QuantityMode::Numeric => numeric_range(value, range),
        QuantityMode::Available => is_available(),
        QuantityMode::NotAvailable => !(is_available() || value.and_then(extract_number).is_some()),
    }
}

/// Free-text search, OR across fields.
///
/// Candidates are `search_fields` when given, otherwise every field on the
/// record. Each candidate is looked up by exact key first, then flexibly.
#[must_use]
pub fn search_matches(fields: &Fields, search_text: &str, search_fields: &[String]) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    let hit = |name: &str| {
        exact_or_resolve(fields, &[name], name)
            .filter(|value| !value.is_empty())
            .is_some_and(|value| value.to_text().to_lowercase().contains(&needle))
    };

    if search_fields.is_empty() {
        fields.keys().any(hit)
    } else {
        search_fields.iter().map(String::as_str).any(hit)
    }
}
