use crate::record::{FieldValue, Fields};

/// Normalize a field name for flexible matching: drop all whitespace and lowercase.
///
/// `"Total MolWeight"` and `"totalmolweight"` normalize to the same string.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve `target` against the record's field names.
///
/// Two passes over the fields in source order:
/// 1. the first field whose normalized name equals the normalized target;
/// 2. the first field whose normalized name contains, or is contained by, the
///    normalized target.
///
/// Names that normalize to the empty string never take part in the substring
/// pass, otherwise they would match every target.
#[must_use]
pub fn resolve_field<'a>(fields: &'a Fields, target: &str) -> Option<&'a FieldValue> {
    let target = normalize_name(target);

    let normalized: Vec<(String, &FieldValue)> = fields
        .iter()
        .map(|(name, value)| (normalize_name(name), value))
        .collect();

    if let Some((_, value)) = normalized.iter().find(|(name, _)| *name == target) {
        return Some(*value);
    }

    if target.is_empty() {
        return None;
    }

    normalized
        .iter()
        .find(|(name, _)| !name.is_empty() && (name.contains(&target) || target.contains(name.as_str())))
        .map(|(_, value)| *value)
}

/// Prefer the first exact key in `keys` that holds a value, else fall back to
/// flexible resolution of `logical`.
///
/// An [`FieldValue::Empty`] under an exact key counts as absent.
#[must_use]
pub fn exact_or_resolve<'a>(fields: &'a Fields, keys: &[&str], logical: &str) -> Option<&'a FieldValue> {
    keys.iter()
        .filter_map(|key| fields.get(key))
        .find(|value| !value.is_empty())
        .or_else(|| resolve_field(fields, logical))
}
