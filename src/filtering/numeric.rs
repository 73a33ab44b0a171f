use regex::Regex;
use std::sync::LazyLock;

use crate::record::FieldValue;

/// Signed decimal token: optional sign, then digits with an optional fraction,
/// or a bare fraction such as `.5`. ASCII digits only.
static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)").expect("number token pattern is valid")
});

/// Derive a number from a field value.
///
/// Numbers are returned as-is. Text is scanned left to right for the first
/// signed decimal token, so `"3.47 mg"` yields `3.47` and `"8 µM"` yields `8`.
/// `Empty` and text without any digits yield `None`.
#[must_use]
pub fn extract_number(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(number) => number.as_f64(),
        FieldValue::Text(text) => extract_number_from_text(text),
        FieldValue::Empty => None,
    }
}

/// Text form of [`extract_number`].
#[must_use]
pub fn extract_number_from_text(text: &str) -> Option<f64> {
    NUMBER_TOKEN
        .find(text)
        .and_then(|token| token.as_str().parse::<f64>().ok())
}
