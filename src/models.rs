use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::filtering::Page;
use crate::record::Record;

/// Query parameters accepted by the compound listing.
///
/// # Filtering
/// - **Free text search:** `query=actin`, optionally restricted with repeated
///   `fields=Compound&fields=Target`
/// - **Numeric windows:** `min_molweight`, `max_molweight`, `min_ic50`, `max_ic50`
/// - **Categorical:** `activity`, `reversibility` (`+`, `-`, `not tested`, or any text)
/// - **Quantity:** `quantity_type` = `numeric` | `available` | `not available`,
///   with `min_quantity` / `max_quantity` for `numeric`
///
/// # Pagination
/// `page` (1-based) and `per_page`.
///
/// Parsing is lenient: a malformed number is treated as if it was not given.
#[derive(Debug, Clone, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterOptions {
    /// Case-insensitive search text.
    #[param(example = "actin")]
    pub query: Option<String>,
    /// Page number (1-based).
    #[param(example = 1)]
    pub page: Option<i64>,
    /// Number of items per page.
    #[param(example = 20)]
    pub per_page: Option<i64>,
    pub min_molweight: Option<f64>,
    pub max_molweight: Option<f64>,
    pub min_ic50: Option<f64>,
    pub max_ic50: Option<f64>,
    /// Substring of the actin disruption activity.
    #[param(example = "active")]
    pub activity: Option<String>,
    #[param(example = "+")]
    pub reversibility: Option<String>,
    /// `numeric`, `available` or `not available`.
    #[param(example = "numeric")]
    pub quantity_type: Option<String>,
    pub min_quantity: Option<f64>,
    pub max_quantity: Option<f64>,
    /// Field names to restrict the search to; repeat the parameter for several.
    pub fields: Vec<String>,
}

impl FilterOptions {
    /// Collect options from decoded query-string pairs. Unknown keys are ignored
    /// and `fields` may repeat.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                "query" => options.query = Some(value),
                "page" => options.page = parse_int(&value),
                "per_page" => options.per_page = parse_int(&value),
                "min_molweight" => options.min_molweight = parse_float(&value),
                "max_molweight" => options.max_molweight = parse_float(&value),
                "min_ic50" => options.min_ic50 = parse_float(&value),
                "max_ic50" => options.max_ic50 = parse_float(&value),
                "activity" => options.activity = Some(value),
                "reversibility" => options.reversibility = Some(value),
                "quantity_type" => options.quantity_type = Some(value),
                "min_quantity" => options.min_quantity = parse_float(&value),
                "max_quantity" => options.max_quantity = parse_float(&value),
                "fields" => options.fields.push(value),
                _ => {}
            }
        }
        options
    }
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|number| number.is_finite())
}

/// One page of the compound listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<Record>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl From<Page<Record>> for ItemsResponse {
    fn from(page: Page<Record>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// A single compound with the ids of its neighbours in load order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDetailResponse {
    pub item: Record,
    pub prev_idx: Option<i64>,
    pub next_idx: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of compounds in the current snapshot.
    pub data_loaded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_collects_known_keys() {
        let options = FilterOptions::from_pairs([
            ("query", "actin"),
            ("page", "2"),
            ("per_page", "50"),
            ("min_ic50", "0.5"),
            ("fields", "Compound"),
            ("fields", "Target"),
            ("unknown", "ignored"),
        ]);
        assert_eq!(options.query.as_deref(), Some("actin"));
        assert_eq!(options.page, Some(2));
        assert_eq!(options.per_page, Some(50));
        assert_eq!(options.min_ic50, Some(0.5));
        assert_eq!(options.fields, vec!["Compound", "Target"]);
    }

    #[test]
    fn test_malformed_numbers_are_unset() {
        let options = FilterOptions::from_pairs([
            ("page", "two"),
            ("min_molweight", ""),
            ("max_molweight", "NaN"),
            ("max_quantity", "lots"),
        ]);
        assert_eq!(options.page, None);
        assert_eq!(options.min_molweight, None);
        assert_eq!(options.max_molweight, None);
        assert_eq!(options.max_quantity, None);
    }
}
