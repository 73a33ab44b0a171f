use super::pagination::{PageLimits, PageRequest};
use crate::models::FilterOptions;

/// Inclusive numeric bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    /// Non-finite bounds are dropped.
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|bound| bound.is_finite()),
            max: max.filter(|bound| bound.is_finite()),
        }
    }

    #[must_use]
    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    #[must_use]
    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    #[must_use]
    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// How the quantity field is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityMode {
    /// Quantity must parse as a number inside the query's quantity range.
    Numeric,
    /// Quantity must read "available".
    Available,
    /// Quantity is neither "available" nor a usable number.
    NotAvailable,
}

impl QuantityMode {
    /// Parse the wire selector. Empty or unknown selectors mean "no quantity filter".
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "numeric" => Some(Self::Numeric),
            "available" => Some(Self::Available),
            "not available" => Some(Self::NotAvailable),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Available => "available",
            Self::NotAvailable => "not available",
        }
    }
}

/// A fully-typed filter request. Built fresh for every call and never mutated
/// by the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundQuery {
    /// Case-insensitive containment search; empty disables search.
    pub search_text: String,
    pub page: PageRequest,
    pub mol_weight: NumericRange,
    pub ic50: NumericRange,
    pub activity: Option<String>,
    pub reversibility: Option<String>,
    pub quantity_mode: Option<QuantityMode>,
    /// Only consulted in [`QuantityMode::Numeric`].
    pub quantity: NumericRange,
    /// Field names to restrict search to, in order; empty searches every field.
    pub search_fields: Vec<String>,
}

impl CompoundQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw request parameters into a query.
    #[must_use]
    pub fn from_options(options: &FilterOptions, limits: PageLimits) -> Self {
        let mut search_fields: Vec<String> = Vec::with_capacity(options.fields.len());
        for field in &options.fields {
            let field = field.trim();
            if !field.is_empty() && !search_fields.iter().any(|seen| seen == field) {
                search_fields.push(field.to_string());
            }
        }

        Self {
            search_text: options.query.as_deref().unwrap_or_default().trim().to_string(),
            page: PageRequest::new(options.page, options.per_page, limits),
            mol_weight: NumericRange::new(options.min_molweight, options.max_molweight),
            ic50: NumericRange::new(options.min_ic50, options.max_ic50),
            activity: non_empty(options.activity.as_deref()),
            reversibility: non_empty(options.reversibility.as_deref()),
            quantity_mode: options.quantity_type.as_deref().and_then(QuantityMode::from_param),
            quantity: NumericRange::new(options.min_quantity, options.max_quantity),
            search_fields,
        }
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: i64, per_page: i64) -> Self {
        self.page = PageRequest::new(Some(page), Some(per_page), PageLimits::default());
        self
    }

    #[must_use]
    pub const fn with_mol_weight(mut self, range: NumericRange) -> Self {
        self.mol_weight = range;
        self
    }

    #[must_use]
    pub const fn with_ic50(mut self, range: NumericRange) -> Self {
        self.ic50 = range;
        self
    }

    #[must_use]
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    #[must_use]
    pub fn with_reversibility(mut self, reversibility: impl Into<String>) -> Self {
        self.reversibility = Some(reversibility.into());
        self
    }

    #[must_use]
    pub const fn with_quantity(mut self, mode: QuantityMode, range: NumericRange) -> Self {
        self.quantity_mode = Some(mode);
        self.quantity = range;
        self
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_string)
}
