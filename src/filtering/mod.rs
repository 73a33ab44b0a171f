//! # Query & Filtering Engine
//!
//! Turns a typed [`CompoundQuery`] into the ordered, paginated subset of an
//! immutable record slice. The engine is pure and synchronous: no I/O, no
//! shared state, and the same inputs always produce the same page.
//!
//! ## Components
//!
//! - **[`fields`]**: flexible field-name resolution (whitespace/case-insensitive,
//!   exact match first, then substring match in source order)
//! - **[`numeric`]**: first signed decimal token of a value (`"3.47 mg"` → `3.47`)
//! - **[`predicates`]**: numeric range, text containment, activity,
//!   reversibility, quantity and search tests
//! - **[`pipeline`]**: AND-composition of the predicates, stable filter, pagination
//! - **[`pagination`]**: page normalization, totals, `Content-Range` header
//!
//! ## Query Parameter Examples
//!
//! ```text
//! // Molecular weight window
//! GET /api/items?min_molweight=300&max_molweight=500
//!
//! // Potency below 10 (values like "8 µM" are read as 8)
//! GET /api/items?max_ic50=10
//!
//! // Categorical filters
//! GET /api/items?activity=active&reversibility=%2B
//!
//! // Quantity modes: numeric (with bounds), available, not available
//! GET /api/items?quantity_type=numeric&min_quantity=1
//! GET /api/items?quantity_type=not%20available
//!
//! // Search restricted to two fields, second page of ten
//! GET /api/items?query=actin&fields=Compound&fields=Target&page=2&per_page=10
//! ```
//!
//! ## Direct Use
//!
//! ```rust
//! use compound_catalog::filtering::{apply, CompoundQuery, NumericRange};
//! use compound_catalog::record::{Fields, Record};
//!
//! let records = vec![
//!     Record::new(0, [("IC50", "8 µM")].into_iter().collect::<Fields>()),
//!     Record::new(1, [("IC50", "12 µM")].into_iter().collect::<Fields>()),
//! ];
//!
//! let query = CompoundQuery::new().with_ic50(NumericRange::at_least(10.0));
//! let page = apply(&records, &query);
//! assert_eq!(page.total_items, 1);
//! assert_eq!(page.items[0].id, 1);
//! ```

pub mod fields;
pub mod numeric;
pub mod pagination;
pub mod pipeline;
pub mod predicates;
pub mod query;

// Re-export commonly used items
pub use fields::{exact_or_resolve, normalize_name, resolve_field};
pub use numeric::{extract_number, extract_number_from_text};
pub use pagination::{calculate_content_range, Page, PageLimits, PageRequest};
pub use pipeline::{apply, filter_records, matches};
pub use query::{CompoundQuery, NumericRange, QuantityMode};
