//! Read-only query service over a chemical compound catalog.
//!
//! Records are loaded once from the ingestion job's JSON output into an
//! immutable [`Catalog`] snapshot. The [`filtering`] engine narrows a snapshot
//! by free-text search, numeric windows and categorical filters, then
//! paginates; [`routes`] exposes that over HTTP.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod filtering;
pub mod models;
pub mod openapi;
pub mod record;
pub mod routes;
pub mod source;

pub use catalog::{Catalog, CatalogStore, RecordLookup};
pub use config::ServerConfig;
pub use errors::{ApiError, CatalogError};
pub use filtering::{CompoundQuery, NumericRange, Page, PageLimits, QuantityMode};
pub use models::FilterOptions;
pub use record::{FieldValue, Fields, Record};
pub use routes::{AppState, router, with_middleware};
pub use source::{JsonFileSource, RecordSource, StaticSource, load_or_empty};
