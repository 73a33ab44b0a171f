#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use compound_catalog::{
    AppState, Catalog, CatalogStore, FieldValue, Fields, Record, RecordSource, ServerConfig,
    StaticSource, router, with_middleware,
};

pub fn record(id: i64, pairs: &[(&str, FieldValue)]) -> Record {
    Record::new(id, pairs.iter().cloned().collect::<Fields>())
}

/// Three compounds with the column spellings the ingestion job produces.
pub fn actin_compounds() -> Vec<Record> {
    vec![
        record(0, &[
            ("Compound Name", FieldValue::text("Latrunculin A")),
            ("Total MolWeight", FieldValue::from(421.55)),
            ("IC50", FieldValue::text("0.2 µM")),
            ("Actin Disruption Activity", FieldValue::text("Active")),
            ("Reversibilty", FieldValue::text("+")),
            ("Quantity", FieldValue::text("5 mg")),
            ("Target", FieldValue::text("G-actin")),
        ])
        .with_image("iVBORw0KGgo="),
        record(1, &[
            ("Compound Name", FieldValue::text("Jasplakinolide")),
            ("Total MolWeight", FieldValue::from(709.7)),
            ("IC50", FieldValue::text("not tested")),
            ("Actin Disruption Activity", FieldValue::text("Inactive")),
            ("Reversibilty", FieldValue::text("-")),
            ("Quantity", FieldValue::text("Available")),
            ("Target", FieldValue::text("F-actin stabiliser")),
        ]),
        record(2, &[
            ("Compound Name", FieldValue::text("Cytochalasin D")),
            ("Total MolWeight", FieldValue::text("507.6 g/mol")),
            ("IC50", FieldValue::text("12 µM")),
            ("Actin Disruption Activity", FieldValue::text("Active")),
            ("Reversibilty", FieldValue::text("+/-")),
            ("Quantity", FieldValue::text("not available")),
            ("Target", FieldValue::text("Barbed end")),
        ]),
    ]
}

/// `count` records with ids `0..count`, each with a numeric weight equal to
/// its id.
pub fn numbered_records(count: i64) -> Vec<Record> {
    (0..count)
        .map(|id| {
            record(id, &[
                ("Compound Name", FieldValue::text(format!("Compound {id}"))),
                ("Total MolWeight", FieldValue::from(id)),
            ])
        })
        .collect()
}

pub fn setup_app(records: Vec<Record>) -> Router {
    setup_app_with_config(records, &ServerConfig::default())
}

pub fn setup_app_with_config(records: Vec<Record>, config: &ServerConfig) -> Router {
    let source: Arc<dyn RecordSource> = Arc::new(StaticSource::new(records.clone()));
    setup_app_with_source(Catalog::new(records), source, config)
}

pub fn setup_app_with_source(
    catalog: Catalog,
    source: Arc<dyn RecordSource>,
    config: &ServerConfig,
) -> Router {
    let store = Arc::new(CatalogStore::new(catalog));
    let state = AppState::new(store, source, config);
    with_middleware(router(state), config)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, headers, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub fn item_ids(body: &Value) -> Vec<i64> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
