use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};
use utoipa::OpenApi;

use crate::catalog::{Catalog, CatalogStore};
use crate::config::ServerConfig;
use crate::errors::ApiError;
use crate::filtering::{CompoundQuery, PageLimits, calculate_content_range};
use crate::models::{FilterOptions, HealthResponse, ItemDetailResponse, ItemsResponse, StatusResponse};
use crate::openapi::ApiDoc;
use crate::record::Record;
use crate::source::RecordSource;

/// Resource name used in `Content-Range` headers.
pub const RESOURCE_NAME_PLURAL: &str = "compounds";
const RESOURCE_NAME_SINGULAR: &str = "Compound";

/// Shared handler state. Cloning is cheap; everything heavy sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub source: Arc<dyn RecordSource>,
    pub limits: PageLimits,
    pub reload_enabled: bool,
}

impl AppState {
    pub fn new(store: Arc<CatalogStore>, source: Arc<dyn RecordSource>, config: &ServerConfig) -> Self {
        Self {
            store,
            source,
            limits: config.page_limits(),
            reload_enabled: config.enable_reload,
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = StatusResponse))
)]
pub async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Compound catalog API".to_string(),
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Liveness and number of loaded compounds", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        data_loaded: state.store.snapshot().len(),
    })
}

// Raw pairs rather than `Query<FilterOptions>` so `fields` can repeat and
// malformed numbers are dropped instead of rejecting the request.
#[utoipa::path(
    get,
    path = "/api/items",
    params(FilterOptions),
    responses(
        (status = 200, description = "One page of matching compounds", body = ItemsResponse,
         headers(("Content-Range" = String, description = "compounds <first>-<last>/<total>")))
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (HeaderMap, Json<ItemsResponse>) {
    let options = FilterOptions::from_pairs(pairs);
    let query = CompoundQuery::from_options(&options, state.limits);
    debug!(?query, "Listing compounds");

    let catalog = state.store.snapshot();
    let page = catalog.query(&query);
    let headers = calculate_content_range(
        page.offset(),
        page.items.len(),
        page.total_items,
        RESOURCE_NAME_PLURAL,
    );

    (headers, Json(page.map(Record::clone).into()))
}

#[utoipa::path(
    get,
    path = "/api/item/{id}",
    params(("id" = i64, Path, description = "Compound id")),
    responses(
        (status = 200, description = "The compound with its neighbours' ids", body = ItemDetailResponse),
        (status = 404, description = "No compound with this id")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ItemDetailResponse>, ApiError> {
    let not_found = || ApiError::not_found(RESOURCE_NAME_SINGULAR, Some(raw_id.clone()));
    let id: i64 = raw_id.parse().map_err(|_| not_found())?;

    let catalog = state.store.snapshot();
    let found = catalog.lookup(id).ok_or_else(not_found)?;

    Ok(Json(ItemDetailResponse {
        item: found.record.clone(),
        prev_idx: found.prev_id,
        next_idx: found.next_id,
    }))
}

/// Re-read the record source and swap in the new snapshot. On failure the
/// current snapshot stays in place.
#[utoipa::path(
    post,
    path = "/api/admin/reload",
    responses(
        (status = 200, description = "Snapshot replaced", body = HealthResponse),
        (status = 500, description = "Source could not be loaded; previous data kept")
    )
)]
pub async fn reload(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let records = state.source.load().await?;
    let catalog = Catalog::new(records);
    let count = catalog.len();
    let previous = state.store.replace(catalog);
    info!(
        source = %state.source.describe(),
        previous = previous.len(),
        count,
        "Reloaded compound records"
    );

    Ok(Json(HealthResponse {
        status: "reloaded".to_string(),
        data_loaded: count,
    }))
}

#[utoipa::path(
    get,
    path = "/api/openapi.json",
    responses((status = 200, description = "OpenAPI document"))
)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the API router. The reload route is only mounted when enabled.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/items", get(list_items))
        .route("/api/item/{id}", get(get_item))
        .route("/api/openapi.json", get(openapi_json));

    if state.reload_enabled {
        router = router.route("/api/admin/reload", post(reload));
    }

    router.with_state(state)
}

/// Wrap a router with request tracing and CORS.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([header::CONTENT_RANGE]);

    match config.cors_origin_list() {
        None => cors.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            cors.allow_origin(origins)
        }
    }
}
