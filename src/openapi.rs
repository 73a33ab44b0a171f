use utoipa::OpenApi;

use crate::models::{HealthResponse, ItemDetailResponse, ItemsResponse, StatusResponse};
use crate::record::Record;
use crate::routes;

/// OpenAPI document for the catalog service, served at `/api/openapi.json`.
///
/// The reload operation is listed even when the route is disabled.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Compound Catalog API",
        description = "Read-only search, filtering and pagination over a chemical compound catalog.",
        version = "0.1.0"
    ),
    paths(
        routes::index,
        routes::health,
        routes::list_items,
        routes::get_item,
        routes::reload,
        routes::openapi_json,
    ),
    components(schemas(
        Record,
        ItemsResponse,
        ItemDetailResponse,
        HealthResponse,
        StatusResponse,
    )),
    tags((name = "compounds", description = "Compound catalog queries"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/api/health", "/api/items", "/api/item/{id}", "/api/admin/reload"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_listing_documents_filter_parameters() {
        let doc = ApiDoc::openapi();
        let listing = doc.paths.paths["/api/items"].get.as_ref().unwrap();
        let names: Vec<&str> = listing
            .parameters
            .iter()
            .flatten()
            .map(|param| param.name.as_str())
            .collect();
        assert!(names.contains(&"min_ic50"));
        assert!(names.contains(&"quantity_type"));
        assert!(names.contains(&"fields"));
    }
}
