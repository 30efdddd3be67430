//! # varasto-web
//!
//! Browser front end for the in-memory warehouse registry.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Browser ──► TraceLayer ──► Router ──► routes::{warehouse, product}    │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                        RegistryState                    │
//! │                                    (Arc<Mutex<Registry>>)               │
//! │                                              │                          │
//! │                           ┌──────────────────┴───────────────┐          │
//! │                           ▼                                  ▼          │
//! │                    render (HTML page)              flash + 303 redirect │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in memory and is lost on restart.

pub mod config;
pub mod error;
pub mod flash;
pub mod render;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::WebConfig;
pub use error::{WebError, WebResult};
pub use state::RegistryState;

/// Shared state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub registry: RegistryState,
}

impl AppState {
    pub fn new(registry: RegistryState) -> Self {
        AppState { registry }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    use routes::{health, product, warehouse};

    Router::new()
        .route("/", get(warehouse::index))
        .route("/health", get(health))
        .route(
            "/warehouse/new",
            get(warehouse::new_form).post(warehouse::create),
        )
        .route("/warehouse/{id}", get(warehouse::view))
        .route(
            "/warehouse/{id}/edit",
            get(warehouse::edit_form).post(warehouse::rename),
        )
        .route("/warehouse/{id}/delete", post(warehouse::delete))
        .route("/warehouse/{id}/product/add", post(product::add))
        .route(
            "/warehouse/{id}/product/{product}/remove",
            post(product::remove),
        )
        .route(
            "/warehouse/{id}/product/{product}/update",
            post(product::update),
        )
        .route("/warehouse/{id}/clear", post(product::clear))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: &WebConfig, state: AppState, shutdown: F) -> WebResult<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(addr = %addr, "Varasto web server started");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;
    use varasto_core::{WarehouseId, WarehouseRegistry};

    use crate::flash::Flash;

    fn seeded(name: &str, products: &[(&str, f64)]) -> (AppState, WarehouseId) {
        let mut registry = WarehouseRegistry::new();
        let id = registry.create_warehouse(name);
        for (product, qty) in products {
            registry.add_product(id, product, *qty).unwrap();
        }
        (AppState::new(RegistryState::from_registry(registry)), id)
    }

    async fn get_page(state: &AppState, uri: &str) -> Response {
        build_router(state.clone())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(state: &AppState, uri: &str, body: &str) -> Response {
        build_router(state.clone())
            .oneshot(
                Request::post(uri)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Asserts a 303 to `location` and returns the flash it carries.
    fn expect_redirect(response: &Response, location: &str) -> Flash {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], location);
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        let pair = cookie.split(';').next().unwrap();

        let mut headers = axum::http::HeaderMap::new();
        headers.insert(COOKIE, pair.parse().unwrap());
        Flash::from_headers(&headers).expect("flash cookie")
    }

    fn products(state: &AppState, id: WarehouseId) -> varasto_core::ProductMap {
        state
            .registry
            .with_registry(|r| r.products(id))
            .expect("warehouse exists")
    }

    // -------------------------------------------------------------------------
    // Warehouses
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_health() {
        let response = get_page(&AppState::default(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn test_index_empty() {
        let response = get_page(&AppState::default(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No warehouses found"));
    }

    #[tokio::test]
    async fn test_index_shows_and_clears_flash() {
        let (state, _) = seeded("Main", &[]);
        let response = build_router(state)
            .oneshot(
                Request::get("/")
                    .header(COOKIE, "varasto_flash=success:Hello%20there")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
        assert!(cookie.contains("Max-Age=0"));
        let body = body_text(response).await;
        assert!(body.contains("Hello there"));
        assert!(body.contains("Main"));
    }

    #[tokio::test]
    async fn test_create_warehouse() {
        let state = AppState::default();
        let response = post_form(&state, "/warehouse/new", "name=%20North%20Depot%20").await;

        let flash = expect_redirect(&response, "/");
        assert_eq!(flash.message, "Warehouse 'North Depot' created successfully!");

        let warehouses = state.registry.with_registry(|r| r.warehouses());
        assert_eq!(warehouses.len(), 1);
        assert_eq!(warehouses[0].0, WarehouseId::new(1));
        assert_eq!(warehouses[0].1.name, "North Depot");
    }

    #[tokio::test]
    async fn test_create_with_empty_name_rerenders_form() {
        let state = AppState::default();
        let response = post_form(&state, "/warehouse/new", "name=%20%20").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response)
            .await
            .contains("Warehouse name cannot be empty."));
        assert!(state.registry.with_registry(|r| r.is_empty()));
    }

    #[tokio::test]
    async fn test_view_missing_or_malformed_id() {
        let state = AppState::default();

        for uri in ["/warehouse/42", "/warehouse/abc", "/warehouse/42/edit"] {
            let response = get_page(&state, uri).await;
            let flash = expect_redirect(&response, "/");
            assert_eq!(flash.message, "Warehouse not found.");
        }
    }

    #[tokio::test]
    async fn test_view_warehouse() {
        let (state, id) = seeded("Main", &[("Apple", 10.0)]);
        let response = get_page(&state, &format!("/warehouse/{id}")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Main"));
        assert!(body.contains("Apple"));
    }

    #[tokio::test]
    async fn test_rename_warehouse() {
        let (state, id) = seeded("Main", &[]);
        let response = post_form(&state, &format!("/warehouse/{id}/edit"), "name=Annex").await;

        let flash = expect_redirect(&response, &format!("/warehouse/{id}"));
        assert_eq!(flash.message, "Warehouse renamed to 'Annex'!");
        let name = state.registry.with_registry(|r| r.warehouse(id)).unwrap().name;
        assert_eq!(name, "Annex");
    }

    #[tokio::test]
    async fn test_rename_with_empty_name_keeps_old_name() {
        let (state, id) = seeded("Main", &[]);
        let response = post_form(&state, &format!("/warehouse/{id}/edit"), "name=").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response)
            .await
            .contains("Warehouse name cannot be empty."));
        let name = state.registry.with_registry(|r| r.warehouse(id)).unwrap().name;
        assert_eq!(name, "Main");
    }

    #[tokio::test]
    async fn test_delete_warehouse() {
        let (state, id) = seeded("Main", &[("Apple", 1.0)]);
        let response = post_form(&state, &format!("/warehouse/{id}/delete"), "").await;

        let flash = expect_redirect(&response, "/");
        assert_eq!(flash.message, "Warehouse 'Main' deleted.");
        assert!(!state.registry.with_registry(|r| r.contains(id)));

        // Second delete: already gone
        let response = post_form(&state, &format!("/warehouse/{id}/delete"), "").await;
        assert_eq!(expect_redirect(&response, "/").message, "Warehouse not found.");
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_product_accumulates() {
        let (state, id) = seeded("Main", &[]);
        let uri = format!("/warehouse/{id}/product/add");

        let response = post_form(&state, &uri, "product_name=Apple&quantity=10").await;
        let flash = expect_redirect(&response, &format!("/warehouse/{id}"));
        assert_eq!(flash.message, "Product 'Apple' added with quantity 10.");
        assert_eq!(products(&state, id)["Apple"], 10.0);

        post_form(&state, &uri, "product_name=Apple&quantity=5").await;
        assert_eq!(products(&state, id)["Apple"], 15.0);
    }

    #[tokio::test]
    async fn test_add_product_rejects_bad_input() {
        let (state, id) = seeded("Main", &[]);
        let uri = format!("/warehouse/{id}/product/add");

        for body in [
            "product_name=&quantity=1",
            "product_name=Apple&quantity=lots",
            "product_name=Apple&quantity=-1",
            "product_name=Apple&quantity=NaN",
            "product_name=Apple",
        ] {
            let response = post_form(&state, &uri, body).await;
            let flash = expect_redirect(&response, &format!("/warehouse/{id}"));
            assert_eq!(flash.message, "Invalid product name or quantity.", "{body}");
        }
        assert!(products(&state, id).is_empty());
    }

    #[tokio::test]
    async fn test_product_routes_on_missing_warehouse() {
        let state = AppState::default();

        let response = post_form(&state, "/warehouse/7/product/add", "product_name=A&quantity=1").await;
        assert_eq!(expect_redirect(&response, "/").message, "Warehouse not found.");

        let response = post_form(&state, "/warehouse/7/clear", "").await;
        assert_eq!(expect_redirect(&response, "/").message, "Warehouse not found.");
    }

    #[tokio::test]
    async fn test_update_product_quantity() {
        let (state, id) = seeded("Main", &[("Apple", 10.0)]);
        let response = post_form(
            &state,
            &format!("/warehouse/{id}/product/Apple/update"),
            "quantity=20",
        )
        .await;

        let flash = expect_redirect(&response, &format!("/warehouse/{id}"));
        assert_eq!(flash.message, "Product 'Apple' quantity updated to 20.");
        assert_eq!(products(&state, id)["Apple"], 20.0);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_quantity() {
        let (state, id) = seeded("Main", &[("Apple", 10.0)]);
        let response = post_form(
            &state,
            &format!("/warehouse/{id}/product/Apple/update"),
            "quantity=abc",
        )
        .await;

        assert_eq!(
            expect_redirect(&response, &format!("/warehouse/{id}")).message,
            "Invalid quantity."
        );
        assert_eq!(products(&state, id)["Apple"], 10.0);
    }

    #[tokio::test]
    async fn test_update_missing_product_does_not_create_it() {
        let (state, id) = seeded("Main", &[]);
        let response = post_form(
            &state,
            &format!("/warehouse/{id}/product/Pear/update"),
            "quantity=3",
        )
        .await;

        assert_eq!(
            expect_redirect(&response, &format!("/warehouse/{id}")).message,
            "Failed to update product quantity."
        );
        assert!(!products(&state, id).contains_key("Pear"));
    }

    #[tokio::test]
    async fn test_remove_product_with_encoded_name() {
        let (state, id) = seeded("Main", &[("Green tea", 2.0), ("Apple", 1.0)]);
        let response = post_form(
            &state,
            &format!("/warehouse/{id}/product/Green%20tea/remove"),
            "",
        )
        .await;

        let flash = expect_redirect(&response, &format!("/warehouse/{id}"));
        assert_eq!(flash.message, "Product 'Green tea' removed.");
        let remaining = products(&state, id);
        assert!(!remaining.contains_key("Green tea"));
        assert!(remaining.contains_key("Apple"));

        let response = post_form(
            &state,
            &format!("/warehouse/{id}/product/Green%20tea/remove"),
            "",
        )
        .await;
        assert_eq!(
            expect_redirect(&response, &format!("/warehouse/{id}")).message,
            "Failed to remove product."
        );
    }

    #[tokio::test]
    async fn test_clear_products() {
        let (state, id) = seeded("Main", &[("Apple", 1.0), ("Pear", 2.0)]);
        let response = post_form(&state, &format!("/warehouse/{id}/clear"), "").await;

        let flash = expect_redirect(&response, &format!("/warehouse/{id}"));
        assert_eq!(flash.message, "All products cleared from warehouse.");
        assert!(products(&state, id).is_empty());
        assert!(state.registry.with_registry(|r| r.contains(id)));
    }
}
