//! Warehouse list, create, view, rename, delete.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::{debug, info, warn};
use varasto_core::validation::{parse_warehouse_id, validate_warehouse_name};
use varasto_core::ValidationError;

use super::{find_warehouse, not_found, page};
use crate::flash::{self, Flash};
use crate::render;
use crate::AppState;

/// Body of the create and rename forms.
#[derive(Debug, Default, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: String,
}

fn name_error(err: &ValidationError) -> Flash {
    match err {
        ValidationError::Required { .. } => Flash::error("Warehouse name cannot be empty."),
        other => Flash::error(format!("Invalid warehouse name: {other}.")),
    }
}

// =============================================================================
// Pages
// =============================================================================

/// `GET /`
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let warehouses = state.registry.with_registry(|r| r.warehouses());
    debug!(count = warehouses.len(), "Listing warehouses");

    let flash = Flash::from_headers(&headers);
    page(render::index(&warehouses, flash.as_ref()), flash.is_some())
}

/// `GET /warehouse/new`
pub async fn new_form(headers: HeaderMap) -> Response {
    let flash = Flash::from_headers(&headers);
    page(render::new_warehouse(flash.as_ref()), flash.is_some())
}

/// `GET /warehouse/{id}`
pub async fn view(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let (id, warehouse) = match find_warehouse(&state.registry, &raw_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    debug!(%id, products = warehouse.product_count(), "Viewing warehouse");
    let flash = Flash::from_headers(&headers);
    page(render::view_warehouse(id, &warehouse, flash.as_ref()), flash.is_some())
}

/// `GET /warehouse/{id}/edit`
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let (id, warehouse) = match find_warehouse(&state.registry, &raw_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let flash = Flash::from_headers(&headers);
    page(render::edit_warehouse(id, &warehouse, flash.as_ref()), flash.is_some())
}

// =============================================================================
// Actions
// =============================================================================

/// `POST /warehouse/new`
pub async fn create(State(state): State<AppState>, Form(form): Form<NameForm>) -> Response {
    let name = match validate_warehouse_name(&form.name) {
        Ok(name) => name,
        Err(err) => {
            warn!(error = %err, "Rejected warehouse name");
            return page(render::new_warehouse(Some(&name_error(&err))), false);
        }
    };

    let id = state
        .registry
        .with_registry_mut(|r| r.create_warehouse(name.clone()));
    info!(%id, name = %name, "Warehouse created");

    flash::redirect(
        "/",
        Flash::success(format!("Warehouse '{name}' created successfully!")),
    )
}

/// `POST /warehouse/{id}/edit`
pub async fn rename(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<NameForm>,
) -> Response {
    let (id, warehouse) = match find_warehouse(&state.registry, &raw_id) {
        Ok(found) => found,
        Err(response) => return response,
    };

    let name = match validate_warehouse_name(&form.name) {
        Ok(name) => name,
        Err(err) => {
            warn!(%id, error = %err, "Rejected warehouse name");
            return page(
                render::edit_warehouse(id, &warehouse, Some(&name_error(&err))),
                false,
            );
        }
    };

    match state
        .registry
        .with_registry_mut(|r| r.rename_warehouse(id, name.clone()))
    {
        Ok(()) => {
            info!(%id, name = %name, "Warehouse renamed");
            flash::redirect(
                &render::warehouse_path(id),
                Flash::success(format!("Warehouse renamed to '{name}'!")),
            )
        }
        Err(err) => {
            warn!(%id, error = %err, "Rename failed");
            not_found()
        }
    }
}

/// `POST /warehouse/{id}/delete`
pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Some(id) = parse_warehouse_id(&raw_id) else {
        warn!(id = %raw_id, "Warehouse not found");
        return not_found();
    };

    match state.registry.with_registry_mut(|r| r.delete_warehouse(id)) {
        Ok(warehouse) => {
            info!(%id, name = %warehouse.name, "Warehouse deleted");
            flash::redirect(
                "/",
                Flash::success(format!("Warehouse '{}' deleted.", warehouse.name)),
            )
        }
        Err(err) => {
            warn!(%id, error = %err, "Delete failed");
            not_found()
        }
    }
}
