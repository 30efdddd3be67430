//! Product add, update, remove, clear.
//!
//! Every action redirects back to the warehouse detail page, except when the
//! warehouse itself is gone: then the user lands on the index.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::{info, warn};
use varasto_core::validation::{parse_quantity, validate_product_name};
use varasto_core::{CoreError, WarehouseId};

use super::{existing_warehouse, not_found};
use crate::flash::{self, Flash};
use crate::render::{format_quantity, warehouse_path};
use crate::AppState;

/// Body of the add-product form.
#[derive(Debug, Default, Deserialize)]
pub struct AddProductForm {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: Option<String>,
}

/// Body of the update-quantity form.
#[derive(Debug, Default, Deserialize)]
pub struct QuantityForm {
    #[serde(default)]
    pub quantity: Option<String>,
}

fn back(id: WarehouseId, flash: Flash) -> Response {
    flash::redirect(&warehouse_path(id), flash)
}

/// Maps a registry failure to a redirect; a vanished warehouse goes to `/`.
fn failed(id: WarehouseId, err: CoreError, message: &str) -> Response {
    warn!(%id, error = %err, "{}", message);
    match err {
        CoreError::WarehouseNotFound(_) => not_found(),
        _ => back(id, Flash::error(message)),
    }
}

/// `POST /warehouse/{id}/product/add`
pub async fn add(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<AddProductForm>,
) -> Response {
    let id = match existing_warehouse(&state.registry, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let (product, qty) = match (
        validate_product_name(&form.product_name),
        parse_quantity(form.quantity.as_deref()),
    ) {
        (Ok(product), Ok(qty)) => (product, qty),
        (name, qty) => {
            warn!(%id, name_ok = name.is_ok(), qty_ok = qty.is_ok(), "Rejected product input");
            return back(id, Flash::error("Invalid product name or quantity."));
        }
    };

    match state
        .registry
        .with_registry_mut(|r| r.add_product(id, &product, qty))
    {
        Ok(()) => {
            info!(%id, product = %product, qty, "Product added");
            back(
                id,
                Flash::success(format!(
                    "Product '{product}' added with quantity {}.",
                    format_quantity(qty)
                )),
            )
        }
        Err(err) => failed(id, err, "Failed to add product."),
    }
}

/// `POST /warehouse/{id}/product/{product}/remove`
pub async fn remove(
    State(state): State<AppState>,
    Path((raw_id, product)): Path<(String, String)>,
) -> Response {
    let id = match existing_warehouse(&state.registry, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .registry
        .with_registry_mut(|r| r.remove_product(id, &product))
    {
        Ok(()) => {
            info!(%id, product = %product, "Product removed");
            back(id, Flash::success(format!("Product '{product}' removed.")))
        }
        Err(err) => failed(id, err, "Failed to remove product."),
    }
}

/// `POST /warehouse/{id}/product/{product}/update`
pub async fn update(
    State(state): State<AppState>,
    Path((raw_id, product)): Path<(String, String)>,
    Form(form): Form<QuantityForm>,
) -> Response {
    let id = match existing_warehouse(&state.registry, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let qty = match parse_quantity(form.quantity.as_deref()) {
        Ok(qty) => qty,
        Err(err) => {
            warn!(%id, error = %err, "Rejected quantity");
            return back(id, Flash::error("Invalid quantity."));
        }
    };

    match state
        .registry
        .with_registry_mut(|r| r.update_product_quantity(id, &product, qty))
    {
        Ok(()) => {
            info!(%id, product = %product, qty, "Product quantity updated");
            back(
                id,
                Flash::success(format!(
                    "Product '{product}' quantity updated to {}.",
                    format_quantity(qty)
                )),
            )
        }
        Err(err) => failed(id, err, "Failed to update product quantity."),
    }
}

/// `POST /warehouse/{id}/clear`
pub async fn clear(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match existing_warehouse(&state.registry, &raw_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.registry.with_registry_mut(|r| r.clear_products(id)) {
        Ok(()) => {
            info!(%id, "Products cleared");
            back(id, Flash::success("All products cleared from warehouse."))
        }
        Err(err) => failed(id, err, "Failed to clear warehouse."),
    }
}
