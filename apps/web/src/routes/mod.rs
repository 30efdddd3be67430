//! # Route Handlers
//!
//! HTML form handlers, split by resource.
//!
//! ## Response Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  → 200 HTML page (shows + clears a pending flash)                 │
//! │  POST → 303 redirect + flash cookie                                    │
//! │                                                                         │
//! │  Unknown or unparsable warehouse ID (any route)                        │
//! │       → 303 Location: /  flash "Warehouse not found."                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers never return an error to axum; every `CoreError` becomes a flash.

pub mod product;
pub mod warehouse;

use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Response};
use tracing::warn;
use varasto_core::validation::parse_warehouse_id;
use varasto_core::{Warehouse, WarehouseId};

use crate::flash::{self, Flash};
use crate::state::RegistryState;

pub(crate) const WAREHOUSE_NOT_FOUND: &str = "Warehouse not found.";

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// Renders an HTML page, clearing the flash cookie when a flash was shown.
pub(crate) fn page(html: String, flash_shown: bool) -> Response {
    if flash_shown {
        ([(SET_COOKIE, flash::clear_cookie())], Html(html)).into_response()
    } else {
        Html(html).into_response()
    }
}

/// Redirect to the index page for an unknown warehouse.
pub(crate) fn not_found() -> Response {
    flash::redirect("/", Flash::error(WAREHOUSE_NOT_FOUND))
}

/// Parses a path segment into the ID of a warehouse that currently exists.
///
/// `Err` carries the ready-made not-found redirect.
pub(crate) fn existing_warehouse(
    registry: &RegistryState,
    raw_id: &str,
) -> Result<WarehouseId, Response> {
    match parse_warehouse_id(raw_id) {
        Some(id) if registry.with_registry(|r| r.contains(id)) => Ok(id),
        _ => {
            warn!(id = %raw_id, "Warehouse not found");
            Err(not_found())
        }
    }
}

/// Like [`existing_warehouse`] but also returns a snapshot of the warehouse.
pub(crate) fn find_warehouse(
    registry: &RegistryState,
    raw_id: &str,
) -> Result<(WarehouseId, Warehouse), Response> {
    parse_warehouse_id(raw_id)
        .and_then(|id| registry.with_registry(|r| r.warehouse(id)).map(|w| (id, w)))
        .ok_or_else(|| {
            warn!(id = %raw_id, "Warehouse not found");
            not_found()
        })
}
