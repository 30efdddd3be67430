//! # HTML Rendering
//!
//! Builds the pages served by the route handlers.
//!
//! ## Pages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  index             GET /                  warehouse list               │
//! │  new_warehouse     GET /warehouse/new     create form                  │
//! │  view_warehouse    GET /warehouse/{id}    products + product forms     │
//! │  edit_warehouse    GET /warehouse/{id}/edit  rename form               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every piece of user-supplied text goes through [`escape_html`]; product
//! names placed in URLs also go through percent-encoding.

use std::fmt::Write;

use varasto_core::{Warehouse, WarehouseId};

use crate::flash::Flash;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
table{border-collapse:collapse;width:100%}td,th{border-bottom:1px solid #ddd;padding:.4rem;text-align:left}\
.flash{padding:.6rem;margin:1rem 0;border-radius:4px}.success{background:#e3f6e5}.error{background:#fbe3e3}\
form.inline{display:inline}";

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a quantity for display (`10`, `2.5`).
pub fn format_quantity(qty: f64) -> String {
    qty.to_string()
}

/// Path of the warehouse detail page.
pub fn warehouse_path(id: WarehouseId) -> String {
    format!("/warehouse/{id}")
}

/// Path of a per-product action (`remove`, `update`).
fn product_action_path(id: WarehouseId, product: &str, action: &str) -> String {
    format!(
        "/warehouse/{id}/product/{}/{action}",
        urlencoding::encode(product)
    )
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|flash| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                flash.level,
                escape_html(&flash.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Varasto</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Warehouses</a></nav>
{flash_html}
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

// =============================================================================
// Pages
// =============================================================================

/// Warehouse list.
pub fn index(warehouses: &[(WarehouseId, Warehouse)], flash: Option<&Flash>) -> String {
    let mut body = String::from(
        "<h1>Warehouses</h1>\n<p><a href=\"/warehouse/new\">Create New Warehouse</a></p>\n",
    );

    if warehouses.is_empty() {
        body.push_str("<p>No warehouses found. Create one to get started.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Name</th><th>Products</th><th>Total quantity</th></tr>\n");
        for (id, warehouse) in warehouses {
            let _ = writeln!(
                body,
                r#"<tr><td><a href="{}">{}</a></td><td>{}</td><td>{}</td></tr>"#,
                warehouse_path(*id),
                escape_html(&warehouse.name),
                warehouse.product_count(),
                format_quantity(warehouse.total_quantity()),
            );
        }
        body.push_str("</table>\n");
    }

    layout("Warehouses", flash, &body)
}

/// Create form.
pub fn new_warehouse(flash: Option<&Flash>) -> String {
    let body = r#"<h1>Create New Warehouse</h1>
<form method="post" action="/warehouse/new">
<label>Name <input type="text" name="name" required></label>
<button type="submit">Create</button>
</form>
"#;

    layout("Create New Warehouse", flash, body)
}

/// Detail page: products plus add/update/remove/clear forms.
pub fn view_warehouse(id: WarehouseId, warehouse: &Warehouse, flash: Option<&Flash>) -> String {
    let base = warehouse_path(id);
    let mut body = String::new();

    let _ = writeln!(body, "<h1>{}</h1>", escape_html(&warehouse.name));
    let _ = writeln!(
        body,
        r#"<p><a href="{base}/edit">Edit Warehouse</a>
<form class="inline" method="post" action="{base}/delete"><button type="submit">Delete Warehouse</button></form></p>"#
    );

    body.push_str("<h2>Products</h2>\n");
    if warehouse.is_empty() {
        body.push_str("<p>No products in this warehouse.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Product</th><th>Quantity</th><th></th></tr>\n");
        for (product, qty) in &warehouse.products {
            let _ = writeln!(
                body,
                r#"<tr><td>{name}</td><td>{qty}</td><td>
<form class="inline" method="post" action="{update}"><input type="number" name="quantity" step="any" min="0" value="{qty}" required><button type="submit">Update</button></form>
<form class="inline" method="post" action="{remove}"><button type="submit">Remove</button></form>
</td></tr>"#,
                name = escape_html(product),
                qty = format_quantity(*qty),
                update = escape_html(&product_action_path(id, product, "update")),
                remove = escape_html(&product_action_path(id, product, "remove")),
            );
        }
        body.push_str("</table>\n");
        let _ = writeln!(
            body,
            r#"<form method="post" action="{base}/clear"><button type="submit">Clear All Products</button></form>"#
        );
    }

    let _ = writeln!(
        body,
        r#"<h2>Add Product</h2>
<form method="post" action="{base}/product/add">
<label>Product <input type="text" name="product_name" required></label>
<label>Quantity <input type="number" name="quantity" step="any" min="0" value="0" required></label>
<button type="submit">Add</button>
</form>"#
    );

    layout(&warehouse.name, flash, &body)
}

/// Rename form.
pub fn edit_warehouse(id: WarehouseId, warehouse: &Warehouse, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>Edit Warehouse</h1>
<form method="post" action="{base}/edit">
<label>Name <input type="text" name="name" value="{name}" required></label>
<button type="submit">Save</button>
</form>
<p><a href="{base}">Back</a></p>
"#,
        base = warehouse_path(id),
        name = escape_html(&warehouse.name),
    );

    layout("Edit Warehouse", flash, &body)
}
