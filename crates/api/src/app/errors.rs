use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalogo_catalog::CatalogError;

/// Message for any malformed or missing request parameter.
pub const INVALID_PARAMS: &str = "Parámetros de consulta inválidos";

/// Map a domain failure to its HTTP status and `{ "error": ... }` body.
pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::NotFound => json_error(StatusCode::NOT_FOUND, "Producto no encontrado"),
        CatalogError::EmptyResultSet => json_error(
            StatusCode::NOT_FOUND,
            "No se encontraron productos en la categoría especificada",
        ),
        CatalogError::Validation(_) => json_error(StatusCode::BAD_REQUEST, INVALID_PARAMS),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
