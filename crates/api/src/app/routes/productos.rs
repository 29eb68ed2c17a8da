use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use catalogo_catalog::{aggregate, filter, ranking, FilterCriteria, PriceOrder, ProductStore};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_productos))
        .route("/categorias", get(categorias))
        .route("/codificar", post(codificar))
        .route("/promedio", get(promedio))
        .route("/top", get(top))
}

/// GET /productos — multi-parameter filtering over the full collection.
pub async fn list_productos(
    Extension(store): Extension<Arc<ProductStore>>,
    Query(query): Query<dto::ProductosQuery>,
) -> axum::response::Response {
    let min_price = match parse_price(query.precio_minimo.as_deref(), "precioMinimo") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let max_price = match parse_price(query.precio_maximo.as_deref(), "precioMaximo") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let criteria = FilterCriteria {
        name: query.nombre,
        min_price,
        max_price,
        category: query.categoria,
    };

    let result = filter::apply(&store.snapshot(), &criteria);
    (StatusCode::OK, Json(result)).into_response()
}

/// GET /productos/categorias — product count per category.
pub async fn categorias(Extension(store): Extension<Arc<ProductStore>>) -> axum::response::Response {
    let counts = aggregate::count_by_category(&store.snapshot());
    (StatusCode::OK, Json(counts)).into_response()
}

/// POST /productos/codificar — append a suffix to one product's name.
pub async fn codificar(
    Extension(store): Extension<Arc<ProductStore>>,
    Json(body): Json<dto::CodificarRequest>,
) -> axum::response::Response {
    match store.rename(body.id, &body.sufijo) {
        Ok(product) => {
            tracing::info!(id = body.id, name = %product.name, "renamed product");
            (StatusCode::OK, Json(product)).into_response()
        }
        Err(e) => {
            tracing::warn!(id = body.id, "rename rejected: {e}");
            errors::catalog_error_to_response(e)
        }
    }
}

/// GET /productos/promedio — average price, optionally scoped to a category.
pub async fn promedio(
    Extension(store): Extension<Arc<ProductStore>>,
    Query(query): Query<dto::PromedioQuery>,
) -> axum::response::Response {
    match aggregate::average_price(&store.snapshot(), query.categoria.as_deref()) {
        Ok(avg) => (
            StatusCode::OK,
            Json(dto::PromedioResponse {
                precio_promedio: avg,
            }),
        )
            .into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// GET /productos/top — first n products of a price-sorted copy.
pub async fn top(
    Extension(store): Extension<Arc<ProductStore>>,
    Query(query): Query<dto::TopQuery>,
) -> axum::response::Response {
    let (Some(n_raw), Some(criterio)) = (query.n, query.criterio) else {
        return errors::json_error(StatusCode::BAD_REQUEST, errors::INVALID_PARAMS);
    };

    let Ok(n) = n_raw.parse::<usize>() else {
        tracing::warn!(n = %n_raw, "rejected non-integer n");
        return errors::json_error(StatusCode::BAD_REQUEST, errors::INVALID_PARAMS);
    };

    let order: PriceOrder = match criterio.parse() {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(criterio = %criterio, "rejected sort criterion");
            return errors::catalog_error_to_response(e);
        }
    };

    match ranking::top_n(&store.snapshot(), n, order) {
        Ok(top) => (StatusCode::OK, Json(top)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// Parse an optional numeric bound; malformed input becomes a 400 response
/// rather than a silently ignored filter.
fn parse_price(
    raw: Option<&str>,
    param: &'static str,
) -> Result<Option<f64>, axum::response::Response> {
    match raw {
        None => Ok(None),
        Some(s) => s.parse::<f64>().map(Some).map_err(|_| {
            tracing::warn!(param, value = s, "rejected non-numeric price bound");
            errors::json_error(StatusCode::BAD_REQUEST, errors::INVALID_PARAMS)
        }),
    }
}
