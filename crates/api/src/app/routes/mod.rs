use axum::Router;

pub mod productos;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new().nest("/productos", productos::router())
}
