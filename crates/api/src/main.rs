use std::sync::Arc;

use catalogo_catalog::{seed_products, ProductStore};

#[tokio::main]
async fn main() {
    catalogo_observability::init();

    let port = match std::env::var("CATALOGO_PORT") {
        Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "CATALOGO_PORT is not a valid port; using 3002");
            3002
        }),
        Err(_) => 3002,
    };

    let store = Arc::new(ProductStore::new(seed_products()));
    let app = catalogo_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
