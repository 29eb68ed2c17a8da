use std::sync::Arc;

use catalogo_catalog::{seed_products, ProductStore};
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port over a fresh seed.
        let store = Arc::new(ProductStore::new(seed_products()));
        let app = catalogo_api::app::build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn productos_without_filters_returns_the_full_seed() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/productos", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["nombre"], "Laptop");
    assert_eq!(items[0]["precio"], 999.99);
    assert_eq!(
        items[0]["categorias"],
        json!(["Computadoras", "Tecnología", "Portátiles"])
    );
}

#[tokio::test]
async fn productos_filters_by_shared_category() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/productos?categoria=Tecnología", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn productos_filters_by_price_window() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!(
        "{}/productos?precioMinimo=100&precioMaximo=600",
        srv.base_url
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        let precio = item["precio"].as_f64().unwrap();
        assert!((100.0..=600.0).contains(&precio));
    }
}

#[tokio::test]
async fn productos_rejects_non_numeric_price_bound() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/productos?precioMinimo=abc", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn categorias_counts_every_membership() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/productos/categorias", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["Tecnología"], 5);
    assert_eq!(body["Almacenamiento"], 2);
    assert_eq!(body["Portátiles"], 1);
}

#[tokio::test]
async fn codificar_appends_suffix_to_the_name() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/productos/codificar", srv.base_url))
        .json(&json!({ "id": 1, "sufijo": "Pro" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["nombre"], "Laptop Pro");

    // The rename is visible on the next read.
    let res = reqwest::get(format!("{}/productos?nombre=laptop pro", srv.base_url))
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn codificar_unknown_id_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/productos/codificar", srv.base_url))
        .json(&json!({ "id": 99, "sufijo": "Pro" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Producto no encontrado");
}

#[tokio::test]
async fn promedio_over_all_products() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/productos/promedio", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let expected = (999.99 + 79.99 + 499.99 + 129.99 + 89.99) / 5.0;
    let avg = body["precioPromedio"].as_f64().unwrap();
    assert!((avg - expected).abs() < 1e-9);
}

#[tokio::test]
async fn promedio_over_unmatched_category_is_404() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/productos/promedio?categoria=Muebles", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["error"],
        "No se encontraron productos en la categoría especificada"
    );
}

#[tokio::test]
async fn top_descending_returns_the_most_expensive_first() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!(
        "{}/productos/top?n=2&criterio=precioDesc",
        srv.base_url
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["nombre"], "Laptop");
    assert_eq!(items[1]["nombre"], "Monitor ultrawide");
}

#[tokio::test]
async fn top_with_oversized_n_returns_everything() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!(
        "{}/productos/top?n=50&criterio=precioAsc",
        srv.base_url
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["nombre"], "Teclado mecánico");
}

#[tokio::test]
async fn top_does_not_reorder_later_reads() {
    let srv = TestServer::spawn().await;

    reqwest::get(format!("{}/productos/top?n=5&criterio=precioAsc", srv.base_url))
        .await
        .unwrap();

    // A subsequent unfiltered read still sees seed order.
    let res = reqwest::get(format!("{}/productos", srv.base_url)).await.unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn top_rejects_missing_or_invalid_params() {
    let srv = TestServer::spawn().await;

    for url in [
        format!("{}/productos/top", srv.base_url),
        format!("{}/productos/top?n=2", srv.base_url),
        format!("{}/productos/top?criterio=precioAsc", srv.base_url),
        format!("{}/productos/top?n=abc&criterio=precioAsc", srv.base_url),
        format!("{}/productos/top?n=2&criterio=precio", srv.base_url),
        format!("{}/productos/top?n=0&criterio=precioAsc", srv.base_url),
    ] {
        let res = reqwest::get(url).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Parámetros de consulta inválidos");
    }
}
