use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters for `GET /productos`.
///
/// Numeric bounds arrive as raw strings and are parsed explicitly by the
/// handler, so malformed input maps to 400 instead of being coerced or
/// silently dropped.
#[derive(Debug, Deserialize)]
pub struct ProductosQuery {
    pub nombre: Option<String>,
    #[serde(rename = "precioMinimo")]
    pub precio_minimo: Option<String>,
    #[serde(rename = "precioMaximo")]
    pub precio_maximo: Option<String>,
    pub categoria: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CodificarRequest {
    pub id: u32,
    pub sufijo: String,
}

#[derive(Debug, Deserialize)]
pub struct PromedioQuery {
    pub categoria: Option<String>,
}

/// Query parameters for `GET /productos/top`. Both are required; the handler
/// rejects absence or malformed values with 400.
#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub n: Option<String>,
    pub criterio: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PromedioResponse {
    #[serde(rename = "precioPromedio")]
    pub precio_promedio: f64,
}
