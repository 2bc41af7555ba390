pub mod dashboard;
pub mod datafiles;
pub mod docs;
pub mod graficos;

pub use dashboard::*;
pub use datafiles::*;
pub use docs::*;
pub use graficos::*;

use actix_web::HttpResponse;
use serde_json::json;

use crate::algorithm::{opciones_filtro, render, VistaDashboard};
use crate::api_json::parse_filtros_query;
use crate::error::DataLoadError;
use crate::server::AppState;

/// Carga la planilla (desde la caché) y arma la vista para los filtros de la
/// query. Todo se recalcula en cada petición.
pub fn preparar_vista(estado: &AppState, pares: &[(String, String)]) -> Result<VistaDashboard, DataLoadError> {
    let tabla = estado.cache.cargar()?;
    let opciones = opciones_filtro(&tabla.registros);
    let seleccion = parse_filtros_query(pares).resolver(&opciones);
    Ok(render(&tabla, &seleccion))
}

pub fn error_datos(e: &DataLoadError) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({"error": format!("failed to load data: {}", e)}))
}
