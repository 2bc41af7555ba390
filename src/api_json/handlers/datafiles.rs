use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use tracing::warn;

use crate::algorithm::{opciones_filtro, SeleccionFiltros};
use crate::server::AppState;

use super::error_datos;

/// GET /api/filtros
/// Opciones de cada filtro y la selección por defecto.
pub async fn filtros_handler(estado: web::Data<AppState>) -> impl Responder {
    let tabla = match estado.cache.cargar() {
        Ok(t) => t,
        Err(e) => return error_datos(&e),
    };
    let opciones = opciones_filtro(&tabla.registros);
    let defecto = SeleccionFiltros::por_defecto(&opciones);
    HttpResponse::Ok().json(json!({
        "archivo": estado.cache.ruta().to_string_lossy(),
        "total_registros": tabla.len(),
        "opciones": opciones,
        "por_defecto": defecto,
    }))
}

/// GET /logo
pub async fn logo_handler(estado: web::Data<AppState>) -> impl Responder {
    let path = estado.config.ruta_logo();
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = match path.extension().and_then(std::ffi::OsStr::to_str) {
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("png") => "image/png",
                Some("svg") => "image/svg+xml",
                _ => "application/octet-stream",
            };
            HttpResponse::Ok().content_type(mime).body(bytes)
        }
        Err(e) => {
            warn!(ruta = %path.display(), error = %e, "⚠️ logo no disponible");
            HttpResponse::NotFound().json(json!({"error": "logo not found"}))
        }
    }
}
