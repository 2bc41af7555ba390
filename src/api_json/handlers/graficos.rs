use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::algorithm::{demanda_certificaciones, distribucion_aprobaciones};
use crate::graficos::{grafico_aprobaciones_svg, grafico_demanda_svg};
use crate::server::AppState;

use super::error_datos;

const SVG_MIME: &str = "image/svg+xml";

/// GET /graficos/demanda.svg
/// Siempre sobre la planilla completa: no recibe filtros.
pub async fn grafico_demanda_handler(estado: web::Data<AppState>) -> impl Responder {
    let tabla = match estado.cache.cargar() {
        Ok(t) => t,
        Err(e) => return error_datos(&e),
    };
    match grafico_demanda_svg(&demanda_certificaciones(&tabla.registros)) {
        Ok(svg) => HttpResponse::Ok().content_type(SVG_MIME).body(svg),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("{}", e)})),
    }
}

/// GET /graficos/aprobaciones.svg
/// 204 si no hay aprobados con certificaciones.
pub async fn grafico_aprobaciones_handler(estado: web::Data<AppState>) -> impl Responder {
    let tabla = match estado.cache.cargar() {
        Ok(t) => t,
        Err(e) => return error_datos(&e),
    };
    match grafico_aprobaciones_svg(&distribucion_aprobaciones(&tabla.registros)) {
        Some(svg) => HttpResponse::Ok().content_type(SVG_MIME).body(svg),
        None => HttpResponse::NoContent().finish(),
    }
}
