use actix_web::{web, HttpResponse, Responder};
use tracing::{debug, error};

use crate::graficos::{grafico_aprobaciones_svg, grafico_demanda_svg};
use crate::server::AppState;
use crate::vista::{render_pagina, render_pagina_error};

use super::{error_datos, preparar_vista};

/// GET /
/// Página completa. Si la planilla no se puede cargar se responde 500 con una
/// página de error, sin dashboard parcial.
pub async fn dashboard_html_handler(estado: web::Data<AppState>, query: web::Query<Vec<(String, String)>>) -> impl Responder {
    let vista = match preparar_vista(&estado, &query) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "❌ no se pudo cargar la planilla");
            return HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(render_pagina_error(&e.to_string()));
        }
    };

    let svg_demanda = match grafico_demanda_svg(&vista.demanda) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "❌ falló el gráfico de demanda");
            return HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(render_pagina_error(&e.to_string()));
        }
    };
    let svg_aprobaciones = grafico_aprobaciones_svg(&vista.distribucion_aprobaciones);

    debug!(
        registros = vista.registros.len(),
        gerentes = vista.seleccion.gerentes.len(),
        status = vista.seleccion.status.len(),
        "dashboard renderizado"
    );
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_pagina(&vista, &svg_demanda, svg_aprobaciones.as_deref()))
}

/// GET /api/dashboard
/// La misma vista que la página, en JSON.
pub async fn dashboard_json_handler(estado: web::Data<AppState>, query: web::Query<Vec<(String, String)>>) -> impl Responder {
    match preparar_vista(&estado, &query) {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => error_datos(&e),
    }
}
