use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::config::ENV_BIND;
use crate::excel::{ARCHIVO_DATOS, ARCHIVO_LOGO};

pub async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "Dashboard de certificaciones TI. GET / devuelve la página; los filtros van en la query string.",
        "filtros": {
            "gerente": "repetible: ?gerente=Ana&gerente=Luis (o gerentes=Ana,Luis)",
            "status": "repetible: ?status=APPROVE (o statuses=APPROVE,PENDING)",
            "defecto": "sin clave: todos los gerentes y status APPROVE; clave vacía (?status=) selecciona nada"
        },
        "endpoints": [
            "/",
            "/api/dashboard",
            "/api/filtros",
            "/graficos/demanda.svg",
            "/graficos/aprobaciones.svg",
            "/logo",
            "/help"
        ],
        "get_example_query": "/api/dashboard?gerentes=Ana,Luis&status=APPROVE",
        "datafiles": {
            "archivo": ARCHIVO_DATOS,
            "logo": ARCHIVO_LOGO,
            "ubicacion": "relativos al directorio de trabajo del servidor"
        },
        "env": {
            "bind": ENV_BIND
        },
        "note": "El gráfico de demanda se calcula siempre sobre la planilla completa y la distribución sólo sobre los registros APPROVE, sin importar los filtros."
    });

    HttpResponse::Ok().json(help)
}
