use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{info, warn};

use crate::api_json::handlers::{
    dashboard_html_handler, dashboard_json_handler, filtros_handler, grafico_aprobaciones_handler,
    grafico_demanda_handler, help_handler, logo_handler,
};
use crate::config::Config;
use crate::excel::CacheCertificaciones;

/// Estado compartido por todos los workers: configuración y la planilla
/// cacheada (se lee una sola vez por proceso).
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub cache: CacheCertificaciones,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cache = CacheCertificaciones::new(config.ruta_datos());
        AppState { config, cache }
    }
}

/// Registra todas las rutas; compartido por `run_server` y los tests.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard_html_handler))
        .route("/api/dashboard", web::get().to(dashboard_json_handler))
        .route("/api/filtros", web::get().to(filtros_handler))
        .route("/graficos/demanda.svg", web::get().to(grafico_demanda_handler))
        .route("/graficos/aprobaciones.svg", web::get().to(grafico_aprobaciones_handler))
        .route("/logo", web::get().to(logo_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind = config.bind.clone();
    let estado = web::Data::new(AppState::new(config));

    // Carga anticipada: si falla, el error se muestra en cada petición.
    match estado.cache.cargar() {
        Ok(tabla) => info!(registros = tabla.len(), "planilla cargada en caché"),
        Err(e) => warn!(error = %e, "⚠️ la planilla no se pudo cargar al iniciar"),
    }

    info!("Iniciando servidor en http://{}", bind);
    HttpServer::new(move || {
        App::new()
            .app_data(estado.clone())
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .configure(configurar)
    })
    .bind(bind)?
    .run()
    .await
}
