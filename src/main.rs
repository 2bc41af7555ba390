// --- Dashboard de Certificaciones TI - Archivo principal ---

use certdash::config::Config;
use certdash::run_server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    tracing::info!("=== Dashboard de Certificaciones TI ===");
    tracing::info!(datos = %config.ruta_datos().display(), bind = %config.bind, "configuración cargada");
    run_server(config).await
}
