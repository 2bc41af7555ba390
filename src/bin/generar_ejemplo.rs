// Genera una planilla de ejemplo para el dashboard.
//
// Uso: generar_ejemplo [ruta.xlsx]
// Sin argumento escribe `certificaciones_gerentes.xlsx` en el directorio de
// trabajo, donde lo busca el servidor.

use certdash::excel::ejemplo::{escribir_tabla, generar_tabla};
use certdash::excel::ARCHIVO_DATOS;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let destino = match std::env::args().nth(1) {
        Some(p) => std::path::PathBuf::from(p),
        None => std::path::PathBuf::from(ARCHIVO_DATOS),
    };
    if let Some(dir) = destino.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let tabla = generar_tabla(&mut rand::thread_rng());
    escribir_tabla(&destino, &tabla)?;
    tracing::info!(ruta = %destino.display(), registros = tabla.len(), "✅ planilla de ejemplo escrita");
    Ok(())
}
