// Biblioteca raíz del crate `certdash`.
// Lee la planilla de certificaciones, aplica los filtros y arma la vista que
// sirve el servidor HTTP.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod excel;
pub mod graficos;
pub mod models;
pub mod server;
pub mod vista;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use error::{DashboardError, DataLoadError};
