//! Módulo `excel`: lectura de la planilla de certificaciones.
//!
//! Submódulos:
//! - `io`: helpers para convertir celdas de calamine
//! - `certificaciones`: lectura y validación del esquema fijo
//! - `cache`: caché de carga única por proceso
//! - `ejemplo`: generación de una planilla de ejemplo

/// Helpers de IO y utilidades para parsing de Excel
mod io;

/// Lectura de la planilla: `leer_certificaciones`
mod certificaciones;

/// Caché en memoria: `CacheCertificaciones`
pub mod cache;

/// Planilla de ejemplo (10 gerentes con recursos aleatorios)
pub mod ejemplo;

pub use cache::CacheCertificaciones;
pub use certificaciones::leer_certificaciones;

/// Nombre fijo del libro de datos, relativo al directorio de trabajo.
pub const ARCHIVO_DATOS: &str = "certificaciones_gerentes.xlsx";

/// Nombre fijo del logo que se muestra en la cabecera.
pub const ARCHIVO_LOGO: &str = "ibm.jpg";
