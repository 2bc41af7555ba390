//! Gráficos del dashboard en SVG.
//!
//! - `demanda`: barras de certificaciones más demandadas (plotters)
//! - `aprobaciones`: dona de la distribución de aprobaciones (SVG interactivo)

pub mod aprobaciones;
pub mod demanda;

pub use aprobaciones::grafico_aprobaciones_svg;
pub use demanda::grafico_demanda_svg;
