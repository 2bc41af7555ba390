//! Lógica del dashboard, independiente del servidor.
//!
//! - `filters`: opciones y selección de filtros (gerente, status)
//! - `agregados`: conteos por certificación y KPIs
//! - `dashboard`: `render(tabla, seleccion) -> VistaDashboard`

pub mod agregados;
pub mod dashboard;
pub mod filters;

pub use agregados::{
    calcular_kpis, conteo_por_certificacion, demanda_certificaciones, distribucion_aprobaciones,
    ConteoCertificacion, Kpis,
};
pub use dashboard::{render, VistaDashboard};
pub use filters::{aprobados, filtrar, opciones_filtro, OpcionesFiltro, SeleccionFiltros};
