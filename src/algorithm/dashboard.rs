//! `render`: de la planilla completa y la selección de filtros a la vista del
//! dashboard. Función pura, sin dependencias del servidor HTTP.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::algorithm::agregados::{
    calcular_kpis, demanda_certificaciones, distribucion_aprobaciones, ConteoCertificacion, Kpis,
};
use crate::algorithm::filters::{filtrar, opciones_filtro, OpcionesFiltro, SeleccionFiltros};
use crate::models::{Columna, RegistroCertificacion, TablaCertificaciones};

/// Todo lo que necesita una página del dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct VistaDashboard {
    pub opciones: OpcionesFiltro,
    pub seleccion: SeleccionFiltros,
    /// Columnas de la tabla, en el orden de la hoja
    pub columnas: Vec<Columna>,
    /// Registros filtrados (tabla "Recursos Certificados")
    pub registros: Vec<RegistroCertificacion>,
    /// Sobre la planilla completa, ignora los filtros
    pub demanda: Vec<ConteoCertificacion>,
    /// Sobre los aprobados de la planilla completa, ignora los filtros
    pub distribucion_aprobaciones: Vec<ConteoCertificacion>,
    pub kpis: Kpis,
    pub tasa_aprobacion_fmt: String,
    pub generado_en: DateTime<Utc>,
}

impl VistaDashboard {
    pub fn sin_resultados(&self) -> bool {
        self.registros.is_empty()
    }
}

pub fn render(tabla: &TablaCertificaciones, seleccion: &SeleccionFiltros) -> VistaDashboard {
    let filtrados = filtrar(&tabla.registros, seleccion);
    let kpis = calcular_kpis(&filtrados);

    VistaDashboard {
        opciones: opciones_filtro(&tabla.registros),
        seleccion: seleccion.clone(),
        columnas: tabla.columnas.clone(),
        registros: filtrados.into_iter().cloned().collect(),
        demanda: demanda_certificaciones(&tabla.registros),
        distribucion_aprobaciones: distribucion_aprobaciones(&tabla.registros),
        tasa_aprobacion_fmt: kpis.tasa_aprobacion_fmt(),
        kpis,
        generado_en: Utc::now(),
    }
}
