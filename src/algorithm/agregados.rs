//! Agregados del dashboard: conteos por certificación y KPIs.

use crate::algorithm::filters::aprobados;
use crate::models::{Certificacion, RegistroCertificacion};
use serde::Serialize;

/// Total de registros que tienen una certificación.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConteoCertificacion {
    pub certificacion: Certificacion,
    pub total: u64,
    /// Porcentaje sobre la suma de la serie (0.0 si la suma es 0)
    pub porcentaje: f64,
}

/// Suma cada columna booleana sobre los registros dados, en orden de columna.
pub fn conteo_por_certificacion<'a, I>(registros: I) -> Vec<ConteoCertificacion>
where
    I: IntoIterator<Item = &'a RegistroCertificacion>,
{
    let mut totales = [0u64; 5];
    for r in registros {
        for cert in Certificacion::TODAS {
            if r.tiene(cert) {
                totales[cert.indice()] += 1;
            }
        }
    }

    let suma: u64 = totales.iter().sum();
    Certificacion::TODAS
        .iter()
        .map(|c| {
            let total = totales[c.indice()];
            let porcentaje = if suma == 0 { 0.0 } else { 100.0 * total as f64 / suma as f64 };
            ConteoCertificacion { certificacion: *c, total, porcentaje }
        })
        .collect()
}

/// Certificaciones más demandadas: conteo sobre la planilla COMPLETA, de
/// mayor a menor. Los empates conservan el orden de columnas.
pub fn demanda_certificaciones(registros: &[RegistroCertificacion]) -> Vec<ConteoCertificacion> {
    let mut serie = conteo_por_certificacion(registros);
    serie.sort_by(|a, b| b.total.cmp(&a.total));
    serie
}

/// Distribución de certificaciones entre los registros aprobados de la
/// planilla completa, en orden de columnas.
pub fn distribucion_aprobaciones(registros: &[RegistroCertificacion]) -> Vec<ConteoCertificacion> {
    conteo_por_certificacion(aprobados(registros))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub total_recursos: usize,
    pub total_certificaciones: u64,
    /// 0.0..=100.0; 0 cuando no hay registros
    pub tasa_aprobacion: f64,
}

impl Kpis {
    /// Tasa con un decimal y sufijo `%`, p. ej. `"66.7%"`.
    pub fn tasa_aprobacion_fmt(&self) -> String {
        format!("{:.1}%", self.tasa_aprobacion)
    }
}

pub fn calcular_kpis(filtrados: &[&RegistroCertificacion]) -> Kpis {
    let total_recursos = filtrados.len();
    let total_certificaciones = filtrados.iter().map(|r| r.total_certificaciones()).sum();
    let n_aprobados = filtrados.iter().filter(|r| r.es_aprobado()).count();
    let tasa_aprobacion = if total_recursos > 0 {
        100.0 * n_aprobados as f64 / total_recursos as f64
    } else {
        0.0
    };
    Kpis { total_recursos, total_certificaciones, tasa_aprobacion }
}
