/// Filtros del dashboard: gerente y status.
///
/// Las opciones de cada filtro son exactamente los valores distintos que
/// aparecen en la planilla completa. La vista filtrada se recalcula desde cero
/// en cada petición.

use crate::models::{RegistroCertificacion, STATUS_APROBADO};
use serde::Serialize;
use std::collections::BTreeSet;

/// Opciones disponibles para cada filtro, ordenadas y sin duplicados.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcionesFiltro {
    pub gerentes: Vec<String>,
    pub status: Vec<String>,
}

/// Selección actual del usuario.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SeleccionFiltros {
    pub gerentes: BTreeSet<String>,
    pub status: BTreeSet<String>,
}

pub fn opciones_filtro(registros: &[RegistroCertificacion]) -> OpcionesFiltro {
    let gerentes: BTreeSet<&str> = registros.iter().map(|r| r.gerente.as_str()).collect();
    let status: BTreeSet<&str> = registros.iter().map(|r| r.status.as_str()).collect();
    OpcionesFiltro {
        gerentes: gerentes.into_iter().map(String::from).collect(),
        status: status.into_iter().map(String::from).collect(),
    }
}

impl SeleccionFiltros {
    /// Todos los gerentes y sólo `APPROVE` (si existe en los datos).
    pub fn por_defecto(opciones: &OpcionesFiltro) -> Self {
        let status = if opciones.status.iter().any(|s| s == STATUS_APROBADO) {
            BTreeSet::from([STATUS_APROBADO.to_string()])
        } else {
            BTreeSet::new()
        };
        SeleccionFiltros { gerentes: opciones.gerentes.iter().cloned().collect(), status }
    }

    /// Selección que deja pasar todos los registros.
    pub fn todo(opciones: &OpcionesFiltro) -> Self {
        SeleccionFiltros {
            gerentes: opciones.gerentes.iter().cloned().collect(),
            status: opciones.status.iter().cloned().collect(),
        }
    }

    pub fn incluye(&self, registro: &RegistroCertificacion) -> bool {
        self.gerentes.contains(&registro.gerente) && self.status.contains(&registro.status)
    }
}

/// Registros cuyo gerente y status están ambos seleccionados, en el orden
/// de la planilla.
pub fn filtrar<'a>(registros: &'a [RegistroCertificacion], seleccion: &SeleccionFiltros) -> Vec<&'a RegistroCertificacion> {
    registros.iter().filter(|r| seleccion.incluye(r)).collect()
}

/// Registros con `Status == APPROVE`, sin mirar la selección del usuario.
pub fn aprobados(registros: &[RegistroCertificacion]) -> Vec<&RegistroCertificacion> {
    registros.iter().filter(|r| r.es_aprobado()).collect()
}
