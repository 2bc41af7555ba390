// Estructuras de datos principales

use serde::{Serialize, Serializer};

/// Valor de `Status` que marca un registro como aprobado.
pub const STATUS_APROBADO: &str = "APPROVE";

/// Las cinco certificaciones que se registran por recurso, en el orden de
/// columnas de la planilla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Certificacion {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "Google")]
    Google,
    #[serde(rename = "IBM")]
    Ibm,
    #[serde(rename = "Microsoft")]
    Microsoft,
    #[serde(rename = "Red Hat")]
    RedHat,
}

impl Certificacion {
    pub const TODAS: [Certificacion; 5] = [
        Certificacion::Aws,
        Certificacion::Google,
        Certificacion::Ibm,
        Certificacion::Microsoft,
        Certificacion::RedHat,
    ];

    /// Nombre de la columna en el Excel (y etiqueta en gráficos).
    pub fn columna(self) -> &'static str {
        match self {
            Certificacion::Aws => "AWS",
            Certificacion::Google => "Google",
            Certificacion::Ibm => "IBM",
            Certificacion::Microsoft => "Microsoft",
            Certificacion::RedHat => "Red Hat",
        }
    }

    pub fn indice(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Certificacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.columna())
    }
}

/// Una fila de la planilla: un recurso, su gerente, el estado de aprobación y
/// qué certificaciones tiene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistroCertificacion {
    /// Posición de la fila en la hoja, contando desde 0 tras los encabezados
    pub indice: usize,
    #[serde(rename = "Gerente")]
    pub gerente: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "AWS")]
    pub aws: bool,
    #[serde(rename = "Google")]
    pub google: bool,
    #[serde(rename = "IBM")]
    pub ibm: bool,
    #[serde(rename = "Microsoft")]
    pub microsoft: bool,
    #[serde(rename = "Red Hat")]
    pub red_hat: bool,
    /// Columnas adicionales de la hoja, indexadas por `Columna::Extra::posicion`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
}

impl RegistroCertificacion {
    pub fn tiene(&self, cert: Certificacion) -> bool {
        match cert {
            Certificacion::Aws => self.aws,
            Certificacion::Google => self.google,
            Certificacion::Ibm => self.ibm,
            Certificacion::Microsoft => self.microsoft,
            Certificacion::RedHat => self.red_hat,
        }
    }

    pub fn marcar(&mut self, cert: Certificacion, valor: bool) {
        match cert {
            Certificacion::Aws => self.aws = valor,
            Certificacion::Google => self.google = valor,
            Certificacion::Ibm => self.ibm = valor,
            Certificacion::Microsoft => self.microsoft = valor,
            Certificacion::RedHat => self.red_hat = valor,
        }
    }

    pub fn es_aprobado(&self) -> bool {
        self.status == STATUS_APROBADO
    }

    /// Cantidad de certificaciones que tiene el recurso (0..=5)
    pub fn total_certificaciones(&self) -> u64 {
        Certificacion::TODAS.iter().filter(|c| self.tiene(**c)).count() as u64
    }
}

/// Una columna de la planilla, en el orden en que aparece en la hoja.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Columna {
    Gerente,
    Status,
    Certificacion(Certificacion),
    /// Fuera del esquema fijo; `posicion` indexa `RegistroCertificacion::extras`
    Extra { posicion: usize, nombre: String },
}

impl Columna {
    pub fn nombre(&self) -> &str {
        match self {
            Columna::Gerente => "Gerente",
            Columna::Status => "Status",
            Columna::Certificacion(c) => c.columna(),
            Columna::Extra { nombre, .. } => nombre,
        }
    }

    /// `Gerente`, `Status` y las cinco certificaciones.
    pub fn esquema_fijo() -> Vec<Columna> {
        let mut cols = vec![Columna::Gerente, Columna::Status];
        cols.extend(Certificacion::TODAS.into_iter().map(Columna::Certificacion));
        cols
    }
}

impl Serialize for Columna {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.nombre())
    }
}

/// Resultado de leer la planilla: registros en orden de hoja y las columnas
/// en el orden de la fila de encabezados.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablaCertificaciones {
    pub columnas: Vec<Columna>,
    pub registros: Vec<RegistroCertificacion>,
}

impl Default for TablaCertificaciones {
    fn default() -> Self {
        TablaCertificaciones::new(Vec::new())
    }
}

impl TablaCertificaciones {
    pub fn new(registros: Vec<RegistroCertificacion>) -> Self {
        TablaCertificaciones { columnas: Columna::esquema_fijo(), registros }
    }

    pub fn len(&self) -> usize {
        self.registros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registros.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columnas_serializan_con_su_nombre() {
        let cols = vec![
            Columna::Gerente,
            Columna::Extra { posicion: 0, nombre: "Recurso".into() },
            Columna::Certificacion(Certificacion::RedHat),
        ];
        assert_eq!(serde_json::to_value(&cols).unwrap(), serde_json::json!(["Gerente", "Recurso", "Red Hat"]));
    }

    #[test]
    fn test_tabla_nueva_usa_esquema_fijo() {
        let t = TablaCertificaciones::new(Vec::new());
        assert_eq!(t.columnas.len(), 7);
        assert_eq!(t.columnas[2], Columna::Certificacion(Certificacion::Aws));
        assert!(!t.columnas.iter().any(|c| matches!(c, Columna::Extra { .. })));
    }
}
