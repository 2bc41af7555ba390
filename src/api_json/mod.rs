use std::collections::BTreeSet;

use crate::algorithm::{OpcionesFiltro, SeleccionFiltros};

pub mod handlers;

/// Parámetros de filtro recibidos en la query string.
///
/// Se aceptan dos formas, combinables:
/// - repetida, como la envía el formulario: `?gerente=Ana&gerente=Luis&status=APPROVE`
/// - listas separadas por comas: `?gerentes=Ana,Luis&statuses=APPROVE,PENDING`
///
/// Una clave presente pero sólo con valores vacíos (`?status=`) significa
/// selección vacía; una clave ausente significa "usar el valor por defecto".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FiltrosQuery {
    pub gerentes: Option<BTreeSet<String>>,
    pub status: Option<BTreeSet<String>>,
}

fn agregar(destino: &mut Option<BTreeSet<String>>, valores: &[&str]) {
    let set = destino.get_or_insert_with(BTreeSet::new);
    for v in valores {
        let v = v.trim();
        if !v.is_empty() {
            set.insert(v.to_string());
        }
    }
}

/// Helper para convertir 'a,b,c' -> Vec<&str>
fn split_list(s: &str) -> Vec<&str> {
    s.split(',').map(|p| p.trim()).filter(|p| !p.is_empty()).collect()
}

pub fn parse_filtros_query(pares: &[(String, String)]) -> FiltrosQuery {
    let mut q = FiltrosQuery::default();
    for (clave, valor) in pares {
        match clave.as_str() {
            "gerente" => agregar(&mut q.gerentes, &[valor.as_str()]),
            "gerentes" => agregar(&mut q.gerentes, &split_list(valor)),
            "status" => agregar(&mut q.status, &[valor.as_str()]),
            "statuses" => agregar(&mut q.status, &split_list(valor)),
            _ => {}
        }
    }
    q
}

impl FiltrosQuery {
    /// Completa con los valores por defecto lo que no vino en la query.
    pub fn resolver(self, opciones: &OpcionesFiltro) -> SeleccionFiltros {
        let defecto = SeleccionFiltros::por_defecto(opciones);
        SeleccionFiltros {
            gerentes: self.gerentes.unwrap_or(defecto.gerentes),
            status: self.status.unwrap_or(defecto.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pares(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn opciones() -> OpcionesFiltro {
        OpcionesFiltro {
            gerentes: vec!["Ana".into(), "Luis".into()],
            status: vec!["APPROVE".into(), "PENDING".into()],
        }
    }

    #[test]
    fn test_sin_parametros_usa_defecto() {
        let sel = parse_filtros_query(&[]).resolver(&opciones());
        assert_eq!(sel.gerentes.len(), 2);
        assert_eq!(sel.status, BTreeSet::from(["APPROVE".to_string()]));
    }

    #[test]
    fn test_clave_vacia_es_seleccion_vacia() {
        let sel = parse_filtros_query(&pares(&[("status", "")])).resolver(&opciones());
        assert!(sel.status.is_empty());
        assert_eq!(sel.gerentes.len(), 2);
    }

    #[test]
    fn test_formulario_con_marcador_y_repetidos() {
        let q = parse_filtros_query(&pares(&[
            ("gerente", ""),
            ("gerente", "Luis"),
            ("status", ""),
            ("status", "PENDING"),
            ("status", "APPROVE"),
        ]));
        let sel = q.resolver(&opciones());
        assert_eq!(sel.gerentes, BTreeSet::from(["Luis".to_string()]));
        assert_eq!(sel.status.len(), 2);
    }

    #[test]
    fn test_listas_por_comas() {
        let q = parse_filtros_query(&pares(&[("gerentes", "Ana, Luis,,"), ("statuses", "PENDING")]));
        assert_eq!(q.gerentes.unwrap().len(), 2);
        assert_eq!(q.status.unwrap(), BTreeSet::from(["PENDING".to_string()]));
    }

    #[test]
    fn test_valores_desconocidos_se_conservan() {
        let sel = parse_filtros_query(&pares(&[("gerente", "Nadie")])).resolver(&opciones());
        assert_eq!(sel.gerentes, BTreeSet::from(["Nadie".to_string()]));
    }
}
