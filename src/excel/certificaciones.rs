use calamine::Data;
use std::path::Path;
use tracing::{debug, info};

use crate::error::DataLoadError;
use crate::excel::io::{cell_to_bool, cell_to_string, leer_primera_hoja, normalize_header};
use crate::models::{Certificacion, Columna, RegistroCertificacion, TablaCertificaciones};

/// Índices de columna resueltos a partir de la fila de encabezados.
struct Columnas {
    gerente: usize,
    status: usize,
    certificaciones: [usize; 5],
    extras: Vec<usize>,
    /// Orden de la fila de encabezados
    orden: Vec<Columna>,
}

fn resolver_columnas(headers: &[Data]) -> Result<Columnas, DataLoadError> {
    let normalizados: Vec<String> = headers.iter().map(|h| normalize_header(&cell_to_string(h))).collect();
    let buscar = |nombre: &str| -> Result<usize, DataLoadError> {
        let objetivo = normalize_header(nombre);
        normalizados
            .iter()
            .position(|h| *h == objetivo)
            .ok_or_else(|| DataLoadError::ColumnaFaltante(nombre.to_string()))
    };

    let gerente = buscar("Gerente")?;
    let status = buscar("Status")?;
    let mut certificaciones = [0usize; 5];
    for cert in Certificacion::TODAS {
        certificaciones[cert.indice()] = buscar(cert.columna())?;
    }

    let mut extras: Vec<usize> = Vec::new();
    let mut orden: Vec<Columna> = Vec::new();
    for (i, h) in headers.iter().enumerate() {
        if i == gerente {
            orden.push(Columna::Gerente);
        } else if i == status {
            orden.push(Columna::Status);
        } else if let Some(cert) = Certificacion::TODAS.into_iter().find(|c| certificaciones[c.indice()] == i) {
            orden.push(Columna::Certificacion(cert));
        } else {
            let nombre = cell_to_string(h);
            if nombre.is_empty() {
                continue;
            }
            orden.push(Columna::Extra { posicion: extras.len(), nombre });
            extras.push(i);
        }
    }

    Ok(Columnas { gerente, status, certificaciones, extras, orden })
}

/// Construye la tabla a partir de filas ya leídas. La primera fila es la de
/// encabezados; `fila_base` es el número de fila (1-based) que ocupa en la hoja
/// y se usa sólo para los mensajes de error.
pub fn tabla_desde_filas<'a, I>(mut filas: I, hoja: &str, fila_base: usize) -> Result<TablaCertificaciones, DataLoadError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let headers = match filas.next() {
        Some(h) => h,
        None => return Err(DataLoadError::SinEncabezados(hoja.to_string())),
    };
    let cols = resolver_columnas(headers)?;

    let mut registros: Vec<RegistroCertificacion> = Vec::new();
    for (i, row) in filas.enumerate() {
        let fila = fila_base + i + 1;
        if row.iter().all(|c| cell_to_string(c).is_empty()) {
            continue;
        }
        let celda = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);

        let gerente = cell_to_string(celda(cols.gerente));
        if gerente.is_empty() {
            return Err(DataLoadError::CampoVacio { fila, columna: "Gerente".to_string() });
        }
        let status = cell_to_string(celda(cols.status));
        if status.is_empty() {
            return Err(DataLoadError::CampoVacio { fila, columna: "Status".to_string() });
        }

        let mut registro = RegistroCertificacion {
            indice: i,
            gerente,
            status,
            aws: false,
            google: false,
            ibm: false,
            microsoft: false,
            red_hat: false,
            extras: cols.extras.iter().map(|idx| cell_to_string(celda(*idx))).collect(),
        };
        for cert in Certificacion::TODAS {
            let c = celda(cols.certificaciones[cert.indice()]);
            match cell_to_bool(c) {
                Some(v) => registro.marcar(cert, v),
                None => {
                    return Err(DataLoadError::ValorInvalido {
                        fila,
                        columna: cert.columna().to_string(),
                        valor: cell_to_string(c),
                    })
                }
            }
        }
        registros.push(registro);
    }

    Ok(TablaCertificaciones { columnas: cols.orden, registros })
}

/// Lee la planilla de certificaciones (primera hoja del libro).
pub fn leer_certificaciones<P: AsRef<Path>>(path: P) -> Result<TablaCertificaciones, DataLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataLoadError::ArchivoNoEncontrado(path.to_path_buf()));
    }

    let (hoja, range) = leer_primera_hoja(path)?;
    let fila_base = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);
    debug!(hoja = %hoja, fila_base, "leyendo hoja de certificaciones");

    let tabla = tabla_desde_filas(range.rows(), &hoja, fila_base)?;
    info!(
        archivo = %path.display(),
        registros = tabla.len(),
        "📄 planilla de certificaciones leída"
    );
    Ok(tabla)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn encabezados() -> Vec<Data> {
        vec![s("Gerente"), s("Recurso"), s("Status"), s("AWS"), s("Google"), s("IBM"), s("Microsoft"), s("Red Hat")]
    }

    fn fila(gerente: &str, recurso: &str, status: &str, certs: [bool; 5]) -> Vec<Data> {
        let mut v = vec![s(gerente), s(recurso), s(status)];
        v.extend(certs.iter().map(|b| Data::Bool(*b)));
        v
    }

    #[test]
    fn test_tabla_desde_filas_basico() {
        let filas = vec![
            encabezados(),
            fila("Ana", "R1", "APPROVE", [true, false, true, false, false]),
            fila("Luis", "R2", "PENDING", [false, false, false, false, true]),
        ];
        let tabla = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap();
        assert_eq!(tabla.len(), 2);
        let nombres: Vec<&str> = tabla.columnas.iter().map(|c| c.nombre()).collect();
        assert_eq!(nombres, vec!["Gerente", "Recurso", "Status", "AWS", "Google", "IBM", "Microsoft", "Red Hat"]);
        let r0 = &tabla.registros[0];
        assert_eq!(r0.gerente, "Ana");
        assert!(r0.aws && r0.ibm && !r0.google);
        assert_eq!(r0.extras, vec!["R1".to_string()]);
        assert!(tabla.registros[1].red_hat);
    }

    #[test]
    fn test_encabezados_sin_distinguir_mayusculas_ni_espacios() {
        let filas = vec![
            vec![s("gerente"), s("STATUS"), s("aws"), s("google"), s("ibm"), s("microsoft"), s("RedHat")],
            vec![s("Ana"), s("APPROVE"), Data::Int(1), Data::Int(0), s("x"), Data::Empty, s("no")],
        ];
        let tabla = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap();
        let r = &tabla.registros[0];
        assert!(r.aws && r.ibm);
        assert!(!r.google && !r.microsoft && !r.red_hat);
        assert_eq!(tabla.columnas, Columna::esquema_fijo());
    }

    #[test]
    fn test_columna_faltante() {
        let filas = vec![vec![s("Gerente"), s("Status"), s("AWS"), s("Google"), s("IBM"), s("Microsoft")]];
        let err = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap_err();
        assert!(matches!(err, DataLoadError::ColumnaFaltante(ref c) if c == "Red Hat"));
    }

    #[test]
    fn test_valor_no_booleano() {
        let mut mala = fila("Ana", "R1", "APPROVE", [true; 5]);
        mala[4] = s("tal vez");
        let filas = vec![encabezados(), mala];
        let err = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap_err();
        match err {
            DataLoadError::ValorInvalido { fila, columna, valor } => {
                assert_eq!(fila, 2);
                assert_eq!(columna, "Google");
                assert_eq!(valor, "tal vez");
            }
            other => panic!("error inesperado: {}", other),
        }
    }

    #[test]
    fn test_filas_vacias_se_omiten_y_gerente_vacio_falla() {
        let vacia = vec![Data::Empty; 8];
        let filas = vec![encabezados(), vacia.clone(), fila("Ana", "R1", "APPROVE", [false; 5]), vacia];
        let tabla = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap();
        assert_eq!(tabla.len(), 1);
        // conserva la posición en la hoja aunque haya filas vacías antes
        assert_eq!(tabla.registros[0].indice, 1);

        let filas = vec![encabezados(), fila("", "R1", "APPROVE", [false; 5])];
        let err = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap_err();
        assert!(matches!(err, DataLoadError::CampoVacio { fila: 2, .. }));
    }

    #[test]
    fn test_hoja_sin_filas() {
        let filas: Vec<Vec<Data>> = Vec::new();
        let err = tabla_desde_filas(filas.iter().map(|f| f.as_slice()), "Hoja1", 1).unwrap_err();
        assert!(matches!(err, DataLoadError::SinEncabezados(_)));
    }
}
