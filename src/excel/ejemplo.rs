//! Planilla de ejemplo: 10 gerentes con recursos aleatorios y certificaciones
//! obtenidas entre Q1 y Q3 de 2023.

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

use crate::models::{Certificacion, Columna, RegistroCertificacion, TablaCertificaciones};

pub const GERENTES: [&str; 10] = [
    "Ana Torres",
    "Carlos Ruiz",
    "Daniela Soto",
    "Eduardo Pinto",
    "Francisca Vera",
    "Gabriel Muñoz",
    "Helena Rojas",
    "Ignacio Bravo",
    "Javiera Castro",
    "Luis Fuentes",
];

pub const STATUS_POSIBLES: [&str; 3] = ["APPROVE", "PENDING", "REJECTED"];

/// Probabilidad de que un recurso tenga cada certificación
const PROB_CERTIFICACION: f64 = 0.35;

pub fn generar_tabla<R: Rng>(rng: &mut R) -> TablaCertificaciones {
    let inicio = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    let mut registros: Vec<RegistroCertificacion> = Vec::new();

    for gerente in GERENTES {
        let recursos = rng.gen_range(3..=8);
        for _ in 0..recursos {
            // ~60% aprobados
            let status = if rng.gen_bool(0.6) {
                STATUS_POSIBLES[0]
            } else {
                STATUS_POSIBLES[1..].choose(rng).copied().unwrap_or(STATUS_POSIBLES[1])
            };
            // 2023-01-01 + [0, 272] días => hasta 2023-09-30
            let fecha = inicio.checked_add_days(Days::new(rng.gen_range(0..=272))).unwrap_or(inicio);

            let mut registro = RegistroCertificacion {
                indice: registros.len(),
                gerente: gerente.to_string(),
                status: status.to_string(),
                aws: false,
                google: false,
                ibm: false,
                microsoft: false,
                red_hat: false,
                extras: vec![format!("Recurso {:03}", registros.len() + 1), fecha.format("%Y-%m-%d").to_string()],
            };
            for cert in Certificacion::TODAS {
                registro.marcar(cert, rng.gen_bool(PROB_CERTIFICACION));
            }
            registros.push(registro);
        }
    }

    let mut columnas = vec![
        Columna::Gerente,
        Columna::Extra { posicion: 0, nombre: "Recurso".to_string() },
        Columna::Status,
    ];
    columnas.extend(Certificacion::TODAS.into_iter().map(Columna::Certificacion));
    columnas.push(Columna::Extra { posicion: 1, nombre: "Fecha Obtencion".to_string() });

    TablaCertificaciones { columnas, registros }
}

/// Escribe la tabla como `.xlsx`, con las columnas en el orden de
/// `tabla.columnas` y las certificaciones como booleanos nativos.
pub fn escribir_tabla<P: AsRef<Path>>(path: P, tabla: &TablaCertificaciones) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let negrita = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, c) in tabla.columnas.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, c.nombre(), &negrita)?;
    }

    for (i, r) in tabla.registros.iter().enumerate() {
        let fila = i as u32 + 1;
        for (col, c) in tabla.columnas.iter().enumerate() {
            let col = col as u16;
            match c {
                Columna::Gerente => worksheet.write_string(fila, col, r.gerente.as_str())?,
                Columna::Status => worksheet.write_string(fila, col, r.status.as_str())?,
                Columna::Certificacion(cert) => worksheet.write_boolean(fila, col, r.tiene(*cert))?,
                Columna::Extra { posicion, .. } => {
                    let valor = r.extras.get(*posicion).map(String::as_str).unwrap_or("");
                    worksheet.write_string(fila, col, valor)?
                }
            };
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
