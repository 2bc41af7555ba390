use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::error::DataLoadError;

/// Convierte un `Data` de calamine a String (versión genérica para celdas)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Interpreta una celda como booleano.
///
/// Acepta booleanos nativos, números (distinto de cero = verdadero) y los
/// textos habituales en planillas en español o inglés. Una celda vacía cuenta
/// como `false`. Devuelve `None` si el contenido no se puede interpretar.
pub fn cell_to_bool(c: &Data) -> Option<bool> {
    match c {
        Data::Bool(b) => Some(*b),
        Data::Int(i) => Some(*i != 0),
        Data::Float(f) => Some(*f != 0.0),
        Data::Empty => Some(false),
        Data::String(s) => match s.trim().to_lowercase().as_str() {
            "" | "false" | "falso" | "no" | "0" | "n" => Some(false),
            "true" | "verdadero" | "si" | "sí" | "yes" | "x" | "1" | "s" | "y" => Some(true),
            _ => None,
        },
        _ => None,
    }
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Abre el libro y devuelve el nombre y el rango de la primera hoja.
pub fn leer_primera_hoja<P: AsRef<Path>>(path: P) -> Result<(String, Range<Data>), DataLoadError> {
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let primera = match names.first() {
        Some(n) => n.clone(),
        None => return Err(DataLoadError::SinHojas),
    };

    let range = workbook.worksheet_range(&primera)?;
    Ok((primera, range))
}
