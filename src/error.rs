//! Errores del crate.
//!
//! `DataLoadError` cubre todo lo que puede fallar al leer el Excel de
//! certificaciones; es fatal para la petición que lo provoca. Un filtro sin
//! resultados NO es un error: se representa como una vista vacía.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("no se encontró el archivo de datos: {0}")]
    ArchivoNoEncontrado(PathBuf),

    #[error("no se pudo abrir el libro Excel: {0}")]
    Excel(#[from] calamine::Error),

    #[error("el libro no contiene hojas")]
    SinHojas,

    #[error("la hoja '{0}' no tiene fila de encabezados")]
    SinEncabezados(String),

    #[error("falta la columna requerida '{0}'")]
    ColumnaFaltante(String),

    #[error("fila {fila}: la columna '{columna}' está vacía")]
    CampoVacio { fila: usize, columna: String },

    #[error("fila {fila}: valor '{valor}' no es booleano en la columna '{columna}'")]
    ValorInvalido {
        fila: usize,
        columna: String,
        valor: String,
    },
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Datos(#[from] DataLoadError),

    #[error("error al dibujar el gráfico: {0}")]
    Grafico(String),
}
