//! Configuración del servidor a partir del entorno.
//!
//! Los datos no son configurables: el libro y el logo se buscan con su
//! nombre fijo, relativo al directorio de trabajo del proceso.

use std::path::PathBuf;

use crate::excel::{ARCHIVO_DATOS, ARCHIVO_LOGO};

pub const ENV_BIND: &str = "CERTDASH_BIND";
pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    /// Base contra la que se resuelven los nombres fijos. Vacía en el
    /// servidor, así las rutas quedan relativas al directorio de trabajo.
    pub datafiles_dir: PathBuf,
}

impl Config {
    /// Lee `CERTDASH_BIND`; el `.env` lo carga `main` antes de llamar aquí.
    pub fn from_env() -> Self {
        Self::con_bind(std::env::var(ENV_BIND).ok())
    }

    pub fn con_bind(bind: Option<String>) -> Self {
        let bind = match bind {
            Some(b) if !b.trim().is_empty() => b.trim().to_string(),
            _ => BIND_POR_DEFECTO.to_string(),
        };
        Config { bind, datafiles_dir: PathBuf::new() }
    }

    pub fn ruta_datos(&self) -> PathBuf {
        self.datafiles_dir.join(ARCHIVO_DATOS)
    }

    pub fn ruta_logo(&self) -> PathBuf {
        self.datafiles_dir.join(ARCHIVO_LOGO)
    }
}
