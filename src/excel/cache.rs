//! Caché en memoria de la planilla de certificaciones.
//!
//! La planilla se lee una sola vez por proceso: `CacheCertificaciones::cargar`
//! devuelve siempre el mismo `Arc` después de la primera lectura exitosa.
//! Una lectura fallida no se guarda, de modo que la siguiente petición vuelve
//! a intentarlo.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

use crate::error::DataLoadError;
use crate::excel::leer_certificaciones;
use crate::models::TablaCertificaciones;

#[derive(Debug)]
pub struct CacheCertificaciones {
    ruta: PathBuf,
    tabla: Mutex<Option<Arc<TablaCertificaciones>>>,
}

impl CacheCertificaciones {
    pub fn new<P: Into<PathBuf>>(ruta: P) -> Self {
        CacheCertificaciones { ruta: ruta.into(), tabla: Mutex::new(None) }
    }

    #[cfg(test)]
    pub fn con_tabla<P: Into<PathBuf>>(ruta: P, tabla: TablaCertificaciones) -> Self {
        CacheCertificaciones { ruta: ruta.into(), tabla: Mutex::new(Some(Arc::new(tabla))) }
    }

    pub fn ruta(&self) -> &Path {
        &self.ruta
    }

    #[cfg(test)]
    pub fn esta_cargada(&self) -> bool {
        self.tabla.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Devuelve la tabla cacheada o la lee desde disco.
    ///
    /// El mutex se mantiene durante la lectura para que peticiones simultáneas
    /// no lean el archivo dos veces.
    pub fn cargar(&self) -> Result<Arc<TablaCertificaciones>, DataLoadError> {
        let mut guard = self.tabla.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = guard.as_ref() {
            return Ok(Arc::clone(existing));
        }

        debug!(ruta = %self.ruta.display(), "caché vacía, leyendo planilla");
        match leer_certificaciones(&self.ruta) {
            Ok(tabla) => {
                let arc = Arc::new(tabla);
                *guard = Some(Arc::clone(&arc));
                Ok(arc)
            }
            Err(e) => {
                warn!(ruta = %self.ruta.display(), error = %e, "no se pudo cargar la planilla");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archivo_inexistente_no_se_cachea() {
        let cache = CacheCertificaciones::new("/no/existe/certificaciones_gerentes.xlsx");
        assert!(matches!(cache.cargar(), Err(DataLoadError::ArchivoNoEncontrado(_))));
        assert!(!cache.esta_cargada());
    }

    #[test]
    fn test_con_tabla_devuelve_mismo_arc() {
        let cache = CacheCertificaciones::con_tabla("memoria", TablaCertificaciones::default());
        let a = cache.cargar().unwrap();
        let b = cache.cargar().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
