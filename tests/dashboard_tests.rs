use certdash::algorithm::{filtrar, opciones_filtro, render, SeleccionFiltros};
use certdash::models::{Certificacion, RegistroCertificacion, TablaCertificaciones};
use std::collections::BTreeSet;

fn registro(gerente: &str, status: &str, aws: bool, otras: bool) -> RegistroCertificacion {
    RegistroCertificacion {
        indice: 0,
        gerente: gerente.to_string(),
        status: status.to_string(),
        aws,
        google: otras,
        ibm: false,
        microsoft: otras,
        red_hat: false,
        extras: Vec::new(),
    }
}

/// 10 registros: 6 APPROVE (4 con AWS), 4 de otros status.
fn planilla_10() -> TablaCertificaciones {
    TablaCertificaciones::new(vec![
        registro("Ana", "APPROVE", true, false),
        registro("Ana", "APPROVE", true, true),
        registro("Ana", "PENDING", true, false),
        registro("Luis", "APPROVE", true, false),
        registro("Luis", "APPROVE", true, false),
        registro("Luis", "REJECTED", false, true),
        registro("Marta", "APPROVE", false, true),
        registro("Marta", "APPROVE", false, false),
        registro("Marta", "PENDING", false, false),
        registro("Marta", "REJECTED", true, true),
    ])
}

#[test]
fn test_escenario_aprobados_todos_los_gerentes() {
    let tabla = planilla_10();
    let opciones = opciones_filtro(&tabla.registros);
    let seleccion = SeleccionFiltros::por_defecto(&opciones);
    assert_eq!(seleccion.status, BTreeSet::from(["APPROVE".to_string()]));

    let vista = render(&tabla, &seleccion);
    assert_eq!(vista.registros.len(), 6);
    assert_eq!(vista.kpis.total_recursos, 6);
    assert_eq!(vista.kpis.tasa_aprobacion, 100.0);
    assert_eq!(vista.tasa_aprobacion_fmt, "100.0%");

    let aws = vista
        .distribucion_aprobaciones
        .iter()
        .find(|c| c.certificacion == Certificacion::Aws)
        .unwrap();
    assert_eq!(aws.total, 4);
}

#[test]
fn test_escenario_status_vacio() {
    let tabla = planilla_10();
    let opciones = opciones_filtro(&tabla.registros);
    let seleccion = SeleccionFiltros {
        gerentes: opciones.gerentes.iter().cloned().collect(),
        status: BTreeSet::new(),
    };
    let vista = render(&tabla, &seleccion);
    assert!(vista.registros.is_empty());
    assert_eq!(
        (vista.kpis.total_recursos, vista.kpis.total_certificaciones, vista.tasa_aprobacion_fmt.as_str()),
        (0, 0, "0.0%")
    );
}

#[test]
fn test_seleccion_completa_devuelve_todo() {
    let tabla = planilla_10();
    let seleccion = SeleccionFiltros::todo(&opciones_filtro(&tabla.registros));
    let filtrados = filtrar(&tabla.registros, &seleccion);
    assert_eq!(filtrados.len(), tabla.len());
    for (a, b) in filtrados.iter().zip(tabla.registros.iter()) {
        assert_eq!(*a, b);
    }

    let vista = render(&tabla, &seleccion);
    assert_eq!(vista.kpis.total_recursos, 10);
    assert_eq!(vista.tasa_aprobacion_fmt, "60.0%");
    // AWS: 6, Google: 4, Microsoft: 4
    assert_eq!(vista.kpis.total_certificaciones, 14);
}

#[test]
fn test_demanda_ignora_filtros_y_va_ordenada() {
    let tabla = planilla_10();
    let opciones = opciones_filtro(&tabla.registros);
    let solo_marta = SeleccionFiltros {
        gerentes: BTreeSet::from(["Marta".to_string()]),
        status: opciones.status.iter().cloned().collect(),
    };
    let a = render(&tabla, &SeleccionFiltros::por_defecto(&opciones));
    let b = render(&tabla, &solo_marta);
    assert_eq!(a.demanda, b.demanda);

    assert_eq!(a.demanda[0].certificacion, Certificacion::Aws);
    assert_eq!(a.demanda[0].total, 6);
    for par in a.demanda.windows(2) {
        assert!(par[0].total >= par[1].total);
    }
}

#[test]
fn test_tasa_siempre_en_rango() {
    let tabla = planilla_10();
    let opciones = opciones_filtro(&tabla.registros);
    for gerente in &opciones.gerentes {
        for status in &opciones.status {
            let sel = SeleccionFiltros {
                gerentes: BTreeSet::from([gerente.clone()]),
                status: BTreeSet::from([status.clone(), "APPROVE".to_string()]),
            };
            let t = render(&tabla, &sel).kpis.tasa_aprobacion;
            assert!((0.0..=100.0).contains(&t), "tasa fuera de rango: {}", t);
        }
    }
}
