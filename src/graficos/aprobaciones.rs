//! Gráfico de dona de la distribución de aprobaciones.
//!
//! Se arma a mano como SVG para poder anotar cada porción con `<title>`
//! (tooltip al pasar el mouse) y atributos `data-*` que la página usa para
//! marcar la porción seleccionada al hacer click.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::algorithm::ConteoCertificacion;

pub const ANCHO: u32 = 460;
pub const ALTO: u32 = 320;
const RADIO: f64 = 130.0;
/// Hueco central como fracción del radio
const HUECO: f64 = 0.3;

/// Paleta pastel (una por certificación, en orden de columnas)
const PASTEL: [&str; 5] = ["#66c5cc", "#f6cf71", "#f89c74", "#dcb0f2", "#87c55f"];

fn punto(cx: f64, cy: f64, r: f64, angulo: f64) -> (f64, f64) {
    (cx + r * angulo.cos(), cy + r * angulo.sin())
}

/// Path de una porción de anillo entre dos ángulos (radianes, sentido horario).
fn path_porcion(cx: f64, cy: f64, r: f64, ri: f64, desde: f64, hasta: f64) -> String {
    let barrido = hasta - desde;
    if barrido >= 2.0 * PI - 1e-9 {
        // anillo completo: dos semicírculos por radio, relleno evenodd
        return format!(
            "M {:.2} {cy:.2} A {r} {r} 0 1 1 {:.2} {cy:.2} A {r} {r} 0 1 1 {:.2} {cy:.2} Z \
             M {:.2} {cy:.2} A {ri} {ri} 0 1 0 {:.2} {cy:.2} A {ri} {ri} 0 1 0 {:.2} {cy:.2} Z",
            cx + r,
            cx - r,
            cx + r,
            cx + ri,
            cx - ri,
            cx + ri,
        );
    }
    let grande = if barrido > PI { 1 } else { 0 };
    let (x0, y0) = punto(cx, cy, r, desde);
    let (x1, y1) = punto(cx, cy, r, hasta);
    let (x2, y2) = punto(cx, cy, ri, hasta);
    let (x3, y3) = punto(cx, cy, ri, desde);
    format!(
        "M {x0:.2} {y0:.2} A {r} {r} 0 {grande} 1 {x1:.2} {y1:.2} L {x2:.2} {y2:.2} A {ri} {ri} 0 {grande} 0 {x3:.2} {y3:.2} Z"
    )
}

/// Dona con una porción por certificación con total > 0, leyenda a la
/// derecha. Devuelve `None` si la suma es 0 (no hay nada que dibujar).
pub fn grafico_aprobaciones_svg(serie: &[ConteoCertificacion]) -> Option<String> {
    let suma: u64 = serie.iter().map(|c| c.total).sum();
    if suma == 0 {
        return None;
    }

    let (cx, cy) = (RADIO + 20.0, ALTO as f64 / 2.0);
    let ri = RADIO * HUECO;
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="dona" width="{ANCHO}" height="{ALTO}" viewBox="0 0 {ANCHO} {ALTO}">"#
    );

    // empieza arriba (-90°) como plotly
    let mut angulo = -PI / 2.0;
    for c in serie {
        let color = PASTEL[c.certificacion.indice() % PASTEL.len()];
        if c.total == 0 {
            continue;
        }
        let barrido = 2.0 * PI * c.total as f64 / suma as f64;
        let d = path_porcion(cx, cy, RADIO, ri, angulo, angulo + barrido);
        let medio = angulo + barrido / 2.0;
        let (tx, ty) = punto(cx, cy, (RADIO + ri) / 2.0, medio);
        let nombre = c.certificacion.columna();
        let _ = write!(
            svg,
            r##"<g class="porcion" data-cert="{nombre}" data-total="{total}"><path d="{d}" fill="{color}" stroke="#ffffff" stroke-width="1" fill-rule="evenodd"/><title>{nombre}&#10;Total: {total}</title><text x="{tx:.2}" y="{ty:.2}" text-anchor="middle" font-size="12" font-family="sans-serif"><tspan x="{tx:.2}">{nombre}</tspan><tspan x="{tx:.2}" dy="14">{pct:.1}%</tspan></text></g>"##,
            total = c.total,
            pct = c.porcentaje,
        );
        angulo += barrido;
    }

    // leyenda
    let lx = cx + RADIO + 30.0;
    for (i, c) in serie.iter().enumerate() {
        let color = PASTEL[c.certificacion.indice() % PASTEL.len()];
        let ly = 40.0 + i as f64 * 24.0;
        let _ = write!(
            svg,
            r#"<g class="leyenda" data-cert="{nombre}"><rect x="{lx:.2}" y="{y:.2}" width="14" height="14" fill="{color}"/><text x="{tx:.2}" y="{ty:.2}" font-size="13" font-family="sans-serif">{nombre}</text></g>"#,
            nombre = c.certificacion.columna(),
            y = ly,
            tx = lx + 20.0,
            ty = ly + 12.0,
        );
    }

    svg.push_str("</svg>");
    Some(svg)
}
