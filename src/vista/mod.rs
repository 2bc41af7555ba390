//! Página HTML del dashboard.
//!
//! Genera un documento autocontenido (CSS y JS embebidos) a partir de una
//! `VistaDashboard` y de los SVG ya dibujados. No hace cálculos: todo viene de
//! `algorithm::render`.

use std::fmt::Write;

use crate::algorithm::VistaDashboard;
use crate::excel::ARCHIVO_DATOS;
use crate::models::{Certificacion, Columna, RegistroCertificacion};

pub const TITULO: &str = "Dashboard de Certificaciones TI";
pub const LOGO_ANCHO: u32 = 150;
/// Color de fondo de las celdas de certificación en `true`
pub const COLOR_CERTIFICADO: &str = "#e6f3ff";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Página completa del dashboard.
pub fn render_pagina(vista: &VistaDashboard, svg_demanda: &str, svg_aprobaciones: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{titulo}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>📊</text></svg>">
    <style>{css}</style>
</head>
<body>
    <aside class="sidebar">
        {sidebar}
    </aside>
    <main class="contenido">
        {header}
        <h3>Recursos Certificados</h3>
        {tabla}
        <div class="columnas">
            <section class="col">
                <h3>🔝 Certificaciones Más Demandadas</h3>
                <div class="grafico">{svg_demanda}</div>
            </section>
            <section class="col">
                <h3>✅ Distribución de Aprobaciones</h3>
                <div class="grafico">{aprobaciones}</div>
            </section>
        </div>
        {kpis}
        {footer}
    </main>
    <script>{js}</script>
</body>
</html>"#,
        titulo = TITULO,
        css = inline_css(),
        js = inline_javascript(),
        sidebar = render_sidebar(vista),
        header = render_header(),
        tabla = render_tabla(vista),
        svg_demanda = svg_demanda,
        aprobaciones = svg_aprobaciones
            .map(String::from)
            .unwrap_or_else(|| r#"<p class="vacio">No hay registros aprobados con certificaciones.</p>"#.to_string()),
        kpis = render_kpis(vista),
        footer = render_footer(vista),
    )
}

/// Página mínima para cuando no se pudo cargar la planilla: no hay dashboard
/// parcial, sólo el error.
pub fn render_pagina_error(mensaje: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head><meta charset="UTF-8"><title>{titulo}</title><style>{css}</style></head>
<body>
    <main class="contenido">
        <h2>📊 {titulo}</h2>
        <div class="error">
            <strong>No se pudieron cargar los datos ({archivo}).</strong>
            <pre>{mensaje}</pre>
        </div>
    </main>
</body>
</html>"#,
        titulo = TITULO,
        css = inline_css(),
        archivo = ARCHIVO_DATOS,
        mensaje = html_escape(mensaje),
    )
}

fn render_header() -> String {
    format!(
        r#"<header class="cabecera">
            <img src="/logo" width="{LOGO_ANCHO}" alt="logo">
            <h2>📊 {TITULO}</h2>
        </header>"#
    )
}

fn render_multiselect(nombre: &str, etiqueta: &str, opciones: &[String], seleccion: &std::collections::BTreeSet<String>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<label for="{nombre}">{etiqueta}</label>
        <input type="hidden" name="{nombre}" value="">
        <select id="{nombre}" name="{nombre}" multiple size="{size}" onchange="this.form.submit()">"#,
        size = opciones.len().clamp(2, 10),
    );
    for op in opciones {
        let sel = if seleccion.contains(op) { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{v}"{sel}>{v}</option>"#, v = html_escape(op));
    }
    html.push_str("</select>");
    html
}

fn render_sidebar(vista: &VistaDashboard) -> String {
    format!(
        r#"<h3>🔍 Filtros</h3>
        <form method="get" action="/">
            {gerentes}
            {status}
            <noscript><button type="submit">Aplicar</button></noscript>
        </form>
        <div class="nota">
            <strong>Nota:</strong>
            <ul>
                <li>Los datos son los generados en el primer prompt (10 gerentes con recursos aleatorios).</li>
                <li>Fechas de obtención: Q1-Q3 2023.</li>
                <li>Filtros aplicables en tiempo real.</li>
            </ul>
        </div>"#,
        gerentes = render_multiselect("gerente", "Seleccionar Gerente(s)", &vista.opciones.gerentes, &vista.seleccion.gerentes),
        status = render_multiselect("status", "Seleccionar Status", &vista.opciones.status, &vista.seleccion.status),
    )
}

fn celda_certificacion(registro: &RegistroCertificacion, cert: Certificacion) -> String {
    if registro.tiene(cert) {
        format!(r#"<td class="cert si" style="background-color: {COLOR_CERTIFICADO}">☑</td>"#)
    } else {
        r#"<td class="cert no">☐</td>"#.to_string()
    }
}

/// Tabla de recursos: la primera columna es la fila de origen del registro y
/// el resto sigue el orden de la hoja.
fn render_tabla(vista: &VistaDashboard) -> String {
    let mut html = String::from(r#"<div class="tabla-scroll"><table id="recursos"><thead><tr><th>#</th>"#);
    for col in &vista.columnas {
        let _ = write!(html, "<th>{}</th>", html_escape(col.nombre()));
    }
    html.push_str("</tr></thead><tbody>");

    for r in &vista.registros {
        let _ = write!(html, "<tr><td>{}</td>", r.indice);
        for col in &vista.columnas {
            match col {
                Columna::Gerente => {
                    let _ = write!(html, "<td>{}</td>", html_escape(&r.gerente));
                }
                Columna::Status => {
                    let _ = write!(html, "<td>{}</td>", html_escape(&r.status));
                }
                Columna::Certificacion(cert) => html.push_str(&celda_certificacion(r, *cert)),
                Columna::Extra { posicion, .. } => {
                    let valor = r.extras.get(*posicion).map(String::as_str).unwrap_or("");
                    let _ = write!(html, "<td>{}</td>", html_escape(valor));
                }
            }
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");
    if vista.sin_resultados() {
        html.push_str(r#"<p class="vacio">Ningún registro coincide con los filtros seleccionados.</p>"#);
    }
    html
}

fn render_kpis(vista: &VistaDashboard) -> String {
    format!(
        r#"<h3>📌 Métricas Clave</h3>
        <div class="kpis">
            <div class="kpi"><div class="kpi-etiqueta">Total Recursos Filtrados</div><div class="kpi-valor" id="kpi-recursos">{recursos}</div></div>
            <div class="kpi"><div class="kpi-etiqueta">Certificaciones Filtradas</div><div class="kpi-valor" id="kpi-certificaciones">{certificaciones}</div></div>
            <div class="kpi"><div class="kpi-etiqueta">Tasa de Aprobación</div><div class="kpi-valor" id="kpi-tasa">{tasa}</div></div>
        </div>"#,
        recursos = vista.kpis.total_recursos,
        certificaciones = vista.kpis.total_certificaciones,
        tasa = vista.tasa_aprobacion_fmt,
    )
}

fn render_footer(vista: &VistaDashboard) -> String {
    format!(
        r#"<footer>Generado {}</footer>"#,
        vista.generado_en.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; display: flex; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; color: #262730; }
.sidebar { width: 280px; min-height: 100vh; padding: 1.5rem 1rem; background: #f0f2f6; box-sizing: border-box; }
.sidebar label { display: block; margin-top: 1rem; font-size: 0.9rem; }
.sidebar select { width: 100%; margin-top: 0.3rem; }
.nota { margin-top: 2rem; font-size: 0.85rem; }
.contenido { flex: 1; padding: 1.5rem 2rem; min-width: 0; }
.cabecera { display: flex; align-items: center; gap: 1.5rem; border-bottom: 3px solid #1c83e1; padding-bottom: 0.5rem; }
.tabla-scroll { height: 300px; overflow: auto; width: 100%; border: 1px solid #e6e9ef; }
table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
th, td { padding: 4px 8px; border-bottom: 1px solid #e6e9ef; text-align: left; white-space: nowrap; }
th { position: sticky; top: 0; background: #fafafa; }
td.cert { text-align: center; }
.columnas { display: flex; gap: 2rem; flex-wrap: wrap; }
.col { flex: 1; min-width: 320px; }
.grafico svg { max-width: 100%; height: auto; }
.dona .porcion { cursor: pointer; transition: opacity 0.15s; }
.dona.con-seleccion .porcion { opacity: 0.35; }
.dona.con-seleccion .porcion.seleccionada { opacity: 1; }
.kpis { display: flex; gap: 2rem; }
.kpi { flex: 1; }
.kpi-etiqueta { font-size: 0.9rem; color: #555; }
.kpi-valor { font-size: 2.2rem; }
.vacio { color: #777; font-style: italic; }
.error { background: #ffebee; border: 1px solid #f44336; padding: 1rem; border-radius: 4px; }
footer { margin-top: 2rem; font-size: 0.75rem; color: #999; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
// Selección de porciones en la dona (sólo visual)
(function() {
    const dona = document.querySelector('svg.dona');
    if (!dona) return;
    dona.querySelectorAll('.porcion').forEach(p => {
        p.addEventListener('click', () => {
            const yaSeleccionada = p.classList.contains('seleccionada');
            dona.querySelectorAll('.porcion').forEach(o => o.classList.remove('seleccionada'));
            if (yaSeleccionada) {
                dona.classList.remove('con-seleccion');
            } else {
                p.classList.add('seleccionada');
                dona.classList.add('con-seleccion');
            }
        });
    });
})();
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{opciones_filtro, render, SeleccionFiltros};
    use crate::models::TablaCertificaciones;

    fn tabla() -> TablaCertificaciones {
        let mut t = TablaCertificaciones::new(vec![
            RegistroCertificacion {
                indice: 0,
                gerente: "Ana <Jefa>".into(),
                status: "APPROVE".into(),
                aws: true,
                google: false,
                ibm: false,
                microsoft: false,
                red_hat: false,
                extras: vec!["Recurso 1".into()],
            },
            RegistroCertificacion {
                indice: 1,
                gerente: "Luis".into(),
                status: "PENDING".into(),
                aws: false,
                google: true,
                ibm: false,
                microsoft: false,
                red_hat: false,
                extras: vec!["Recurso 2".into()],
            },
        ]);
        t.columnas.insert(1, Columna::Extra { posicion: 0, nombre: "Recurso".into() });
        t
    }

    #[test]
    fn test_escape() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_pagina_resalta_solo_celdas_verdaderas() {
        let t = tabla();
        let sel = SeleccionFiltros::todo(&opciones_filtro(&t.registros));
        let vista = render(&t, &sel);
        let html = render_pagina(&vista, "<svg></svg>", None);

        assert_eq!(html.matches(r#"class="cert si""#).count(), 2);
        assert_eq!(html.matches(r#"class="cert no""#).count(), 8);
        assert!(html.contains(COLOR_CERTIFICADO));
        assert!(html.contains("Ana &lt;Jefa&gt;"));
        assert!(html.contains("<th>Recurso</th>"));
        assert!(html.contains("No hay registros aprobados"));
        assert!(html.contains(r#"id="kpi-tasa">50.0%"#));
    }

    #[test]
    fn test_selecciones_marcadas_en_sidebar() {
        let t = tabla();
        let sel = SeleccionFiltros::por_defecto(&opciones_filtro(&t.registros));
        let vista = render(&t, &sel);
        let html = render_pagina(&vista, "", Some("<svg class=\"dona\"></svg>"));
        assert!(html.contains(r#"<option value="APPROVE" selected>"#));
        assert!(html.contains(r#"<option value="PENDING">"#));
        assert!(html.contains(r#"<option value="Luis" selected>"#));
    }

    #[test]
    fn test_vista_vacia() {
        let t = tabla();
        let vista = render(&t, &SeleccionFiltros::default());
        let html = render_pagina(&vista, "", None);
        assert!(html.contains("Ningún registro coincide"));
        assert!(html.contains(r#"id="kpi-recursos">0<"#));
        assert!(html.contains(r#"id="kpi-tasa">0.0%"#));
        assert_eq!(html.matches("<td class=\"cert").count(), 0);
    }

    #[test]
    fn test_tabla_muestra_fila_de_origen_y_orden_de_hoja() {
        let t = tabla();
        let sel = SeleccionFiltros {
            gerentes: ["Luis".to_string()].into(),
            status: ["PENDING".to_string()].into(),
        };
        let html = render_pagina(&render(&t, &sel), "", None);
        assert!(html.contains("<th>#</th><th>Gerente</th><th>Recurso</th><th>Status</th><th>AWS</th>"));
        assert!(html.contains("<tr><td>1</td><td>Luis</td><td>Recurso 2</td><td>PENDING</td>"));
        assert!(!html.contains("<tr><td>0</td>"));
    }

    #[test]
    fn test_pagina_error_escapa_mensaje() {
        let html = render_pagina_error("falta la columna <Red Hat>");
        assert!(html.contains("falta la columna &lt;Red Hat&gt;"));
        assert!(!html.contains("Recursos Certificados"));
    }
}
