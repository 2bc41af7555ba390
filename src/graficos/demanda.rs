use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

use crate::algorithm::ConteoCertificacion;
use crate::error::DashboardError;

pub const ANCHO: u32 = 640;
pub const ALTO: u32 = 320;

/// Paleta viridis de 5 tonos (oscuro -> claro)
const VIRIDIS: [RGBColor; 5] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

fn grafico_err<E: std::fmt::Display>(e: E) -> DashboardError {
    DashboardError::Grafico(e.to_string())
}

/// Gráfico de barras verticales de la serie (ya ordenada) como SVG.
/// Eje x: certificación, etiquetas rotadas; eje y: total.
pub fn grafico_demanda_svg(serie: &[ConteoCertificacion]) -> Result<String, DashboardError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (ANCHO, ALTO)).into_drawing_area();
        root.fill(&WHITE).map_err(grafico_err)?;

        // los rangos enteros de plotters son inclusivos: 0..=n-1 da n segmentos
        let n = serie.len().max(2);
        let max = serie.iter().map(|c| c.total).max().unwrap_or(0);
        let tope = max + max / 10 + 1;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(90)
            .y_label_area_size(50)
            .build_cartesian_2d((0..n - 1).into_segmented(), 0u64..tope)
            .map_err(grafico_err)?;

        let etiqueta = |v: &SegmentValue<usize>| -> String {
            match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    serie.get(*i).map(|c| c.certificacion.to_string()).unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            }
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n)
            .x_label_formatter(&etiqueta)
            .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
            .y_desc("Total")
            .draw()
            .map_err(grafico_err)?;

        chart
            .draw_series(serie.iter().enumerate().map(|(i, c)| {
                let color = VIRIDIS[i % VIRIDIS.len()];
                let mut barra = Rectangle::new(
                    [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), c.total)],
                    color.filled(),
                );
                barra.set_margin(0, 0, 10, 10);
                barra
            }))
            .map_err(grafico_err)?;

        root.present().map_err(grafico_err)?;
    }
    Ok(svg)
}
