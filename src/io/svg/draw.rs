use std::io::Write;

use anyhow::Result;
use geo::{Coord, CoordsIter, LineString, Rect};

use crate::{config::SvgConfig, feature::FeatureKind, map::Legend, state::RenderPass};
use super::writer::{SvgWriter, escape};

/// lon/lat -> SVG coords, equirectangular with the x axis shrunk by cos(latitude)
/// at the middle of the frame so shapes keep their proportions.
struct Projection {
    bounds: Rect<f64>,
    margin: f64,
    scale: f64,
    x_factor: f64,
}

impl Projection {
    fn new(bounds: Rect<f64>, width: f64, margin: f64) -> Self {
        let mid_lat = (bounds.min().y + bounds.max().y) / 2.0;
        let x_factor = mid_lat.to_radians().cos().max(0.01);
        let span = (bounds.width() * x_factor).max(f64::EPSILON);
        let scale = ((width - 2.0 * margin) / span).max(f64::EPSILON);
        Self { bounds, margin, scale, x_factor }
    }

    fn height(&self) -> f64 {
        self.bounds.height() * self.scale + 2.0 * self.margin
    }

    fn project(&self, coord: Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.bounds.min().x) * self.x_factor * self.scale;
        let y = self.margin + (self.bounds.max().y - coord.y) * self.scale; // invert vertically
        (x, y)
    }
}

pub(super) fn draw_map<W: Write>(writer: &mut SvgWriter<W>, pass: &RenderPass<'_>, config: &SvgConfig) -> Result<()> {
    let projection = Projection::new(pass.bounds, config.width, config.margin);
    let height = projection.height().max(config.margin * 2.0 + 200.0);

    writer.write_header(config.width, height, &pass.bounds)?;
    writer.write_styles(config.font_size)?;

    draw_features(writer, pass, &projection)?;
    draw_labels(writer, pass, &projection)?;
    draw_legend(writer, &pass.legend, config, height)?;

    if let Some(notice) = &pass.notice {
        writeln!(writer, r#"<text class="notice" x="{:.1}" y="{:.1}">{}</text>"#,
            config.width / 2.0, height / 2.0, escape(notice))?;
    }
    Ok(())
}

fn draw_features<W: Write>(writer: &mut SvgWriter<W>, pass: &RenderPass<'_>, projection: &Projection) -> Result<()> {
    writeln!(writer, r#"<g id="features">"#)?;
    for rendered in &pass.features {
        let style = &rendered.style;
        writeln!(writer,
            r#"<path class="feat" fill-rule="evenodd" d="{d}" fill="{fill}" fill-opacity="{fo}" stroke="{stroke}" stroke-width="{sw}" stroke-opacity="{so}"><title>{title}</title></path>"#,
            d = geometry_path(rendered.feature.geometry.polygons().iter().flat_map(|p| {
                std::iter::once(p.exterior()).chain(p.interiors())
            }), projection),
            fill = style.fill,
            fo = style.fill_opacity,
            stroke = style.stroke,
            sw = style.stroke_width,
            so = style.stroke_opacity,
            title = escape(&format!("{}: {:.1}%", rendered.feature.name, rendered.value)),
        )?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

/// Build a compact SVG path string from rings (exteriors and holes).
fn geometry_path<'a>(rings: impl Iterator<Item = &'a LineString<f64>>, projection: &Projection) -> String {
    let mut out = String::new();
    for ring in rings {
        let mut coords = ring.coords_iter().map(|coord| projection.project(coord));
        if let Some((x, y)) = coords.next() {
            out.push_str(&format!("M{x:.2},{y:.2}"));
            for (x, y) in coords {
                out.push_str(&format!(" L{x:.2},{y:.2}"));
            }
            out.push_str("Z ");
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn draw_labels<W: Write>(writer: &mut SvgWriter<W>, pass: &RenderPass<'_>, projection: &Projection) -> Result<()> {
    if pass.labels.is_empty() { return Ok(()) }

    writeln!(writer, r#"<g id="labels">"#)?;
    for label in &pass.labels {
        let (x, y) = projection.project(label.position.0);
        let class = match label.kind {
            FeatureKind::City => "label",
            FeatureKind::Cdp => "label cdp",
        };
        writeln!(writer, r#"<text class="{class}" x="{x:.1}" y="{y:.1}">{}</text>"#, escape(label.text))?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}

fn draw_legend<W: Write>(writer: &mut SvgWriter<W>, legend: &Legend, config: &SvgConfig, height: f64) -> Result<()> {
    let line = config.font_size * 1.6;
    let rows = legend.entries.len() + 1;
    let box_height = line * (rows + 1) as f64 + 8.0;
    let box_width = config.font_size * 14.0;
    let x = config.margin + 8.0;
    let top = height - config.margin - 8.0 - box_height;

    writeln!(writer, r#"<g id="legend" class="legend">"#)?;
    writeln!(writer, r##"<rect x="{x:.1}" y="{top:.1}" width="{box_width:.1}" height="{box_height:.1}" fill="#ffffff" fill-opacity="0.9" stroke="#9ca3af"/>"##)?;
    writeln!(writer, r#"<text class="legend-title" x="{:.1}" y="{:.1}">{} (%)</text>"#,
        x + 6.0, top + line, escape(legend.title))?;

    let swatches = legend.entries.iter()
        .map(|entry| (entry.color, entry.label()))
        .chain(std::iter::once((legend.no_data, "No data".to_string())));
    for (row, (color, text)) in swatches.enumerate() {
        let baseline = top + line * (row + 2) as f64;
        let size = config.font_size;
        writeln!(writer, r#"<rect x="{:.1}" y="{:.1}" width="{size:.1}" height="{size:.1}" fill="{color}"/>"#,
            x + 6.0, baseline - size + 1.0)?;
        writeln!(writer, r#"<text x="{:.1}" y="{baseline:.1}">{}</text>"#, x + 12.0 + size, escape(&text))?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}
