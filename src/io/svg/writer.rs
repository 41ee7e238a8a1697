//! SVG writing operations.

use std::io::Write;

use anyhow::{Context, Result};

/// Thin wrapper over any byte sink that knows the SVG document frame.
pub(super) struct SvgWriter<W: Write> {
    writer: W,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl<W: Write> Write for SvgWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl<W: Write> SvgWriter<W> {
    pub(super) fn new(writer: W) -> Self { Self { writer } }

    /// Write the XML declaration and opening <svg> tag, recording the lon/lat
    /// frame so the image can be georeferenced later.
    pub(super) fn write_header(&mut self, width: f64, height: f64, bounds: &geo::Rect) -> Result<()> {
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(self, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width:.0}" height="{height:.0}"
        viewBox="0 0 {width:.0} {height:.0}"
        data-lon-min="{lon_min}" data-lon-max="{lon_max}"
        data-lat-min="{lat_min}" data-lat-max="{lat_max}">"##,
            lon_min = bounds.min().x,
            lon_max = bounds.max().x,
            lat_min = bounds.min().y,
            lat_max = bounds.max().y,
        )?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        Ok(())
    }

    /// Shared classes for labels and the legend.
    pub(super) fn write_styles(&mut self, font_size: f64) -> Result<()> {
        writeln!(self, r##"<defs>
<style>
    .feat {{ vector-effect: non-scaling-stroke; stroke-linejoin: round; }}
    .label {{ font-family: sans-serif; font-size: {font_size}px; fill: #111827; text-anchor: middle; paint-order: stroke; stroke: #ffffff; stroke-width: 2.5px; }}
    .label.cdp {{ font-style: italic; fill: #374151; }}
    .legend {{ font-family: sans-serif; font-size: {font_size}px; fill: #111827; }}
    .legend-title {{ font-weight: bold; }}
    .notice {{ font-family: sans-serif; font-size: {notice_size}px; fill: #6b7280; text-anchor: middle; }}
</style>
</defs>"##, notice_size = font_size * 1.5)?;
        Ok(())
    }

    /// Write the closing </svg> tag and flush.
    pub(super) fn finish(mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        self.flush().context("[io::svg] Failed to flush SVG output")
    }
}

/// Escape text content and attribute values.
pub(super) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
