//! SVG export of a render pass.

mod draw;
mod writer;

use std::io::Write;

use anyhow::Result;

use crate::{config::SvgConfig, state::RenderPass};

/// Draw polygons, labels, and legend of `pass` into `writer`.
pub fn render_svg<W: Write>(pass: &RenderPass<'_>, config: &SvgConfig, writer: W) -> Result<()> {
    let mut writer = writer::SvgWriter::new(writer);
    draw::draw_map(&mut writer, pass, config)?;
    writer.finish()?;
    Ok(())
}

pub fn render_svg_string(pass: &RenderPass<'_>, config: &SvgConfig) -> Result<String> {
    let mut buffer = Vec::new();
    render_svg(pass, config, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
