use std::io::Write;

use anyhow::{Context, Result};
use demomap::{finalize_write, open_for_write, render_svg, to_styled_geojson};

use crate::cli::{Cli, Format, RenderArgs};

pub fn run(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let mut config = super::load_config(cli, &args.data)?;
    if args.hide_cities { config.show_cities = false }
    if args.hide_cdps { config.show_cdps = false }

    let mut controller = super::build_controller(config, &args.data)?;

    if let Some(name) = &args.select {
        let feature = controller.find_by_name(name)
            .with_context(|| format!("[render] No feature named {name:?} in the region"))?;
        controller.click_feature(feature)?;
    }

    let pass = controller.render();
    if let Some(notice) = &pass.notice {
        tracing::warn!("[render] {notice}");
    }

    let mut out = open_for_write(&args.output, args.force)?;
    match args.format {
        Format::Svg => render_svg(&pass, &controller.config().svg, &mut out)?,
        Format::Geojson => serde_json::to_writer_pretty(&mut out, &to_styled_geojson(&pass))
            .context("[render] Failed to write GeoJSON")?,
    }
    out.flush()?;
    finalize_write(out)?;

    tracing::info!(output = %args.output.display(), features = pass.features.len(), "[render] map written");
    Ok(())
}
