use anyhow::{Context, Result};

use crate::cli::{Cli, InspectArgs};

pub fn run(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let config = super::load_config(cli, &args.data)?;
    let mut controller = super::build_controller(config, &args.data)?;

    if let Some(name) = &args.name {
        let feature = controller.find_by_name(name)
            .with_context(|| format!("[inspect] No feature named {name:?} in the region"))?;
        controller.click_feature(feature)?;
        if let Some(value) = controller.value(feature) {
            println!("{}: {value:.1}%", controller.metric().label());
        }
    }

    match controller.panel() {
        Some(panel) => print!("{panel}"),
        None => println!("No county summary available."),
    }
    Ok(())
}
