use anyhow::Result;

use crate::cli::{Cli, DataArgs};

pub fn run(cli: &Cli, args: &DataArgs) -> Result<()> {
    let config = super::load_config(cli, args)?;
    let controller = super::build_controller(config, args)?;

    let breaks = controller.breaks().as_slice().iter()
        .map(|b| format!("{b:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("breaks: [{breaks}]");
    print!("{}", controller.legend());
    Ok(())
}
