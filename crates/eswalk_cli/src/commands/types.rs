//! Types command implementation

use miette::Result;

use crate::cli::Cli;

use super::load_config;

pub fn run_types(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let registry = config.registry();

    for name in registry.type_names() {
        if registry.is_extension(name) {
            println!("{} (custom)", name);
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}
