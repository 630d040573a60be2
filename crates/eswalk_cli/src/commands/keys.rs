//! Keys command implementation

use miette::Result;

use crate::cli::Cli;

use super::load_config;

pub fn run_keys(cli: &Cli, node_type: &str) -> Result<()> {
    let config = load_config(cli)?;
    let registry = config.registry();

    let fields = registry
        .fields_for(node_type)
        .ok_or_else(|| miette::miette!("Unknown node type `{}`", node_type))?;

    if fields.is_empty() {
        println!("(no children)");
        return Ok(());
    }

    for field in fields.iter() {
        println!("{}", field);
    }
    Ok(())
}
