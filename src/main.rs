mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_themes};
use settings::ResolvedConfig;
use workflow::InventoryWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		print_themes();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	stockr::logging::initialize(&resolved.logging)?;

	run_inventory(cli.output, resolved)
}

/// Execute the inventory workflow and print output in the chosen format.
fn run_inventory(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = InventoryWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
