mod definitions;
mod styles;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, FromArgMatches};
pub(crate) use definitions::{CliArgs, OutputFormat};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}
