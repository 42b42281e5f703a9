use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["stockr"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.base_url.is_none());
}

#[test]
fn repeated_config_flags_accumulate() {
	let parsed = CliArgs::parse_from([
		"stockr",
		"-c",
		"a.toml",
		"--config",
		"b.toml",
		"--output",
		"json",
	]);
	assert_eq!(
		parsed.config,
		vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
	);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn long_version_lists_both_directories() {
	let banner = super::styles::long_version();
	assert!(banner.starts_with(&format!("stockr {}", env!("CARGO_PKG_VERSION"))));
	assert!(banner.contains("config directory: "));
	assert!(banner.contains("data directory (logs): "));
}
