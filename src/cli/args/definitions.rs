use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `stockr` binary.
#[derive(Parser, Debug)]
#[command(
	name = "stockr",
	version,
	long_version = long_version(),
	about = "Browse and edit product inventory through a REST backend",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "STOCKR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Backend base URL (default: http://localhost:8080)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "search-param",
		value_name = "NAME",
		help = "Query parameter carrying the name filter (default: name)"
	)]
	pub(crate) search_param: Option<String>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Per-request timeout in milliseconds (default: none)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title shown above the product table (default: Inventory)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search run at startup; blank lists every product (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "SYMBOL",
		help = "Currency symbol prefixed to prices (default: $)"
	)]
	pub(crate) currency: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive such as info or stockr_api=debug (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: stockr.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "no-log",
		help = "Disable the log file (default: logging enabled)"
	)]
	pub(crate) no_log: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the session summary")]
	pub(crate) output: OutputFormat,
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
