use anyhow::Result;
use serde_json::json;
use stockr_tui::SessionOutcome;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	let order = if outcome.ordered {
		"by quantity"
	} else {
		"default order"
	};
	let mut line = format!("{} products shown ({order})", outcome.products_shown);
	if !outcome.query.trim().is_empty() {
		line.push_str(&format!(", query '{}'", outcome.query));
	}
	if let Some(error) = &outcome.last_error {
		line.push_str(&format!(", last error: {error}"));
	}
	line
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"products_shown": outcome.products_shown,
		"ordered": outcome.ordered,
		"query": outcome.query,
		"last_error": outcome.last_error,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print every built-in theme, one per line, with its aliases.
pub(crate) fn print_themes() {
	for descriptor in stockr_tui::builtin_themes() {
		if descriptor.aliases.is_empty() {
			println!("{}", descriptor.name);
		} else {
			println!("{} ({})", descriptor.name, descriptor.aliases.join(", "));
		}
	}
}
