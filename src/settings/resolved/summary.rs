use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let backend = &config.backend;
	let ui = &config.ui;
	let logging = &config.logging;

	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Backend: {}", backend.base_url),
		format!(
			"  Routes: {} | {}?{}= | {}",
			backend.products_path, backend.search_path, backend.search_param, backend.ordered_path
		),
	];
	match backend.timeout {
		Some(timeout) => lines.push(format!("  Timeout: {} ms", timeout.as_millis())),
		None => lines.push("  Timeout: none".to_string()),
	}
	lines.push(format!("  Title: {}", ui.title));
	lines.push(format!("  Theme: {}", config.theme));
	lines.push(format!("  Currency: {}", ui.currency));
	if !ui.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", ui.initial_query));
	}
	lines.push(format!(
		"  Modal animation: open {} ms, close {} ms",
		ui.timings.open.as_millis(),
		ui.timings.close.as_millis()
	));
	lines.push(format!("  Logging: {}", bool_to_word(logging.enabled)));
	if logging.enabled {
		lines.push(format!("  Log level: {}", logging.level));
		match &logging.file {
			Some(path) => lines.push(format!("  Log file: {}", path.display())),
			None => lines.push("  Log file: (data directory)".to_string()),
		}
	}
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use stockr::logging::LogSettings;
	use stockr_api::BackendConfig;
	use stockr_tui::UiSettings;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_backend_and_ui_settings() {
		let config = ResolvedConfig {
			backend: BackendConfig::with_base_url("http://inventory.local"),
			ui: UiSettings {
				initial_query: "widget".into(),
				..UiSettings::default()
			},
			theme: "light".into(),
			logging: LogSettings {
				enabled: false,
				..LogSettings::default()
			},
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  Backend: http://inventory.local".to_string()));
		assert!(lines.contains(&"  Timeout: none".to_string()));
		assert!(lines.contains(&"  Initial query: widget".to_string()));
		assert!(lines.contains(&"  Logging: no".to_string()));
		assert!(!lines.iter().any(|line| line.starts_with("  Log level")));

		print_summary(&config);
	}
}
