use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the input area.
pub struct InputContext<'a, 'b> {
	/// The search input widget.
	pub search_input: &'a QueryInput<'b>,
	/// Rendering area, one row high.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Right-aligned status shown after the input.
pub struct ProgressState<'a> {
	/// Text describing the current state, such as the sort order.
	pub progress_text: &'a str,
	/// Whether a request is still running.
	pub busy: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt symbol, the search input and the status on one row.
pub fn render_input(frame: &mut Frame, input: InputContext<'_, '_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let status = status_line(&progress, theme);
	let status_width = (status.width() as u16).min(area.width / 2);
	let [prompt_area, input_area, status_area] = Layout::horizontal([
		Constraint::Length(PROMPT_SYMBOL.len() as u16),
		Constraint::Fill(1),
		Constraint::Length(status_width),
	])
	.areas(area);

	frame.render_widget(Span::styled(PROMPT_SYMBOL, theme.prompt), prompt_area);
	search_input.render(frame, input_area);
	if status_width > 0 {
		frame.render_widget(status.right_aligned(), status_area);
	}
}

fn status_line<'a>(progress: &ProgressState<'a>, theme: &Theme) -> Line<'a> {
	let muted_style = theme.empty;
	let mut line = Line::default();
	if progress.busy {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	if !progress.progress_text.is_empty() {
		line.spans
			.push(Span::styled(progress.progress_text, muted_style));
	}
	line
}
