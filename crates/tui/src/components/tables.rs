use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
	Wrap,
};

use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
}

fn bordered_block<'a>(title: Option<String>, theme: &Theme) -> Block<'a> {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border);
	match title {
		Some(title) => block.title(title),
		None => block,
	}
}

/// Render the table inside a rounded border.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let block = bordered_block(spec.title.clone(), theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header_style = Style::default().fg(theme.header.fg.unwrap_or(Color::Reset));
	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(header_style)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let available_rows = (inner.height as usize).saturating_sub(TABLE_HEADER_ROWS);
	let metrics = ScrollMetrics::compute(spec.rows.len(), available_rows);
	let table_area = if metrics.needs_scrollbar {
		let mut scrollbar_state = ScrollbarState::new(metrics.content_length)
			.viewport_content_length(metrics.viewport_len)
			.position(table_state.selected().unwrap_or(0));
		render_scrollbar(frame, inner, &mut scrollbar_state, theme)
	} else {
		inner
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme, 1);
}

/// Render a bordered pane holding a single centred message instead of rows.
pub fn render_message(
	frame: &mut Frame,
	area: Rect,
	title: Option<String>,
	message: &str,
	style: Style,
	theme: &Theme,
) {
	let block = bordered_block(title, theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.height == 0 {
		return;
	}

	let top_padding = inner.height.saturating_sub(1) / 2;
	let message_area = Rect {
		y: inner.y + top_padding,
		height: inner.height - top_padding,
		..inner
	};
	let paragraph = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, message_area);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle_style = Style::default().fg(theme.header.fg.unwrap_or(Color::Reset));
	let spans = vec![
		Span::raw(" "),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::raw(" "),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
