use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const LABEL_WIDTH: usize = 10;
const MODAL_WIDTH: u16 = 56;

/// One line of a modal form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormLine {
	/// Editable text field.
	Field {
		label: &'static str,
		value: String,
		focused: bool,
	},
	/// Checkbox toggled with space.
	Checkbox {
		label: &'static str,
		checked: bool,
		focused: bool,
	},
	/// Read-only informational text.
	Note { text: String, style: Style },
	Blank,
}

impl FormLine {
	fn to_line(&self, theme: &Theme) -> Line<'static> {
		match self {
			FormLine::Field {
				label,
				value,
				focused,
			} => {
				let label = format!("{label:<LABEL_WIDTH$}");
				let value_style = if *focused {
					theme.focus_style()
				} else {
					Style::default()
				};
				let cursor = if *focused { "▏" } else { "" };
				Line::from(vec![
					Span::styled(label, theme.header),
					Span::raw(" "),
					Span::styled(format!("{value}{cursor}"), value_style),
				])
			}
			FormLine::Checkbox {
				label,
				checked,
				focused,
			} => {
				let mark = if *checked { "[x]" } else { "[ ]" };
				let style = if *focused {
					theme.focus_style()
				} else {
					Style::default()
				};
				Line::from(Span::styled(format!("{mark} {label}"), style))
			}
			FormLine::Note { text, style } => Line::from(Span::styled(text.clone(), *style)),
			FormLine::Blank => Line::default(),
		}
	}
}

/// Everything needed to draw one overlay.
pub struct ModalFrame<'a> {
	pub title: &'a str,
	pub lines: Vec<FormLine>,
	pub hint: &'a str,
	/// Draw in the faded style used while the close animation runs.
	pub fading: bool,
}

/// A rectangle of at most `width` x `height` centred in `area`.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	cell
}

/// Draw a modal centred over `area`, clearing what is underneath.
pub fn render_modal(frame: &mut Frame, area: Rect, modal: ModalFrame<'_>, theme: &Theme) {
	let lines: Vec<Line> = modal
		.lines
		.iter()
		.map(|line| line.to_line(theme))
		.collect();
	let content_width = lines
		.iter()
		.map(|line| line.width())
		.chain([modal.hint.width(), modal.title.width()])
		.max()
		.unwrap_or(0) as u16;
	let width = content_width.saturating_add(4).clamp(MODAL_WIDTH / 2, MODAL_WIDTH);
	// two borders and a trailing blank line; the hint sits in the bottom border
	let height = (lines.len() as u16).saturating_add(3);
	let rect = centered_rect(width, height, area);

	let (border_style, body_style) = if modal.fading {
		(theme.fading_style(), theme.fading_style())
	} else {
		(theme.border, Style::default())
	};

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style)
		.title(Span::styled(format!(" {} ", modal.title), theme.header))
		.title_bottom(Line::from(Span::styled(modal.hint, theme.empty)).right_aligned());

	let mut body = lines;
	body.push(Line::default());
	let paragraph = Paragraph::new(body)
		.block(block)
		.style(body_style)
		.wrap(Wrap { trim: false });

	frame.render_widget(Clear, rect);
	frame.render_widget(paragraph, rect);
}
