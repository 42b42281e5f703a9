use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use stockr_api::{Product, ProductField};

use super::App;
use crate::components::rows::{PRODUCT_HEADERS, product_widths};
use crate::components::{
	FormLine, InputContext, ModalFrame, ProgressState, TableSpec, build_product_rows,
	format_price, render_input, render_message, render_modal, render_table,
};
use crate::style::Theme;
use crate::view::{DeletePreview, FormTarget, ModalKind};

const LOADING_TEXT: &str = "Loading products...";
const EMPTY_TEXT: &str = "No products";

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [title_area, prompt_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_title(frame, title_area);
		self.render_prompt(frame, prompt_area);
		self.render_body(frame, body_area);
		self.render_footer(frame, footer_area);

		if self.view.any_modal_visible() {
			frame.buffer_mut().set_style(area, self.style.theme.backdrop_style());
			let kinds: Vec<ModalKind> = self.view.visible_modals().collect();
			for kind in kinds {
				self.render_form(frame, body_area, kind);
			}
		}
	}

	fn render_title(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let count = match self.store.len() {
			1 => "1 product".to_string(),
			n => format!("{n} products"),
		};
		let line = Line::from(vec![
			Span::styled(format!(" {} ", self.settings.title), theme.header),
			Span::raw(" "),
			Span::styled(count, theme.empty),
		]);
		frame.render_widget(line, area);
	}

	fn render_prompt(&self, frame: &mut Frame, area: Rect) {
		let progress_text = if self.store.is_ordered() {
			"by quantity"
		} else {
			""
		};
		render_input(
			frame,
			InputContext {
				search_input: &self.view.search_input,
				area,
				theme: &self.style.theme,
			},
			ProgressState {
				progress_text,
				busy: self.is_busy(),
				throbber_state: &self.throbber_state,
			},
		);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let title = Some(format!(" {} ", self.settings.title));
		if self.view.loading {
			render_message(frame, area, title, LOADING_TEXT, theme.empty, &theme);
			return;
		}
		if let Some(report) = self.view.table_error() {
			let message = format!("Error: {}", report.message);
			render_message(frame, area, title, &message, theme.error, &theme);
			return;
		}
		if self.store.is_empty() {
			render_message(frame, area, title, EMPTY_TEXT, theme.empty, &theme);
			return;
		}

		let spec = TableSpec {
			headers: PRODUCT_HEADERS.iter().map(|header| header.to_string()).collect(),
			widths: product_widths(),
			rows: build_product_rows(self.store.products(), &self.settings.currency),
			title,
		};
		render_table(frame, area, &mut self.view.table_state, spec, &theme);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let hints = match self.view.active_modal() {
			Some(ModalKind::Update) => "tab next field · space toggle · enter submit · esc close",
			Some(_) => "tab next field · enter submit · esc close",
			None => {
				"enter search · ^r reload · ^o sort · ^a add · ^d delete · ^u update · esc quit"
			}
		};
		frame.render_widget(
			Line::from(Span::styled(hints, self.style.theme.empty)),
			area,
		);
	}

	fn render_form(&self, frame: &mut Frame, area: Rect, kind: ModalKind) {
		let theme = &self.style.theme;
		let mut lines = match kind {
			ModalKind::Add => self.add_form_lines(),
			ModalKind::Delete => self.delete_form_lines(theme),
			ModalKind::Update => self.update_form_lines(theme),
		};
		if let Some(report) = self.view.modal_error(kind) {
			lines.push(FormLine::Blank);
			lines.push(FormLine::Note {
				text: format!("Error: {}", report.message),
				style: theme.error,
			});
		}
		let hint = match kind {
			ModalKind::Delete => " enter confirm · esc cancel ",
			_ => " enter submit · esc cancel ",
		};
		render_modal(
			frame,
			area,
			ModalFrame {
				title: kind.title(),
				lines,
				hint,
				fading: self.view.modal(kind).animation.is_closing(),
			},
			theme,
		);
	}

	fn is_focused(&self, kind: ModalKind, target: FormTarget) -> bool {
		let modal = self.view.modal(kind);
		modal.animation.is_interactive() && modal.focus == target
	}

	fn add_form_lines(&self) -> Vec<FormLine> {
		ProductField::ALL
			.into_iter()
			.map(|field| FormLine::Field {
				label: field.label(),
				value: self.view.add.values.get(field).to_string(),
				focused: self.is_focused(ModalKind::Add, FormTarget::Value(field)),
			})
			.collect()
	}

	fn delete_form_lines(&self, theme: &Theme) -> Vec<FormLine> {
		let mut lines = vec![
			FormLine::Note {
				text: "Are you sure you want to delete a product?".to_string(),
				style: Style::default(),
			},
			FormLine::Blank,
			FormLine::Field {
				label: "Id",
				value: self.view.delete.id.clone(),
				focused: self.is_focused(ModalKind::Delete, FormTarget::Id),
			},
		];
		match self.view.delete.preview(&self.store) {
			DeletePreview::Found(product) => {
				lines.push(FormLine::Blank);
				lines.extend(self.product_summary(product, theme));
			}
			DeletePreview::NotFound => {
				lines.push(FormLine::Blank);
				lines.push(FormLine::Note {
					text: "Product not found".to_string(),
					style: theme.error,
				});
			}
			DeletePreview::Empty => {}
		}
		lines
	}

	fn product_summary(&self, product: &Product, theme: &Theme) -> Vec<FormLine> {
		[
			("Id", product.id.to_string()),
			("Name", product.name.clone()),
			("Price", format_price(&self.settings.currency, product.price)),
			("Quantity", product.quantity.to_string()),
		]
		.into_iter()
		.map(|(label, value)| FormLine::Note {
			text: format!("{label:<10} {value}"),
			style: theme.highlight,
		})
		.collect()
	}

	fn update_form_lines(&self, theme: &Theme) -> Vec<FormLine> {
		let draft = &self.view.update;
		let mut lines = vec![FormLine::Field {
			label: "Id",
			value: draft.id.clone(),
			focused: self.is_focused(ModalKind::Update, FormTarget::Id),
		}];
		lines.push(FormLine::Blank);
		for field in ProductField::ALL {
			lines.push(FormLine::Checkbox {
				label: field.label(),
				checked: draft.is_checked(field),
				focused: self.is_focused(ModalKind::Update, FormTarget::Toggle(field)),
			});
			if draft.is_checked(field) {
				lines.push(FormLine::Field {
					label: "  new",
					value: draft.value(field).to_string(),
					focused: self.is_focused(ModalKind::Update, FormTarget::Value(field)),
				});
			}
		}

		match self.store.find_by_id_text(&draft.id) {
			Some(original) => {
				lines.push(FormLine::Blank);
				lines.push(FormLine::Note {
					text: format!("{:<10} {:<16} {}", "", "Current", "Pending"),
					style: theme.header,
				});
				for preview in draft.preview(original) {
					let style = if preview.current == preview.pending {
						Style::default()
					} else {
						theme.highlight
					};
					lines.push(FormLine::Note {
						text: format!(
							"{:<10} {:<16} {}",
							preview.field.label(),
							preview.current,
							preview.pending
						),
						style,
					});
				}
			}
			None if !draft.id.trim().is_empty() => {
				lines.push(FormLine::Blank);
				lines.push(FormLine::Note {
					text: "Product not found".to_string(),
					style: theme.error,
				});
			}
			None => {}
		}
		lines
	}
}
