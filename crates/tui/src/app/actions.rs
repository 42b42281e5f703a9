use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stockr_api::ProductField;
use stockr_api::coerce::is_numeric_char;

use super::App;
use crate::outcome::SessionOutcome;
use crate::view::{FormTarget, ModalKind};

impl App<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Some(self.outcome());
		}

		if let Some(kind) = self.view.active_modal() {
			self.handle_modal_key(kind, key);
			return None;
		}

		match key.code {
			KeyCode::Esc if self.view.any_modal_visible() => {}
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Enter => self.search(),
			KeyCode::Char('r') if ctrl => self.list_all(),
			KeyCode::Char('o') if ctrl => self.toggle_order(),
			KeyCode::Char('a') if ctrl => self.open_modal(ModalKind::Add),
			KeyCode::Char('d') if ctrl => self.open_modal(ModalKind::Delete),
			KeyCode::Char('u') if ctrl => self.open_modal(ModalKind::Update),
			KeyCode::Up => self.move_selection_up(1),
			KeyCode::Down => self.move_selection_down(1),
			KeyCode::PageUp => self.page_up(),
			KeyCode::PageDown => self.page_down(),
			KeyCode::Home => self.select_first(),
			KeyCode::End => self.select_last(),
			_ => {
				self.view.search_input.input(key);
			}
		}
		None
	}

	fn handle_modal_key(&mut self, kind: ModalKind, key: KeyEvent) {
		let focus = self.view.modal(kind).focus;
		match (key.code, focus) {
			(KeyCode::Esc, _) => self.close_modal(kind),
			(KeyCode::Enter, _) => self.submit(kind),
			(KeyCode::Tab | KeyCode::Down, _) => self.view.cycle_focus(kind, true),
			(KeyCode::BackTab | KeyCode::Up, _) => self.view.cycle_focus(kind, false),
			(KeyCode::Char(' '), FormTarget::Toggle(field)) => self.toggle_update_field(field),
			(KeyCode::Backspace, _) => {
				if let Some(buffer) = self.view.field_buffer_mut(kind, focus) {
					buffer.pop();
				}
				self.after_form_edit(kind, focus);
			}
			(KeyCode::Char(c), _) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				let accepted = !focus.is_numeric() || is_numeric_char(c);
				if accepted && let Some(buffer) = self.view.field_buffer_mut(kind, focus) {
					buffer.push(c);
				}
				self.after_form_edit(kind, focus);
			}
			_ => {}
		}
	}

	fn toggle_update_field(&mut self, field: ProductField) {
		let original = self.store.find_by_id_text(&self.view.update.id).cloned();
		self.view.update.toggle(field, original.as_ref());
	}

	fn after_form_edit(&mut self, kind: ModalKind, focus: FormTarget) {
		if kind == ModalKind::Update && focus == FormTarget::Id {
			self.sync_update_draft();
		}
	}
}
