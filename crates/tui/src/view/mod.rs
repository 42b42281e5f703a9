//! UI-only state: everything the controller tracks that is not product data.

mod drafts;
mod modal;

use std::time::Instant;

use ratatui::widgets::TableState;
use stockr_api::ProductField;

pub use drafts::{
	AddDraft, DeleteDraft, DeletePreview, FieldPreview, FieldSet, FieldValues, UpdateDraft,
};
pub use modal::{ModalAnimation, ModalPhase, ModalTimings};

use crate::input::QueryInput;

/// The three overlay forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
	Add,
	Delete,
	Update,
}

impl ModalKind {
	pub const ALL: [ModalKind; 3] = [ModalKind::Add, ModalKind::Delete, ModalKind::Update];

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			ModalKind::Add => "Add product",
			ModalKind::Delete => "Delete product",
			ModalKind::Update => "Update product",
		}
	}
}

/// Where a failure came from, which decides where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorOrigin {
	/// Listing, searching or re-sorting; replaces the table.
	Query,
	/// A submitted form; shown inside that form.
	Mutation(ModalKind),
}

/// The single user-facing error surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
	pub origin: ErrorOrigin,
	pub message: String,
}

impl ErrorReport {
	pub fn query(message: impl Into<String>) -> Self {
		Self {
			origin: ErrorOrigin::Query,
			message: message.into(),
		}
	}

	pub fn mutation(kind: ModalKind, message: impl Into<String>) -> Self {
		Self {
			origin: ErrorOrigin::Mutation(kind),
			message: message.into(),
		}
	}
}

/// Focusable element inside a modal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
	Id,
	Value(ProductField),
	Toggle(ProductField),
}

impl FormTarget {
	/// Whether typing into this target only accepts numeric characters.
	#[must_use]
	pub fn is_numeric(self) -> bool {
		match self {
			FormTarget::Id => true,
			FormTarget::Value(field) => field.is_numeric(),
			FormTarget::Toggle(_) => false,
		}
	}
}

/// Animation plus keyboard focus for one modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalView {
	pub animation: ModalAnimation,
	pub focus: FormTarget,
}

impl ModalView {
	fn new(kind: ModalKind) -> Self {
		Self {
			animation: ModalAnimation::default(),
			focus: first_target(kind),
		}
	}
}

fn first_target(kind: ModalKind) -> FormTarget {
	match kind {
		ModalKind::Add => FormTarget::Value(ProductField::Name),
		ModalKind::Delete | ModalKind::Update => FormTarget::Id,
	}
}

pub struct ViewState<'a> {
	pub loading: bool,
	pub error: Option<ErrorReport>,
	pub search_input: QueryInput<'a>,
	pub table_state: TableState,
	pub add: AddDraft,
	pub delete: DeleteDraft,
	pub update: UpdateDraft,
	add_modal: ModalView,
	delete_modal: ModalView,
	update_modal: ModalView,
}

impl Default for ViewState<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> ViewState<'a> {
	#[must_use]
	pub fn new(initial_query: &str) -> Self {
		Self {
			loading: false,
			error: None,
			search_input: QueryInput::new(initial_query),
			table_state: TableState::default(),
			add: AddDraft::default(),
			delete: DeleteDraft::default(),
			update: UpdateDraft::default(),
			add_modal: ModalView::new(ModalKind::Add),
			delete_modal: ModalView::new(ModalKind::Delete),
			update_modal: ModalView::new(ModalKind::Update),
		}
	}

	#[must_use]
	pub fn modal(&self, kind: ModalKind) -> &ModalView {
		match kind {
			ModalKind::Add => &self.add_modal,
			ModalKind::Delete => &self.delete_modal,
			ModalKind::Update => &self.update_modal,
		}
	}

	pub fn modal_mut(&mut self, kind: ModalKind) -> &mut ModalView {
		match kind {
			ModalKind::Add => &mut self.add_modal,
			ModalKind::Delete => &mut self.delete_modal,
			ModalKind::Update => &mut self.update_modal,
		}
	}

	/// The modal currently receiving keyboard input, if any.
	#[must_use]
	pub fn active_modal(&self) -> Option<ModalKind> {
		ModalKind::ALL
			.into_iter()
			.find(|kind| self.modal(*kind).animation.is_interactive())
	}

	/// Modals that must be drawn, closing ones included.
	pub fn visible_modals(&self) -> impl Iterator<Item = ModalKind> + '_ {
		ModalKind::ALL
			.into_iter()
			.filter(|kind| self.modal(*kind).animation.is_visible())
	}

	#[must_use]
	pub fn any_modal_visible(&self) -> bool {
		self.visible_modals().next().is_some()
	}

	/// Open a modal with fresh drafts. Returns `false` if it was already open.
	pub fn open_modal(&mut self, kind: ModalKind, now: Instant, timings: ModalTimings) -> bool {
		if !self.modal_mut(kind).animation.open(now, timings) {
			return false;
		}
		match kind {
			ModalKind::Add => self.add = AddDraft::default(),
			ModalKind::Delete => self.delete = DeleteDraft::default(),
			ModalKind::Update => self.update = UpdateDraft::default(),
		}
		self.modal_mut(kind).focus = first_target(kind);
		self.clear_error_where(|origin| matches!(origin, ErrorOrigin::Mutation(_)));
		true
	}

	pub fn close_modal(&mut self, kind: ModalKind, now: Instant, timings: ModalTimings) -> bool {
		let closed = self.modal_mut(kind).animation.close(now, timings);
		self.drop_hidden_mutation_error();
		closed
	}

	/// Advance every modal animation. Returns `true` if any phase changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let mut changed = false;
		for kind in ModalKind::ALL {
			changed |= self.modal_mut(kind).animation.tick(now);
		}
		self.drop_hidden_mutation_error();
		changed
	}

	/// A mutation report lives only as long as its form is on screen.
	fn drop_hidden_mutation_error(&mut self) {
		let hidden = match self.error.as_ref().map(|report| report.origin) {
			Some(ErrorOrigin::Mutation(kind)) => !self.modal(kind).animation.is_visible(),
			_ => false,
		};
		if hidden {
			self.error = None;
		}
	}

	/// Drop the current error report if its origin matches.
	pub fn clear_error_where(&mut self, predicate: impl Fn(ErrorOrigin) -> bool) {
		if self
			.error
			.as_ref()
			.is_some_and(|report| predicate(report.origin))
		{
			self.error = None;
		}
	}

	/// The error to draw in place of the product table. Only failed queries
	/// replace the table; mutation errors are drawn inside their form.
	#[must_use]
	pub fn table_error(&self) -> Option<&ErrorReport> {
		self.error
			.as_ref()
			.filter(|report| report.origin == ErrorOrigin::Query)
	}

	/// The error to draw inside the given form.
	#[must_use]
	pub fn modal_error(&self, kind: ModalKind) -> Option<&ErrorReport> {
		self.error
			.as_ref()
			.filter(|report| report.origin == ErrorOrigin::Mutation(kind))
	}

	/// Focus targets of a form in tab order.
	#[must_use]
	pub fn form_targets(&self, kind: ModalKind) -> Vec<FormTarget> {
		match kind {
			ModalKind::Add => ProductField::ALL.map(FormTarget::Value).to_vec(),
			ModalKind::Delete => vec![FormTarget::Id],
			ModalKind::Update => {
				let mut targets = vec![FormTarget::Id];
				for field in ProductField::ALL {
					targets.push(FormTarget::Toggle(field));
					if self.update.is_checked(field) {
						targets.push(FormTarget::Value(field));
					}
				}
				targets
			}
		}
	}

	/// Move focus forwards (`step > 0`) or backwards, wrapping around.
	pub fn cycle_focus(&mut self, kind: ModalKind, forward: bool) {
		let targets = self.form_targets(kind);
		if targets.is_empty() {
			return;
		}
		let current = self.modal(kind).focus;
		let index = targets
			.iter()
			.position(|target| *target == current)
			.unwrap_or(0);
		let next = if forward {
			(index + 1) % targets.len()
		} else {
			(index + targets.len() - 1) % targets.len()
		};
		self.modal_mut(kind).focus = targets[next];
	}

	/// Text buffer behind an editable target, if the target is editable.
	pub fn field_buffer_mut(&mut self, kind: ModalKind, target: FormTarget) -> Option<&mut String> {
		match (kind, target) {
			(ModalKind::Add, FormTarget::Value(field)) => Some(self.add.values.get_mut(field)),
			(ModalKind::Delete, FormTarget::Id) => Some(&mut self.delete.id),
			(ModalKind::Update, FormTarget::Id) => Some(&mut self.update.id),
			(ModalKind::Update, FormTarget::Value(field)) => Some(self.update.value_mut(field)),
			_ => None,
		}
	}

	/// Keep the table selection inside `len` rows.
	pub fn clamp_selection(&mut self, len: usize) {
		if len == 0 {
			self.table_state.select(None);
		} else if let Some(selected) = self.table_state.selected() {
			if selected >= len {
				self.table_state.select(Some(len - 1));
			}
		} else {
			self.table_state.select(Some(0));
		}
	}
}
