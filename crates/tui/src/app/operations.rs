use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use stockr_api::ApiError;
use tracing::{debug, info};

use super::App;
use crate::requests::{Mutation, MutationKind, QueryKind, QueryOutcome, RequestResult};
use crate::view::{ErrorOrigin, ErrorReport, ModalKind};

const MISSING_ID: &str = "Enter a product id";
const PAGE_STEP: usize = 10;

impl App<'_> {
	/// Fetch every product, replacing the list.
	pub fn list_all(&mut self) {
		self.issue_query(QueryKind::All);
	}

	/// Run the search box contents: blank lists all, digits look up an id,
	/// anything else searches by name.
	pub fn search(&mut self) {
		let kind = QueryKind::from_search_text(self.view.search_input.text());
		self.issue_query(kind);
	}

	/// First fetch of a session: runs the search box's starting text, which
	/// lists everything when it is blank.
	pub fn load_initial(&mut self) {
		self.search();
	}

	/// Flip between the backend's default order and quantity order.
	pub fn toggle_order(&mut self) {
		let ordered = self.store.toggle_ordered();
		info!(ordered, "toggling sort order");
		let kind = if ordered {
			QueryKind::OrderedByQuantity
		} else {
			QueryKind::All
		};
		self.issue_query(kind);
	}

	fn issue_query(&mut self, kind: QueryKind) {
		self.view.loading = true;
		self.view.error = None;
		self.requests.issue_query(kind);
	}

	pub fn open_modal(&mut self, kind: ModalKind) {
		if self
			.view
			.open_modal(kind, Instant::now(), self.settings.timings)
		{
			debug!(?kind, "modal opened");
		}
	}

	pub fn close_modal(&mut self, kind: ModalKind) {
		if self
			.view
			.close_modal(kind, Instant::now(), self.settings.timings)
		{
			debug!(?kind, "modal closing");
		}
	}

	/// Send the form's request. Nothing happens unless the form takes input.
	pub fn submit(&mut self, kind: ModalKind) {
		if self.view.active_modal() != Some(kind) {
			return;
		}
		let mutation = match kind {
			ModalKind::Add => Mutation::Create(self.view.add.to_payload()),
			ModalKind::Delete => {
				let id = self.view.delete.id.trim();
				if id.is_empty() {
					self.view.error = Some(ErrorReport::mutation(kind, MISSING_ID));
					return;
				}
				Mutation::Delete { id: id.to_string() }
			}
			ModalKind::Update => {
				let id = self.view.update.id.trim();
				if id.is_empty() {
					self.view.error = Some(ErrorReport::mutation(kind, MISSING_ID));
					return;
				}
				Mutation::Update {
					id: id.to_string(),
					patch: self.view.update.payload(),
				}
			}
		};
		self.view
			.clear_error_where(|origin| origin == ErrorOrigin::Mutation(kind));
		self.requests.issue_mutation(mutation);
	}

	/// Drain any results waiting from the request worker.
	pub fn pump_request_results(&mut self) {
		loop {
			match self.requests.try_recv() {
				Ok(result) => self.handle_request_result(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	pub(super) fn handle_request_result(&mut self, result: RequestResult) {
		match result {
			RequestResult::Query { id, kind, outcome } => {
				if !self.requests.matches_latest(id) {
					debug!(id, "ignoring stale query result");
					return;
				}
				self.requests.record_query_completion();
				self.apply_query_outcome(&kind, outcome);
			}
			RequestResult::Mutation { kind, outcome } => {
				self.requests.record_mutation_completion();
				self.apply_mutation_outcome(kind, outcome);
			}
		}
	}

	fn apply_query_outcome(&mut self, kind: &QueryKind, outcome: Result<QueryOutcome, ApiError>) {
		self.view.loading = false;
		match outcome {
			Ok(QueryOutcome::Products(products)) => {
				debug!(count = products.len(), "products loaded");
				self.store.replace(products);
			}
			Ok(QueryOutcome::NotFound) => {
				self.store.clear();
				self.view.error = Some(ErrorReport::query("Product not found"));
			}
			Err(_) => {
				self.store.clear();
				self.view.error = Some(ErrorReport::query(kind.failure_message()));
			}
		}
		self.view.clamp_selection(self.store.len());
		self.sync_update_draft();
	}

	fn apply_mutation_outcome(&mut self, kind: MutationKind, outcome: Result<(), ApiError>) {
		let modal = kind.modal();
		match outcome {
			Ok(()) => {
				info!(?kind, "mutation succeeded");
				self.close_modal(modal);
				self.list_all();
			}
			Err(err) => {
				let message = match err.status() {
					Some(status) => format!("{} (HTTP {status})", kind.failure_message()),
					None => kind.failure_message().to_string(),
				};
				self.view.error = Some(ErrorReport::mutation(modal, message));
			}
		}
	}

	/// Reload the update form when the product it targets changes.
	pub(crate) fn sync_update_draft(&mut self) {
		let original = self.store.find_by_id_text(&self.view.update.id).cloned();
		self.view.update.sync(original.as_ref());
	}

	/// Advance animations and the spinner. Call once per frame.
	pub fn tick(&mut self, now: Instant) {
		self.view.tick(now);
		if self.is_busy() {
			self.throbber_state.calc_next();
		}
	}

	pub(crate) fn move_selection_up(&mut self, step: usize) {
		if let Some(selected) = self.view.table_state.selected() {
			self.view.table_state.select(Some(selected.saturating_sub(step)));
		}
	}

	pub(crate) fn move_selection_down(&mut self, step: usize) {
		let len = self.store.len();
		if len == 0 {
			return;
		}
		let next = self
			.view
			.table_state
			.selected()
			.map_or(0, |selected| selected.saturating_add(step));
		self.view.table_state.select(Some(next.min(len - 1)));
	}

	pub(crate) fn page_up(&mut self) {
		self.move_selection_up(PAGE_STEP);
	}

	pub(crate) fn page_down(&mut self) {
		self.move_selection_down(PAGE_STEP);
	}

	pub(crate) fn select_first(&mut self) {
		if !self.store.is_empty() {
			self.view.table_state.select(Some(0));
		}
	}

	pub(crate) fn select_last(&mut self) {
		if let Some(last) = self.store.len().checked_sub(1) {
			self.view.table_state.select(Some(last));
		}
	}
}
