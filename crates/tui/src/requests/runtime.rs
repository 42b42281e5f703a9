use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tracing::debug;

use super::commands::{Mutation, QueryKind, RequestCommand, RequestResult};

/// Controller-side handle on the request worker.
pub(crate) struct RequestRuntime {
	tx: Sender<RequestCommand>,
	rx: Receiver<RequestResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	query_in_flight: bool,
	pending_mutations: usize,
}

impl RequestRuntime {
	pub(crate) fn new(
		tx: Sender<RequestCommand>,
		rx: Receiver<RequestResult>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			query_in_flight: false,
			pending_mutations: 0,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(RequestCommand::Shutdown);
	}

	/// Queue a query, superseding any earlier one. Returns its id.
	pub(crate) fn issue_query(&mut self, kind: QueryKind) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.query_in_flight = true;
		self.latest_query_id.store(id, AtomicOrdering::Release);
		debug!(id, ?kind, "issuing query");
		let _ = self.tx.send(RequestCommand::Query { id, kind });
		id
	}

	pub(crate) fn issue_mutation(&mut self, mutation: Mutation) {
		self.pending_mutations += 1;
		debug!(kind = ?mutation.kind(), "issuing mutation");
		let _ = self.tx.send(RequestCommand::Mutate(mutation));
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_query_completion(&mut self) {
		self.query_in_flight = false;
	}

	pub(crate) fn record_mutation_completion(&mut self) {
		self.pending_mutations = self.pending_mutations.saturating_sub(1);
	}

	pub(crate) fn is_busy(&self) -> bool {
		self.query_in_flight || self.pending_mutations > 0
	}

	pub(crate) fn try_recv(&mut self) -> Result<RequestResult, TryRecvError> {
		self.rx.try_recv()
	}
}
