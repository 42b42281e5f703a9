use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use stockr_api::{ApiError, ProductsApi};
use tracing::{debug, warn};

use super::commands::{Mutation, QueryKind, QueryOutcome, RequestCommand, RequestResult};

/// Launches the background request worker thread and returns communication channels.
pub(crate) fn spawn(
	api: Box<dyn ProductsApi>,
) -> (Sender<RequestCommand>, Receiver<RequestResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(api.as_ref(), command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	api: &dyn ProductsApi,
	command_rx: Receiver<RequestCommand>,
	result_tx: Sender<RequestResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(api, &result_tx, &latest_query_id, command) {
			break;
		}
	}
	debug!("request worker stopped");
}

fn handle_command(
	api: &dyn ProductsApi,
	result_tx: &Sender<RequestResult>,
	latest_query_id: &AtomicU64,
	command: RequestCommand,
) -> bool {
	let result = match command {
		RequestCommand::Query { id, kind } => {
			if id < latest_query_id.load(Ordering::Acquire) {
				debug!(id, ?kind, "skipping superseded query");
				return true;
			}
			let outcome = run_query(api, &kind);
			if let Err(err) = &outcome {
				warn!(id, ?kind, error = %err, "query failed");
			}
			RequestResult::Query { id, kind, outcome }
		}
		RequestCommand::Mutate(mutation) => {
			let kind = mutation.kind();
			let outcome = run_mutation(api, mutation);
			if let Err(err) = &outcome {
				warn!(?kind, error = %err, "mutation failed");
			}
			RequestResult::Mutation { kind, outcome }
		}
		RequestCommand::Shutdown => return false,
	};
	result_tx.send(result).is_ok()
}

fn run_query(api: &dyn ProductsApi, kind: &QueryKind) -> Result<QueryOutcome, ApiError> {
	let products = match kind {
		QueryKind::All => api.list_all()?,
		QueryKind::ById(id) => match api.get_by_id(id)? {
			Some(product) => vec![product],
			None => return Ok(QueryOutcome::NotFound),
		},
		QueryKind::ByName(name) => api.search_by_name(name)?,
		QueryKind::OrderedByQuantity => api.list_ordered_by_quantity()?,
	};
	Ok(QueryOutcome::Products(products))
}

fn run_mutation(api: &dyn ProductsApi, mutation: Mutation) -> Result<(), ApiError> {
	match mutation {
		Mutation::Create(product) => {
			let created = api.create(&product)?;
			debug!(id = created.id, "product created");
		}
		Mutation::Update { id, patch } => {
			let updated = api.update(&id, &patch)?;
			debug!(id = updated.id, fields = ?patch.fields(), "product updated");
		}
		Mutation::Delete { id } => {
			api.delete(&id)?;
			debug!(%id, "product deleted");
		}
	}
	Ok(())
}
