//! Background request worker and the controller-side runtime that feeds it.
//!
//! All backend traffic happens on one worker thread so the event loop never
//! blocks on the network. Queries are sequenced so only the most recently
//! issued one can change the product list.

mod commands;
mod runtime;
mod worker;

pub(crate) use commands::{
	Mutation, MutationKind, QueryKind, QueryOutcome, RequestCommand, RequestResult,
};
pub(crate) use runtime::RequestRuntime;
pub(crate) use worker::spawn;
