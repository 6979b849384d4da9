//! Optional observability hooks for relying-party flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `steam_openid.flow` carrying `flow` and `stage`, plus the
//!   terminal `outcome` and `error` fields once the flow finishes.
//! - Enable `metrics` to increment `steam_openid_flow_total{flow, outcome, error}` for every attempt
//!   and terminal outcome.
//!
//! Outcomes distinguish user-driven login failures (`rejected`) from integration or infrastructure
//! problems (`failure`), mirroring [`Error::is_login_failure`]. Results are always returned to the
//! caller; these hooks only observe them.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Relying-party operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Building the provider login redirect.
	Redirect,
	/// Indirect verification of callback parameters.
	Verification,
	/// Claimed identifier validation and SteamID64 extraction.
	ClaimedId,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Redirect => "redirect",
			FlowKind::Verification => "verification",
			FlowKind::ClaimedId => "claimed_id",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a flow helper.
	Attempt,
	/// Successful completion.
	Success,
	/// The login was refused: the provider rejected the assertion or the claim was malformed.
	Rejected,
	/// Configuration, transport, or protocol failure worth alerting on.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Rejected => "rejected",
			FlowOutcome::Failure => "failure",
		}
	}

	/// Maps a flow result onto its terminal outcome.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => FlowOutcome::Success,
			Err(e) if e.is_login_failure() => FlowOutcome::Rejected,
			Err(_) => FlowOutcome::Failure,
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a flow's terminal result on its span and in the flow counter.
pub fn finish_flow<T>(span: &FlowSpan, kind: FlowKind, result: &Result<T>) {
	let outcome = FlowOutcome::of(result);
	let error = result.as_ref().err().map(Error::label);

	span.record_outcome(outcome, error);
	record_flow_outcome(kind, outcome, error);
}
