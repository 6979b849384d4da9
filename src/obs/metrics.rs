// self
use crate::obs::{FlowKind, FlowOutcome};

const NO_ERROR: &str = "none";

/// Label set attached to the `steam_openid_flow_total` counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowLabels {
	/// Flow label ([`FlowKind::as_str`]).
	pub flow: &'static str,
	/// Outcome label ([`FlowOutcome::as_str`]).
	pub outcome: &'static str,
	/// Error variant label, `none` unless the flow failed.
	pub error: &'static str,
}
impl FlowLabels {
	/// Builds the labels for one counter increment.
	pub fn new(kind: FlowKind, outcome: FlowOutcome, error: Option<&'static str>) -> Self {
		Self { flow: kind.as_str(), outcome: outcome.as_str(), error: error.unwrap_or(NO_ERROR) }
	}
}

/// Records a flow outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome, error: Option<&'static str>) {
	let labels = FlowLabels::new(kind, outcome, error);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"steam_openid_flow_total",
			"flow" => labels.flow,
			"outcome" => labels.outcome,
			"error" => labels.error
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = labels;
	}
}
