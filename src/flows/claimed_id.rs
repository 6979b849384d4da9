//! Claimed identifier validation and SteamID64 extraction.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::{
	_prelude::*,
	auth::SteamId64,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	openid::field,
	params::CallbackParams,
};

static CLAIMED_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(https|http)://steamcommunity\.com/openid/id/[0-9]{15,25}$")
		.expect("Claimed identifier pattern must compile.")
});

/// Validates `openid.claimed_id` and returns the SteamID64 it carries.
///
/// The whole value must be `http(s)://steamcommunity.com/openid/id/` followed by 15 to 25 digits.
/// Anything else fails with [`Error::InvalidClaimedId`]; no partial extraction is attempted.
pub fn extract_steam_id<P>(params: &P) -> Result<SteamId64>
where
	P: ?Sized + CallbackParams,
{
	const KIND: FlowKind = FlowKind::ClaimedId;

	let span = FlowSpan::new(KIND, "extract_steam_id");
	let _guard = span.enter();

	obs::record_flow_outcome(KIND, FlowOutcome::Attempt, None);

	let result = parse_claimed_id(params.value(field::CLAIMED_ID));

	obs::finish_flow(&span, KIND, &result);

	result
}

/// Validates a raw claimed identifier URL and strips it down to its digits.
pub fn parse_claimed_id(claimed_id: &str) -> Result<SteamId64> {
	if !CLAIMED_ID_PATTERN.is_match(claimed_id) {
		return Err(Error::InvalidClaimedId { claimed_id: claimed_id.to_owned() });
	}

	let digits = claimed_id.chars().filter(char::is_ascii_digit).collect();

	Ok(SteamId64::from_digits(digits))
}
