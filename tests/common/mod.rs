//! Fixtures shared by the integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::MockServer;
// self
use steam_openid::{
	flows::{RelyingParty, ReqwestRelyingParty},
	http::ReqwestHttpClient,
	params::CallbackParameters,
	provider::ProviderDescriptor,
};

pub const PROVIDER_PATH: &str = "/openid/login";
pub const STEAM_ID: &str = "76561198040411592";
pub const SIGNED_FIELDS: &str =
	"signed,op_endpoint,claimed_id,identity,return_to,response_nonce,assoc_handle";

/// Builds a relying party whose provider endpoint points at `server`.
pub fn mock_relying_party(server: &MockServer) -> ReqwestRelyingParty {
	let descriptor = ProviderDescriptor::parse(&server.url(PROVIDER_PATH))
		.expect("Mock provider endpoint should be accepted.");
	let http_client = ReqwestHttpClient::new().expect("Failed to build reqwest client for tests.");

	RelyingParty::with_http_client(descriptor, http_client)
}

/// Callback parameters shaped like the ones Steam appends after a successful login.
pub fn steam_callback(claimed_id: &str) -> CallbackParameters {
	CallbackParameters::from_iter([
		("openid.ns", "http://specs.openid.net/auth/2.0"),
		("openid.mode", "id_res"),
		("openid.op_endpoint", "https://steamcommunity.com/openid/login"),
		("openid.claimed_id", claimed_id),
		("openid.identity", claimed_id),
		("openid.return_to", "https://app.example.com/auth/callback"),
		("openid.response_nonce", "2024-05-01T12:00:00ZpQ3e0g1ytpdAVd4ho1oY2A1ZC2o="),
		("openid.assoc_handle", "1234567890"),
		("openid.signed", SIGNED_FIELDS),
		("openid.sig", "BK0zC//KzERs7N+NlDO0aL06+BA="),
	])
}

pub fn steam_claimed_id() -> String {
	format!("https://steamcommunity.com/openid/id/{STEAM_ID}")
}
