mod common;

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use common::*;
use steam_openid::{
	error::{Error, TransportError},
	flows::{RelyingParty, ReqwestRelyingParty},
	http::ReqwestHttpClient,
	provider::ProviderDescriptor,
	reqwest::Client,
};

async fn mock_provider<'a>(server: &'a MockServer, body: &'static str) -> httpmock::Mock<'a> {
	server
		.mock_async(|when, then| {
			when.method(POST)
				.path(PROVIDER_PATH)
				.header("content-type", "application/x-www-form-urlencoded");
			then.status(200).header("content-type", "text/plain;charset=UTF-8").body(body);
		})
		.await
}

#[tokio::test]
async fn verify_accepts_valid_assertion() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock =
		mock_provider(&server, "ns:http://specs.openid.net/auth/2.0\nis_valid:true\n").await;

	relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect("Provider confirmed the assertion.");

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_maps_false_verdict_to_rejection() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock =
		mock_provider(&server, "ns:http://specs.openid.net/auth/2.0\nis_valid:false\n").await;
	let err = relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect_err("Provider rejected the assertion.");

	assert!(matches!(err, Error::AuthenticationRejected));
	assert!(err.is_login_failure());

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_requires_openid_namespace_even_with_positive_verdict() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock = mock_provider(&server, "ns:http://openid.net/signon/1.1\nis_valid:true\n").await;
	let err = relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect_err("Unexpected namespace should fail verification.");

	match err {
		Error::InvalidProviderNamespace { received } => {
			assert_eq!(received, "ns:http://openid.net/signon/1.1");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_fails_closed_on_truncated_response() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock = mock_provider(&server, "ns:http://specs.openid.net/auth/2.0").await;
	let err = relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect_err("Response without a verdict should fail.");

	assert!(matches!(err, Error::AuthenticationRejected));

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_fails_closed_on_error_status() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(PROVIDER_PATH);
			then.status(503).body("Service Unavailable");
		})
		.await;
	let err = relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect_err("Error pages should not pass verification.");

	assert!(matches!(err, Error::InvalidProviderNamespace { .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn verify_surfaces_unreachable_provider() {
	let descriptor = ProviderDescriptor::parse("http://127.0.0.1:1/openid/login")
		.expect("Loopback descriptor should be accepted.");
	let relying_party: ReqwestRelyingParty = RelyingParty::with_http_client(
		descriptor,
		ReqwestHttpClient::new().expect("Failed to build reqwest client for tests."),
	);
	let err = relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect_err("Closed port should be unreachable.");

	assert!(matches!(err, Error::ProviderUnreachable(TransportError::Network { .. })));
	assert!(!err.is_login_failure());
}

#[tokio::test]
async fn verify_surfaces_timed_out_provider() {
	let server = MockServer::start_async().await;
	let descriptor = ProviderDescriptor::parse(&server.url(PROVIDER_PATH))
		.expect("Mock provider endpoint should be accepted.");
	let client = Client::builder()
		.timeout(Duration::from_millis(200))
		.build()
		.expect("Failed to build reqwest client with a timeout.");
	let relying_party: ReqwestRelyingParty =
		RelyingParty::with_http_client(descriptor, ReqwestHttpClient::with_client(client));
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path(PROVIDER_PATH);
			then.status(200)
				.delay(Duration::from_secs(3))
				.body("ns:http://specs.openid.net/auth/2.0\nis_valid:true\n");
		})
		.await;
	let err = relying_party
		.verify(&steam_callback(&steam_claimed_id()))
		.await
		.expect_err("Slow provider should time out instead of hanging.");

	assert!(matches!(err, Error::ProviderUnreachable(TransportError::Network { .. })));
	assert!(!err.is_login_failure());
}

#[tokio::test]
async fn authenticate_returns_steam_id_after_verification() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock =
		mock_provider(&server, "ns:http://specs.openid.net/auth/2.0\nis_valid:true\n").await;
	let steam_id = relying_party
		.authenticate(&steam_callback(&steam_claimed_id()))
		.await
		.expect("Verified callback should yield a SteamID64.");

	assert_eq!(steam_id.as_str(), STEAM_ID);
	assert_eq!(steam_id.to_u64(), Some(76_561_198_040_411_592));

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_rejects_forged_claim_after_verification() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock =
		mock_provider(&server, "ns:http://specs.openid.net/auth/2.0\nis_valid:true\n").await;
	let err = relying_party
		.authenticate(&steam_callback("https://evil.example.com/openid/id/76561198040411592"))
		.await
		.expect_err("Forged claimed identifier should be rejected.");

	assert!(matches!(err, Error::InvalidClaimedId { .. }));

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_skips_extraction_when_provider_rejects() {
	let server = MockServer::start_async().await;
	let relying_party = mock_relying_party(&server);
	let mock =
		mock_provider(&server, "ns:http://specs.openid.net/auth/2.0\nis_valid:false\n").await;
	let err = relying_party
		.authenticate(&steam_callback("not even a url"))
		.await
		.expect_err("Rejected assertion should short-circuit.");

	assert!(matches!(err, Error::AuthenticationRejected));

	mock.assert_async().await;
}
