//! Provider redirect (`checkid_setup`) URL construction.

// self
use crate::{
	_prelude::*,
	auth::{Realm, ReturnAddress},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	openid::{IDENTIFIER_SELECT, Mode, NAMESPACE, field},
	provider::ProviderDescriptor,
};

/// Builds the Steam login URL for `realm` and `return_to`.
///
/// Fails with [`ConfigError::MalformedProviderUrl`](crate::error::ConfigError::MalformedProviderUrl)
/// only if the built-in endpoint constant cannot be parsed.
pub fn redirect_url(realm: &Realm, return_to: &ReturnAddress) -> Result<Url> {
	let descriptor = ProviderDescriptor::steam()?;

	Ok(build_redirect_url(&descriptor, realm, return_to))
}

/// Builds the login URL against `descriptor`'s endpoint.
///
/// Query pairs already present on the endpoint are kept unless they collide with an OpenID field,
/// which is overwritten. Pairs are emitted in key order, so the result is byte-for-byte stable.
pub(crate) fn build_redirect_url(
	descriptor: &ProviderDescriptor,
	realm: &Realm,
	return_to: &ReturnAddress,
) -> Url {
	const KIND: FlowKind = FlowKind::Redirect;

	let span = FlowSpan::new(KIND, "build_redirect_url");
	let _guard = span.enter();

	obs::record_flow_outcome(KIND, FlowOutcome::Attempt, None);

	let mut url = descriptor.endpoint().clone();
	let mut query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();

	query.insert(field::CLAIMED_ID.into(), IDENTIFIER_SELECT.into());
	query.insert(field::IDENTITY.into(), IDENTIFIER_SELECT.into());
	query.insert(field::MODE.into(), Mode::CheckidSetup.as_str().into());
	query.insert(field::NS.into(), NAMESPACE.into());
	query.insert(field::REALM.into(), realm.to_string());
	query.insert(field::RETURN_TO.into(), return_to.as_str().into());

	url.query_pairs_mut().clear().extend_pairs(&query);

	span.record_outcome(FlowOutcome::Success, None);
	obs::record_flow_outcome(KIND, FlowOutcome::Success, None);

	url
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::params::{CallbackParameters, CallbackParams};

	fn realm() -> Realm {
		Realm::new("https", "somedomain.sometld", None).expect("Test realm should be valid.")
	}

	fn return_to() -> ReturnAddress {
		ReturnAddress::parse("https://localhost:666?testValueToTransport=Something")
			.expect("Test return address should be valid.")
	}

	#[test]
	fn redirect_carries_openid_fields() {
		let url = redirect_url(&realm(), &return_to()).expect("Redirect URL should build.");
		let params = CallbackParameters::from_url(&url);

		assert_eq!(url.host_str(), Some("steamcommunity.com"));
		assert_eq!(url.path(), "/openid/login");
		assert_eq!(params.len(), 6);
		assert_eq!(params.value(field::CLAIMED_ID), IDENTIFIER_SELECT);
		assert_eq!(params.value(field::IDENTITY), IDENTIFIER_SELECT);
		assert_eq!(params.value(field::MODE), "checkid_setup");
		assert_eq!(params.value(field::NS), NAMESPACE);
		assert_eq!(params.value(field::REALM), "https://somedomain.sometld:");
		assert_eq!(
			params.value(field::RETURN_TO),
			"https://localhost:666?testValueToTransport=Something"
		);
	}

	#[test]
	fn endpoint_query_is_merged_and_overwritten() {
		let descriptor = ProviderDescriptor::parse(
			"https://steamcommunity.com/openid/login?openid.mode=stale&lang=en",
		)
		.expect("Descriptor should accept an endpoint with a query.");
		let url = build_redirect_url(&descriptor, &realm(), &return_to());
		let params = CallbackParameters::from_url(&url);

		assert_eq!(params.value("lang"), "en");
		assert_eq!(params.value(field::MODE), "checkid_setup");
		assert_eq!(params.len(), 7);
	}
}
