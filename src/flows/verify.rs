//! Indirect ("dumb mode") verification of callback parameters.
//!
//! The callback is re-submitted to the provider in `check_authentication` mode. Every field named in
//! `openid.signed` is echoed back so the provider can recompute the signature; a field listed there
//! but missing from the callback is sent as the empty string, never omitted or defaulted. The
//! provider answers in OpenID key-value form and only its first two lines are interpreted.

// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError, HttpRequest,
	http::{
		Method, Request,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
	flows::RelyingParty,
	http::OpenIdHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	openid::{Mode, NAMESPACE, field},
	params::CallbackParams,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const NAMESPACE_PREVIEW_LIMIT: usize = 128;
const ECHOED_FIELDS: [&str; 4] = [field::ASSOC_HANDLE, field::SIGNED, field::SIG, field::NS];

impl<C> RelyingParty<C>
where
	C: ?Sized + OpenIdHttpClient,
{
	/// Confirms the callback assertion with the provider.
	///
	/// Performs exactly one POST per call and never retries; a used association handle may be
	/// refused on a second attempt. Dropping the returned future cancels the request.
	pub async fn verify<P>(&self, params: &P) -> Result<()>
	where
		P: ?Sized + CallbackParams,
	{
		const KIND: FlowKind = FlowKind::Verification;

		let span = FlowSpan::new(KIND, "verify");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt, None);

		let form = verification_form(params);
		let result = span
			.instrument(async move {
				let request = verification_request(self.descriptor.endpoint(), &form)?;
				let handle = self.http_client.handle();
				let response = handle.call(request).await.map_err(map_transport_error)?;
				let body = String::from_utf8_lossy(response.body());

				parse_verification_response(&body)
			})
			.await;

		obs::finish_flow(&span, KIND, &result);

		result
	}
}

/// Assembles the `check_authentication` payload from the callback parameters.
pub fn verification_form<P>(params: &P) -> BTreeMap<String, String>
where
	P: ?Sized + CallbackParams,
{
	let mut form = BTreeMap::new();

	for name in ECHOED_FIELDS {
		form.insert(name.to_owned(), params.value(name).to_owned());
	}
	for name in params.value(field::SIGNED).split(',').filter(|name| !name.is_empty()) {
		let key = format!("{}{name}", field::PREFIX);
		let value = params.value(&key).to_owned();

		form.insert(key, value);
	}

	// Written last so a signed list naming `mode` cannot change the request type.
	form.insert(field::MODE.to_owned(), Mode::CheckAuthentication.as_str().to_owned());

	form
}

/// Interprets the provider's key-value verification response.
///
/// Line one must be exactly `ns:<OpenID 2.0 namespace>`. Line two must exist, be non-empty, and
/// not end in `false`.
pub fn parse_verification_response(body: &str) -> Result<()> {
	let mut lines = body.split('\n');
	let namespace = lines.next().unwrap_or_default();

	if namespace.strip_prefix("ns:") != Some(NAMESPACE) {
		return Err(Error::InvalidProviderNamespace { received: preview(namespace) });
	}

	match lines.next() {
		Some(line) if !line.is_empty() && !line.ends_with("false") => Ok(()),
		_ => Err(Error::AuthenticationRejected),
	}
}

fn verification_request(endpoint: &Url, form: &BTreeMap<String, String>) -> Result<HttpRequest> {
	let body = url::form_urlencoded::Serializer::new(String::new()).extend_pairs(form).finish();
	let request = Request::builder()
		.method(Method::POST)
		.uri(endpoint.as_str())
		.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
		.header(ACCEPT, "text/plain")
		.body(body.into_bytes())
		.map_err(ConfigError::from)?;

	Ok(request)
}

fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		other => TransportError::Other {
			message: format!("unhandled HTTP client error variant: {other:?}"),
		}
		.into(),
	}
}

fn preview(line: &str) -> String {
	match line.char_indices().nth(NAMESPACE_PREVIEW_LIMIT) {
		Some((idx, _)) => format!("{}…", &line[..idx]),
		None => line.to_owned(),
	}
}
