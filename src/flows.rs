//! Login flows: the provider redirect, callback verification, and SteamID64 extraction.

pub mod claimed_id;
pub mod redirect;
pub mod verify;

pub use claimed_id::*;
pub use redirect::*;
pub use verify::*;

// self
use crate::{
	_prelude::*,
	auth::{Realm, ReturnAddress, SteamId64},
	http::OpenIdHttpClient,
	params::CallbackParams,
	provider::ProviderDescriptor,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Relying party specialized for the crate's default reqwest transport.
pub type ReqwestRelyingParty = RelyingParty<ReqwestHttpClient>;

/// Runs the Steam login flows against a single provider descriptor.
///
/// The struct holds nothing mutable: the HTTP client is shared behind an [`Arc`] and the
/// descriptor is read-only, so one instance can serve concurrent callbacks.
#[derive(Clone)]
pub struct RelyingParty<C>
where
	C: ?Sized + OpenIdHttpClient,
{
	/// HTTP client wrapper used for verification requests.
	pub http_client: Arc<C>,
	/// Provider descriptor that defines the OpenID endpoint.
	pub descriptor: ProviderDescriptor,
}
impl<C> RelyingParty<C>
where
	C: ?Sized + OpenIdHttpClient,
{
	/// Creates a relying party that reuses the caller-provided transport.
	pub fn with_http_client(descriptor: ProviderDescriptor, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), descriptor }
	}

	/// Builds the URL the user's browser should be sent to for login.
	pub fn redirect_url(&self, realm: &Realm, return_to: &ReturnAddress) -> Url {
		redirect::build_redirect_url(&self.descriptor, realm, return_to)
	}

	/// Verifies the callback with the provider, then extracts the SteamID64.
	///
	/// The claimed identifier is only inspected once the provider has confirmed the assertion.
	pub async fn authenticate<P>(&self, params: &P) -> Result<SteamId64>
	where
		P: ?Sized + CallbackParams,
	{
		self.verify(params).await?;

		extract_steam_id(params)
	}
}
#[cfg(feature = "reqwest")]
impl RelyingParty<ReqwestHttpClient> {
	/// Creates a relying party for Steam backed by a reqwest client that ignores redirects.
	pub fn new() -> Result<Self> {
		Ok(Self::with_http_client(ProviderDescriptor::steam()?, ReqwestHttpClient::new()?))
	}
}
impl<C> Debug for RelyingParty<C>
where
	C: ?Sized + OpenIdHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RelyingParty").field("descriptor", &self.descriptor).finish()
	}
}
