//! Relying-party error types shared across the redirect, verification, and extraction flows.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Every variant is a per-request outcome. [`Error::is_login_failure`] separates the ordinary
/// "login failed" cases from the ones that point at an integration or infrastructure problem.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The provider could not be reached during verification (DNS, TCP, TLS, IO).
	#[error(transparent)]
	ProviderUnreachable(#[from] TransportError),

	/// The verification response did not start with the OpenID 2.0 namespace line.
	#[error("Provider response does not declare the OpenID 2.0 namespace: `{received}`.")]
	InvalidProviderNamespace {
		/// Truncated preview of the first response line.
		received: String,
	},
	/// The provider refused to confirm the assertion signature.
	#[error("Provider rejected the authentication assertion.")]
	AuthenticationRejected,
	/// `openid.claimed_id` does not have the Steam identity URL shape.
	#[error("Claimed identifier does not match the Steam identity URL pattern: `{claimed_id}`.")]
	InvalidClaimedId {
		/// Claimed identifier received on the callback.
		claimed_id: String,
	},
}
impl Error {
	/// Returns `true` for the failures users cause themselves (rejected or forged assertions).
	///
	/// These are safe to answer with a generic "login failed, please try again" message. All other
	/// variants indicate a defect or an infrastructure problem worth alerting on.
	pub fn is_login_failure(&self) -> bool {
		matches!(self, Self::AuthenticationRejected | Self::InvalidClaimedId { .. })
	}

	/// Returns a stable label naming the variant, suitable for span or metric fields.
	pub const fn label(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::ProviderUnreachable(_) => "provider_unreachable",
			Self::InvalidProviderNamespace { .. } => "invalid_provider_namespace",
			Self::AuthenticationRejected => "authentication_rejected",
			Self::InvalidClaimedId { .. } => "invalid_claimed_id",
		}
	}
}

/// Configuration and validation failures raised while preparing requests.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// The provider endpoint could not be parsed.
	#[error("Provider endpoint `{url}` is not a valid URL.")]
	MalformedProviderUrl {
		/// Raw endpoint string.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Provider endpoints must use HTTPS outside of loopback hosts.
	#[error("Provider endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Realm is missing a scheme or host.
	#[error("Realm is invalid: {reason}.")]
	InvalidRealm {
		/// Human-readable validation failure.
		reason: &'static str,
	},
	/// Return address cannot be parsed.
	#[error("Return address is invalid.")]
	InvalidReturnAddress {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the OpenID provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the OpenID provider.")]
	Io(#[from] std::io::Error),
	/// Transport failure reported only as a message.
	#[error("HTTP client error occurred while calling the OpenID provider: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
