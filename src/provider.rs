//! Provider descriptor: the validated endpoint the flows talk to.
//!
//! Production code uses [`ProviderDescriptor::steam`]. Other endpoints can be injected for tests or
//! egress proxies; they must use HTTPS unless they point at a loopback host.

// std
use std::net::{Ipv4Addr, Ipv6Addr};
// crates.io
use url::Host;
// self
use crate::{_prelude::*, error::ConfigError, openid};

/// Immutable provider descriptor consumed by flows.
///
/// Deserialization applies the same endpoint validation as [`ProviderDescriptor::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProviderDescriptor")]
pub struct ProviderDescriptor {
	endpoint: Url,
}
impl ProviderDescriptor {
	/// Descriptor for Steam's OpenID provider.
	pub fn steam() -> Result<Self, ConfigError> {
		Self::parse(openid::PROVIDER_URL)
	}

	/// Parses and validates an endpoint string.
	pub fn parse(endpoint: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(endpoint).map_err(|source| ConfigError::MalformedProviderUrl {
			url: endpoint.to_owned(),
			source,
		})?;

		Self::new(url)
	}

	/// Validates an already parsed endpoint.
	pub fn new(endpoint: Url) -> Result<Self, ConfigError> {
		validate_endpoint(&endpoint)?;

		Ok(Self { endpoint })
	}

	/// OpenID endpoint used for both the login redirect and verification.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}
}
impl TryFrom<RawProviderDescriptor> for ProviderDescriptor {
	type Error = ConfigError;

	fn try_from(raw: RawProviderDescriptor) -> Result<Self, Self::Error> {
		Self::new(raw.endpoint)
	}
}

#[derive(Deserialize)]
struct RawProviderDescriptor {
	endpoint: Url,
}

fn validate_endpoint(url: &Url) -> Result<(), ConfigError> {
	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(url) => Ok(()),
		_ => Err(ConfigError::InsecureEndpoint { url: url.to_string() }),
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => Ipv4Addr::is_loopback(&ip),
		Some(Host::Ipv6(ip)) => Ipv6Addr::is_loopback(&ip),
		None => false,
	}
}
