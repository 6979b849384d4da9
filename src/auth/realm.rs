//! Relying-party origin and return address carried by the login redirect.

// self
use crate::{_prelude::*, error::ConfigError};

/// Origin triple the relying party asserts it operates under (`openid.realm`).
///
/// Deserialization runs the same checks as [`Realm::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRealm")]
pub struct Realm {
	scheme: String,
	host: String,
	port: Option<u16>,
}
impl Realm {
	/// Creates a realm after checking that scheme and host are present.
	pub fn new(
		scheme: impl Into<String>,
		host: impl Into<String>,
		port: Option<u16>,
	) -> Result<Self, ConfigError> {
		let scheme = scheme.into();
		let host = host.into();

		if scheme.is_empty() {
			return Err(ConfigError::InvalidRealm { reason: "scheme is empty" });
		}
		if host.is_empty() {
			return Err(ConfigError::InvalidRealm { reason: "host is empty" });
		}

		Ok(Self { scheme, host, port })
	}

	/// Derives the realm from a URL, keeping only the explicit non-default port.
	pub fn from_url(url: &Url) -> Result<Self, ConfigError> {
		let host = url.host_str().ok_or(ConfigError::InvalidRealm { reason: "host is missing" })?;

		Self::new(url.scheme(), host, url.port())
	}

	/// URL scheme, e.g. `https`.
	pub fn scheme(&self) -> &str {
		&self.scheme
	}

	/// Host name without port.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Explicit port, when one was given.
	pub fn port(&self) -> Option<u16> {
		self.port
	}
}
/// Renders `scheme://host:port`.
///
/// Without a port the trailing colon is still emitted (`https://example.com:`).
impl Display for Realm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}://{}:", self.scheme, self.host)?;

		if let Some(port) = self.port {
			write!(f, "{port}")?;
		}

		Ok(())
	}
}
impl TryFrom<&Url> for Realm {
	type Error = ConfigError;

	fn try_from(url: &Url) -> Result<Self, Self::Error> {
		Self::from_url(url)
	}
}
impl TryFrom<RawRealm> for Realm {
	type Error = ConfigError;

	fn try_from(raw: RawRealm) -> Result<Self, Self::Error> {
		Self::new(raw.scheme, raw.host, raw.port)
	}
}

#[derive(Deserialize)]
struct RawRealm {
	scheme: String,
	host: String,
	port: Option<u16>,
}

/// Absolute URL Steam redirects the browser back to after login (`openid.return_to`).
///
/// The address is validated with [`Url::parse`] but serialized exactly as supplied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReturnAddress(String);
impl ReturnAddress {
	/// Validates and wraps a return address.
	pub fn parse(value: impl Into<String>) -> Result<Self, ConfigError> {
		let value = value.into();

		Url::parse(&value).map_err(|source| ConfigError::InvalidReturnAddress { source })?;

		Ok(Self(value))
	}

	/// Borrows the serialized address.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ReturnAddress {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Display for ReturnAddress {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl From<Url> for ReturnAddress {
	fn from(url: Url) -> Self {
		Self(url.into())
	}
}
impl From<ReturnAddress> for String {
	fn from(value: ReturnAddress) -> Self {
		value.0
	}
}
impl TryFrom<String> for ReturnAddress {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl FromStr for ReturnAddress {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
