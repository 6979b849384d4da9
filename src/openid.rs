//! OpenID 2.0 vocabulary used by Steam's provider.
//!
//! The constants are exposed so callers composing additional checks (or logging) around the login
//! flow can reference the same values the flows use.

// self
use crate::_prelude::*;

/// Steam's OpenID provider endpoint, used for both the login redirect and verification.
pub const PROVIDER_URL: &str = "https://steamcommunity.com/openid/login";
/// OpenID 2.0 namespace URI.
pub const NAMESPACE: &str = "http://specs.openid.net/auth/2.0";
/// "Identifier select" URI; Steam substitutes the authenticated user's identity at login.
pub const IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";
/// Mode literal that begins authentication.
pub const MODE_CHECKID_SETUP: &str = "checkid_setup";
/// Mode literal that requests indirect verification of a signed assertion.
pub const MODE_CHECK_AUTHENTICATION: &str = "check_authentication";

/// Fully qualified `openid.*` field names read or written by the flows.
pub mod field {
	/// `openid.ns`
	pub const NS: &str = "openid.ns";
	/// `openid.mode`
	pub const MODE: &str = "openid.mode";
	/// `openid.claimed_id`
	pub const CLAIMED_ID: &str = "openid.claimed_id";
	/// `openid.identity`
	pub const IDENTITY: &str = "openid.identity";
	/// `openid.realm`
	pub const REALM: &str = "openid.realm";
	/// `openid.return_to`
	pub const RETURN_TO: &str = "openid.return_to";
	/// `openid.assoc_handle`
	pub const ASSOC_HANDLE: &str = "openid.assoc_handle";
	/// `openid.signed`
	pub const SIGNED: &str = "openid.signed";
	/// `openid.sig`
	pub const SIG: &str = "openid.sig";

	/// Prefix shared by every OpenID field.
	pub const PREFIX: &str = "openid.";
}

/// OpenID request modes issued by the relying party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Browser-driven authentication request.
	CheckidSetup,
	/// Server-to-server signature verification.
	CheckAuthentication,
}
impl Mode {
	/// Returns the wire literal for the mode.
	pub const fn as_str(self) -> &'static str {
		match self {
			Mode::CheckidSetup => MODE_CHECKID_SETUP,
			Mode::CheckAuthentication => MODE_CHECK_AUTHENTICATION,
		}
	}
}
impl Display for Mode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
