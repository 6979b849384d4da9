//! SteamID64 value returned by a successful login.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Decimal account identifier extracted from a verified `openid.claimed_id`.
///
/// The value is the digit run of the claimed identifier and is not range-checked; matching it
/// against a known account is up to the caller.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SteamId64(String);
impl SteamId64 {
	pub(crate) fn from_digits(digits: String) -> Self {
		Self(digits)
	}

	/// Borrows the decimal string.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Parses the identifier as a `u64`, returning `None` when it overflows.
	pub fn to_u64(&self) -> Option<u64> {
		self.0.parse().ok()
	}
}
impl Deref for SteamId64 {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for SteamId64 {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<SteamId64> for String {
	fn from(value: SteamId64) -> Self {
		value.0
	}
}
impl Debug for SteamId64 {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "SteamId64({})", self.0)
	}
}
impl Display for SteamId64 {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn numeric_conversion_is_checked() {
		let id = SteamId64::from_digits("76561198040411592".into());
		let oversized = SteamId64::from_digits("9999999999999999999999999".into());

		assert_eq!(id.to_u64(), Some(76_561_198_040_411_592));
		assert_eq!(oversized.to_u64(), None);
		assert_eq!(format!("{id:?}"), "SteamId64(76561198040411592)");
	}
}
