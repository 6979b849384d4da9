//! Lookup over the `openid.*` parameters Steam appends to the callback request.
//!
//! The flows only need "value of this field, if any". [`CallbackParams`] expresses exactly that so
//! web frameworks can hand over whatever map they already decoded; [`CallbackParameters`] is the
//! crate's own ordered map for callers that start from a raw query string.

// std
use std::hash::BuildHasher;
// self
use crate::_prelude::*;

/// Read access to callback parameters by field name.
pub trait CallbackParams {
	/// Returns the value of `name`, if present.
	fn get(&self, name: &str) -> Option<&str>;

	/// Returns the value of `name`, or the empty string when absent.
	fn value(&self, name: &str) -> &str {
		self.get(name).unwrap_or_default()
	}
}
impl<S> CallbackParams for HashMap<String, String, S>
where
	S: BuildHasher,
{
	fn get(&self, name: &str) -> Option<&str> {
		HashMap::get(self, name).map(String::as_str)
	}
}
impl CallbackParams for BTreeMap<String, String> {
	fn get(&self, name: &str) -> Option<&str> {
		BTreeMap::get(self, name).map(String::as_str)
	}
}

/// Ordered callback parameter map.
///
/// Deserializes transparently from a query string map, so it can be used directly as a web
/// framework query extractor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackParameters(BTreeMap<String, String>);
impl CallbackParameters {
	/// Decodes an `application/x-www-form-urlencoded` query string.
	///
	/// When a key repeats, the first occurrence wins.
	pub fn from_query(query: &str) -> Self {
		url::form_urlencoded::parse(query.as_bytes()).into_owned().collect()
	}

	/// Decodes the query component of `url`.
	pub fn from_url(url: &Url) -> Self {
		url.query_pairs().into_owned().collect()
	}

	/// Sets `name` to `value`, replacing any previous value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}

	/// Iterates parameters in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl CallbackParams for CallbackParameters {
	fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}
}
impl<K, V> FromIterator<(K, V)> for CallbackParameters
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut map = BTreeMap::new();

		for (k, v) in iter {
			map.entry(k.into()).or_insert_with(|| v.into());
		}

		Self(map)
	}
}
impl From<BTreeMap<String, String>> for CallbackParameters {
	fn from(map: BTreeMap<String, String>) -> Self {
		Self(map)
	}
}
impl FromStr for CallbackParameters {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::from_query(s.strip_prefix('?').unwrap_or(s)))
	}
}
