//! Opaque bearer credential wrapper.

// self
use crate::_prelude::*;

/// Bearer credential presented in the `Authorization` header.
///
/// The value is stored verbatim: an empty string is accepted and whitespace is significant.
/// Formatters redact the value so configurations can be logged without leaking it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);
impl BearerToken {
	/// Wraps a credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw credential. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no credential was supplied.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for BearerToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<String> for BearerToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for BearerToken {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.is_empty() {
			f.debug_tuple("BearerToken").field(&"<empty>").finish()
		} else {
			f.debug_tuple("BearerToken").field(&"<redacted>").finish()
		}
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
