//! Strongly typed provider identifiers.

// std
use std::ops::Deref;
// crates.io
use uuid::Uuid;
// self
use crate::_prelude::*;

/// Error returned when an identifier cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The value is not a UUID in any accepted textual form.
	#[error("Provider identifier `{value}` is not a valid UUID.")]
	Malformed {
		/// Raw value that failed to parse.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: uuid::Error,
	},
}

/// Unique identifier for the tenant whose device locations are reported.
///
/// The identifier always renders in the canonical lowercase hyphenated form, whatever casing
/// the caller parsed it from.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(Uuid);
impl ProviderId {
	/// Wraps an already structured UUID.
	pub const fn new(uuid: Uuid) -> Self {
		Self(uuid)
	}

	/// Parses any textual UUID form accepted by [`Uuid::parse_str`], including mixed case.
	pub fn parse(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
		let view = value.as_ref();

		Uuid::parse_str(view)
			.map(Self)
			.map_err(|source| IdentifierError::Malformed { value: view.to_owned(), source })
	}

	/// Returns the inner UUID.
	pub const fn as_uuid(&self) -> &Uuid {
		&self.0
	}

	/// Returns the canonical lowercase hyphenated form.
	pub fn to_canonical(&self) -> String {
		self.0.hyphenated().to_string()
	}
}
impl Deref for ProviderId {
	type Target = Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<Uuid> for ProviderId {
	fn from(value: Uuid) -> Self {
		Self(value)
	}
}
impl From<ProviderId> for Uuid {
	fn from(value: ProviderId) -> Self {
		value.0
	}
}
impl From<ProviderId> for String {
	fn from(value: ProviderId) -> Self {
		value.to_canonical()
	}
}
impl TryFrom<String> for ProviderId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}
impl Debug for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Provider({})", self.0.hyphenated())
	}
}
impl Display for ProviderId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0.hyphenated(), f)
	}
}
impl FromStr for ProviderId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
