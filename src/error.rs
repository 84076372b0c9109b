//! Error types raised when configurations are loaded or handed to a transport.
//!
//! Reading a configuration never fails; errors only surface at the edges where text is
//! parsed or converted into HTTP types.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Identifier could not be parsed.
	#[error(transparent)]
	Identifier(#[from] crate::auth::IdentifierError),
}

/// Configuration loading and conversion failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration reported itself unusable.
	#[error("Configuration for `{url}` is not valid.")]
	Invalid {
		/// URL of the rejected configuration, possibly empty.
		url: String,
	},
	/// Configuration URL cannot be parsed.
	#[error("Configuration URL `{url}` is invalid.")]
	InvalidUrl {
		/// Raw URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Header name is not a legal HTTP token.
	#[cfg(feature = "reqwest")]
	#[error("Header name `{name}` is invalid.")]
	InvalidHeaderName {
		/// Offending header name.
		name: String,
		/// Underlying conversion failure.
		#[source]
		source: reqwest::header::InvalidHeaderName,
	},
	/// Header value contains characters that cannot be sent.
	#[cfg(feature = "reqwest")]
	#[error("Value of header `{name}` is invalid.")]
	InvalidHeaderValue {
		/// Header whose value was rejected; the value itself is withheld.
		name: String,
		/// Underlying conversion failure.
		#[source]
		source: reqwest::header::InvalidHeaderValue,
	},
	/// Serialized configuration could not be decoded.
	#[error("Configuration document is malformed.")]
	Parse {
		/// Structured parsing failure including the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn messages_are_sentence_case() {
		let err = Error::from(ConfigError::Invalid { url: "https://example.com".into() });

		assert_eq!(err.to_string(), "Configuration for `https://example.com` is not valid.");

		let err = Error::from(
			crate::auth::ProviderId::parse("nope").expect_err("Identifier should not parse."),
		);

		assert_eq!(err.to_string(), "Provider identifier `nope` is not a valid UUID.");
	}

	#[test]
	fn url_errors_keep_source() {
		let source = Url::parse("not a url").expect_err("Fixture must fail to parse.");
		let err = ConfigError::InvalidUrl { url: "not a url".into(), source };

		assert!(StdError::source(&err).is_some());
	}
}
