//! Bearer-authenticated provider configuration.

// self
use crate::{
	_prelude::*,
	auth::{BearerToken, ProviderId},
	config::{Configuration, Headers},
	error::ConfigError,
	obs::ConfigKind,
};

/// Base URL of the location ingestion API.
pub const PROVIDER_BASE_URL: &str = "https://api.safegraph.com/v1";
/// Header carrying the bearer credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

const BEARER_PREFIX: &str = "Bearer ";

/// Configuration addressing the device-location endpoint of a single provider tenant.
///
/// Both inputs are fixed at construction; the URL and headers are derived from them on every
/// call. The configuration is valid only when a non-empty token is present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
	identifier: ProviderId,
	token: BearerToken,
}
impl ProviderConfiguration {
	/// Creates a configuration without validating the token.
	///
	/// Accepts either a [`ProviderId`] or a bare [`Uuid`](uuid::Uuid).
	pub fn new(identifier: impl Into<ProviderId>, token: impl Into<BearerToken>) -> Self {
		Self { identifier: identifier.into(), token: token.into() }
	}

	/// Creates a configuration from a textual identifier, in any casing [`ProviderId::parse`]
	/// accepts.
	pub fn parse(identifier: impl AsRef<str>, token: impl Into<BearerToken>) -> Result<Self> {
		Ok(Self::new(ProviderId::parse(identifier)?, token))
	}

	/// Loads a configuration from `{"identifier": "<uuid>", "token": "<string>"}`.
	pub fn from_json_str(payload: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(payload);
		let config = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::Parse { source })?;

		Ok(config)
	}

	/// Tenant identifier.
	pub fn identifier(&self) -> &ProviderId {
		&self.identifier
	}

	/// Bearer credential.
	pub fn token(&self) -> &BearerToken {
		&self.token
	}
}
impl Configuration for ProviderConfiguration {
	fn url(&self) -> String {
		format!("{PROVIDER_BASE_URL}/provider/{}/devicelocation", self.identifier.to_canonical())
	}

	fn headers(&self) -> Option<Headers> {
		if self.token.is_empty() {
			return None;
		}

		Some(Headers::from([(
			AUTHORIZATION_HEADER.to_owned(),
			format!("{BEARER_PREFIX}{}", self.token.expose()),
		)]))
	}

	fn valid(&self) -> bool {
		self.headers().is_some()
	}

	fn kind(&self) -> ConfigKind {
		ConfigKind::Provider
	}
}
