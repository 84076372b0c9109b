//! Caller-supplied endpoint configuration.

// self
use crate::{
	_prelude::*,
	config::{self, Configuration, Headers},
	obs::ConfigKind,
};

/// Configuration pointing at an arbitrary endpoint, such as a self-hosted collector.
///
/// Uses the generic rule: valid whenever the URL is non-empty, with or without headers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfiguration {
	url: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	headers: Option<Headers>,
}
impl EndpointConfiguration {
	/// Creates a configuration for the provided URL, without headers.
	pub fn new(url: impl Into<String>) -> Self {
		Self { url: url.into(), headers: None }
	}

	/// Adds (or replaces) a header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.get_or_insert_with(Headers::new).insert(name.into(), value.into());

		self
	}
}
impl Configuration for EndpointConfiguration {
	fn url(&self) -> String {
		self.url.clone()
	}

	fn headers(&self) -> Option<Headers> {
		self.headers.clone()
	}

	fn valid(&self) -> bool {
		config::url_is_present(self)
	}

	fn kind(&self) -> ConfigKind {
		ConfigKind::Endpoint
	}
}
