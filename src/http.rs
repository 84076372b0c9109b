//! Conversions from a [`Configuration`] into transport types.
//!
//! Sending requests, retrying, and batching location events stay with the caller's client.
//! The helpers here only translate a configuration into the URL, headers, and request builder
//! a reqwest client needs.

// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	RequestBuilder,
	header::{HeaderMap, HeaderName, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	config::Configuration,
	error::ConfigError,
	obs::{self, CheckOutcome, CheckSpan},
};

/// Parses the configuration URL.
pub fn endpoint_url<C>(config: &C) -> Result<Url, ConfigError>
where
	C: ?Sized + Configuration,
{
	let _guard = CheckSpan::new(config.kind(), "endpoint_url").entered();
	let raw = config.url();

	Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source })
}

/// Runs the configuration's own validity rule and records the outcome.
///
/// Returns [`ConfigError::Invalid`] when the configuration must not be used.
pub fn ensure_valid<C>(config: &C) -> Result<(), ConfigError>
where
	C: ?Sized + Configuration,
{
	let kind = config.kind();
	let _guard = CheckSpan::new(kind, "ensure_valid").entered();
	let valid = config.valid();

	obs::record_check(kind, CheckOutcome::from(valid));

	if valid {
		Ok(())
	} else {
		let url = config.url();

		obs::trace_rejection(kind, &url);

		Err(ConfigError::Invalid { url })
	}
}

/// Converts the configuration headers into a reqwest [`HeaderMap`].
///
/// Absent headers yield an empty map.
#[cfg(feature = "reqwest")]
pub fn header_map<C>(config: &C) -> Result<HeaderMap, ConfigError>
where
	C: ?Sized + Configuration,
{
	let _guard = CheckSpan::new(config.kind(), "header_map").entered();
	let mut map = HeaderMap::new();

	for (name, value) in config.headers().unwrap_or_default() {
		let header_name = HeaderName::try_from(name.as_str())
			.map_err(|source| ConfigError::InvalidHeaderName { name: name.clone(), source })?;
		let mut header_value = HeaderValue::try_from(value.as_str())
			.map_err(|source| ConfigError::InvalidHeaderValue { name: name.clone(), source })?;

		if header_name == reqwest::header::AUTHORIZATION {
			header_value.set_sensitive(true);
		}

		map.insert(header_name, header_value);
	}

	Ok(map)
}

/// Prepares a `POST` to the configured endpoint with its headers attached.
///
/// Invalid configurations are rejected before any URL or header conversion happens. The
/// request is returned unsent.
#[cfg(feature = "reqwest")]
pub fn prepare_request<C>(client: &ReqwestClient, config: &C) -> Result<RequestBuilder>
where
	C: ?Sized + Configuration,
{
	ensure_valid(config)?;

	let url = endpoint_url(config)?;
	let headers = header_map(config)?;

	Ok(client.post(url).headers(headers))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::ProviderId,
		config::{EndpointConfiguration, ProviderConfiguration},
	};

	fn provider(token: &str) -> ProviderConfiguration {
		ProviderConfiguration::new(
			ProviderId::parse("123e4567-e89b-12d3-a456-426614174000")
				.expect("Fixture identifier should parse."),
			token,
		)
	}

	#[test]
	fn endpoint_url_parses_provider_url() {
		let url = endpoint_url(&provider("abc123")).expect("Provider URL should parse.");

		assert_eq!(url.host_str(), Some("api.safegraph.com"));
		assert_eq!(url.path(), "/v1/provider/123e4567-e89b-12d3-a456-426614174000/devicelocation");
	}

	#[test]
	fn endpoint_url_rejects_garbage() {
		let err = endpoint_url(&EndpointConfiguration::new("not a url"))
			.expect_err("Relative garbage must not parse.");

		assert!(matches!(err, ConfigError::InvalidUrl { ref url, .. } if url == "not a url"));
	}

	#[test]
	fn ensure_valid_uses_each_rule() {
		assert!(ensure_valid(&provider("abc123")).is_ok());
		assert!(matches!(ensure_valid(&provider("")), Err(ConfigError::Invalid { .. })));
		assert!(ensure_valid(&EndpointConfiguration::new("https://collector.example.com")).is_ok());
		assert!(matches!(
			ensure_valid(&EndpointConfiguration::new("")),
			Err(ConfigError::Invalid { ref url }) if url.is_empty()
		));
	}

	#[cfg(feature = "metrics")]
	#[test]
	fn ensure_valid_counts_every_check() {
		// crates.io
		use metrics_util::debugging::{DebugValue, DebuggingRecorder};

		let recorder = DebuggingRecorder::new();
		let snapshotter = recorder.snapshotter();

		metrics::with_local_recorder(&recorder, || {
			let _ = ensure_valid(&provider("abc123"));
			let _ = ensure_valid(&provider(""));
			let _ = ensure_valid(&provider(""));
			let _ = ensure_valid(&EndpointConfiguration::new("https://collector.example.com"));
		});

		let mut counts = BTreeMap::new();

		for (key, _, _, value) in snapshotter.snapshot().into_vec() {
			assert_eq!(key.key().name(), "location_config_check_total");

			let labels = key
				.key()
				.labels()
				.map(|label| (label.key().to_owned(), label.value().to_owned()))
				.collect::<BTreeMap<_, _>>();
			let count = match value {
				DebugValue::Counter(count) => count,
				other => panic!("Unexpected metric value: {other:?}."),
			};

			counts.insert((labels["kind"].clone(), labels["outcome"].clone()), count);
		}

		assert_eq!(
			counts,
			BTreeMap::from([
				(("endpoint".to_owned(), "valid".to_owned()), 1),
				(("provider".to_owned(), "invalid".to_owned()), 2),
				(("provider".to_owned(), "valid".to_owned()), 1),
			])
		);
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn header_map_marks_authorization_sensitive() {
		let map = header_map(&provider("abc123")).expect("Header conversion should succeed.");
		let value = map.get(reqwest::header::AUTHORIZATION).expect("Authorization should be set.");

		assert_eq!(value, "Bearer abc123");
		assert!(value.is_sensitive());
		assert!(header_map(&provider("")).expect("Empty token yields no headers.").is_empty());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn header_map_rejects_control_characters() {
		let err = header_map(&provider("abc\n123")).expect_err("Newlines cannot be sent.");

		assert!(
			matches!(err, ConfigError::InvalidHeaderValue { ref name, .. } if name == "Authorization")
		);

		let err = header_map(&EndpointConfiguration::new("https://x.test").with_header("bad name", "v"))
			.expect_err("Header names cannot contain spaces.");

		assert!(matches!(err, ConfigError::InvalidHeaderName { .. }));
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn prepare_request_builds_unsent_post() {
		let client = ReqwestClient::new();
		let request = prepare_request(&client, &provider("abc123"))
			.expect("Valid configuration should prepare.")
			.build()
			.expect("Prepared request should build.");

		assert_eq!(request.method(), &reqwest::Method::POST);
		assert_eq!(
			request.url().as_str(),
			"https://api.safegraph.com/v1/provider/123e4567-e89b-12d3-a456-426614174000/devicelocation"
		);
		assert_eq!(
			request.headers().get(reqwest::header::AUTHORIZATION).map(|v| v.as_bytes()),
			Some(&b"Bearer abc123"[..])
		);
		assert!(matches!(
			prepare_request(&client, &provider("")),
			Err(Error::Config(ConfigError::Invalid { .. }))
		));
	}
}
