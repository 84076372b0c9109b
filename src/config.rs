//! Endpoint configuration capability and its concrete variants.
//!
//! A [`Configuration`] bundles the destination URL, the request headers, and a validity flag
//! consumed by whichever HTTP transport uploads location events. Every implementation states
//! its validity rule inside its own [`Configuration::valid`] body; the generic rule lives in
//! [`url_is_present`] so implementations opt into it explicitly.

pub mod endpoint;
pub mod provider;

pub use endpoint::*;
pub use provider::*;

// self
use crate::{_prelude::*, obs::ConfigKind};

/// Request headers attached to every upload.
pub type Headers = BTreeMap<String, String>;

/// Read-only view of a reporting endpoint.
pub trait Configuration
where
	Self: Send + Sync,
{
	/// Target endpoint. Non-empty whenever the configuration is valid.
	fn url(&self) -> String;

	/// Headers to attach to requests, if any.
	fn headers(&self) -> Option<Headers>;

	/// Whether the configuration can be used for network calls.
	fn valid(&self) -> bool;

	/// Stable label used by observability hooks.
	fn kind(&self) -> ConfigKind {
		ConfigKind::Custom
	}
}
impl<C> Configuration for Arc<C>
where
	C: ?Sized + Configuration,
{
	fn url(&self) -> String {
		(**self).url()
	}

	fn headers(&self) -> Option<Headers> {
		(**self).headers()
	}

	fn valid(&self) -> bool {
		(**self).valid()
	}

	fn kind(&self) -> ConfigKind {
		(**self).kind()
	}
}

/// Generic validity rule: a configuration is usable when its URL is non-empty.
pub fn url_is_present<C>(config: &C) -> bool
where
	C: ?Sized + Configuration,
{
	!config.url().is_empty()
}
