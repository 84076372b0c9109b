//! Hooks that report what happens when a configuration is checked or converted.
//!
//! Nothing here is emitted unless the matching crate feature is on:
//!
//! - `tracing`: every conversion in [`crate::http`] runs inside a `location_config.check` span
//!   carrying `kind` and `stage`; rejected configurations also log a debug event.
//! - `metrics`: each validity check bumps `location_config_check_total{kind, outcome}`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Which configuration implementation produced an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigKind {
	/// Bearer-authenticated provider endpoint.
	Provider,
	/// Caller-supplied endpoint.
	Endpoint,
	/// Any implementation living outside this crate.
	Custom,
}
impl ConfigKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigKind::Provider => "provider",
			ConfigKind::Endpoint => "endpoint",
			ConfigKind::Custom => "custom",
		}
	}
}
impl Display for ConfigKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Result of asking a configuration whether it may be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckOutcome {
	/// [`Configuration::valid`](crate::config::Configuration::valid) returned `true`.
	Valid,
	/// [`Configuration::valid`](crate::config::Configuration::valid) returned `false`.
	Invalid,
}
impl CheckOutcome {
	/// Label written to the `outcome` metric dimension.
	pub const fn as_str(self) -> &'static str {
		match self {
			CheckOutcome::Valid => "valid",
			CheckOutcome::Invalid => "invalid",
		}
	}
}
impl From<bool> for CheckOutcome {
	fn from(valid: bool) -> Self {
		if valid { CheckOutcome::Valid } else { CheckOutcome::Invalid }
	}
}
impl Display for CheckOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
