// self
use crate::{_prelude::*, obs::ConfigKind};

/// Span opened around each conversion of a configuration into transport types.
#[derive(Clone, Debug)]
pub struct CheckSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CheckSpan {
	/// Opens a span for `stage` (the helper name) on a configuration of `kind`.
	pub fn new(kind: ConfigKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("location_config.check", kind = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span; it stays current until the guard is dropped.
	pub fn entered(self) -> CheckSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CheckSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CheckSpanGuard {}
		}
	}
}

/// RAII guard returned by [`CheckSpan::entered`].
pub struct CheckSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CheckSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CheckSpanGuard(..)")
	}
}

/// Logs, at debug level, that a configuration failed its own validity rule.
///
/// Only the URL is recorded; headers may carry credentials and are never logged.
pub fn trace_rejection(kind: ConfigKind, url: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(kind = kind.as_str(), url, "configuration rejected");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, url);
	}
}
