// self
use crate::obs::{CheckOutcome, ConfigKind};

/// Counts one validity check under `location_config_check_total`, labeled by `kind` and `outcome`.
///
/// Goes to whichever recorder is current (global or thread-local); a no-op without `metrics`.
pub fn record_check(kind: ConfigKind, outcome: CheckOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"location_config_check_total",
			"kind" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
