//! Request logging settings shared with the middleware.

use std::{sync::OnceLock, time::Duration};

use crate::config::observability::ObservabilityConfig;

const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

static SLOW_REQUEST_THRESHOLD: OnceLock<Duration> = OnceLock::new();

/// Record the configured threshold. Later calls keep the first value.
pub(super) fn apply(config: &ObservabilityConfig) {
    _ = SLOW_REQUEST_THRESHOLD.set(config.slow_request_threshold());
}

pub(super) fn slow_request_threshold() -> Duration {
    SLOW_REQUEST_THRESHOLD
        .get()
        .copied()
        .unwrap_or(DEFAULT_SLOW_REQUEST_THRESHOLD)
}
