use std::sync::Once;

use metrics::{Unit, describe_counter, describe_histogram};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};
use crate::revalidation::coordinator::{
    METRIC_REVALIDATION_FAILED_TOTAL, METRIC_REVALIDATION_PATHS_TOTAL, METRIC_REVALIDATION_RUN_MS,
};

use super::error::InfraError;

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_REVALIDATION_PATHS_TOTAL,
            Unit::Count,
            "Total number of paths submitted for cache invalidation."
        );
        describe_counter!(
            METRIC_REVALIDATION_FAILED_TOTAL,
            Unit::Count,
            "Total number of path or tag invalidations that failed."
        );
        describe_histogram!(
            METRIC_REVALIDATION_RUN_MS,
            Unit::Milliseconds,
            "Duration of one revalidation pass in milliseconds."
        );
    });
}
