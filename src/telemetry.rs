//! Telemetry helpers for dashboards embedding `solar-chart`.
//!
//! The chart only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` covers the common case of a compact
//! stderr logger filtered through `RUST_LOG`.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when the subscriber was installed, `false` when the feature is
/// disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
