//! Log wiring for the widget's lifecycle events.
//!
//! The widget emits `tracing` events under the `horizon_widget` target:
//! `debug` for container creation, mount, update and unmount, `trace` for
//! skipped refreshes and data joins, `warn` for prop validation failures and
//! containers that could not be discarded. Hosts that already run a
//! subscriber get these for free; others can call `init_default_tracing`.

/// Default filter when `RUST_LOG` is unset: widget lifecycle at `debug`,
/// everything else at `warn`.
pub const DEFAULT_LOG_FILTER: &str = "warn,horizon_widget=debug";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over `DEFAULT_LOG_FILTER`. Returns `false`
/// when the feature is disabled or the host already installed a global
/// subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
