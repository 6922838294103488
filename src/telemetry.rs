//! Opt-in log output for hosts that do not run their own subscriber.
//!
//! Every event in this crate goes through `tracing`. Nothing is printed until
//! a subscriber exists, either the host's or the one installed here.

/// Installs a compact `fmt` subscriber for this crate's events.
///
/// `RUST_LOG` overrides the filter, which otherwise admits `graphviz_view` at
/// `info` and above. Gives `true` only on the call that actually installed the
/// subscriber: a build without the `telemetry` feature, or a process that
/// already has a global subscriber, gets `false`.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("graphviz_view=info"));

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
