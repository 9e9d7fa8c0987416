//! Tracing subscriber setup.
//!
//! Library code only emits events; whichever binary embeds the engine
//! calls [`init_tracing`] once at startup to install the subscriber.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, falling back to `info`
/// overall with `debug` for the given service target. Set
/// `LOG_FORMAT=json` for newline-delimited JSON output. Repeated calls
/// are harmless; only the first installs anything.
pub fn init_tracing(service_name: &str) {
    let fallback = format!("info,{}=debug", service_name);

    INIT.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let json_output = std::env::var("LOG_FORMAT")
            .map(|value| value.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let registry = tracing_subscriber::registry().with(env_filter);
        let installed = if json_output {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer().compact()).try_init()
        };

        // A subscriber installed elsewhere (a test harness, usually) wins.
        installed.ok();
    });
}
