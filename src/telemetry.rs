//! Tracing setup and panic reporting for the server binary.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "library_api=info,tower_http=info";

/// Install the fmt subscriber; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// Route panics through tracing. A panicking request task is dropped by the
/// runtime and the server keeps accepting connections.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".into());
        tracing::error!(location = %location, panic = %payload, "unhandled panic");
    }));
}
