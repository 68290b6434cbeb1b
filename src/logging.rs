//! Process-wide logging setup.
//!
//! Core modules only emit through the `log` macros and never require this to
//! have run; [`init`] is a convenience for binaries and test harnesses that
//! want records on stdout.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger.
///
/// Records go to stdout with millisecond timestamps, module path, and
/// severity. The threshold defaults to `INFO`; set `RUST_LOG` to override
/// (e.g. `RUST_LOG=debug`).
///
/// The first call wins; subsequent calls are no-ops, so it is safe to call
/// from multiple entry points.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Stdout)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init(); // second call must not panic
        log::info!("logger initialized");
    }
}
