//! Tracing subscriber setup
//!
//! Logging starts before the config file is read so that settings messages
//! are visible. The filter is installed behind a reload handle and swapped
//! for the config's `log_filter` once it is known, unless `RUST_LOG` is set.

use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Handle for replacing the active log filter
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Install the global subscriber
///
/// `verbose` raises the default level to `debug`.
pub fn init_logging(verbose: bool) -> LogHandle {
    let default_level = if verbose { "debug" } else { "info" };
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(default_level), false),
    };

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    LogHandle { handle, from_env }
}

impl LogHandle {
    /// Switch to the config's filter, keeping `RUST_LOG` and `--verbose` in charge
    pub fn apply_config_filter(&self, directive: &str, verbose: bool) {
        if self.from_env || verbose {
            return;
        }
        match EnvFilter::try_new(directive) {
            Ok(filter) => {
                if let Err(e) = self.handle.reload(filter) {
                    warn!("[LOGGING] Failed to apply log filter {:?}: {}", directive, e);
                    return;
                }
                debug!("[LOGGING] Log filter set to {:?}", directive);
            }
            Err(e) => {
                warn!("[LOGGING] Ignoring invalid log filter {:?}: {}", directive, e);
            }
        }
    }
}
