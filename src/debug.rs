//! Log bridge for the chat-emoji command-line tool.
//!
//! Routes `log::info!()` and friends to stderr so stdout stays clean for
//! rewritten text. Level precedence:
//! - `--log-level` CLI flag
//! - `RUST_LOG` environment variable (a bare level name such as `debug`)
//! - `log_level` from the config file
//!
//! Lines look like `[1760000000.123456] [WARN ] [chat_emoji::handler] message`.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use chat_emoji_config::LogLevel;

struct StderrLogger {
    out: Mutex<io::Stderr>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_str = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN ",
            log::Level::Info => "INFO ",
            log::Level::Debug => "DEBUG",
            log::Level::Trace => "TRACE",
        };
        let mut out = self.out.lock();
        // Logging must never take the tool down
        let _ = writeln!(
            out,
            "[{}] [{}] [{}] {}",
            get_timestamp(),
            level_str,
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Pick the effective level: CLI flag, then `RUST_LOG`, then config.
pub fn resolve_level(cli: Option<LogLevel>, config: LogLevel) -> LogLevel {
    let env = std::env::var("RUST_LOG").ok();
    resolve_level_from(cli, env.as_deref(), config)
}

/// Same as [`resolve_level`] with the `RUST_LOG` value passed in.
///
/// An env value that is not a plain level name (e.g. `chat_emoji=debug`) is
/// ignored.
pub fn resolve_level_from(cli: Option<LogLevel>, env: Option<&str>, config: LogLevel) -> LogLevel {
    cli.or_else(|| env.and_then(|value| value.parse().ok()))
        .unwrap_or(config)
}

/// Install the stderr logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(level: LogLevel) {
    let logger = LOGGER.get_or_init(|| StderrLogger {
        out: Mutex::new(io::stderr()),
    });
    // Already installed on a repeat call
    let _ = log::set_logger(logger);
    log::set_max_level(level.to_level_filter());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LogLevel::Trace), LogLevel::Off),
            LogLevel::Trace
        );
        assert_eq!(
            resolve_level_from(Some(LogLevel::Error), Some("debug"), LogLevel::Off),
            LogLevel::Error
        );
    }

    #[test]
    fn test_env_level_beats_config() {
        assert_eq!(
            resolve_level_from(None, Some("debug"), LogLevel::Off),
            LogLevel::Debug
        );
        assert_eq!(
            resolve_level_from(None, Some(" INFO "), LogLevel::Off),
            LogLevel::Info
        );
    }

    #[test]
    fn test_config_level_used_last() {
        assert_eq!(
            resolve_level_from(None, None, LogLevel::Warn),
            LogLevel::Warn
        );
        assert_eq!(
            resolve_level_from(None, Some("chat_emoji=debug"), LogLevel::Error),
            LogLevel::Error
        );
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = get_timestamp();
        let (secs, micros) = ts.split_once('.').unwrap();
        assert!(secs.parse::<u64>().is_ok());
        assert_eq!(micros.len(), 6);
    }
}
