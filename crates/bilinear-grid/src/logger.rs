//! Stderr backend for the `log` facade used by this crate.
//!
//! Each line carries the time since installation, the level and the record
//! target, e.g. `[  0.012s TRACE bilinear_grid::cell] ...`, so cell
//! construction and sampler lines can be told apart.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used by [`init_tracing`] when `RUST_LOG` is unset.
#[cfg(feature = "tracing")]
const DEFAULT_TRACING_FILTER: &str = "bilinear_grid=debug,info";

struct StderrLogger {
    started: OnceLock<Instant>,
}

static LOGGER: StderrLogger = StderrLogger {
    started: OnceLock::new(),
};

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.get_or_init(Instant::now).elapsed();
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{:7.3}s {:>5} {}] {}",
            elapsed.as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn is_installed() -> bool {
    std::ptr::addr_eq(log::logger(), &LOGGER)
}

/// Install the stderr logger with `level` as the global filter.
///
/// Calling it again once the logger is in place is a no-op and keeps the
/// first level. Fails for as long as some other logger is installed.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if is_installed() {
        return Ok(());
    }
    log::set_logger(&LOGGER)?;
    LOGGER.started.get_or_init(Instant::now);
    log::set_max_level(level);
    Ok(())
}

/// Install a global `tracing` subscriber that reports sampler spans when they
/// close. The filter comes from `RUST_LOG`, falling back to debug output for
/// this crate only.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);
    if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    }
}
