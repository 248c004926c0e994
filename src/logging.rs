//! Console logging
//!
//! Routes `log` records (including the core's `event=...` lines) to the
//! browser console.
//!
//! # Invariants
//! - The logger is installed at most once per page.
//! - Installing never panics; a second install only adjusts the level.

use log::{info, Level, LevelFilter, Log, Metadata, Record};
use shoplist_core::LogLevel;
use wasm_bindgen::JsValue;
use web_sys::console;

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug => console::debug_1(&line),
            Level::Trace => console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger at `info`, so seeding can be reported before
/// the configured level is known.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// Apply the configured level
pub fn set_level(level: LogLevel) {
    log::set_max_level(level.as_filter());
    info!(
        "event=logging_configured module=ui status=ok level={} version={}",
        level.as_filter(),
        env!("CARGO_PKG_VERSION")
    );
}
