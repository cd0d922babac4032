//! 把 `log` 门面转发到浏览器控制台

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => leptos::logging::error!("{}", record.args()),
            Level::Warn => leptos::logging::warn!("{}", record.args()),
            _ => leptos::logging::log!("{}", record.args()),
        }
    }

    fn flush(&self) {}
}

/// 安装控制台日志；重复调用无副作用
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
