use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    fn format_line(&self, level: &str, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp, level, prefix, file_name, line, message
            ),
            None => format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line("INFO", file, line, message));
    }

    pub fn debug(&self, file: &str, line: u32, message: &str) {
        if self.verbose {
            println!("{}", self.format_line("DEBUG", file, line, message));
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first. {}", message);
    }
}

pub fn debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(file, line, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::debug(file!(), line!(), &format!($($arg)*))
        }
    };
}
