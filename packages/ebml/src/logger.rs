//! Sink for the human-readable diagnostics emitted while fixing a file.

use std::fmt;

/// Prefix on every diagnostic message.
pub const PREFIX: &str = "[webm-duration]";

/// Where diagnostic messages go.
#[derive(Default)]
pub enum Logger<'a> {
    /// Drop every message
    Silent,

    /// Forward to the `log` facade at info level
    #[default]
    Default,

    /// Hand each message to a caller-supplied function
    Callback(Box<dyn FnMut(&str) + 'a>),
}

impl<'a> Logger<'a> {
    pub fn callback(f: impl FnMut(&str) + 'a) -> Self {
        Logger::Callback(Box::new(f))
    }

    pub fn log(&mut self, message: &str) {
        match self {
            Logger::Silent => {}
            Logger::Default => log::info!("{}", message),
            Logger::Callback(f) => f(message),
        }
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logger::Silent => write!(f, "Logger::Silent"),
            Logger::Default => write!(f, "Logger::Default"),
            Logger::Callback(_) => write!(f, "Logger::Callback(..)"),
        }
    }
}

/// Log `format!` arguments with the diagnostic prefix.
macro_rules! diag {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log(&format!("{} {}", $crate::logger::PREFIX, format_args!($($arg)*)))
    };
}

pub(crate) use diag;
