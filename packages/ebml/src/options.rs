use crate::logger::Logger;

/// Options for [`crate::fix_bytes`].
#[derive(Debug, Default)]
pub struct FixOptions<'a> {
    /// Receives diagnostics about what was (or was not) fixed
    pub logger: Logger<'a>,
}

impl<'a> FixOptions<'a> {
    /// Options that discard all diagnostics.
    pub fn silent() -> Self {
        Self {
            logger: Logger::Silent,
        }
    }

    /// Options that hand each diagnostic to `f`.
    pub fn with_logger(f: impl FnMut(&str) + 'a) -> Self {
        Self {
            logger: Logger::callback(f),
        }
    }
}
