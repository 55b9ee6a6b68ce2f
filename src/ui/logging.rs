//! Output verbosity for the interactive session

/// Log level for session output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress banner and panel chrome (prompts still print)
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output; also echoes the encoded feature row
    Verbose,
}

impl LogLevel {
    /// Whether output requiring `required` should be written at this level.
    #[must_use]
    pub fn allows(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && (self == required || required == LogLevel::Normal)
    }
}
