use crate::collection::Collection;
use anyhow::Result;
use std::io::Write;

/// Object-safe trait for any parsed line that can be applied to the store.
///
/// This is implemented by built-ins via a blanket impl and by rejected lines,
/// whose execution only reports the diagnostic.
pub trait ExecutableCommand {
    /// Apply the command, writing status or diagnostic lines to `stdout`.
    ///
    /// Errors are reserved for failures of `stdout` itself; a malformed line is
    /// never an error at this level.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, store: &mut Collection) -> Result<()>;
}

/// Factory that tries to create a command from a line.
///
/// Returns `None` when the factory doesn't recognize `name`, the first token of
/// the line. `args` is the text after that token and `line` is the whole
/// trimmed line, kept for diagnostics.
pub trait CommandFactory {
    fn try_create(&self, name: &str, line: &str, args: &str) -> Option<Box<dyn ExecutableCommand>>;
}
