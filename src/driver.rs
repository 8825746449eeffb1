use crate::config::Config;
use crate::formatter;
use crate::interpreter::Interpreter;
use anyhow::Result;
use std::io::Write;

/// Removal shown at startup before the file is processed.
const PRELUDE_REMOVAL: &str = "REM Мрамор";

/// Header printed before the commands of the input file run.
pub const FILE_SECTION_HEADER: &str = "--- Работа с файлом ---";

/// Non-interactive part of a run: the optional prelude, then the input file.
///
/// Returns the interpreter so the caller can continue interactively.
pub fn run(config: &Config, stdout: &mut dyn Write) -> Result<Interpreter> {
    let mut interpreter = Interpreter::default();

    if config.prelude {
        formatter::write_all(stdout, interpreter.collection())?;
        interpreter.process_line(PRELUDE_REMOVAL, stdout)?;
        formatter::write_all(stdout, interpreter.collection())?;
    }

    writeln!(stdout)?;
    writeln!(stdout, "{FILE_SECTION_HEADER}")?;
    interpreter.run_file(&config.input, stdout)?;

    Ok(interpreter)
}
