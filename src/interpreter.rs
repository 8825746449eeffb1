use crate::builtin::Rejected;
use crate::collection::Collection;
use crate::command::{CommandFactory, ExecutableCommand};
use crate::parser::{self, CommandError};
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate, see [`crate::builtin`].
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Line that ends an interactive session.
const EXIT_COMMAND: &str = "EXIT";

/// Interpreter of the artwork command language.
///
/// The interpreter owns a [`Collection`] and a list of [`CommandFactory`]
/// objects that are queried, in order, with the leading token of each line.
/// See [`Default`] for the commands included out of the box.
///
/// Example
/// ```
/// use artworks::Interpreter;
/// let mut it = Interpreter::default();
/// let mut out = Vec::new();
/// it.process_line("REM Мрамор", &mut out).unwrap();
/// assert!(it.collection().sculptures.is_empty());
/// ```
pub struct Interpreter {
    store: Collection,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create an interpreter over `store` with a custom set of command factories.
    pub fn new(store: Collection, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { store, commands }
    }

    /// Create an interpreter over `store` with the built-in commands.
    pub fn with_store(store: Collection) -> Self {
        use crate::builtin::*;
        Self::new(
            store,
            vec![
                Box::new(Factory::<Print>::default()),
                Box::new(Factory::<Add>::default()),
                Box::new(Factory::<Rem>::default()),
            ],
        )
    }

    pub fn collection(&self) -> &Collection {
        &self.store
    }

    pub fn into_collection(self) -> Collection {
        self.store
    }

    /// Apply a single line.
    ///
    /// Blank lines are ignored. Malformed or unknown lines print one
    /// diagnostic and leave the store unchanged. Only a failure to write to
    /// `stdout` is returned as an error.
    pub fn process_line(&mut self, line: &str, stdout: &mut dyn Write) -> Result<()> {
        let line = line.trim();
        let Some((name, args)) = parser::split_command(line) else {
            return Ok(());
        };
        debug!(line, "processing line");
        self.create(name, line, args).execute(stdout, &mut self.store)
    }

    fn create(&self, name: &str, line: &str, args: &str) -> Box<dyn ExecutableCommand> {
        self.commands
            .iter()
            .find_map(|factory| factory.try_create(name, line, args))
            .unwrap_or_else(|| Box::new(Rejected(CommandError::UnknownCommand(line.to_string()))))
    }

    /// Feed every line of `reader` to [`Interpreter::process_line`], in order.
    ///
    /// A read error (e.g. invalid UTF-8) is reported and ends the pass.
    pub fn run_reader<R: BufRead>(&mut self, reader: R, stdout: &mut dyn Write) -> Result<()> {
        for (number, line) in reader.lines().enumerate() {
            match line {
                Ok(line) => self.process_line(&line, stdout)?,
                Err(e) => {
                    warn!(line = number + 1, error = %e, "stopped reading input");
                    writeln!(stdout, "Ошибка чтения файла: {}", e)?;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Run every command of the file at `path`.
    ///
    /// A missing file prints `Файл не найден!` and is otherwise a no-op.
    pub fn run_file(&mut self, path: &Path, stdout: &mut dyn Write) -> Result<()> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "input file not found");
                writeln!(stdout, "Файл не найден!")?;
                return Ok(());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "can't open input file");
                writeln!(stdout, "Ошибка чтения файла: {}", e)?;
                return Ok(());
            }
        };
        info!(path = %path.display(), "processing input file");
        self.run_reader(BufReader::new(file), stdout)
    }

    /// Read commands interactively until `EXIT`, end of input or Ctrl-C.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if line.trim() == EXIT_COMMAND {
                        break;
                    }
                    self.process_line(&line, &mut io::stdout())?;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter over the seeded store with `PRINT`, `ADD` and `REM`.
    fn default() -> Self {
        Self::with_store(Collection::seeded())
    }
}
