use crate::artwork::{Artwork, ArtworkKind, Discriminated};
use crate::collection::Collection;
use crate::command::{CommandFactory, ExecutableCommand};
use crate::formatter;
use crate::interpreter::Factory;
use crate::parser::{self, CommandError};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Commands of the artwork language known at compile time.
///
/// Each one parses its own arguments and runs directly against the store.
pub(crate) trait BuiltinCommand: Sized {
    /// Leading token of the command, e.g. "ADD".
    fn name() -> &'static str;

    /// Build the command from the text following its name.
    fn parse(line: &str, args: &str) -> Result<Self, CommandError>;

    fn execute(self, stdout: &mut dyn Write, store: &mut Collection) -> Result<()>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, store: &mut Collection) -> Result<()> {
        T::execute(*self, stdout, store)
    }
}

/// A line that failed to parse. Executing it prints the diagnostic and
/// leaves the store untouched.
pub(crate) struct Rejected(pub CommandError);

impl ExecutableCommand for Rejected {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, _store: &mut Collection) -> Result<()> {
        debug!(error = ?self.0, "line skipped");
        writeln!(stdout, "{}", self.0)?;
        Ok(())
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, line: &str, args: &str) -> Option<Box<dyn ExecutableCommand>> {
        if name != T::name() {
            return None;
        }
        let cmd: Box<dyn ExecutableCommand> = match T::parse(line, args) {
            Ok(cmd) => Box::new(cmd),
            Err(e) => Box::new(Rejected(e)),
        };
        Some(cmd)
    }
}

/// Print both collections.
pub struct Print;

impl BuiltinCommand for Print {
    fn name() -> &'static str {
        "PRINT"
    }

    fn parse(_line: &str, _args: &str) -> Result<Self, CommandError> {
        Ok(Print)
    }

    fn execute(self, stdout: &mut dyn Write, store: &mut Collection) -> Result<()> {
        formatter::write_all(stdout, store)?;
        Ok(())
    }
}

/// Append one painting or sculpture.
pub struct Add {
    pub artwork: Artwork,
}

impl BuiltinCommand for Add {
    fn name() -> &'static str {
        "ADD"
    }

    fn parse(line: &str, args: &str) -> Result<Self, CommandError> {
        parser::parse_add(line, args).map(|artwork| Add { artwork })
    }

    fn execute(self, stdout: &mut dyn Write, store: &mut Collection) -> Result<()> {
        let label = match self.artwork.kind() {
            ArtworkKind::Painting => "Добавлена картина",
            ArtworkKind::Sculpture => "Добавлена скульптура",
        };
        debug!(
            kind = self.artwork.kind().token(),
            key = self.artwork.discriminator(),
            "adding artwork"
        );
        writeln!(stdout, "{}: {}", label, self.artwork)?;
        store.add(self.artwork);
        Ok(())
    }
}

/// Remove every painting by an artist and every sculpture of a material.
pub struct Rem {
    pub identifier: String,
}

impl BuiltinCommand for Rem {
    fn name() -> &'static str {
        "REM"
    }

    fn parse(line: &str, args: &str) -> Result<Self, CommandError> {
        parser::parse_remove(line, args).map(|identifier| Rem { identifier })
    }

    fn execute(self, stdout: &mut dyn Write, store: &mut Collection) -> Result<()> {
        let removed = store.remove_matching(&self.identifier);
        debug!(
            identifier = %self.identifier,
            paintings = removed.paintings,
            sculptures = removed.sculptures,
            total = removed.total(),
            "removed artworks"
        );
        writeln!(stdout, "Удаляем: {}", self.identifier)?;
        writeln!(stdout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::{Painting, Sculpture};

    fn run<T: BuiltinCommand>(cmd: T, store: &mut Collection) -> String {
        let mut out = Vec::new();
        cmd.execute(&mut out, store).unwrap();
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn test_add_reports_and_appends() {
        let mut store = Collection::seeded();
        let cmd = Add {
            artwork: Artwork::Sculpture(Sculpture::new("Давид", 1504, "Мрамор")),
        };

        let s = run(cmd, &mut store);

        assert_eq!(s, "Добавлена скульптура: \"Давид\", 1504, Мрамор\n");
        assert_eq!(store.sculptures.len(), 2);
        assert_eq!(store.sculptures[1].title, "Давид");
    }

    #[test]
    fn test_rem_reports_identifier_with_blank_line() {
        let mut store = Collection::seeded();
        let s = run(
            Rem {
                identifier: "Да Винчи".to_string(),
            },
            &mut store,
        );
        assert_eq!(s, "Удаляем: Да Винчи\n\n");
        assert!(store.paintings.is_empty());
        assert_eq!(store.sculptures.len(), 1);
    }

    #[test]
    fn test_print_leaves_store_unchanged() {
        let mut store = Collection::seeded();
        let s = run(Print, &mut store);
        assert!(s.contains("\"Мона Лиза\", 1503, Да Винчи"));
        assert_eq!(store, Collection::seeded());
    }

    #[test]
    fn test_factory_matches_only_its_name() {
        let factory = Factory::<Rem>::default();
        assert!(factory.try_create("ADD", "ADD x", "x").is_none());

        let mut store = Collection::new();
        store.add(Artwork::Painting(Painting::new("Подсолнухи", 1888, "Ван Гог")));

        let cmd = factory.try_create("REM", "REM Ван Гог", "Ван Гог").unwrap();
        let mut out = Vec::new();
        cmd.execute(&mut out, &mut store).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_factory_turns_parse_errors_into_diagnostics() {
        let factory = Factory::<Add>::default();
        let mut store = Collection::seeded();

        let cmd = factory.try_create("ADD", "ADD Картина", "Картина").unwrap();
        let mut out = Vec::new();
        cmd.execute(&mut out, &mut store).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Ошибка добавления: ADD Картина\n");
        assert_eq!(store, Collection::seeded());
    }
}
