//! Parsing of single command lines.
//!
//! A line is split on single spaces: the first piece names the command, the
//! rest is handed to that command's parser. `ADD` data is parsed with the
//! quoted-title rule: the title sits between the first and the last `"`.

use crate::artwork::{Artwork, ArtworkKind};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// First quote, greedy body up to the last quote, then the tail.
static QUOTED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^[^"]*"(.*)"(.*)$"#).expect("quoted title pattern is valid")
});

/// A line that could not be applied. The `Display` text is the diagnostic
/// printed for the skipped line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `ADD` without both a type and a data part.
    #[error("Ошибка добавления: {0}")]
    MalformedAdd(String),
    /// `ADD` data without an opening and a closing quote.
    #[error("Ошибка данных (кавычки): {0}")]
    MissingQuotes(String),
    /// `ADD` data whose year is missing or not an integer.
    #[error("Ошибка данных: {0}")]
    InvalidData(String),
    #[error("Неизвестный тип: {0}")]
    UnknownType(String),
    /// `REM` without an identifier.
    #[error("Ошибка удаления: {0}")]
    MalformedRemove(String),
    #[error("Неизвестная команда: {0}")]
    UnknownCommand(String),
}

/// Split a trimmed line into its command token and the remaining text.
///
/// Returns `None` for blank lines.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(line.split_once(' ').unwrap_or((line, "")))
}

/// Parse the arguments of `ADD`: `<Type> "<title>" <year> [<rest>]`.
///
/// `line` is only used for the diagnostic when pieces are missing.
pub fn parse_add(line: &str, args: &str) -> Result<Artwork, CommandError> {
    let (type_token, data) = args
        .split_once(' ')
        .ok_or_else(|| CommandError::MalformedAdd(line.to_string()))?;

    let (title, tail) = split_quoted_title(data)
        .ok_or_else(|| CommandError::MissingQuotes(data.to_string()))?;

    let tail = tail.trim();
    let (year, rest) = tail.split_once(' ').unwrap_or((tail, ""));
    // Years are `i64` in decimal with an optional sign: digit separators
    // (`1_889`) and values outside `i64` are data errors.
    let year: i64 = year
        .parse()
        .map_err(|_| CommandError::InvalidData(data.to_string()))?;

    let kind = ArtworkKind::from_token(type_token)
        .ok_or_else(|| CommandError::UnknownType(type_token.to_string()))?;

    Ok(Artwork::build(kind, title.to_string(), year, rest.to_string()))
}

/// Parse the argument of `REM`: everything after the command token, trimmed.
pub fn parse_remove(line: &str, args: &str) -> Result<String, CommandError> {
    let identifier = args.trim();
    if identifier.is_empty() {
        return Err(CommandError::MalformedRemove(line.to_string()));
    }
    Ok(identifier.to_string())
}

/// Embedded quotes are not supported: `"a "b" c"` yields the title `a "b" c`.
fn split_quoted_title(data: &str) -> Option<(&str, &str)> {
    let caps = QUOTED_TITLE.captures(data)?;
    let title = caps.get(1)?.as_str();
    let tail = caps.get(2)?.as_str();
    Some((title, tail))
}
