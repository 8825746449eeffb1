//! Plain-text rendering of the collections.

use crate::artwork::{Painting, Sculpture};
use crate::collection::Collection;
use std::fmt::Display;
use std::io::{Result as IoResult, Write};

const INDENT: &str = "   ";

/// Header printed before both collections by `PRINT`.
pub const ALL_WORKS_HEADER: &str = "--- Все произведения ---";

fn write_section<T: Display>(
    out: &mut dyn Write,
    header: &str,
    placeholder: &str,
    records: &[T],
) -> IoResult<()> {
    if records.is_empty() {
        return writeln!(out, "{INDENT}{placeholder}");
    }
    writeln!(out, "{header}")?;
    for record in records {
        writeln!(out, "{INDENT}{record}")?;
    }
    Ok(())
}

pub fn write_paintings(out: &mut dyn Write, paintings: &[Painting]) -> IoResult<()> {
    write_section(out, "Картины:", "Нет картин", paintings)
}

pub fn write_sculptures(out: &mut dyn Write, sculptures: &[Sculpture]) -> IoResult<()> {
    write_section(out, "Скульптуры:", "Нет скульптур", sculptures)
}

/// Render both collections under the combined header, preceded by a blank line.
pub fn write_all(out: &mut dyn Write, store: &Collection) -> IoResult<()> {
    writeln!(out)?;
    writeln!(out, "{ALL_WORKS_HEADER}")?;
    write_paintings(out, &store.paintings)?;
    write_sculptures(out, &store.sculptures)
}
