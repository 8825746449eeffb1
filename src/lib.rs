//! A small in-memory catalogue of paintings and sculptures.
//!
//! Records are added and removed through a line-oriented command language,
//! usually read from a text file:
//!
//! ```text
//! ADD Картина "Звёздная ночь" 1889 Ван Гог
//! ADD Скульптура "Давид" 1504 Мрамор
//! REM Мрамор
//! PRINT
//! ```
//!
//! The main entry point is [`Interpreter`], which applies lines to a
//! [`Collection`] using a set of pluggable command factories. Malformed lines
//! never fail the run: they are reported and skipped.

pub mod artwork;
mod builtin;
pub mod collection;
pub mod command;
pub mod config;
pub mod driver;
pub mod formatter;
mod interpreter;
pub mod parser;

pub use artwork::{Artwork, ArtworkKind, Painting, Sculpture};
pub use collection::Collection;
pub use config::Config;

/// Just a convenient re-export of the command interpreter.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
