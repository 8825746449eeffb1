//! Artwork records: paintings and sculptures.
//!
//! Both kinds share a title and a year; each adds one free-form field that
//! tells it apart from the other kind. That field is also the key used by
//! `REM` to remove records (see [`Discriminated`]).

use std::fmt;

/// Records that carry a discriminating field (artist or material).
pub trait Discriminated {
    /// The field compared against the `REM` identifier.
    fn discriminator(&self) -> &str;
}

/// A painting, identified for removal by its artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painting {
    pub title: String,
    pub year: i64,
    pub artist: String,
}

impl Painting {
    pub fn new(title: impl Into<String>, year: i64, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            artist: artist.into(),
        }
    }
}

/// A sculpture, identified for removal by its material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sculpture {
    pub title: String,
    pub year: i64,
    pub material: String,
}

impl Sculpture {
    pub fn new(title: impl Into<String>, year: i64, material: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            material: material.into(),
        }
    }
}

impl Discriminated for Painting {
    fn discriminator(&self) -> &str {
        &self.artist
    }
}

impl Discriminated for Sculpture {
    fn discriminator(&self) -> &str {
        &self.material
    }
}

/// Renders `"<title>", <year>, <discriminator>`.
fn write_record(f: &mut fmt::Formatter<'_>, title: &str, year: i64, extra: &str) -> fmt::Result {
    write!(f, "\"{}\", {}, {}", title, year, extra)
}

impl fmt::Display for Painting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, &self.title, self.year, &self.artist)
    }
}

impl fmt::Display for Sculpture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, &self.title, self.year, &self.material)
    }
}

/// Kind token accepted by `ADD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkKind {
    Painting,
    Sculpture,
}

impl ArtworkKind {
    /// Resolve the type token of an `ADD` line, e.g. `Картина`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Картина" => Some(ArtworkKind::Painting),
            "Скульптура" => Some(ArtworkKind::Sculpture),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ArtworkKind::Painting => "Картина",
            ArtworkKind::Sculpture => "Скульптура",
        }
    }
}

/// Either kind of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    Painting(Painting),
    Sculpture(Sculpture),
}

impl Artwork {
    /// Build a record of `kind`; `extra` becomes the artist or the material.
    pub fn build(kind: ArtworkKind, title: String, year: i64, extra: String) -> Self {
        match kind {
            ArtworkKind::Painting => Artwork::Painting(Painting::new(title, year, extra)),
            ArtworkKind::Sculpture => Artwork::Sculpture(Sculpture::new(title, year, extra)),
        }
    }

    pub fn kind(&self) -> ArtworkKind {
        match self {
            Artwork::Painting(_) => ArtworkKind::Painting,
            Artwork::Sculpture(_) => ArtworkKind::Sculpture,
        }
    }
}

impl Discriminated for Artwork {
    fn discriminator(&self) -> &str {
        match self {
            Artwork::Painting(p) => p.discriminator(),
            Artwork::Sculpture(s) => s.discriminator(),
        }
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artwork::Painting(p) => fmt::Display::fmt(p, f),
            Artwork::Sculpture(s) => fmt::Display::fmt(s, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painting_fields() {
        let painting = Painting::new("Звёздная ночь", 1889, "Ван Гог");
        assert_eq!(painting.title, "Звёздная ночь");
        assert_eq!(painting.year, 1889);
        assert_eq!(painting.artist, "Ван Гог");
        assert_eq!(painting.discriminator(), "Ван Гог");
    }

    #[test]
    fn test_sculpture_fields() {
        let sculpture = Sculpture::new("Давид", 1504, "Мрамор");
        assert_eq!(sculpture.title, "Давид");
        assert_eq!(sculpture.year, 1504);
        assert_eq!(sculpture.discriminator(), "Мрамор");
    }

    #[test]
    fn test_display_renders_title_year_and_discriminator() {
        let painting = Painting::new("Мона Лиза", 1503, "Да Винчи");
        assert_eq!(painting.to_string(), "\"Мона Лиза\", 1503, Да Винчи");

        // empty discriminator still keeps the trailing separator
        let sculpture = Sculpture::new("Торс", -300, "");
        assert_eq!(sculpture.to_string(), "\"Торс\", -300, ");
    }

    #[test]
    fn test_kind_tokens() {
        assert_eq!(ArtworkKind::from_token("Картина"), Some(ArtworkKind::Painting));
        assert_eq!(ArtworkKind::from_token("Скульптура"), Some(ArtworkKind::Sculpture));
        assert_eq!(ArtworkKind::from_token("Фреска"), None);
        assert_eq!(ArtworkKind::Sculpture.token(), "Скульптура");
    }

    #[test]
    fn test_build_dispatches_on_kind() {
        let art = Artwork::build(
            ArtworkKind::Sculpture,
            "Давид".to_string(),
            1504,
            "Мрамор".to_string(),
        );
        assert_eq!(art.kind(), ArtworkKind::Sculpture);
        assert_eq!(art, Artwork::Sculpture(Sculpture::new("Давид", 1504, "Мрамор")));
        assert_eq!(art.discriminator(), "Мрамор");
    }
}
