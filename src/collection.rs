use crate::artwork::{Artwork, Discriminated, Painting, Sculpture};

/// In-memory store holding both artwork collections.
///
/// The store contains:
/// - `paintings`: every painting, in insertion (and display) order.
/// - `sculptures`: every sculpture, in insertion (and display) order.
///
/// Duplicates are allowed. Records are never edited in place; `REM` keeps
/// the ones that don't match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub paintings: Vec<Painting>,
    pub sculptures: Vec<Sculpture>,
}

/// How many records a removal dropped from each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removed {
    pub paintings: usize,
    pub sculptures: usize,
}

impl Removed {
    pub fn total(&self) -> usize {
        self.paintings + self.sculptures
    }
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store every run starts with: one painting and one sculpture.
    pub fn seeded() -> Self {
        Self {
            paintings: vec![Painting::new("Мона Лиза", 1503, "Да Винчи")],
            sculptures: vec![Sculpture::new("Дискобол", 450, "Мрамор")],
        }
    }

    /// Append a record to the end of its collection.
    pub fn add(&mut self, artwork: Artwork) {
        match artwork {
            Artwork::Painting(p) => self.paintings.push(p),
            Artwork::Sculpture(s) => self.sculptures.push(s),
        }
    }

    /// Drop every painting whose artist and every sculpture whose material
    /// equals `identifier` exactly.
    pub fn remove_matching(&mut self, identifier: &str) -> Removed {
        Removed {
            paintings: retain_unmatched(&mut self.paintings, identifier),
            sculptures: retain_unmatched(&mut self.sculptures, identifier),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paintings.is_empty() && self.sculptures.is_empty()
    }
}

fn retain_unmatched<T: Discriminated>(records: &mut Vec<T>, identifier: &str) -> usize {
    let before = records.len();
    records.retain(|r| r.discriminator() != identifier);
    before - records.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_contents() {
        let store = Collection::seeded();
        assert_eq!(store.paintings, vec![Painting::new("Мона Лиза", 1503, "Да Винчи")]);
        assert_eq!(store.sculptures, vec![Sculpture::new("Дискобол", 450, "Мрамор")]);
    }

    #[test]
    fn test_remove_material_keeps_paintings() {
        let mut store = Collection::seeded();

        let removed = store.remove_matching("Мрамор");

        assert_eq!(removed, Removed { paintings: 0, sculptures: 1 });
        assert!(store.sculptures.is_empty());
        assert_eq!(store.paintings.len(), 1);
    }

    #[test]
    fn test_remove_hits_both_collections_and_keeps_order() {
        let mut store = Collection::new();
        store.add(Artwork::Painting(Painting::new("A", 1, "Глина")));
        store.add(Artwork::Painting(Painting::new("B", 2, "Моне")));
        store.add(Artwork::Painting(Painting::new("C", 3, "Глина")));
        store.add(Artwork::Painting(Painting::new("D", 4, "Дега")));
        store.add(Artwork::Sculpture(Sculpture::new("E", 5, "Глина")));
        store.add(Artwork::Sculpture(Sculpture::new("F", 6, "Бронза")));

        let removed = store.remove_matching("Глина");
        assert_eq!(removed.total(), 3);

        let titles: Vec<&str> = store.paintings.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "D"]);
        assert_eq!(store.sculptures, vec![Sculpture::new("F", 6, "Бронза")]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = Collection::seeded();
        store.remove_matching("Да Винчи");
        let snapshot = store.clone();

        let removed = store.remove_matching("Да Винчи");

        assert_eq!(removed.total(), 0);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_remove_requires_exact_match() {
        let mut store = Collection::seeded();
        store.remove_matching("мрамор");
        store.remove_matching("Да");
        assert_eq!(store, Collection::seeded());
    }

    #[test]
    fn test_empty_discriminator_matches_empty_identifier_only() {
        let mut store = Collection::new();
        store.add(Artwork::Painting(Painting::new("Без автора", 1900, "")));
        assert_eq!(store.remove_matching("Кто-то").total(), 0);
        assert_eq!(store.remove_matching("").paintings, 1);
        assert!(store.is_empty());
    }
}
