use crate::{Posting, PostingId};

/// Postings the user has saved, unique by id, in the order they were saved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoritesSet {
    entries: Vec<Posting>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `posting` unless an entry with the same id is already present.
    /// Returns whether the set changed.
    pub fn save(&mut self, posting: Posting) -> bool {
        if self.contains(posting.id) {
            return false;
        }
        self.entries.push(posting);
        true
    }

    /// Removes the entry with `id`. Returns whether the set changed.
    pub fn remove(&mut self, id: PostingId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: PostingId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Posting] {
        &self.entries
    }
}
