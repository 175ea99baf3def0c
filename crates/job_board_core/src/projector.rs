use crate::{FavoritesSet, Posting};

/// Which base list feeds the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    All,
    Saved,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::All => ViewMode::Saved,
            ViewMode::Saved => ViewMode::All,
        }
    }
}

/// Selects the base list for `mode` and keeps postings whose role contains
/// `query`, ignoring case. Source order is preserved; an empty query keeps
/// everything.
pub fn project<'a>(
    postings: &'a [Posting],
    favorites: &'a FavoritesSet,
    mode: ViewMode,
    query: &str,
) -> Vec<&'a Posting> {
    let base = match mode {
        ViewMode::All => postings,
        ViewMode::Saved => favorites.as_slice(),
    };
    let needle = query.to_lowercase();
    base.iter()
        .filter(|posting| posting.role.to_lowercase().contains(&needle))
        .collect()
}
