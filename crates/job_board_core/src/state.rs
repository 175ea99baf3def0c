use crate::view_model::{AppViewModel, PostingRowView, RowAction, EMPTY_ALL, EMPTY_SAVED};
use crate::{project, FavoritesSet, Posting, PostingId, PostingSource, ViewMode};

/// Progress of the one-shot postings load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded(PostingSource),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    postings: Vec<Posting>,
    load: LoadState,
    favorites: FavoritesSet,
    view_mode: ViewMode,
    query: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Projects the current state into what the front-end renders.
    pub fn view(&self) -> AppViewModel {
        let rows: Vec<PostingRowView> = project(
            &self.postings,
            &self.favorites,
            self.view_mode,
            &self.query,
        )
        .into_iter()
        .map(|posting| PostingRowView {
            id: posting.id,
            role: posting.role.clone(),
            description: posting.description.clone(),
            action: match self.view_mode {
                ViewMode::All => RowAction::Save {
                    already_saved: self.favorites.contains(posting.id),
                },
                ViewMode::Saved => RowAction::Remove,
            },
        })
        .collect();

        let loading = !matches!(self.load, LoadState::Loaded(_));
        let empty_message = if rows.is_empty() && !loading {
            Some(match self.view_mode {
                ViewMode::All => EMPTY_ALL,
                ViewMode::Saved => EMPTY_SAVED,
            })
        } else {
            None
        };

        AppViewModel {
            view_mode: self.view_mode,
            query: self.query.clone(),
            loading,
            source: match self.load {
                LoadState::Loaded(source) => Some(source),
                LoadState::NotStarted | LoadState::Loading => None,
            },
            total_count: self.postings.len(),
            saved_count: self.favorites.len(),
            rows,
            empty_message,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Moves from `NotStarted` to `Loading`. Returns false if a load was
    /// already requested.
    pub(crate) fn begin_load(&mut self) -> bool {
        if self.load != LoadState::NotStarted {
            return false;
        }
        self.load = LoadState::Loading;
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_loaded(&mut self, postings: Vec<Posting>, source: PostingSource) {
        self.postings = postings;
        self.load = LoadState::Loaded(source);
        self.mark_dirty();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn save_posting(&mut self, id: PostingId) {
        let Some(posting) = self.postings.iter().find(|posting| posting.id == id) else {
            return;
        };
        if self.favorites.save(posting.clone()) {
            self.mark_dirty();
        }
    }

    pub(crate) fn remove_posting(&mut self, id: PostingId) {
        if self.favorites.remove(id) {
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
