use crate::{PostingId, PostingSource, ViewMode};

pub const EMPTY_ALL: &str = "No jobs found.";
pub const EMPTY_SAVED: &str = "No saved jobs yet.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub view_mode: ViewMode,
    pub query: String,
    pub loading: bool,
    pub source: Option<PostingSource>,
    pub total_count: usize,
    pub saved_count: usize,
    pub rows: Vec<PostingRowView>,
    /// Set when `rows` is empty after loading finished.
    pub empty_message: Option<&'static str>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingRowView {
    pub id: PostingId,
    pub role: String,
    pub description: String,
    pub action: RowAction,
}

/// Per-row affordance: Save in the All view, Remove in the Saved view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Save { already_saved: bool },
    Remove,
}
