#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view is up; requests the initial load on first delivery only.
    Mounted,
    /// Engine finished loading, either from the remote source or the fallback.
    PostingsLoaded {
        postings: Vec<crate::Posting>,
        source: crate::PostingSource,
    },
    /// User edited the search box.
    QueryChanged(String),
    /// User picked the All or Saved toggle.
    ViewModeSelected(crate::ViewMode),
    /// User clicked Save on a row.
    SaveClicked { posting_id: crate::PostingId },
    /// User clicked Remove on a row.
    RemoveClicked { posting_id: crate::PostingId },
}
