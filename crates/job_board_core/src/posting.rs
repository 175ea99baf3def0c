pub type PostingId = u64;

/// A single job listing. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub id: PostingId,
    pub role: String,
    pub description: String,
}

impl Posting {
    pub fn new(id: PostingId, role: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
            description: description.into(),
        }
    }
}

/// Where a loaded list of postings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingSource {
    Remote,
    Fallback,
}
