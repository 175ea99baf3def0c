use job_board_core::{Posting, PostingId};
use serde::Deserialize;

/// One entry of the remote postings array. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostingRecord {
    pub id: PostingId,
    pub title: String,
    pub body: String,
}

impl PostingRecord {
    /// `title` becomes the role and `body` the description.
    pub fn into_posting(self) -> Posting {
        Posting {
            id: self.id,
            role: self.title,
            description: self.body,
        }
    }
}

pub(crate) fn normalize(records: Vec<PostingRecord>) -> Vec<Posting> {
    records.into_iter().map(PostingRecord::into_posting).collect()
}
