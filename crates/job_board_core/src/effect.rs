/// IO requested by `update`; executed by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch postings from the remote source, falling back to local data.
    LoadPostings,
}
