//! Job board engine: postings fetch, local fallback, and background loading.
mod engine;
mod fallback;
mod fetch;
mod loader;
mod record;
mod types;

pub use engine::EngineHandle;
pub use fallback::{fallback_postings, FALLBACK_DESCRIPTION, FALLBACK_ROLES};
pub use fetch::{LoaderSettings, PostingsFetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use loader::load_postings;
pub use record::PostingRecord;
pub use types::{EngineEvent, FailureKind, FetchError, LoadOutcome};
