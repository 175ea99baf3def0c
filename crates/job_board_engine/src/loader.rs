use board_logging::{board_info, board_warn};
use job_board_core::PostingSource;

use crate::{fallback_postings, LoadOutcome, PostingsFetcher};

/// Fetches postings once; any failure is logged and answered with the
/// compiled-in fallback list. Never retries.
pub async fn load_postings(fetcher: &dyn PostingsFetcher) -> LoadOutcome {
    match fetcher.fetch().await {
        Ok(postings) => {
            board_info!("Loaded {} postings from remote source", postings.len());
            LoadOutcome {
                postings,
                source: PostingSource::Remote,
            }
        }
        Err(err) => {
            board_warn!("Postings fetch failed, using fallback data: {}", err);
            LoadOutcome {
                postings: fallback_postings(),
                source: PostingSource::Fallback,
            }
        }
    }
}
