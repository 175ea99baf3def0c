use board_logging::{board_debug, board_info};
use job_board_core::{Effect, Msg};
use job_board_engine::{EngineEvent, EngineHandle, LoaderSettings};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: LoaderSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPostings => {
                    board_info!("LoadPostings requested");
                    self.engine.load();
                }
            }
        }
    }

    /// Drains finished engine work into messages for `update`.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PostingsLoaded(outcome) => {
            board_debug!(
                "PostingsLoaded count={} source={:?}",
                outcome.postings.len(),
                outcome.source
            );
            Msg::PostingsLoaded {
                postings: outcome.postings,
                source: outcome.source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_board_core::{Posting, PostingSource};
    use job_board_engine::LoadOutcome;

    #[test]
    fn loaded_event_becomes_loaded_msg() {
        let postings = vec![Posting::new(1, "QA Engineer", "text")];
        let msg = map_event(EngineEvent::PostingsLoaded(LoadOutcome {
            postings: postings.clone(),
            source: PostingSource::Remote,
        }));
        assert_eq!(
            msg,
            Msg::PostingsLoaded {
                postings,
                source: PostingSource::Remote,
            }
        );
    }
}
