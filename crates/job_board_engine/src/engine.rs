use std::sync::{mpsc, Arc};
use std::thread;

use board_logging::board_error;
use job_board_core::PostingSource;

use crate::fetch::{LoaderSettings, PostingsFetcher, ReqwestFetcher};
use crate::{fallback_postings, load_postings, EngineEvent, LoadOutcome};

enum EngineCommand {
    Load,
}

/// Runs loads on a background thread and hands results back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: LoaderSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PostingsFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => Some(runtime),
                Err(err) => {
                    board_error!("Failed to start tokio runtime: {}", err);
                    None
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Load => {
                        let outcome = match &runtime {
                            Some(runtime) => runtime.block_on(load_postings(fetcher.as_ref())),
                            None => LoadOutcome {
                                postings: fallback_postings(),
                                source: PostingSource::Fallback,
                            },
                        };
                        let _ = event_tx.send(EngineEvent::PostingsLoaded(outcome));
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Schedules a load. Callers decide how often this happens.
    pub fn load(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Load);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}
