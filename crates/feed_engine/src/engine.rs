use std::sync::{mpsc, Arc};
use std::thread;

use feed_logging::{feed_error, feed_warn};

use crate::fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, PageNumber};

enum EngineCommand {
    Fetch { page: PageNumber, url: String },
}

/// Runs page fetches on a background tokio runtime.
///
/// Every fetch is its own task with no limit on how many run at once.
/// Completions arrive in the order they finish, not the order they were issued.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    feed_error!("Failed to start fetch runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a fetch. Fails only when the runtime thread is gone, in which
    /// case no completion will ever arrive for `page`.
    pub fn fetch(&self, page: PageNumber, url: impl Into<String>) -> Result<(), FetchError> {
        let command = EngineCommand::Fetch {
            page,
            url: url.into(),
        };
        self.cmd_tx.send(command).map_err(|_| {
            feed_warn!("Fetch for page {} dropped: engine runtime is not running", page);
            FetchError::new(FailureKind::EngineStopped, "fetch runtime is not running")
        })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { page, url } => {
            let result = fetcher.fetch_page(page, &url).await;
            let _ = event_tx.send(EngineEvent::PageFetched { page, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_reports_stopped_runtime() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx, event_rx };

        let err = engine
            .fetch(5, "https://listing.test/api/?page=5&results=20")
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::EngineStopped);
        assert!(engine.try_recv().is_none());
    }
}
