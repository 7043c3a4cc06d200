use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_error, engine_info, engine_trace};
use tokio::sync::mpsc as async_mpsc;

use crate::runner::{MockScraper, RunnerSettings, Scraper};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    Scrape { url: String },
}

/// Runs scrapes on a single-threaded runtime in a background thread.
///
/// Commands go in through [`EngineHandle::submit`]; progress ticks and
/// outcomes come back through [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: async_mpsc::UnboundedSender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: RunnerSettings) -> Result<Self, EngineError> {
        let interval = settings.progress_interval;
        Self::with_scraper(Arc::new(MockScraper::new(settings)), interval)
    }

    pub fn with_scraper(
        scraper: Arc<dyn Scraper>,
        progress_interval: Duration,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, mut cmd_rx) = async_mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;

        thread::spawn(move || {
            runtime.block_on(async move {
                while let Some(command) = cmd_rx.recv().await {
                    tokio::spawn(handle_command(
                        scraper.clone(),
                        command,
                        event_tx.clone(),
                        progress_interval,
                    ));
                }
            });
            engine_info!("Engine command loop stopped");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, url: impl Into<String>) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Scrape { url: url.into() })
            .map_err(|_| EngineError::Stopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    scraper: Arc<dyn Scraper>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    progress_interval: Duration,
) {
    match command {
        EngineCommand::Scrape { url } => {
            let ticker = tokio::spawn(emit_progress_ticks(event_tx.clone(), progress_interval));
            let task = tokio::spawn(async move { scraper.scrape(&url).await });
            let event = match task.await {
                Ok(outcome) => EngineEvent::ScrapeCompleted(outcome),
                Err(err) => {
                    engine_error!("Scrape task failed: {}", err);
                    EngineEvent::ScrapeAborted {
                        reason: err.to_string(),
                    }
                }
            };
            ticker.abort();
            let _ = event_tx.send(event);
        }
    }
}

async fn emit_progress_ticks(event_tx: mpsc::Sender<EngineEvent>, period: Duration) {
    if period.is_zero() {
        return;
    }
    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately; progress starts one period in.
    interval.tick().await;
    loop {
        interval.tick().await;
        engine_trace!("Progress tick");
        if event_tx.send(EngineEvent::ProgressTick).is_err() {
            break;
        }
    }
}
