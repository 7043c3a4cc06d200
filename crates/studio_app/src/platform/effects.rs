use std::path::{Path, PathBuf};
use std::sync::mpsc;

use chrono::{NaiveDate, Utc};
use engine_logging::{engine_error, engine_info, engine_warn};
use studio_core::{Effect, ExportFormat, Msg, ScrapedJob};
use studio_engine::{write_export, EngineError, EngineEvent, EngineHandle};

use super::config::AppConfig;

/// Executes effects returned by `update` and feeds results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    export_dir: PathBuf,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(config.runner_settings())?;
        Ok(Self {
            engine,
            export_dir: config.export_dir.clone(),
            msg_tx,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RunScrape { url } => {
                    engine_info!("RunScrape url_len={} url={}", url.len(), url);
                    if let Err(err) = self.engine.submit(url) {
                        engine_error!("Engine rejected scrape: {}", err);
                        self.send(Msg::ScrapeAborted {
                            reason: err.to_string(),
                        });
                    }
                }
                Effect::Export { format, job } => {
                    let today = Utc::now().date_naive();
                    self.send(run_export(&self.export_dir, &job, format, today));
                }
            }
        }
    }

    /// Drains engine events into the message channel without blocking.
    pub fn forward_engine_events(&self) {
        while let Some(event) = self.engine.try_recv() {
            self.send(map_event(event));
        }
    }

    fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_err() {
            engine_warn!("Message channel closed; dropping message");
        }
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ProgressTick => Msg::ProgressTick,
        EngineEvent::ScrapeCompleted(outcome) => Msg::ScrapeResolved(outcome),
        EngineEvent::ScrapeAborted { reason } => Msg::ScrapeAborted { reason },
    }
}

pub(crate) fn run_export(
    export_dir: &Path,
    job: &ScrapedJob,
    format: ExportFormat,
    date: NaiveDate,
) -> Msg {
    let result = match write_export(export_dir, job, format, date) {
        Ok(summary) => {
            engine_info!(
                "Export written job_id={} format={} bytes={} path={:?}",
                job.id(),
                format.label(),
                summary.bytes,
                summary.path
            );
            Ok(summary.path.display().to_string())
        }
        Err(err) => {
            engine_error!("Export failed job_id={} error={}", job.id(), err);
            Err(err.to_string())
        }
    };
    Msg::ExportFinished { format, result }
}
