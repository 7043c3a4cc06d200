use studio_core::ScrapeOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Timer tick while a scrape is in flight; carries no real progress.
    ProgressTick,
    ScrapeCompleted(ScrapeOutcome),
    /// The scrape task died before producing an outcome.
    ScrapeAborted { reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("engine is no longer running")]
    Stopped,
}
