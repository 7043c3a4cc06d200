use crate::{ExportFormat, JobId, ResultTab, ScrapeOutcome, StatusFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input.
    SubmitClicked,
    /// Engine timer tick while a scrape is in flight.
    ProgressTick,
    /// The runner answered; success and simulated failures both land here.
    ScrapeResolved(ScrapeOutcome),
    /// The runner went away without answering.
    ScrapeAborted { reason: String },
    /// User picked a job in the history list.
    JobSelected(JobId),
    /// User clicked delete on a history row. Accepted and ignored.
    DeleteClicked(JobId),
    SearchChanged(String),
    StatusFilterChanged(StatusFilter),
    TabSelected(ResultTab),
    ExportClicked(ExportFormat),
    /// Export effect finished; `Ok` carries the written path.
    ExportFinished {
        format: ExportFormat,
        result: Result<String, String>,
    },
    /// Drop the oldest notification.
    NotificationDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
