//! Scrape studio core: data model, job history and the pure dashboard state machine.
mod effect;
mod form;
mod history;
mod model;
mod msg;
mod notification;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use form::{
    validate_url, FormPhase, SubmissionForm, SubmitRejected, ValidationError, PROGRESS_CEILING,
    PROGRESS_COMPLETE, PROGRESS_STEP, PROGRESS_TICK_INTERVAL,
};
pub use history::{HistoryFilter, JobHistory, StatusCounts, StatusFilter, UnknownJob};
pub use model::{
    ExportFormat, ExtractedContent, Image, JobId, JobOutcome, JobStatus, Link, RecordError,
    ScrapeOutcome, ScrapedJob,
};
pub use msg::Msg;
pub use notification::{Notification, Severity};
pub use state::{AppState, TEXT_PREVIEW_CHARS};
pub use update::update;
pub use view_model::{
    AppViewModel, DashboardStats, FormView, HistoryView, JobRowView, ResultTab, ResultView,
    UNTITLED_PAGE,
};
