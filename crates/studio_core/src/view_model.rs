use crate::{
    HistoryFilter, Image, JobId, JobStatus, Link, Notification, ScrapedJob, StatusCounts,
};

/// Placeholder shown for jobs without a title.
pub const UNTITLED_PAGE: &str = "Untitled Page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Overview,
    Headings,
    Links,
    Images,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub form: FormView,
    pub stats: DashboardStats,
    pub current: Option<ResultView>,
    pub active_tab: ResultTab,
    pub history: HistoryView,
    pub notifications: Vec<Notification>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub input: String,
    pub submitting: bool,
    /// Only present while a scrape is in flight.
    pub progress: Option<u8>,
    pub url_hint: Option<bool>,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_scrapes: usize,
    pub success_rate_percent: u32,
    pub data_points: usize,
    pub downloads: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub job_id: JobId,
    pub url: String,
    pub timestamp: String,
    pub status: JobStatus,
    pub title: String,
    pub error: Option<String>,
    pub description: Option<String>,
    pub text_preview: String,
    pub headings: Vec<String>,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
}

impl ResultView {
    pub(crate) fn from_job(job: &ScrapedJob, preview_chars: usize) -> Self {
        let data = job.data();
        Self {
            job_id: job.id().clone(),
            url: job.url().to_string(),
            timestamp: job.timestamp().to_string(),
            status: job.status(),
            title: display_title(job),
            error: job.error().map(ToOwned::to_owned),
            description: data.description.clone(),
            text_preview: data.text.chars().take(preview_chars).collect(),
            headings: data.headings.clone(),
            links: data.links.clone(),
            images: data.images.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryView {
    /// Jobs passing the current filter, newest first.
    pub rows: Vec<JobRowView>,
    /// Counts over the whole history, ignoring the filter.
    pub counts: StatusCounts,
    pub filter: HistoryFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub title: String,
    pub url: String,
    pub timestamp: String,
    pub status: JobStatus,
    /// Headings, links, images; success jobs only.
    pub counts: Option<(usize, usize, usize)>,
    pub error: Option<String>,
    pub selected: bool,
}

impl JobRowView {
    pub(crate) fn from_job(job: &ScrapedJob, selected: bool) -> Self {
        let data = job.data();
        Self {
            job_id: job.id().clone(),
            title: display_title(job),
            url: job.url().to_string(),
            timestamp: job.timestamp().to_string(),
            status: job.status(),
            counts: job
                .is_success()
                .then(|| (data.headings.len(), data.links.len(), data.images.len())),
            error: job.error().map(ToOwned::to_owned),
            selected,
        }
    }
}

fn display_title(job: &ScrapedJob) -> String {
    match job.data().title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => UNTITLED_PAGE.to_string(),
    }
}
