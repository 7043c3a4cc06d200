use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque job identifier, assigned by the runner when the job is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Page data extracted by one scrape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub headings: Vec<String>,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
    pub text: String,
}

static EMPTY_CONTENT: ExtractedContent = ExtractedContent {
    title: None,
    description: None,
    headings: Vec::new(),
    links: Vec::new(),
    images: Vec::new(),
    text: String::new(),
};

impl ExtractedContent {
    /// True when nothing was extracted; the shape carried by failed jobs.
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().unwrap_or_default().is_empty()
            && self.description.is_none()
            && self.headings.is_empty()
            && self.links.is_empty()
            && self.images.is_empty()
            && self.text.is_empty()
    }

    /// Number of headings, links and images combined.
    pub fn data_points(&self) -> usize {
        self.headings.len() + self.links.len() + self.images.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Error,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Success => write!(f, "success"),
            JobStatus::Error => write!(f, "error"),
        }
    }
}

/// How a scrape attempt ended. Failed jobs carry no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Success(ExtractedContent),
    Failed { error: String },
}

/// One scrape attempt. Immutable once built; the two constructors are the only
/// way to make one, so a failed job can never hold extracted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "JobRecord", try_from = "JobRecord")]
pub struct ScrapedJob {
    id: JobId,
    url: String,
    title: String,
    timestamp: String,
    outcome: JobOutcome,
}

impl ScrapedJob {
    pub fn succeeded(
        id: JobId,
        url: impl Into<String>,
        timestamp: impl Into<String>,
        content: ExtractedContent,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            title: content.title.clone().unwrap_or_default(),
            timestamp: timestamp.into(),
            outcome: JobOutcome::Success(content),
        }
    }

    pub fn failed(
        id: JobId,
        url: impl Into<String>,
        timestamp: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            title: String::new(),
            timestamp: timestamp.into(),
            outcome: JobOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn outcome(&self) -> &JobOutcome {
        &self.outcome
    }

    pub fn status(&self) -> JobStatus {
        match self.outcome {
            JobOutcome::Success(_) => JobStatus::Success,
            JobOutcome::Failed { .. } => JobStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == JobStatus::Success
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            JobOutcome::Success(_) => None,
            JobOutcome::Failed { error } => Some(error),
        }
    }

    /// Extracted content; the empty value for failed jobs.
    pub fn data(&self) -> &ExtractedContent {
        match &self.outcome {
            JobOutcome::Success(content) => content,
            JobOutcome::Failed { .. } => &EMPTY_CONTENT,
        }
    }
}

/// Flat wire shape of a job, as written to JSON exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobRecord {
    id: JobId,
    url: String,
    title: String,
    timestamp: String,
    data: ExtractedContent,
    status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("job {0} has status error but no error message")]
    MissingError(String),
    #[error("job {0} has status success but carries an error message")]
    UnexpectedError(String),
    #[error("failed job {0} carries extracted content")]
    ContentOnFailedJob(String),
    #[error("job {0} title does not match its content title")]
    TitleMismatch(String),
}

impl From<ScrapedJob> for JobRecord {
    fn from(job: ScrapedJob) -> Self {
        let status = job.status();
        let (data, error) = match job.outcome {
            JobOutcome::Success(content) => (content, None),
            JobOutcome::Failed { error } => (ExtractedContent::default(), Some(error)),
        };
        Self {
            id: job.id,
            url: job.url,
            title: job.title,
            timestamp: job.timestamp,
            data,
            status,
            error,
        }
    }
}

impl TryFrom<JobRecord> for ScrapedJob {
    type Error = RecordError;

    fn try_from(record: JobRecord) -> Result<Self, Self::Error> {
        match (record.status, record.error) {
            (JobStatus::Success, None) => {
                let expected = record.data.title.as_deref().unwrap_or_default();
                if record.title != expected {
                    return Err(RecordError::TitleMismatch(record.id.0));
                }
                Ok(ScrapedJob::succeeded(
                    record.id,
                    record.url,
                    record.timestamp,
                    record.data,
                ))
            }
            (JobStatus::Success, Some(_)) => Err(RecordError::UnexpectedError(record.id.0)),
            (JobStatus::Error, None) => Err(RecordError::MissingError(record.id.0)),
            (JobStatus::Error, Some(error)) => {
                if !record.data.is_empty() || !record.title.is_empty() {
                    return Err(RecordError::ContentOnFailedJob(record.id.0));
                }
                Ok(ScrapedJob::failed(
                    record.id,
                    record.url,
                    record.timestamp,
                    error,
                ))
            }
        }
    }
}

/// What the runner hands back for every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Succeeded(ScrapedJob),
    Failed { job: ScrapedJob, error: String },
}

impl ScrapeOutcome {
    pub fn from_job(job: ScrapedJob) -> Self {
        match job.error().map(ToOwned::to_owned) {
            None => ScrapeOutcome::Succeeded(job),
            Some(error) => ScrapeOutcome::Failed { job, error },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Succeeded(_))
    }

    pub fn job(&self) -> &ScrapedJob {
        match self {
            ScrapeOutcome::Succeeded(job) | ScrapeOutcome::Failed { job, .. } => job,
        }
    }

    pub fn into_job(self) -> ScrapedJob {
        match self {
            ScrapeOutcome::Succeeded(job) | ScrapeOutcome::Failed { job, .. } => job,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
        }
    }
}
