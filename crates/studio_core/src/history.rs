use crate::{JobId, JobStatus, ScrapedJob};

/// Every job recorded this session, newest first, plus the one on display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobHistory {
    jobs: Vec<ScrapedJob>,
    current: Option<JobId>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("job {0} is not in the history")]
pub struct UnknownJob(pub JobId);

impl JobHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends the job and makes it current. Repeated URLs are kept.
    pub fn record_completion(&mut self, job: ScrapedJob) {
        self.current = Some(job.id().clone());
        self.jobs.insert(0, job);
    }

    pub fn select_current(&mut self, id: &JobId) -> Result<(), UnknownJob> {
        if self.get(id).is_none() {
            return Err(UnknownJob(id.clone()));
        }
        self.current = Some(id.clone());
        Ok(())
    }

    pub fn jobs(&self) -> &[ScrapedJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &JobId) -> Option<&ScrapedJob> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    pub fn current(&self) -> Option<&ScrapedJob> {
        self.current.as_ref().and_then(|id| self.get(id))
    }

    pub fn current_id(&self) -> Option<&JobId> {
        self.current.as_ref()
    }

    pub fn filtered<'a>(
        &'a self,
        filter: &'a HistoryFilter,
    ) -> impl Iterator<Item = &'a ScrapedJob> + 'a {
        self.jobs.iter().filter(move |job| filter.matches(job))
    }

    pub fn status_counts(&self) -> StatusCounts {
        let success = self.jobs.iter().filter(|job| job.is_success()).count();
        StatusCounts {
            all: self.jobs.len(),
            success,
            error: self.jobs.len() - success,
        }
    }

    /// Rounded share of successful jobs, 0 when there are none.
    pub fn success_rate_percent(&self) -> u32 {
        let counts = self.status_counts();
        if counts.all == 0 {
            return 0;
        }
        let (success, all) = (counts.success as u64, counts.all as u64);
        ((success * 200 + all) / (all * 2)) as u32
    }

    /// Headings, links and images summed over successful jobs.
    pub fn data_points(&self) -> usize {
        self.jobs
            .iter()
            .filter(|job| job.is_success())
            .map(|job| job.data().data_points())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub all: usize,
    pub success: usize,
    pub error: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Success,
    Error,
}

impl StatusFilter {
    pub fn admits(self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Success => status == JobStatus::Success,
            StatusFilter::Error => status == JobStatus::Error,
        }
    }
}

/// Search term and status filter; a job must satisfy both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl HistoryFilter {
    pub fn matches(&self, job: &ScrapedJob) -> bool {
        self.status.admits(job.status()) && self.matches_search(job)
    }

    fn matches_search(&self, job: &ScrapedJob) -> bool {
        let needle = self.search.to_lowercase();
        if job.url().to_lowercase().contains(&needle) {
            return true;
        }
        job.data()
            .title
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains(&needle))
    }
}
