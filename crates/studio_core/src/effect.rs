use crate::{ExportFormat, ScrapedJob};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a validated URL to the job runner.
    RunScrape { url: String },
    /// Write the job to disk in the given format.
    Export {
        format: ExportFormat,
        job: ScrapedJob,
    },
}
