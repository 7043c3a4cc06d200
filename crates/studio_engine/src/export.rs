use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use studio_core::{ExportFormat, ScrapedJob};

use crate::persist::{AtomicFileWriter, PersistError};

const CSV_HEADER: [&str; 3] = ["Type", "Content", "URL"];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize job: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: usize,
}

/// `scraped-data-<YYYY-MM-DD>.<ext>`
pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "scraped-data-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Pretty-printed JSON of the whole job.
pub fn render_json(job: &ScrapedJob) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(job)?)
}

/// One row per heading, link and image under a `Type,Content,URL` header.
/// Every cell is quoted; embedded quotes are doubled. No trailing newline.
pub fn render_csv(job: &ScrapedJob) -> String {
    let data = job.data();
    let headings = data
        .headings
        .iter()
        .map(|heading| ["Heading", heading.as_str(), ""]);
    let links = data
        .links
        .iter()
        .map(|link| ["Link", link.text.as_str(), link.url.as_str()]);
    let images = data
        .images
        .iter()
        .map(|image| ["Image", image.alt.as_str(), image.src.as_str()]);

    std::iter::once(CSV_HEADER)
        .chain(headings)
        .chain(links)
        .chain(images)
        .map(|row| {
            row.iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Renders the job and writes it atomically into `output_dir`.
pub fn write_export(
    output_dir: &Path,
    job: &ScrapedJob,
    format: ExportFormat,
    date: NaiveDate,
) -> Result<ExportSummary, ExportError> {
    let content = match format {
        ExportFormat::Json => render_json(job)?,
        ExportFormat::Csv => render_csv(job),
    };
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let path = writer.write(&export_filename(format, date), content.as_bytes())?;
    Ok(ExportSummary {
        format,
        path,
        bytes: content.len(),
    })
}
