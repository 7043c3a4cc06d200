//! Scrape studio engine: mock scraping, the background job runner and exports.
mod engine;
mod export;
mod generator;
mod persist;
mod runner;
mod types;

pub use engine::EngineHandle;
pub use export::{export_filename, render_csv, render_json, write_export, ExportError, ExportSummary};
pub use generator::{
    ContentGenerator, GenerateError, MockContentGenerator, HEADING_RANGE, IMAGE_RANGE, LINK_RANGE,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use runner::{iso_timestamp_now, Clock, MockScraper, RunnerSettings, Scraper, FAILURE_MESSAGES};
pub use types::{EngineError, EngineEvent};
