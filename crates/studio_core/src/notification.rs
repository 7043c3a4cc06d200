use crate::{ExportFormat, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// Transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    fn new(title: &str, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity,
        }
    }

    pub fn rejected(err: ValidationError) -> Self {
        let description = match err {
            ValidationError::Empty => "Please enter a URL to scrape",
            ValidationError::Invalid => "Please enter a valid URL (including http:// or https://)",
        };
        Self::new(&err.to_string(), description, Severity::Destructive)
    }

    pub fn scrape_complete() -> Self {
        Self::new(
            "Scraping Complete",
            "Website data extracted successfully",
            Severity::Info,
        )
    }

    pub fn scrape_failed(error: &str) -> Self {
        let description = if error.is_empty() {
            "Failed to scrape website"
        } else {
            error
        };
        Self::new("Scraping Failed", description, Severity::Destructive)
    }

    pub fn scrape_error() -> Self {
        Self::new(
            "Error",
            "Failed to scrape website. Please try again.",
            Severity::Destructive,
        )
    }

    pub fn export_complete(format: ExportFormat) -> Self {
        Self::new(
            "Export Complete",
            format!("Data exported as {} file", format.label()),
            Severity::Info,
        )
    }

    pub fn export_failed(reason: &str) -> Self {
        Self::new(
            "Export Failed",
            format!("Failed to export data: {reason}"),
            Severity::Destructive,
        )
    }
}
