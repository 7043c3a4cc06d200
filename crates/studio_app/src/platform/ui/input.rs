//! Line commands typed at the dashboard prompt.

use studio_core::{AppViewModel, ExportFormat, Msg, ResultTab, StatusFilter};
use thiserror::Error;

pub const HELP: &str = "commands: url <text> | submit | scrape <url> | select <n> | delete <n> | \
search [text] | filter all|success|error | tab overview|headings|links|images | \
export json|csv | dismiss | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward a message straight to `update`.
    Send(Msg),
    /// Replace the input box and submit it.
    Scrape(String),
    /// 1-based row in the visible history list.
    Select(usize),
    Delete(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{value}' is not a valid {expected}")]
    InvalidArgument {
        value: String,
        expected: &'static str,
    },
    #[error("no history row {0}")]
    NoSuchRow(usize),
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => Command::Send(Msg::NoOp),
        "url" => Command::Send(Msg::InputChanged(rest.to_string())),
        "submit" | "go" => Command::Send(Msg::SubmitClicked),
        "scrape" => Command::Scrape(required(rest, "scrape")?.to_string()),
        "select" => Command::Select(row_number(required(rest, "select")?)?),
        "delete" => Command::Delete(row_number(required(rest, "delete")?)?),
        "search" => Command::Send(Msg::SearchChanged(rest.to_string())),
        "filter" => Command::Send(Msg::StatusFilterChanged(status_filter(required(
            rest, "filter",
        )?)?)),
        "tab" => Command::Send(Msg::TabSelected(result_tab(required(rest, "tab")?)?)),
        "export" => Command::Send(Msg::ExportClicked(export_format(required(
            rest, "export",
        )?)?)),
        "dismiss" => Command::Send(Msg::NotificationDismissed),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(command)
}

impl Command {
    /// Resolves row numbers against the rows currently on screen.
    pub fn into_msgs(self, view: &AppViewModel) -> Result<Vec<Msg>, InputError> {
        let row_id = |n: usize| {
            n.checked_sub(1)
                .and_then(|index| view.history.rows.get(index))
                .map(|row| row.job_id.clone())
                .ok_or(InputError::NoSuchRow(n))
        };
        Ok(match self {
            Command::Send(msg) => vec![msg],
            Command::Scrape(url) => vec![Msg::InputChanged(url), Msg::SubmitClicked],
            Command::Select(n) => vec![Msg::JobSelected(row_id(n)?)],
            Command::Delete(n) => vec![Msg::DeleteClicked(row_id(n)?)],
            Command::Help | Command::Quit => Vec::new(),
        })
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn row_number(value: &str) -> Result<usize, InputError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::InvalidArgument {
            value: value.to_string(),
            expected: "row number",
        }),
    }
}

fn status_filter(value: &str) -> Result<StatusFilter, InputError> {
    match value.to_ascii_lowercase().as_str() {
        "all" => Ok(StatusFilter::All),
        "success" => Ok(StatusFilter::Success),
        "error" | "failed" => Ok(StatusFilter::Error),
        _ => Err(InputError::InvalidArgument {
            value: value.to_string(),
            expected: "status filter",
        }),
    }
}

fn result_tab(value: &str) -> Result<ResultTab, InputError> {
    match value.to_ascii_lowercase().as_str() {
        "overview" => Ok(ResultTab::Overview),
        "headings" => Ok(ResultTab::Headings),
        "links" => Ok(ResultTab::Links),
        "images" => Ok(ResultTab::Images),
        _ => Err(InputError::InvalidArgument {
            value: value.to_string(),
            expected: "tab",
        }),
    }
}

fn export_format(value: &str) -> Result<ExportFormat, InputError> {
    match value.to_ascii_lowercase().as_str() {
        "json" => Ok(ExportFormat::Json),
        "csv" => Ok(ExportFormat::Csv),
        _ => Err(InputError::InvalidArgument {
            value: value.to_string(),
            expected: "export format",
        }),
    }
}
