use console::style;
use studio_core::{
    AppViewModel, DashboardStats, FormView, HistoryView, JobRowView, JobStatus, Notification,
    ResultTab, ResultView, Severity, StatusFilter,
};

const PROGRESS_BAR_WIDTH: usize = 20;
const TABS: [(ResultTab, &str); 4] = [
    (ResultTab::Overview, "Overview"),
    (ResultTab::Headings, "Headings"),
    (ResultTab::Links, "Links"),
    (ResultTab::Images, "Images"),
];

/// Renders the whole dashboard as printable lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![style("Scrape Studio").bold().to_string()];
    lines.push(format_stats(&view.stats));
    lines.push(String::new());
    lines.extend(render_form(&view.form));
    lines.push(String::new());
    match &view.current {
        Some(result) => lines.extend(render_result(result, view.active_tab)),
        None => lines.push(style("No result yet. Scrape a URL to see its data.").dim().to_string()),
    }
    lines.push(String::new());
    lines.extend(render_history(&view.history));
    if !view.notifications.is_empty() {
        lines.push(String::new());
        lines.extend(view.notifications.iter().map(format_notification));
    }
    lines
}

fn format_stats(stats: &DashboardStats) -> String {
    format!(
        "Scrapes {}  Success {}%  Data points {}  Downloads {}",
        style(stats.total_scrapes).cyan(),
        style(stats.success_rate_percent).cyan(),
        style(stats.data_points).cyan(),
        style(stats.downloads).cyan()
    )
}

fn render_form(form: &FormView) -> Vec<String> {
    let hint = match form.url_hint {
        Some(true) => style("●").green().to_string(),
        Some(false) => style("○").red().to_string(),
        None => String::new(),
    };
    let mut lines = vec![format!("URL: {} {}", form.input, hint)];
    match form.progress {
        Some(percent) => lines.push(format!(
            "Scraping {} {}%",
            progress_bar(percent),
            percent
        )),
        None if form.submit_enabled => lines.push(style("[submit]").green().to_string()),
        None => lines.push(style("[submit]").dim().to_string()),
    }
    lines
}

fn progress_bar(percent: u8) -> String {
    let filled = (percent.min(100) as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn render_result(result: &ResultView, active: ResultTab) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", status_badge(result.status), style(&result.title).bold()),
        format!("{}  {}", result.url, style(&result.timestamp).dim()),
    ];
    if let Some(error) = &result.error {
        lines.push(style(error).red().to_string());
        return lines;
    }

    let tabs = TABS
        .iter()
        .map(|(tab, label)| {
            if *tab == active {
                style(format!("[{label}]")).bold().to_string()
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(tabs);

    match active {
        ResultTab::Overview => {
            if let Some(description) = &result.description {
                lines.push(description.clone());
            }
            lines.push(style(&result.text_preview).dim().to_string());
        }
        ResultTab::Headings => lines.extend(
            result
                .headings
                .iter()
                .enumerate()
                .map(|(i, heading)| format!("{:>2}. {}", i + 1, heading)),
        ),
        ResultTab::Links => lines.extend(
            result
                .links
                .iter()
                .map(|link| format!("{} -> {}", link.text, style(&link.url).underlined())),
        ),
        ResultTab::Images => lines.extend(
            result
                .images
                .iter()
                .map(|image| format!("{} ({})", image.alt, style(&image.src).dim())),
        ),
    }
    lines
}

fn render_history(history: &HistoryView) -> Vec<String> {
    let counts = &history.counts;
    let filter_label = |filter: StatusFilter, label: &str, count: usize| {
        let text = format!("{label} {count}");
        if history.filter.status == filter {
            style(format!("[{text}]")).bold().to_string()
        } else {
            text
        }
    };
    let mut header = format!(
        "History  {} {} {}",
        filter_label(StatusFilter::All, "All", counts.all),
        filter_label(StatusFilter::Success, "Success", counts.success),
        filter_label(StatusFilter::Error, "Error", counts.error)
    );
    if !history.filter.search.is_empty() {
        header.push_str(&format!("  search: \"{}\"", history.filter.search));
    }

    let mut lines = vec![header];
    if history.rows.is_empty() {
        lines.push(style("  (no jobs)").dim().to_string());
    }
    lines.extend(
        history
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| format_row(i + 1, row)),
    );
    lines
}

fn format_row(number: usize, row: &JobRowView) -> String {
    let marker = if row.selected { ">" } else { " " };
    let detail = match (&row.counts, &row.error) {
        (Some((headings, links, images)), _) => {
            format!("{headings} headings, {links} links, {images} images")
        }
        (None, Some(error)) => style(error).red().to_string(),
        (None, None) => String::new(),
    };
    format!(
        "{marker}{number:>3}. {} {}  {}  {}  {}",
        status_badge(row.status),
        row.title,
        row.url,
        style(&row.timestamp).dim(),
        detail
    )
}

fn status_badge(status: JobStatus) -> String {
    match status {
        JobStatus::Success => style("success").green().to_string(),
        JobStatus::Error => style("error").red().to_string(),
    }
}

fn format_notification(notification: &Notification) -> String {
    let title = match notification.severity {
        Severity::Info => style(&notification.title).green().bold(),
        Severity::Destructive => style(&notification.title).red().bold(),
    };
    format!("{}: {}", title, notification.description)
}
