use pretty_assertions::assert_eq;
use studio_core::{
    update, AppState, Effect, ExportFormat, ExtractedContent, Image, JobId, JobStatus, Link, Msg,
    ResultTab, ScrapeOutcome, ScrapedJob, StatusFilter, UNTITLED_PAGE,
};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn ok(id: &str, url: &str, title: &str) -> ScrapedJob {
    ScrapedJob::succeeded(
        JobId::new(id),
        url,
        "2024-05-01T10:00:00.000Z",
        ExtractedContent {
            title: Some(title.to_string()),
            description: Some(format!("About {title}")),
            headings: vec!["One".to_string(), "Two".to_string(), "Three".to_string()],
            links: vec![Link {
                text: "Home".to_string(),
                url: format!("{url}/"),
            }],
            images: vec![Image {
                src: format!("{url}/images/team.jpg"),
                alt: "Our Team".to_string(),
            }],
            text: "x".repeat(800),
        },
    )
}

fn err(id: &str, url: &str) -> ScrapedJob {
    ScrapedJob::failed(JobId::new(id), url, "2024-05-01T10:00:00.000Z", "Server error (500)")
}

fn complete(state: AppState, job: ScrapedJob) -> AppState {
    update(state, Msg::ScrapeResolved(ScrapeOutcome::from_job(job))).0
}

fn seeded() -> AppState {
    let state = AppState::new();
    let state = complete(state, ok("1", "https://example.com", "Example.com - Official Website"));
    let state = complete(state, err("2", "https://broken.example.org"));
    let state = complete(state, ok("3", "https://rust-lang.org", "Rust-lang.org - Official Website"));
    complete(state, err("4", "https://down.io"))
}

fn row_ids(state: &AppState) -> Vec<String> {
    state
        .view()
        .history
        .rows
        .iter()
        .map(|row| row.job_id.to_string())
        .collect()
}

#[test]
fn history_is_newest_first_and_last_completion_is_current() {
    init_logging();
    let state = seeded();

    assert_eq!(row_ids(&state), vec!["4", "3", "2", "1"]);
    let view = state.view();
    assert_eq!(view.current.unwrap().job_id, JobId::new("4"));
    assert!(view.history.rows[0].selected);
    assert!(!view.history.rows[1].selected);
}

#[test]
fn same_url_twice_gives_two_entries() {
    init_logging();
    let state = complete(AppState::new(), ok("a", "https://example.com", "E"));
    let state = complete(state, ok("b", "https://example.com", "E"));
    assert_eq!(state.history().len(), 2);
}

#[test]
fn status_filter_keeps_only_matching_jobs() {
    init_logging();
    let (state, _) = update(seeded(), Msg::StatusFilterChanged(StatusFilter::Success));
    let view = state.view();

    assert_eq!(row_ids(&state), vec!["3", "1"]);
    assert!(view.history.rows.iter().all(|r| r.status == JobStatus::Success));
    assert_eq!(view.history.counts.all, 4);
    assert_eq!(view.history.counts.success, 2);
    assert_eq!(view.history.counts.error, 2);
}

#[test]
fn search_and_filter_intersect() {
    init_logging();
    let (state, _) = update(seeded(), Msg::SearchChanged("EXAMPLE".to_string()));
    assert_eq!(row_ids(&state), vec!["2", "1"]);

    let (state, _) = update(state, Msg::StatusFilterChanged(StatusFilter::Error));
    assert_eq!(row_ids(&state), vec!["2"]);

    let (state, _) = update(state, Msg::SearchChanged("nothing-matches".to_string()));
    assert!(row_ids(&state).is_empty());
}

#[test]
fn selecting_a_job_changes_current_only_for_known_ids() {
    init_logging();
    let (mut state, _) = update(seeded(), Msg::JobSelected(JobId::new("1")));
    assert!(state.consume_dirty());
    assert_eq!(state.view().current.unwrap().job_id, JobId::new("1"));

    let (mut state, _) = update(state, Msg::JobSelected(JobId::new("missing")));
    assert!(!state.consume_dirty());
    assert_eq!(state.view().current.unwrap().job_id, JobId::new("1"));
}

#[test]
fn rows_describe_success_and_failure_differently() {
    init_logging();
    let view = seeded().view();
    let failed = &view.history.rows[0];
    let succeeded = &view.history.rows[1];

    assert_eq!(failed.title, UNTITLED_PAGE);
    assert_eq!(failed.counts, None);
    assert_eq!(failed.error.as_deref(), Some("Server error (500)"));
    assert_eq!(succeeded.title, "Rust-lang.org - Official Website");
    assert_eq!(succeeded.counts, Some((3, 1, 1)));
    assert_eq!(succeeded.error, None);
}

#[test]
fn dashboard_stats_follow_history() {
    init_logging();
    let stats = seeded().view().stats;
    assert_eq!(stats.total_scrapes, 4);
    assert_eq!(stats.success_rate_percent, 50);
    assert_eq!(stats.data_points, 10);
    assert_eq!(stats.downloads, 0);
}

#[test]
fn overview_preview_is_truncated() {
    init_logging();
    let (state, _) = update(seeded(), Msg::JobSelected(JobId::new("3")));
    let current = state.view().current.unwrap();
    assert_eq!(current.text_preview.chars().count(), 500);
    assert_eq!(current.description.as_deref(), Some("About Rust-lang.org - Official Website"));
}

#[test]
fn tab_selection_is_remembered() {
    init_logging();
    let (state, _) = update(seeded(), Msg::TabSelected(ResultTab::Links));
    assert_eq!(state.view().active_tab, ResultTab::Links);
    let state = complete(state, ok("5", "https://new.io", "New.io - Official Website"));
    assert_eq!(state.view().active_tab, ResultTab::Links);
}

#[test]
fn export_emits_effect_for_successful_current_job() {
    init_logging();
    let (state, _) = update(seeded(), Msg::JobSelected(JobId::new("3")));
    let (_, effects) = update(state, Msg::ExportClicked(ExportFormat::Csv));
    assert_eq!(
        effects,
        vec![Effect::Export {
            format: ExportFormat::Csv,
            job: ok("3", "https://rust-lang.org", "Rust-lang.org - Official Website"),
        }]
    );
}

#[test]
fn export_is_refused_for_failed_or_missing_job() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExportClicked(ExportFormat::Json));
    assert!(effects.is_empty());
    assert_eq!(state.view().notifications[0].title, "Export Failed");

    let (state, effects) = update(seeded(), Msg::ExportClicked(ExportFormat::Json));
    assert!(effects.is_empty());
    assert_eq!(state.view().notifications.last().unwrap().title, "Export Failed");
}

#[test]
fn finished_exports_count_downloads_and_notify() {
    init_logging();
    let (state, _) = update(
        seeded(),
        Msg::ExportFinished {
            format: ExportFormat::Json,
            result: Ok("out/scraped-data-2024-05-01.json".to_string()),
        },
    );
    let (state, _) = update(
        state,
        Msg::ExportFinished {
            format: ExportFormat::Csv,
            result: Err("disk full".to_string()),
        },
    );
    let view = state.view();
    let titles: Vec<_> = view.notifications.iter().map(|n| n.title.as_str()).collect();

    assert_eq!(view.stats.downloads, 1);
    assert_eq!(titles.last(), Some(&"Export Failed"));
    assert!(titles.contains(&"Export Complete"));
    assert_eq!(state.history().len(), 4);
}
