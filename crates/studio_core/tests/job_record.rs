use pretty_assertions::assert_eq;
use studio_core::{ExtractedContent, Image, JobId, JobOutcome, Link, ScrapedJob};

fn success_job() -> ScrapedJob {
    ScrapedJob::succeeded(
        JobId::new("job-1"),
        "https://example.com",
        "2024-05-01T10:00:00.000Z",
        ExtractedContent {
            title: Some("Example.com - Official Website".to_string()),
            description: Some("Official website of example.com".to_string()),
            headings: vec!["Welcome to example.com".to_string()],
            links: vec![Link {
                text: "Home".to_string(),
                url: "https://example.com/".to_string(),
            }],
            images: vec![Image {
                src: "https://example.com/images/team.jpg".to_string(),
                alt: "Our Team".to_string(),
            }],
            text: "This is the main content from example.com.".to_string(),
        },
    )
}

#[test]
fn success_job_survives_json_round_trip() {
    let job = success_job();
    let json = serde_json::to_string(&job).unwrap();
    let parsed: ScrapedJob = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, job);
    match parsed.outcome() {
        JobOutcome::Success(content) => assert_eq!(content.links.len(), 1),
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn failed_job_is_written_flat_with_empty_data() {
    let job = ScrapedJob::failed(
        JobId::new("job-2"),
        "https://down.io",
        "2024-05-01T10:00:00.000Z",
        "Server error (500)",
    );
    let value = serde_json::to_value(&job).unwrap();

    assert_eq!(value["status"], "error");
    assert_eq!(value["error"], "Server error (500)");
    assert_eq!(value["title"], "");
    assert_eq!(value["data"]["headings"], serde_json::json!([]));
    assert_eq!(value["data"]["text"], "");

    let parsed: ScrapedJob = serde_json::from_value(value).unwrap();
    assert_eq!(
        parsed.outcome(),
        &JobOutcome::Failed {
            error: "Server error (500)".to_string()
        }
    );
}

#[test]
fn success_record_omits_error_field() {
    let value = serde_json::to_value(success_job()).unwrap();
    assert_eq!(value["status"], "success");
    assert!(value.get("error").is_none());
}

#[test]
fn error_record_with_leftover_description_is_refused() {
    let json = r#"{
        "id": "job-3",
        "url": "https://down.io",
        "title": "",
        "timestamp": "2024-05-01T10:00:00.000Z",
        "data": {
            "description": "Official website of down.io",
            "headings": [],
            "links": [],
            "images": [],
            "text": ""
        },
        "status": "error",
        "error": "Connection timeout"
    }"#;

    let err = serde_json::from_str::<ScrapedJob>(json).unwrap_err();
    assert!(err.to_string().contains("failed job job-3 carries extracted content"));
}

#[test]
fn error_record_without_message_is_refused() {
    let json = r#"{
        "id": "job-4",
        "url": "https://example.com",
        "title": "",
        "timestamp": "2024-05-01T10:00:00.000Z",
        "data": {"headings": [], "links": [], "images": [], "text": ""},
        "status": "error"
    }"#;

    let err = serde_json::from_str::<ScrapedJob>(json).unwrap_err();
    assert!(err.to_string().contains("has status error but no error message"));
}
