use fastrand::Rng;
use pretty_assertions::assert_eq;
use studio_engine::{ContentGenerator, MockContentGenerator, HEADING_RANGE, IMAGE_RANGE, LINK_RANGE};

#[test]
fn example_com_gets_capitalized_title_and_domain_mentions() {
    let mut rng = Rng::with_seed(7);
    let content = MockContentGenerator
        .generate("https://example.com", &mut rng)
        .unwrap();

    assert_eq!(
        content.title.as_deref(),
        Some("Example.com - Official Website")
    );
    assert_eq!(
        content.description.as_deref(),
        Some("Official website of example.com featuring our latest products and services.")
    );
    assert_eq!(content.headings[0], "Welcome to example.com");
    assert!(content.text.starts_with("This is the main content from example.com."));
    assert_eq!(content.text.matches("example.com").count(), 1);
}

#[test]
fn links_and_images_append_paths_to_submitted_url() {
    let mut rng = Rng::with_seed(11);
    let content = MockContentGenerator
        .generate("https://example.com", &mut rng)
        .unwrap();

    assert_eq!(content.links[0].text, "Home");
    assert_eq!(content.links[0].url, "https://example.com/");
    assert_eq!(content.links[1].url, "https://example.com/about");
    assert_eq!(content.images[0].src, "https://example.com/images/hero-banner.jpg");
    assert_eq!(content.images[0].alt, "Hero Banner");
    assert_eq!(content.images[1].alt, "About Us");
}

#[test]
fn slice_lengths_stay_within_bounds() {
    let mut rng = Rng::with_seed(42);
    for _ in 0..500 {
        let content = MockContentGenerator
            .generate("https://rust-lang.org/learn", &mut rng)
            .unwrap();
        assert!(HEADING_RANGE.contains(&content.headings.len()));
        assert!(LINK_RANGE.contains(&content.links.len()));
        assert!(IMAGE_RANGE.contains(&content.images.len()));
    }
}

#[test]
fn every_length_is_reachable() {
    let mut rng = Rng::with_seed(5);
    let mut seen_headings = [false; 7];
    let mut seen_images = [false; 5];
    for _ in 0..500 {
        let content = MockContentGenerator
            .generate("https://example.com", &mut rng)
            .unwrap();
        seen_headings[content.headings.len()] = true;
        seen_images[content.images.len()] = true;
    }
    assert_eq!(seen_headings, [false, false, false, true, true, true, true]);
    assert_eq!(seen_images, [false, false, true, true, true]);
}

#[test]
fn same_seed_gives_same_page() {
    let first = MockContentGenerator
        .generate("https://example.com", &mut Rng::with_seed(99))
        .unwrap();
    let second = MockContentGenerator
        .generate("https://example.com", &mut Rng::with_seed(99))
        .unwrap();
    assert_eq!(first, second);
}
