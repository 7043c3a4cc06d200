use std::ops::RangeInclusive;

use fastrand::Rng;
use studio_core::{ExtractedContent, Image, Link};
use url::Url;

/// Number of headings kept from the front of the heading pool.
pub const HEADING_RANGE: RangeInclusive<usize> = 3..=6;
pub const LINK_RANGE: RangeInclusive<usize> = 3..=6;
pub const IMAGE_RANGE: RangeInclusive<usize> = 2..=4;

const FIXED_HEADINGS: [&str; 5] = [
    "About Our Services",
    "Latest News and Updates",
    "Contact Information",
    "Our Products",
    "Customer Testimonials",
];

/// (link text, path appended to the submitted URL)
const LINK_POOL: [(&str, &str); 6] = [
    ("Home", "/"),
    ("About Us", "/about"),
    ("Services", "/services"),
    ("Contact", "/contact"),
    ("Blog", "/blog"),
    ("Privacy Policy", "/privacy"),
];

/// (path appended to the submitted URL, alt text)
const IMAGE_POOL: [(&str, &str); 4] = [
    ("/images/hero-banner.jpg", "Hero Banner"),
    ("/images/about-us.jpg", "About Us"),
    ("/images/team.jpg", "Our Team"),
    ("/images/office.jpg", "Office Location"),
];

const FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. \
Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, \
totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae \
dicta sunt explicabo.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

pub trait ContentGenerator: Send + Sync {
    fn generate(&self, url: &str, rng: &mut Rng) -> Result<ExtractedContent, GenerateError>;
}

/// Fabricates a plausible page for a URL without fetching anything.
///
/// Pools are fixed; randomness only decides how much of each pool is kept.
/// Draws happen in the order headings, links, images so a seeded [`Rng`]
/// yields the same page every time.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockContentGenerator;

impl ContentGenerator for MockContentGenerator {
    fn generate(&self, url: &str, rng: &mut Rng) -> Result<ExtractedContent, GenerateError> {
        let parsed = Url::parse(url)?;
        let domain = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(GenerateError::MissingHost(url.to_string())),
        };

        let heading_count = rng.usize(HEADING_RANGE);
        let link_count = rng.usize(LINK_RANGE);
        let image_count = rng.usize(IMAGE_RANGE);

        let headings = std::iter::once(format!("Welcome to {domain}"))
            .chain(FIXED_HEADINGS.iter().map(|h| h.to_string()))
            .take(heading_count)
            .collect();
        let links = LINK_POOL
            .iter()
            .take(link_count)
            .map(|(text, path)| Link {
                text: text.to_string(),
                url: format!("{url}{path}"),
            })
            .collect();
        let images = IMAGE_POOL
            .iter()
            .take(image_count)
            .map(|(path, alt)| Image {
                src: format!("{url}{path}"),
                alt: alt.to_string(),
            })
            .collect();

        Ok(ExtractedContent {
            title: Some(format!("{} - Official Website", capitalize(&domain))),
            description: Some(format!(
                "Official website of {domain} featuring our latest products and services."
            )),
            headings,
            links,
            images,
            text: format!("This is the main content from {domain}. {FILLER}"),
        })
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
