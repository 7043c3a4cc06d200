use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use engine_logging::{engine_debug, engine_info, engine_warn};
use fastrand::Rng;
use studio_core::{JobId, ScrapeOutcome, ScrapedJob, PROGRESS_TICK_INTERVAL};
use url::Url;

use crate::generator::{ContentGenerator, MockContentGenerator};

/// Messages a simulated failure is drawn from.
pub const FAILURE_MESSAGES: [&str; 5] = [
    "Connection timeout",
    "Access denied (403)",
    "Page not found (404)",
    "Server error (500)",
    "SSL certificate error",
];

/// Produces the ISO-8601 timestamp stamped on each job.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerSettings {
    /// Simulated latency is drawn from `min_latency..max_latency`.
    pub min_latency: Duration,
    pub max_latency: Duration,
    /// Chance that an attempt produces content instead of a simulated error.
    pub success_probability: f64,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub progress_interval: Duration,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            min_latency: Duration::from_millis(2000),
            max_latency: Duration::from_millis(4000),
            success_probability: 0.85,
            seed: None,
            progress_interval: PROGRESS_TICK_INTERVAL,
        }
    }
}

pub fn iso_timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    /// Always resolves with a fully formed job; failures are data, not errors.
    async fn scrape(&self, url: &str) -> ScrapeOutcome;
}

/// Simulated scraper: waits, maybe fails, otherwise asks the generator for a page.
pub struct MockScraper {
    settings: RunnerSettings,
    generator: Box<dyn ContentGenerator>,
    rng: Mutex<Rng>,
    clock: Clock,
}

impl MockScraper {
    pub fn new(settings: RunnerSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self {
            settings,
            generator: Box::new(MockContentGenerator),
            rng: Mutex::new(rng),
            clock: Arc::new(iso_timestamp_now),
        }
    }

    pub fn with_generator(mut self, generator: impl ContentGenerator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    // The lock is never held across an await.
    fn draw<T>(&self, f: impl FnOnce(&mut Rng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    fn latency(&self) -> Duration {
        let RunnerSettings {
            min_latency,
            max_latency,
            ..
        } = self.settings;
        if max_latency <= min_latency {
            return min_latency;
        }
        let span = (max_latency - min_latency).as_millis() as u64;
        if span == 0 {
            return min_latency;
        }
        min_latency + Duration::from_millis(self.draw(|rng| rng.u64(0..span)))
    }

    fn attempt(&self, url: &str) -> ScrapedJob {
        let id = JobId::new(uuid::Uuid::new_v4().simple().to_string());
        let timestamp = (self.clock)();

        if let Err(err) = Url::parse(url) {
            engine_warn!("Scrape rejected url={} error={}", url, err);
            return ScrapedJob::failed(id, url, timestamp, err.to_string());
        }

        let succeeds = self.draw(|rng| rng.f64() < self.settings.success_probability);
        if !succeeds {
            let message = self.draw(|rng| FAILURE_MESSAGES[rng.usize(..FAILURE_MESSAGES.len())]);
            engine_info!("Simulated failure url={} error={}", url, message);
            return ScrapedJob::failed(id, url, timestamp, message);
        }

        match self.draw(|rng| self.generator.generate(url, rng)) {
            Ok(content) => ScrapedJob::succeeded(id, url, timestamp, content),
            Err(err) => {
                engine_warn!("Generator failed url={} error={}", url, err);
                ScrapedJob::failed(id, url, timestamp, err.to_string())
            }
        }
    }
}

#[async_trait::async_trait]
impl Scraper for MockScraper {
    async fn scrape(&self, url: &str) -> ScrapeOutcome {
        let delay = self.latency();
        engine_debug!("Scrape started url={} delay_ms={}", url, delay.as_millis());
        tokio::time::sleep(delay).await;

        let job = self.attempt(url);
        engine_info!(
            "Scrape finished job_id={} url={} status={}",
            job.id(),
            job.url(),
            job.status()
        );
        ScrapeOutcome::from_job(job)
    }
}
