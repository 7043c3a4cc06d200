use std::time::Duration;

use url::Url;

/// Progress added per tick while a scrape is in flight.
pub const PROGRESS_STEP: u8 = 10;
/// Progress never passes this until the scrape resolves.
pub const PROGRESS_CEILING: u8 = 90;
pub const PROGRESS_COMPLETE: u8 = 100;
/// How often the engine emits a progress tick.
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("URL Required")]
    Empty,
    #[error("Invalid URL")]
    Invalid,
}

/// Accepts any input that parses as an absolute URL.
pub fn validate_url(input: &str) -> Result<Url, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    Url::parse(trimmed).map_err(|_| ValidationError::Invalid)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Busy,
    Invalid(ValidationError),
}

/// URL input plus the indeterminate progress of the scrape it started.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionForm {
    input: String,
    phase: FormPhase,
    progress: u8,
}

impl SubmissionForm {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Returns false when the edit was refused (input is locked while submitting).
    pub fn set_input(&mut self, text: String) -> bool {
        if self.is_submitting() || self.input == text {
            return false;
        }
        self.input = text;
        true
    }

    /// `None` for empty input, otherwise whether it would pass validation.
    pub fn url_hint(&self) -> Option<bool> {
        if self.input.trim().is_empty() {
            None
        } else {
            Some(validate_url(&self.input).is_ok())
        }
    }

    /// Validates the input and locks the form. Returns the input exactly as
    /// typed; only validation ignores surrounding whitespace.
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::Busy);
        }
        validate_url(&self.input).map_err(SubmitRejected::Invalid)?;
        self.phase = FormPhase::Submitting;
        self.progress = 0;
        Ok(self.input.clone())
    }

    /// Returns true when the visible progress changed.
    pub fn advance_progress(&mut self) -> bool {
        if !self.is_submitting() || self.progress >= PROGRESS_CEILING {
            return false;
        }
        self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CEILING);
        true
    }

    /// Snaps progress to complete and unlocks the form. The input is cleared
    /// only after a successful scrape so a failed URL can be corrected.
    pub fn finish(&mut self, succeeded: bool) {
        self.phase = FormPhase::Idle;
        self.progress = PROGRESS_COMPLETE;
        if succeeded {
            self.input.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_malformed_input_are_told_apart() {
        assert_eq!(validate_url("   "), Err(ValidationError::Empty));
        assert_eq!(validate_url("not-a-url"), Err(ValidationError::Invalid));
        assert!(validate_url("https://example.com").is_ok());
    }

    #[test]
    fn progress_stops_at_ceiling_until_finished() {
        let mut form = SubmissionForm::default();
        form.set_input("https://example.com".to_string());
        form.begin_submit().unwrap();

        let mut ticks = 0;
        while form.advance_progress() {
            ticks += 1;
        }
        assert_eq!(ticks, 9);
        assert_eq!(form.progress(), PROGRESS_CEILING);

        form.finish(true);
        assert_eq!(form.progress(), PROGRESS_COMPLETE);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.input(), "");
    }

    #[test]
    fn input_is_locked_while_submitting() {
        let mut form = SubmissionForm::default();
        form.set_input("https://example.com".to_string());
        form.begin_submit().unwrap();

        assert!(!form.set_input("https://other.com".to_string()));
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Busy));

        form.finish(false);
        assert_eq!(form.input(), "https://example.com");
    }

    #[test]
    fn submitted_url_is_the_raw_input() {
        let mut form = SubmissionForm::default();
        form.set_input("  https://example.com/a ".to_string());
        assert_eq!(
            form.begin_submit(),
            Ok("  https://example.com/a ".to_string())
        );
    }

    #[test]
    fn url_hint_tracks_validity() {
        let mut form = SubmissionForm::default();
        assert_eq!(form.url_hint(), None);
        form.set_input("example".to_string());
        assert_eq!(form.url_hint(), Some(false));
        form.set_input("http://example".to_string());
        assert_eq!(form.url_hint(), Some(true));
    }
}
