//! Session state machine
//!
//! One `Session` value per page, owned by the app component and mutated
//! nowhere else. Idle -> Analyzing -> Success | Failed, with an explicit
//! reset back to Idle from anywhere. At most one analysis attempt is in
//! flight; a new `begin` supersedes whatever came before (last write
//! wins). Completions are tagged with the attempt they belong to, so a
//! superseded or post-reset response is disregarded instead of
//! resurrecting stale state.

use crate::types::AnalysisResult;

/// Where the UI currently is
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Success(AnalysisResult),
    Failed(String),
}

/// The whole mutable UI state
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: Phase,
    /// Data URL of the currently selected image, kept through Failed so
    /// the user can see which photo the attempt was for
    image_url: Option<String>,
    /// Monotonic attempt counter; completions carrying an older value
    /// are stale and dropped
    attempt: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an analysis attempt for a freshly selected image
    ///
    /// Clears any previous result or error before entering Analyzing.
    /// Returns the attempt tag the eventual `succeed`/`fail` call must
    /// present; anything else in flight is superseded from here on.
    pub fn begin(&mut self, image_url: String) -> u64 {
        self.attempt += 1;
        self.image_url = Some(image_url);
        self.phase = Phase::Analyzing;
        self.attempt
    }

    /// Record a validated result for the given attempt
    ///
    /// Ignored unless the attempt is still the live one.
    pub fn succeed(&mut self, attempt: u64, result: AnalysisResult) {
        if self.completes(attempt) {
            self.phase = Phase::Success(result);
        }
    }

    /// Record a user-facing failure message for the given attempt
    ///
    /// Ignored unless the attempt is still the live one.
    pub fn fail(&mut self, attempt: u64, message: String) {
        if self.completes(attempt) {
            self.phase = Phase::Failed(message);
        }
    }

    /// Fail without an attempt: the selection never became one
    ///
    /// Used when a file is rejected before any encoding or network
    /// traffic. Also invalidates whatever was in flight.
    pub fn reject(&mut self, message: String) {
        self.attempt += 1;
        self.image_url = None;
        self.phase = Phase::Failed(message);
    }

    /// Return to Idle, discarding image, result and error
    ///
    /// Valid from any state, including mid-Analyzing; a response from
    /// the abandoned attempt will find its tag stale and be dropped.
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.phase = Phase::Idle;
        self.image_url = None;
    }

    /// Whether a completion for `attempt` may still be applied
    fn completes(&self, attempt: u64) -> bool {
        attempt == self.attempt && matches!(self.phase, Phase::Analyzing)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing)
    }

    /// Whether the upload control should be offered at all
    pub fn accepts_upload(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }
}
