/*!
    Deinterlacer configuration types.
*/

use std::time::Duration;

use crate::mode::{ConfigWarning, Mode};

/// Configuration key the host stores the mode under.
pub const MODE_KEY: &str = "deinterlace-mode";

/// Mode used when the host has no value of its own.
pub const DEFAULT_MODE: &str = "discard";

/// Accepted canonical mode names, as offered to users.
pub const MODE_NAMES: [&str; 5] = ["discard", "blend", "mean", "bob", "linear"];

/// Pause between attempts to get an output buffer.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(20);

/**
    How long to keep asking a busy sink for output buffers.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Sleep between attempts.
    pub interval: Duration,
    /// Give up after this many failed attempts (None = until cancelled).
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_RETRY_INTERVAL,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    /**
        Retry until the host cancels, pausing `interval` between attempts.
    */
    pub fn until_cancelled(interval: Duration) -> Self {
        Self {
            interval,
            max_attempts: None,
        }
    }

    /**
        Set the maximum number of failed attempts before giving up.
    */
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
}

/**
    Configuration for a deinterlacer.
*/
#[derive(Clone, Debug)]
pub struct DeinterlaceConfig {
    /// Configured mode value, as the host stored it (None = not set).
    pub mode: Option<String>,
    /// Output buffer retry behavior.
    pub retry: RetryPolicy,
}

impl Default for DeinterlaceConfig {
    fn default() -> Self {
        Self {
            mode: Some(DEFAULT_MODE.to_owned()),
            retry: RetryPolicy::default(),
        }
    }
}

impl DeinterlaceConfig {
    /**
        Create a new config with default settings (discard mode).
    */
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Set the mode value.
    */
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /**
        Clear the mode value, as if the host had none stored.
    */
    pub fn without_mode(mut self) -> Self {
        self.mode = None;
        self
    }

    /**
        Set the output buffer retry policy.
    */
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /**
        Resolve the configured mode value.
    */
    pub fn resolve_mode(&self) -> (Mode, Option<ConfigWarning>) {
        Mode::resolve(self.mode.as_deref())
    }
}
