//! # Notice Store
//!
//! Transient user-facing notices ("added to cart", "login failed", ...).
//!
//! The web client auto-hid its toast with a timer. This store keeps the
//! synchronous execution model instead: a notice carries the instant it
//! was raised, and [`NoticeStore::current`] evaluates visibility at read
//! time. Nothing blocks, nothing fires in the background.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::DEFAULT_NOTICE_TTL;

// =============================================================================
// Notice Level
// =============================================================================

/// Severity of a notice, used by the UI to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl Default for NoticeLevel {
    fn default() -> Self {
        NoticeLevel::Info
    }
}

// =============================================================================
// Notice
// =============================================================================

/// A single notice. Never persisted; lives only while visible.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    level: NoticeLevel,
    raised_at: Instant,
}

impl Notice {
    /// The text to show.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The severity to style with.
    #[inline]
    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    /// How long ago this notice was raised.
    #[inline]
    pub fn age(&self) -> Duration {
        self.raised_at.elapsed()
    }
}

// =============================================================================
// Notice Store
// =============================================================================

/// Holds at most one current notice; publishing replaces it.
#[derive(Debug)]
pub struct NoticeStore {
    current: Option<Notice>,
    ttl: Duration,
}

impl NoticeStore {
    /// Creates a store with the default time-to-live (3 s).
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_NOTICE_TTL)
    }

    /// Creates a store with a custom time-to-live.
    pub fn with_ttl(ttl: Duration) -> Self {
        NoticeStore { current: None, ttl }
    }

    /// How long a published notice stays visible.
    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Publishes a notice, replacing whatever was current.
    pub fn publish(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.current = Some(Notice {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        });
    }

    /// Publishes a success notice.
    pub fn success(&mut self, message: impl Into<String>) {
        self.publish(message, NoticeLevel::Success);
    }

    /// Publishes an error notice.
    pub fn error(&mut self, message: impl Into<String>) {
        self.publish(message, NoticeLevel::Error);
    }

    /// Publishes an info notice.
    pub fn info(&mut self, message: impl Into<String>) {
        self.publish(message, NoticeLevel::Info);
    }

    /// Publishes a warning notice.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.publish(message, NoticeLevel::Warning);
    }

    /// The notice to display right now, if any.
    ///
    /// A notice older than the TTL is no longer visible; expiry is
    /// decided here, at read time, not by a timer.
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().filter(|n| n.age() < self.ttl)
    }

    /// Drops the current notice immediately, before its TTL runs out.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NoticeStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
