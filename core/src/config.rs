use std::time::Duration;

use crate::error::StreamError;

/// Immutable stream configuration, set once at startup.
///
/// Shared read-only across all concurrent sessions (wrap it in an `Arc`);
/// each request derives its own session state from it and never writes back.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Message to stream, split into whitespace-separated words. Never empty.
    pub words: Vec<String>,
    /// Emission rate; the inverse is the inter-word interval.
    pub words_per_second: u32,
    /// How many times to play the message. 0 means "until the duration
    /// cutoff" (a single pass when no duration is set).
    pub repeat_count: u32,
    /// Hard wall-clock cap on a stream. When set it dominates
    /// `repeat_count`, even mid-pass.
    pub stream_duration: Option<Duration>,
}

impl StreamConfig {
    /// Build a config from raw message text, splitting it into words.
    pub fn new(
        message: &str,
        words_per_second: u32,
        repeat_count: u32,
        stream_duration: Option<Duration>,
    ) -> Result<Self, StreamError> {
        if words_per_second == 0 {
            return Err(StreamError::Config(
                "words-per-second must be positive".into(),
            ));
        }
        if stream_duration.is_some_and(|d| d.is_zero()) {
            return Err(StreamError::Config(
                "stream-duration must be positive".into(),
            ));
        }
        let words: Vec<String> = message.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return Err(StreamError::Config(
                "message must contain at least one word".into(),
            ));
        }
        Ok(Self {
            words,
            words_per_second,
            repeat_count,
            stream_duration,
        })
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Delay between consecutive words.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.words_per_second))
    }

    /// Wall-clock length of one full pass over the message.
    pub fn pass_duration(&self) -> Duration {
        self.interval() * self.words.len() as u32
    }

    /// The cap actually applied to a stream: the configured duration, or the
    /// time the repeat count takes at the configured pace. A repeat count of
    /// 0 without a duration still gets its single pass.
    pub fn effective_duration(&self) -> Duration {
        self.stream_duration
            .unwrap_or_else(|| self.pass_duration() * self.repeat_count.max(1))
    }
}
