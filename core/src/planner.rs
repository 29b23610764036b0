use std::sync::Arc;
use std::time::Duration;

use crate::config::StreamConfig;

/// Lazy emission schedule for one stream session: `(word, due_offset)`
/// pairs, where the offset is relative to a start instant the consumer owns.
///
/// Pure and clock-free. With a stream duration configured the sequence loops
/// forever and the consumer's wall-clock cutoff is the only stop; otherwise
/// it ends after the configured number of passes (a repeat count of 0 plays
/// one pass). Each request builds its own planner, so concurrent sessions
/// never share pacing state.
#[derive(Debug)]
pub struct StreamPlanner {
    config: Arc<StreamConfig>,
    interval_secs: f64,
    /// Passes still to play. `None` loops until the consumer stops pulling.
    passes_left: Option<u32>,
    position: usize,
    emitted: u64,
    done: bool,
}

impl StreamPlanner {
    pub fn new(config: Arc<StreamConfig>) -> Self {
        let passes_left = if config.stream_duration.is_some() {
            None
        } else {
            Some(config.repeat_count.max(1))
        };
        Self {
            interval_secs: config.interval().as_secs_f64(),
            config,
            passes_left,
            position: 0,
            emitted: 0,
            done: false,
        }
    }
}

impl Iterator for StreamPlanner {
    type Item = (String, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let word = self.config.words[self.position].clone();
        self.position += 1;
        self.emitted += 1;
        // First word is due one interval after start; spacing stays uniform
        // across pass boundaries.
        let due = Duration::from_secs_f64(self.interval_secs * self.emitted as f64);

        if self.position == self.config.words.len() {
            self.position = 0;
            if let Some(passes) = &mut self.passes_left {
                *passes -= 1;
                if *passes == 0 {
                    self.done = true;
                }
            }
        }

        Some((word, due))
    }
}
