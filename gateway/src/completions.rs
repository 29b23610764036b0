//! OpenAI-compatible streaming completion endpoint (`POST /v1/chat/completions`).
//!
//! Replays the configured message word by word as SSE delta chunks at the
//! configured pace. The request body is ignored; the stream ends by closing
//! the connection, never with a `[DONE]` sentinel.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures::stream::{self, Stream};
use serde::Serialize;
use tokio::time::{Instant, sleep_until};
use tracing::info;

use mockstream_core::StreamPlanner;

use crate::server::GatewayState;

/// One streamed chunk: a single word as an OpenAI-style delta.
#[derive(Debug, Serialize)]
pub struct CompletionChunk {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct Choice {
    pub delta: Delta,
}

#[derive(Debug, Serialize)]
pub struct Delta {
    pub content: String,
}

impl CompletionChunk {
    /// Chunk carrying one word. The trailing space is part of the wire
    /// contract: clients concatenate delta contents verbatim.
    pub fn word(word: &str) -> Self {
        Self {
            choices: vec![Choice {
                delta: Delta {
                    content: format!("{word} "),
                },
            }],
        }
    }
}

/// Handler for `POST /v1/chat/completions`.
///
/// Builds a fresh planner for the session and realizes its schedule against
/// the wall clock: check the duration cutoff, sleep to the word's absolute
/// deadline, emit one `data:` frame. Each frame is flushed as its own chunk.
/// A client disconnect drops the stream mid-await, cancelling the pending
/// timer and the rest of the session; other sessions are unaffected.
pub async fn chat_completions(
    State(state): State<GatewayState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let config = state.config;
    let cutoff = config.effective_duration();
    info!(
        words = config.word_count(),
        words_per_second = config.words_per_second,
        cutoff_secs = cutoff.as_secs_f64(),
        "Starting completion stream"
    );

    let start = Instant::now();
    let planner = StreamPlanner::new(config);

    let stream = stream::unfold(planner, move |mut planner| async move {
        let (word, due) = planner.next()?;
        // The wall-clock cap dominates the planner's pass logic; this is
        // what ends a duration-bounded stream mid-pass.
        if start.elapsed() >= cutoff {
            return None;
        }
        sleep_until(start + due).await;
        let event = Event::default()
            .json_data(CompletionChunk::word(&word))
            .unwrap();
        Some((Ok(event), planner))
    });

    Sse::new(stream)
}
