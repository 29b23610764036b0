//! Resolution of CLI options into the server's stream settings.
//!
//! Thin I/O wrapper around the core config: reads the optional text file,
//! applies defaults and the all-defaults demo rule, and never fails: an
//! unreadable or empty file falls back to the literal message, then to the
//! built-in default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::error;

/// Message used when neither a readable text file nor `--message` is given.
pub const DEFAULT_MESSAGE: &str = "This is our test streaming server.";

const DEFAULT_WORDS_PER_SECOND: u32 = 2;
const DEFAULT_REPEAT_COUNT: u32 = 1;

/// Stream length applied when every stream flag is left unset: a
/// long-running demo stream instead of a single quick pass.
const ALL_DEFAULTS_DEMO_DURATION: Duration = Duration::from_secs(3600);

/// Raw stream-related CLI options, before defaulting. `None` means the flag
/// was not supplied, which the demo rule below distinguishes from an
/// explicit default-valued flag.
#[derive(Debug, Default)]
pub struct StreamOptions {
    pub text_file: Option<PathBuf>,
    pub message: Option<String>,
    pub words_per_second: Option<u32>,
    pub repeat_count: Option<u32>,
    pub stream_duration: Option<u64>,
}

/// Fully resolved stream settings.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub message: String,
    pub words_per_second: u32,
    pub repeat_count: u32,
    pub stream_duration: Option<Duration>,
}

pub fn resolve(opts: StreamOptions) -> ResolvedOptions {
    // The demo rule keys off what was explicitly supplied, so decide it
    // before any defaulting happens.
    let all_defaults = opts.text_file.is_none()
        && opts.message.is_none()
        && opts.words_per_second.is_none()
        && opts.repeat_count.is_none()
        && opts.stream_duration.is_none();

    let message = resolve_message(opts.text_file.as_deref(), opts.message);

    let stream_duration = if all_defaults {
        Some(ALL_DEFAULTS_DEMO_DURATION)
    } else {
        opts.stream_duration.map(Duration::from_secs)
    };

    ResolvedOptions {
        message,
        words_per_second: opts.words_per_second.unwrap_or(DEFAULT_WORDS_PER_SECOND),
        repeat_count: opts.repeat_count.unwrap_or(DEFAULT_REPEAT_COUNT),
        stream_duration,
    }
}

fn resolve_message(text_file: Option<&Path>, message: Option<String>) -> String {
    if let Some(path) = text_file {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if !contents.is_empty() {
                    return contents.to_string();
                }
                error!(path = %path.display(), "Text file is empty, falling back");
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error reading text file, falling back");
            }
        }
    }
    message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defaults_activates_the_hour_long_demo_stream() {
        let resolved = resolve(StreamOptions::default());
        assert_eq!(resolved.message, DEFAULT_MESSAGE);
        assert_eq!(resolved.words_per_second, 2);
        assert_eq!(resolved.repeat_count, 1);
        assert_eq!(resolved.stream_duration, Some(Duration::from_secs(3600)));
    }

    #[test]
    fn any_explicit_flag_suppresses_the_demo_duration() {
        // Explicitly passing a flag counts, even at its default value.
        let resolved = resolve(StreamOptions {
            words_per_second: Some(2),
            ..Default::default()
        });
        assert_eq!(resolved.stream_duration, None);

        let resolved = resolve(StreamOptions {
            message: Some("alpha beta".into()),
            ..Default::default()
        });
        assert_eq!(resolved.message, "alpha beta");
        assert_eq!(resolved.stream_duration, None);
    }

    #[test]
    fn explicit_duration_is_used_verbatim() {
        let resolved = resolve(StreamOptions {
            stream_duration: Some(5),
            ..Default::default()
        });
        assert_eq!(resolved.stream_duration, Some(Duration::from_secs(5)));
    }

    #[test]
    fn unreadable_text_file_falls_back_to_message_then_default() {
        let missing = PathBuf::from("/definitely/not/here.txt");

        let resolved = resolve(StreamOptions {
            text_file: Some(missing.clone()),
            message: Some("fallback words".into()),
            ..Default::default()
        });
        assert_eq!(resolved.message, "fallback words");

        let resolved = resolve(StreamOptions {
            text_file: Some(missing),
            ..Default::default()
        });
        assert_eq!(resolved.message, DEFAULT_MESSAGE);
        // A supplied (if broken) text file still counts as explicit config.
        assert_eq!(resolved.stream_duration, None);
    }

    #[test]
    fn readable_text_file_wins_over_message_and_gets_trimmed() {
        let path = std::env::temp_dir().join("mockstream-config-test.txt");
        std::fs::write(&path, "  from the file  \n").unwrap();

        let resolved = resolve(StreamOptions {
            text_file: Some(path.clone()),
            message: Some("ignored".into()),
            ..Default::default()
        });
        std::fs::remove_file(&path).unwrap();

        assert_eq!(resolved.message, "from the file");
    }

    #[test]
    fn empty_text_file_falls_back_like_a_read_failure() {
        let path = std::env::temp_dir().join("mockstream-config-empty.txt");
        std::fs::write(&path, "   \n").unwrap();

        let resolved = resolve(StreamOptions {
            text_file: Some(path.clone()),
            ..Default::default()
        });
        std::fs::remove_file(&path).unwrap();

        assert_eq!(resolved.message, DEFAULT_MESSAGE);
    }
}
