use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Startup failures. The only errors that end the process with a non-zero status.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY not set.")]
    MissingApiKey,
}

/// Failures talking to the completion service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no usable text")]
    EmptyResponse,
}

/// Failures of the OS-level helpers: clipboard, keystrokes, notifications.
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} exited with status {status}")]
    ExitStatus { command: String, status: ExitStatus },

    #[error("{0} returned text that is not valid UTF-8")]
    NotUtf8(String),

    #[error("keystroke simulation failed: {0}")]
    Keystroke(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0} is not supported on this platform")]
    #[cfg_attr(any(target_os = "macos", target_os = "linux"), allow(dead_code))]
    Unsupported(&'static str),
}

/// Everything that can stop a single correction run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("No text found in clipboard.")]
    EmptyInput,

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Automation(#[from] AutomationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_names_the_capability() {
        let err = AutomationError::Unsupported("keystroke simulation");
        assert_eq!(
            err.to_string(),
            "keystroke simulation is not supported on this platform"
        );
    }

    #[test]
    fn empty_input_message_matches_log_line() {
        assert_eq!(
            ProcessError::EmptyInput.to_string(),
            "No text found in clipboard."
        );
    }
}
