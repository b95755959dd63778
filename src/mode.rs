use std::fmt;

/// The flag that switches a run from correcting to rephrasing.
pub const REPHRASE_FLAG: &str = "--rephrase";

const CORRECT_INSTRUCTION: &str = "You are a helpful assistant who corrects grammar and spelling. \
Keep the original meaning intact.";

const REPHRASE_INSTRUCTION: &str =
    "You are a helpful assistant who rephrases text for clarity and conciseness.";

/// What a run does to the selected text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Fix grammar and spelling, keep the meaning.
    #[default]
    Correct,
    /// Rewrite for clarity and conciseness.
    Rephrase,
}

impl Mode {
    /// Pick the mode from the process arguments (program name excluded).
    /// Only an exact `--rephrase` in first position selects `Rephrase`.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match args.into_iter().next() {
            Some(first) if first.as_ref() == REPHRASE_FLAG => Mode::Rephrase,
            _ => Mode::Correct,
        }
    }

    /// System-level directive sent along with the clipboard text.
    pub fn instruction(self) -> &'static str {
        match self {
            Mode::Correct => CORRECT_INSTRUCTION,
            Mode::Rephrase => REPHRASE_INSTRUCTION,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Correct => f.write_str("correct"),
            Mode::Rephrase => f.write_str("rephrase"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_defaults_to_correct() {
        assert_eq!(Mode::from_args(Vec::<String>::new()), Mode::Correct);
    }

    #[test]
    fn rephrase_flag_selects_rephrase() {
        assert_eq!(Mode::from_args(["--rephrase"]), Mode::Rephrase);
        assert_eq!(
            Mode::from_args(["--rephrase", "extra"]),
            Mode::Rephrase
        );
    }

    #[test]
    fn anything_else_falls_back_to_correct() {
        for arg in ["--correct", "rephrase", "--Rephrase", "--rephrase ", "", "-r"] {
            assert_eq!(Mode::from_args([arg]), Mode::Correct, "arg {arg:?}");
        }
        // The flag only counts in first position.
        assert_eq!(Mode::from_args(["foo", "--rephrase"]), Mode::Correct);
    }

    #[test]
    fn instructions_are_distinct_and_stable() {
        assert_ne!(Mode::Correct.instruction(), Mode::Rephrase.instruction());
        assert_eq!(Mode::Correct.instruction(), Mode::Correct.instruction());
        assert!(Mode::Correct.instruction().contains("grammar and spelling"));
        assert!(Mode::Rephrase.instruction().contains("clarity and conciseness"));
    }

    #[test]
    fn displays_lowercase_name() {
        assert_eq!(Mode::Correct.to_string(), "correct");
        assert_eq!(Mode::Rephrase.to_string(), "rephrase");
    }
}
