use std::process::{Command, Stdio};

use crate::error::AutomationError;

/// Fire-and-forget desktop notifications.
pub trait Notifier {
    fn notify(&mut self, title: &str, message: &str) -> Result<(), AutomationError>;
}

/// Notifications through `osascript` on macOS and `notify-send` on Linux.
#[derive(Debug, Default)]
pub struct SystemNotifier;

impl SystemNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Quote `s` as an AppleScript string literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(target_os = "macos")]
fn command(title: &str, message: &str) -> Result<Command, AutomationError> {
    let script = format!(
        "display notification {} with title {}",
        applescript_string(message),
        applescript_string(title)
    );
    let mut cmd = Command::new("osascript");
    cmd.arg("-e").arg(script);
    Ok(cmd)
}

#[cfg(target_os = "linux")]
fn command(title: &str, message: &str) -> Result<Command, AutomationError> {
    let mut cmd = Command::new("notify-send");
    cmd.arg("--app-name=text-corrector").arg(title).arg(message);
    Ok(cmd)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn command(_title: &str, _message: &str) -> Result<Command, AutomationError> {
    Err(AutomationError::Unsupported("desktop notifications"))
}

impl Notifier for SystemNotifier {
    fn notify(&mut self, title: &str, message: &str) -> Result<(), AutomationError> {
        let mut cmd = command(title, message)?;
        let program = cmd.get_program().to_string_lossy().into_owned();

        let status = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| AutomationError::Spawn {
                command: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(AutomationError::ExitStatus {
                command: program,
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_just_quoted() {
        assert_eq!(applescript_string("Text Processing"), "\"Text Processing\"");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(
            applescript_string(r#"say "hi" \o/"#),
            r#""say \"hi\" \\o/""#
        );
    }
}
