use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::AutomationError;

/// Plain-text access to the shared system clipboard.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, AutomationError>;
    fn write_text(&mut self, text: &str) -> Result<(), AutomationError>;
}

/// External commands used to read and write the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tools {
    copy: (&'static str, Vec<&'static str>),
    paste: (&'static str, Vec<&'static str>),
}

/// Clipboard backed by the platform's command-line tools.
/// Uses pbcopy/pbpaste on macOS, wl-copy/wl-paste on Wayland, xclip on X11.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "macos")]
fn tools() -> Result<Tools, AutomationError> {
    Ok(Tools {
        copy: ("pbcopy", vec![]),
        paste: ("pbpaste", vec![]),
    })
}

#[cfg(target_os = "linux")]
fn tools() -> Result<Tools, AutomationError> {
    let session_type = std::env::var("XDG_SESSION_TYPE").unwrap_or_default();
    Ok(linux_tools(&session_type))
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn tools() -> Result<Tools, AutomationError> {
    Err(AutomationError::Unsupported("clipboard access"))
}

#[cfg(target_os = "linux")]
fn linux_tools(session_type: &str) -> Tools {
    if session_type == "wayland" {
        Tools {
            copy: ("wl-copy", vec![]),
            paste: ("wl-paste", vec!["--no-newline"]),
        }
    } else {
        Tools {
            copy: ("xclip", vec!["-selection", "clipboard"]),
            paste: ("xclip", vec!["-selection", "clipboard", "-o"]),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, AutomationError> {
        let (cmd, args) = tools()?.paste;

        let output = Command::new(cmd)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| AutomationError::Spawn {
                command: cmd.to_string(),
                source,
            })?;

        // An empty clipboard makes some tools exit non-zero; treat that as no text.
        if !output.status.success() {
            if output.stdout.is_empty() {
                log::debug!("{cmd} exited with {} and no output", output.status);
                return Ok(String::new());
            }
            return Err(AutomationError::ExitStatus {
                command: cmd.to_string(),
                status: output.status,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| AutomationError::NotUtf8(cmd.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), AutomationError> {
        let (cmd, args) = tools()?.copy;

        let mut child = Command::new(cmd)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AutomationError::Spawn {
                command: cmd.to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(AutomationError::ExitStatus {
                command: cmd.to_string(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn wayland_uses_wl_clipboard() {
        let tools = linux_tools("wayland");
        assert_eq!(tools.copy.0, "wl-copy");
        assert_eq!(tools.paste, ("wl-paste", vec!["--no-newline"]));
    }

    #[test]
    fn everything_else_uses_xclip() {
        for session in ["x11", "", "tty"] {
            let tools = linux_tools(session);
            assert_eq!(tools.copy, ("xclip", vec!["-selection", "clipboard"]));
            assert_eq!(tools.paste.1.last(), Some(&"-o"));
        }
    }
}
