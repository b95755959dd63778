//! Copy/paste chord simulation for the foreground application.
//!
//! macOS sends Cmd+C / Cmd+V through rdev (needs the Accessibility
//! permission). Linux sends Ctrl+C / Ctrl+V through a uinput virtual
//! keyboard (needs write access to /dev/uinput).

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;

use crate::error::AutomationError;

/// The two clipboard chords a run needs.
pub trait Keystrokes {
    fn copy(&mut self) -> Result<(), AutomationError>;
    fn paste(&mut self) -> Result<(), AutomationError>;
}

/// Which chord to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chord {
    Copy,
    Paste,
}

/// Keystrokes delivered to whatever window currently has focus.
#[derive(Default)]
pub struct SystemKeystrokes {
    #[cfg(target_os = "linux")]
    keyboard: Option<linux::VirtualKeyboard>,
}

impl SystemKeystrokes {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(target_os = "macos")]
    fn send(&mut self, chord: Chord) -> Result<(), AutomationError> {
        macos::send_chord(chord)
    }

    #[cfg(target_os = "linux")]
    fn send(&mut self, chord: Chord) -> Result<(), AutomationError> {
        // The virtual device is only created on first use so that a run
        // aborted before any keystroke never touches /dev/uinput.
        let keyboard = match self.keyboard.take() {
            Some(keyboard) => keyboard,
            None => linux::VirtualKeyboard::new()?,
        };
        self.keyboard.insert(keyboard).send_chord(chord)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    fn send(&mut self, _chord: Chord) -> Result<(), AutomationError> {
        Err(AutomationError::Unsupported("keystroke simulation"))
    }
}

impl Keystrokes for SystemKeystrokes {
    fn copy(&mut self) -> Result<(), AutomationError> {
        self.send(Chord::Copy)
    }

    fn paste(&mut self) -> Result<(), AutomationError> {
        self.send(Chord::Paste)
    }
}
