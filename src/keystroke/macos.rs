use std::time::Duration;

use rdev::{simulate, EventType, Key};

use super::Chord;
use crate::error::AutomationError;

/// macOS drops synthetic events sent back to back; give each one a moment.
const EVENT_GAP: Duration = Duration::from_millis(20);

fn chord_key(chord: Chord) -> Key {
    match chord {
        Chord::Copy => Key::KeyC,
        Chord::Paste => Key::KeyV,
    }
}

fn send(event: EventType) -> Result<(), AutomationError> {
    simulate(&event)
        .map_err(|e| AutomationError::Keystroke(format!("{event:?}: {e:?}")))?;
    std::thread::sleep(EVENT_GAP);
    Ok(())
}

/// Press Cmd+<key> and release both, even if pressing the key failed.
pub fn send_chord(chord: Chord) -> Result<(), AutomationError> {
    let key = chord_key(chord);
    log::debug!("Sending Cmd+{key:?}");

    send(EventType::KeyPress(Key::MetaLeft))?;
    let pressed = send(EventType::KeyPress(key)).and_then(|()| send(EventType::KeyRelease(key)));
    let released = send(EventType::KeyRelease(Key::MetaLeft));
    pressed.and(released)
}
