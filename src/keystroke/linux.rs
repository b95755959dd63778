use std::time::Duration;

use evdev::uinput::VirtualDevice;
use evdev::{AttributeSet, EventType, InputEvent, KeyCode};

use super::Chord;
use crate::error::AutomationError;

/// Time for the compositor / X server to pick up a freshly created device.
/// Events emitted before that are silently lost.
const DEVICE_SETTLE: Duration = Duration::from_millis(200);

const PRESS: i32 = 1;
const RELEASE: i32 = 0;

fn chord_key(chord: Chord) -> KeyCode {
    match chord {
        Chord::Copy => KeyCode::KEY_C,
        Chord::Paste => KeyCode::KEY_V,
    }
}

fn key_event(key: KeyCode, value: i32) -> InputEvent {
    InputEvent::new(EventType::KEY.0, key.code(), value)
}

/// A uinput keyboard able to type Ctrl+C and Ctrl+V.
pub struct VirtualKeyboard {
    device: VirtualDevice,
}

impl VirtualKeyboard {
    pub fn new() -> Result<Self, AutomationError> {
        let mut keys = AttributeSet::<KeyCode>::new();
        for key in [KeyCode::KEY_LEFTCTRL, KeyCode::KEY_C, KeyCode::KEY_V] {
            keys.insert(key);
        }

        let device = VirtualDevice::builder()
            .and_then(|b| b.name("text-corrector keyboard").with_keys(&keys))
            .and_then(|b| b.build())
            .map_err(|e| {
                AutomationError::Keystroke(format!(
                    "cannot create virtual keyboard (is /dev/uinput writable?): {e}"
                ))
            })?;

        log::info!("Virtual keyboard created");
        std::thread::sleep(DEVICE_SETTLE);
        Ok(Self { device })
    }

    pub fn send_chord(&mut self, chord: Chord) -> Result<(), AutomationError> {
        let key = chord_key(chord);
        log::debug!("Sending Ctrl+{key:?}");

        // emit() appends the SYN_REPORT, so each batch lands as one frame.
        self.device.emit(&[
            key_event(KeyCode::KEY_LEFTCTRL, PRESS),
            key_event(key, PRESS),
        ])?;
        self.device.emit(&[
            key_event(key, RELEASE),
            key_event(KeyCode::KEY_LEFTCTRL, RELEASE),
        ])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chords_map_to_c_and_v() {
        assert_eq!(chord_key(Chord::Copy), KeyCode::KEY_C);
        assert_eq!(chord_key(Chord::Paste), KeyCode::KEY_V);
    }

    #[test]
    fn key_events_carry_press_state() {
        let event = key_event(KeyCode::KEY_LEFTCTRL, PRESS);
        assert_eq!(event.event_type(), EventType::KEY);
        assert_eq!(event.code(), KeyCode::KEY_LEFTCTRL.code());
        assert_eq!(event.value(), 1);
    }
}
