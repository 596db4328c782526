//! Raw joystick state to semantic gamepad state
//!
//! [`translate`] applies one [`MappingEntry`] to one [`JoystickState`]. Every
//! control gets an analog value and a pressed flag regardless of its source:
//!
//! | Source   | Value                          | Pressed                      |
//! |----------|--------------------------------|------------------------------|
//! | Button   | 1.0 / 0.0                      | button is down               |
//! | Axis     | normalized, sign-flipped if `-`| value > [`AXIS_BUTTON_THRESHOLD`] |
//! | Hat      | 1.0 / 0.0                      | hat holds every bound bit    |
//! | Unbound  | 0.0                            | never                        |

use crate::controller::joystick_state::JoystickState;
use crate::mapping::mapping_types::{GamePadControl, InputSource, CONTROL_COUNT};
use crate::mapping::parser::MappingEntry;

/// Axis value above which an axis-bound button counts as pressed
pub const AXIS_BUTTON_THRESHOLD: f32 = 0.5;

/// Position of an analog stick, both components in [-1.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StickPosition {
    pub x: f32,
    pub y: f32,
}

/// Semantic view of one controller after mapping
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GamePadState {
    values: [f32; CONTROL_COUNT],
    pressed: u32,
    pub connected: bool,
    pub packet_number: u32,
}

impl GamePadState {
    pub fn value(&self, control: GamePadControl) -> f32 {
        self.values[control.index()]
    }

    pub fn is_pressed(&self, control: GamePadControl) -> bool {
        self.pressed & (1 << control.index()) != 0
    }

    pub fn left_stick(&self) -> StickPosition {
        StickPosition {
            x: self.value(GamePadControl::LeftX),
            y: self.value(GamePadControl::LeftY),
        }
    }

    pub fn right_stick(&self) -> StickPosition {
        StickPosition {
            x: self.value(GamePadControl::RightX),
            y: self.value(GamePadControl::RightY),
        }
    }

    pub fn left_trigger(&self) -> f32 {
        self.value(GamePadControl::LeftTrigger)
    }

    pub fn right_trigger(&self) -> f32 {
        self.value(GamePadControl::RightTrigger)
    }

    /// Controls currently pressed, in [`GamePadControl::ALL`] order
    pub fn pressed_controls(&self) -> impl Iterator<Item = GamePadControl> + '_ {
        GamePadControl::ALL
            .into_iter()
            .filter(move |control| self.is_pressed(*control))
    }

    fn set(&mut self, control: GamePadControl, value: f32, pressed: bool) {
        self.values[control.index()] = value;
        if pressed {
            self.pressed |= 1 << control.index();
        } else {
            self.pressed &= !(1 << control.index());
        }
    }
}

/// Applies `entry` to `raw`
pub fn translate(entry: &MappingEntry, raw: &JoystickState) -> GamePadState {
    let mut state = GamePadState {
        connected: raw.is_connected(),
        packet_number: raw.packet_number(),
        ..GamePadState::default()
    };

    for (control, source) in entry.bindings() {
        let (value, pressed) = read_source(source, raw);
        state.set(control, value, pressed);
    }

    state
}

fn read_source(source: InputSource, raw: &JoystickState) -> (f32, bool) {
    match source {
        InputSource::Unbound => (0.0, false),
        InputSource::Button(index) => digital(raw.is_down(usize::from(index))),
        InputSource::Axis { index, inverted } => {
            let value = raw.axis_normalized(usize::from(index));
            let value = if inverted { -value } else { value };
            (value, value > AXIS_BUTTON_THRESHOLD)
        }
        InputSource::Hat { index, direction } => {
            digital(raw.hat(usize::from(index)).contains(direction))
        }
    }
}

fn digital(pressed: bool) -> (f32, bool) {
    (if pressed { 1.0 } else { 0.0 }, pressed)
}
