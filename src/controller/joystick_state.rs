//! Raw joystick snapshot
//!
//! [`JoystickState`] is the fixed-capacity, allocation-free record a backend
//! fills once per poll. It is `Copy`, compares by value and hashes without
//! touching the packet number, so polling loops can cheaply detect whether a
//! device produced new input.
//!
//! ```text
//! Backend ──set_axis/set_button/set_hat──► JoystickState ──► Translator
//!                                             │
//!                                       packet_number (metadata only)
//! ```
//!
//! Readers are lenient and writers are strict: reading an axis outside
//! `0..MAX_AXES` yields a neutral value, writing one is an error.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Number of raw axes a snapshot can hold
pub const MAX_AXES: usize = 10;

/// Number of raw buttons a snapshot can hold (one bit each)
pub const MAX_BUTTONS: usize = 32;

/// Number of POV hats a snapshot can hold
pub const MAX_HATS: usize = 4;

/// Maps both ends of the `i16` range symmetrically onto `[-1.0, 1.0]`
const CONVERSION_FACTOR: f32 = 1.0 / (i16::MAX as f32 + 0.5);

/// Errors raised by the strict writers of [`JoystickState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Axis index {0} is out of range (expected < {max})", max = MAX_AXES)]
    OutOfRangeAxis(usize),

    #[error("Hat index {0} is out of range (expected < {max})", max = MAX_HATS)]
    OutOfRangeHat(usize),
}

// Button state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Direction bitmask of a POV hat
///
/// A hat reports up to two simultaneous directions (diagonals), encoded as
/// `up = 1`, `right = 2`, `down = 4`, `left = 8`. The same encoding is used by
/// `hH.D` sources in mapping records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HatPosition(u8);

impl HatPosition {
    pub const CENTERED: HatPosition = HatPosition(0);
    pub const UP: HatPosition = HatPosition(1);
    pub const RIGHT: HatPosition = HatPosition(2);
    pub const DOWN: HatPosition = HatPosition(4);
    pub const LEFT: HatPosition = HatPosition(8);
    pub const UP_RIGHT: HatPosition = HatPosition(1 | 2);
    pub const DOWN_RIGHT: HatPosition = HatPosition(4 | 2);
    pub const DOWN_LEFT: HatPosition = HatPosition(4 | 8);
    pub const UP_LEFT: HatPosition = HatPosition(1 | 8);

    /// Builds a position from its bitmask, `None` if bits above `left` are set
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits <= 0x0f {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_centered(self) -> bool {
        self.0 == 0
    }

    /// True if every direction bit of `direction` is currently active.
    ///
    /// A centred `direction` never matches.
    pub const fn contains(self, direction: HatPosition) -> bool {
        direction.0 != 0 && self.0 & direction.0 == direction.0
    }
}

impl std::ops::BitOr for HatPosition {
    type Output = HatPosition;

    fn bitor(self, rhs: Self) -> Self::Output {
        HatPosition(self.0 | rhs.0)
    }
}

/// Snapshot of one physical joystick's raw input
///
/// Equality and hashing cover `connected`, the button bitset, every axis and
/// every hat. The packet number is excluded: it says *when* the state was
/// produced, not *what* it contains.
#[derive(Clone, Copy, Debug, Default)]
pub struct JoystickState {
    axes: [i16; MAX_AXES],
    buttons: u32,
    hats: [HatPosition; MAX_HATS],
    packet_number: u32,
    connected: bool,
}

impl JoystickState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized axis value in `[-1.0, 1.0]`, `0.0` for unknown axes
    pub fn axis_normalized(&self, index: usize) -> f32 {
        (self.axis_raw(index) as f32 * CONVERSION_FACTOR).clamp(-1.0, 1.0)
    }

    /// Raw axis value, `0` for unknown axes
    pub fn axis_raw(&self, index: usize) -> i16 {
        self.axes.get(index).copied().unwrap_or(0)
    }

    pub fn button_state(&self, index: usize) -> ButtonState {
        if self.is_down(index) {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }

    /// Bit test on the button set. Ordinals past `MAX_BUTTONS` read as released.
    pub fn is_down(&self, index: usize) -> bool {
        button_bit(index).is_some_and(|bit| self.buttons & bit != 0)
    }

    pub fn is_up(&self, index: usize) -> bool {
        !self.is_down(index)
    }

    /// Hat position, centred for unknown hats
    pub fn hat(&self, index: usize) -> HatPosition {
        self.hats.get(index).copied().unwrap_or_default()
    }

    pub fn buttons(&self) -> u32 {
        self.buttons
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn packet_number(&self) -> u32 {
        self.packet_number
    }

    /// Writes a raw axis value. Fails for axes outside `0..MAX_AXES`.
    pub fn set_axis(&mut self, index: usize, value: i16) -> Result<(), StateError> {
        let slot = self
            .axes
            .get_mut(index)
            .ok_or(StateError::OutOfRangeAxis(index))?;
        *slot = value;
        Ok(())
    }

    pub fn set_button(&mut self, index: usize, pressed: bool) {
        // Backend-trusted: ordinals are validated against capabilities upstream
        let Some(bit) = button_bit(index) else {
            return;
        };
        if pressed {
            self.buttons |= bit;
        } else {
            self.buttons &= !bit;
        }
    }

    pub fn set_hat(&mut self, index: usize, position: HatPosition) -> Result<(), StateError> {
        let slot = self
            .hats
            .get_mut(index)
            .ok_or(StateError::OutOfRangeHat(index))?;
        *slot = position;
        Ok(())
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn set_packet_number(&mut self, packet_number: u32) {
        self.packet_number = packet_number;
    }
}

fn button_bit(index: usize) -> Option<u32> {
    u32::try_from(index)
        .ok()
        .and_then(|shift| 1u32.checked_shl(shift))
}

impl PartialEq for JoystickState {
    fn eq(&self, other: &Self) -> bool {
        self.connected == other.connected
            && self.buttons == other.buttons
            && self.axes == other.axes
            && self.hats == other.hats
    }
}

impl Eq for JoystickState {}

impl Hash for JoystickState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must stay in sync with PartialEq: packet_number is left out
        self.buttons.hash(state);
        self.connected.hash(state);
        self.axes.hash(state);
        self.hats.hash(state);
    }
}

impl fmt::Display for JoystickState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Axes: ")?;
        for index in 0..MAX_AXES {
            write!(f, "{:.4}; ", self.axis_normalized(index))?;
        }
        write!(f, "Buttons: {:032b}; Hats: ", self.buttons)?;
        for hat in &self.hats {
            write!(f, "{:04b}; ", hat.bits())?;
        }
        write!(f, "IsConnected: {}}}", self.connected)
    }
}
