//! gilrs backed joystick input
//!
//! gilrs is built without its own mapping database and filters so that
//! gamepads come through unmapped: raw axes and buttons are numbered by
//! ascending native event code, and the d-pad axes become hat 0.

use gilrs::{Axis, Gamepad, Gilrs, GilrsBuilder};
use tracing::{debug, info};

use crate::controller::backend::{BackendError, JoystickBackend, JoystickDevice};
use crate::controller::joystick_state::{
    HatPosition, JoystickState, MAX_AXES, MAX_BUTTONS,
};
use crate::mapping::guid::DeviceGuid;

// Hat direction threshold on the d-pad axes
const HAT_THRESHOLD: f32 = 0.5;

#[derive(Debug)]
pub struct GilrsBackend {
    gilrs: Gilrs,
}

impl GilrsBackend {
    pub fn new() -> Result<Self, BackendError> {
        info!("Initializing gilrs controller interface");
        let gilrs = GilrsBuilder::new()
            .with_default_filters(false)
            .add_included_mappings(false)
            .add_env_mappings(false)
            .build()
            .map_err(|e| BackendError::InitializationError(e.to_string()))?;

        for (id, gamepad) in gilrs.gamepads() {
            info!(
                "  ID: {}, Name: {}, UUID: {}",
                id,
                gamepad.name(),
                DeviceGuid::from(gamepad.uuid())
            );
        }
        Ok(Self { gilrs })
    }

    fn gamepad(&self, id: usize) -> Option<Gamepad<'_>> {
        self.gilrs
            .gamepads()
            .find(|(gamepad_id, _)| usize::from(*gamepad_id) == id)
            .map(|(_, gamepad)| gamepad)
    }
}

impl JoystickBackend for GilrsBackend {
    fn name(&self) -> &str {
        "gilrs"
    }

    fn refresh(&mut self) -> Result<(), BackendError> {
        while let Some(event) = self.gilrs.next_event() {
            debug!("Processing gilrs event: {:?}", event);
        }
        Ok(())
    }

    fn devices(&self) -> Vec<JoystickDevice> {
        self.gilrs
            .gamepads()
            .map(|(id, gamepad)| JoystickDevice {
                id: usize::from(id),
                guid: DeviceGuid::from(gamepad.uuid()),
                name: gamepad.name().to_string(),
            })
            .collect()
    }

    fn read_state(&self, id: usize, state: &mut JoystickState) -> Result<(), BackendError> {
        let gamepad = self.gamepad(id).ok_or(BackendError::DeviceNotFound(id))?;

        let mut next = JoystickState::new();
        next.set_packet_number(state.packet_number());
        next.set_connected(gamepad.is_connected());

        let hat_codes = [
            gamepad.axis_code(Axis::DPadX),
            gamepad.axis_code(Axis::DPadY),
        ];

        let mut axes: Vec<(u32, f32)> = gamepad
            .state()
            .axes()
            .filter(|(code, _)| !hat_codes.contains(&Some(*code)))
            .map(|(code, data)| (code.into_u32(), data.value()))
            .collect();
        axes.sort_by_key(|(code, _)| *code);
        for (ordinal, (_, value)) in axes.into_iter().take(MAX_AXES).enumerate() {
            next.set_axis(ordinal, to_raw_axis(value))?;
        }

        let mut buttons: Vec<(u32, bool)> = gamepad
            .state()
            .buttons()
            .map(|(code, data)| (code.into_u32(), data.is_pressed()))
            .collect();
        buttons.sort_by_key(|(code, _)| *code);
        for (ordinal, (_, pressed)) in buttons.into_iter().take(MAX_BUTTONS).enumerate() {
            next.set_button(ordinal, pressed);
        }

        let hat = hat_position(gamepad.value(Axis::DPadX), gamepad.value(Axis::DPadY));
        next.set_hat(0, hat)?;

        *state = next;
        Ok(())
    }
}

fn to_raw_axis(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16
}

// gilrs reports up as positive y
fn hat_position(x: f32, y: f32) -> HatPosition {
    let mut hat = HatPosition::CENTERED;
    if y > HAT_THRESHOLD {
        hat = hat | HatPosition::UP;
    } else if y < -HAT_THRESHOLD {
        hat = hat | HatPosition::DOWN;
    }
    if x > HAT_THRESHOLD {
        hat = hat | HatPosition::RIGHT;
    } else if x < -HAT_THRESHOLD {
        hat = hat | HatPosition::LEFT;
    }
    hat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hat_from_dpad_axes() {
        assert_eq!(hat_position(0.0, 0.0), HatPosition::CENTERED);
        assert_eq!(hat_position(0.0, 1.0), HatPosition::UP);
        assert_eq!(hat_position(1.0, -1.0), HatPosition::DOWN_RIGHT);
        assert_eq!(hat_position(-1.0, 0.2), HatPosition::LEFT);
    }

    #[test]
    fn test_raw_axis_conversion() {
        assert_eq!(to_raw_axis(0.0), 0);
        assert_eq!(to_raw_axis(1.0), i16::MAX);
        assert_eq!(to_raw_axis(-1.0), -i16::MAX);
        assert_eq!(to_raw_axis(3.0), i16::MAX);
    }
}
