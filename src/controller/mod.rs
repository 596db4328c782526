//! Controller subsystem for raw joystick input
//!
//! 1. [`joystick_state`] - Fixed-capacity raw snapshot of one device
//! 2. [`backend`] - Sources of raw snapshots (in-memory, gilrs)
//! 3. [`poller`] - Polling loop that translates and publishes snapshots
//! 4. [`controller_handle`] - Unified API and lifecycle management
//!
//! # Architecture
//!
//! ```text
//! Backend ──► DevicePoller ──► translate ──► watch<Vec<DeviceSnapshot>>
//!             (JoystickState)  (GamePadState)
//! ```
//!
//! The poller runs as a tokio task; 16ms intervals by default.

pub mod backend;
pub mod controller_handle;
#[cfg(feature = "gilrs")]
pub mod gilrs_backend;
pub mod joystick_state;
pub mod poller;

pub use backend::{BackendError, JoystickBackend, JoystickDevice, MemoryBackend};
pub use controller_handle::{ControllerError, ControllerHandle, ControllerSettings};
#[cfg(feature = "gilrs")]
pub use gilrs_backend::GilrsBackend;
pub use joystick_state::{
    ButtonState, HatPosition, JoystickState, StateError, MAX_AXES, MAX_BUTTONS, MAX_HATS,
};
pub use poller::{DevicePoller, DeviceSnapshot, PollerError, PollerHandle, PollerSettings};
