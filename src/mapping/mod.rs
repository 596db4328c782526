//! Mapping subsystem: from device identity to semantic gamepad state
//!
//! 1. [`guid`] - Device identity and its platform encodings
//! 2. [`mapping_types`] / [`parser`] - SDL-style mapping records
//! 3. [`database`] - GUID keyed record table seeded from [`catalog`]
//! 4. [`translator`] - Applies a record to a raw snapshot
//!
//! # Data Flow
//!
//! ```text
//! DeviceGuid ──► ControllerDatabase ──► MappingEntry ─┐
//!                                                     ├─► translate ──► GamePadState
//!                                      JoystickState ─┘
//! ```

pub mod catalog;
pub mod database;
pub mod error;
pub mod guid;
pub mod mapping_types;
pub mod parser;
pub mod translator;

pub use database::{ControllerDatabase, InputBackend, LoadReport, SharedDatabase};
pub use error::MappingError;
pub use guid::{DeviceGuid, GuidEncoding};
pub use mapping_types::{GamePadControl, InputSource};
pub use parser::MappingEntry;
pub use translator::{translate, GamePadState, StickPosition, AXIS_BUTTON_THRESHOLD};
