//! Raw joystick snapshots, SDL-style controller mappings and gamepad translation
//!
//! - [`controller`] - raw state, backends and the polling task
//! - [`mapping`] - device GUIDs, mapping records, the controller database and
//!   the translator
//! - [`config`] - TOML configuration used by the `padmap` binary

pub mod config;
pub mod controller;
pub mod mapping;
