//! Producers of raw joystick state
//!
//! A [`JoystickBackend`] enumerates the devices it can see and fills a
//! [`JoystickState`] for each of them on request. The poller owns the backend
//! and is its only caller.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::controller::joystick_state::{JoystickState, StateError};
use crate::mapping::guid::DeviceGuid;

/// Device as reported by a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoystickDevice {
    /// Backend-assigned id, stable while the device stays attached
    pub id: usize,
    pub guid: DeviceGuid,
    pub name: String,
}

// Backend errors
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to initialize backend: {0}")]
    InitializationError(String),

    #[error("Device {0} is not attached")]
    DeviceNotFound(usize),

    #[error("Invalid raw state: {0}")]
    StateError(#[from] StateError),
}

/// Source of raw joystick snapshots
pub trait JoystickBackend: Send + fmt::Debug {
    fn name(&self) -> &str;

    /// Pumps pending OS events so that [`devices`](Self::devices) and
    /// [`read_state`](Self::read_state) see fresh data
    fn refresh(&mut self) -> Result<(), BackendError>;

    fn devices(&self) -> Vec<JoystickDevice>;

    /// Overwrites axes, buttons, hats and the connected flag of `state`.
    ///
    /// The packet number is left alone.
    fn read_state(&self, id: usize, state: &mut JoystickState) -> Result<(), BackendError>;
}

#[derive(Debug, Clone)]
struct MemoryDevice {
    device: JoystickDevice,
    state: JoystickState,
}

/// Backend whose devices are attached and driven from code
///
/// Clones share the same device table, so one clone can be handed to the
/// poller while another keeps feeding input.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    devices: Arc<Mutex<BTreeMap<usize, MemoryDevice>>>,
    next_id: Arc<Mutex<usize>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, BTreeMap<usize, MemoryDevice>> {
        self.devices.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attaches a device and returns its id
    pub fn attach(&self, guid: DeviceGuid, name: impl Into<String>) -> usize {
        let id = {
            let mut next_id = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
            let id = *next_id;
            *next_id += 1;
            id
        };

        let device = JoystickDevice {
            id,
            guid,
            name: name.into(),
        };
        info!("Attached memory device {} ({}, {})", id, device.name, guid);

        let mut state = JoystickState::new();
        state.set_connected(true);
        self.table().insert(id, MemoryDevice { device, state });
        id
    }

    /// Detaches a device; returns `false` if it was not attached
    pub fn detach(&self, id: usize) -> bool {
        let removed = self.table().remove(&id).is_some();
        if removed {
            info!("Detached memory device {}", id);
        }
        removed
    }

    /// Mutates the raw state of an attached device
    pub fn update<F>(&self, id: usize, f: F) -> Result<(), BackendError>
    where
        F: FnOnce(&mut JoystickState) -> Result<(), StateError>,
    {
        let mut table = self.table();
        let entry = table.get_mut(&id).ok_or(BackendError::DeviceNotFound(id))?;
        f(&mut entry.state)?;
        Ok(())
    }
}

impl JoystickBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn refresh(&mut self) -> Result<(), BackendError> {
        debug!("Memory backend has {} devices", self.table().len());
        Ok(())
    }

    fn devices(&self) -> Vec<JoystickDevice> {
        self.table()
            .values()
            .map(|entry| entry.device.clone())
            .collect()
    }

    fn read_state(&self, id: usize, state: &mut JoystickState) -> Result<(), BackendError> {
        let table = self.table();
        let entry = table.get(&id).ok_or(BackendError::DeviceNotFound(id))?;

        let packet_number = state.packet_number();
        *state = entry.state;
        state.set_packet_number(packet_number);
        Ok(())
    }
}
