//! Device poller
//!
//! Drives a [`JoystickBackend`] at a fixed interval, keeps one
//! [`JoystickState`] per device, translates it through the shared
//! [`ControllerDatabase`](crate::mapping::ControllerDatabase) and publishes the
//! result as a list of [`DeviceSnapshot`]s over a `watch` channel.
//!
//! ```text
//! Idle ──start()──► Polling ──poll_once()──► watch::Sender<Vec<DeviceSnapshot>>
//!   ▲                  │
//!   └─────stop()───────┘
//! ```
//!
//! Packet numbers are owned by the poller: a device's number only moves when
//! its raw state changes by value. A device that disappears is published once
//! as disconnected and dropped on the following cycle.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Local};
use statum::{machine, state};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::controller::backend::{BackendError, JoystickBackend, JoystickDevice};
use crate::controller::joystick_state::JoystickState;
use crate::mapping::database::SharedDatabase;
use crate::mapping::guid::DeviceGuid;
use crate::mapping::parser::MappingEntry;
use crate::mapping::translator::{translate, GamePadState};

/// Published view of one device after a poll
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    pub id: usize,
    pub guid: DeviceGuid,
    pub name: String,
    /// Name of the mapping record that was applied
    pub mapping: String,
    pub raw: JoystickState,
    pub gamepad: GamePadState,
    pub timestamp: DateTime<Local>,
}

// Poller settings
#[derive(Clone, Debug)]
pub struct PollerSettings {
    pub poll_interval_ms: u64,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 16,
        }
    }
}

// Poller errors
#[derive(Debug, thiserror::Error)]
pub enum PollerError {
    #[error("Invalid poller settings: {0}")]
    InvalidSettings(String),

    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    #[error("Poller task failed: {0}")]
    TaskError(String),
}

#[derive(Debug)]
struct TrackedDevice {
    device: JoystickDevice,
    state: JoystickState,
    mapping: Arc<MappingEntry>,
}

#[state]
#[derive(Debug, Clone)]
pub enum PollerState {
    Idle,
    Polling,
}

#[machine]
#[derive(Debug)]
pub struct DevicePoller<S: PollerState> {
    backend: Box<dyn JoystickBackend>,
    database: SharedDatabase,
    settings: PollerSettings,
    devices: BTreeMap<usize, TrackedDevice>,
    sender: watch::Sender<Vec<DeviceSnapshot>>,
}

impl<S: PollerState> DevicePoller<S> {
    pub fn subscribe(&self) -> watch::Receiver<Vec<DeviceSnapshot>> {
        self.sender.subscribe()
    }

    pub fn settings(&self) -> &PollerSettings {
        &self.settings
    }

    /// Last published snapshots
    pub fn snapshots(&self) -> Vec<DeviceSnapshot> {
        self.sender.borrow().clone()
    }
}

impl DevicePoller<Idle> {
    pub fn create(
        backend: Box<dyn JoystickBackend>,
        database: SharedDatabase,
        settings: Option<PollerSettings>,
    ) -> Result<Self, PollerError> {
        let settings = settings.unwrap_or_default();
        debug!("Creating Device Poller with settings: {:?}", settings);

        if settings.poll_interval_ms == 0 {
            return Err(PollerError::InvalidSettings(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        let (sender, _) = watch::channel(Vec::new());
        Ok(Self::new(backend, database, settings, BTreeMap::new(), sender))
    }

    pub fn start(mut self) -> Result<DevicePoller<Polling>, PollerError> {
        info!("Starting Device Poller on {} backend", self.backend.name());

        self.backend.refresh()?;
        let devices = self.backend.devices();
        if devices.is_empty() {
            warn!("No joystick connected, polling until one shows up");
        } else {
            info!("Found {} joysticks:", devices.len());
            for (idx, device) in devices.iter().enumerate() {
                info!(
                    "  [{}] ID: {}, Name: {}, GUID: {}",
                    idx, device.id, device.name, device.guid
                );
            }
        }

        Ok(self.transition())
    }
}

impl DevicePoller<Polling> {
    /// Reads every device once and publishes fresh snapshots.
    ///
    /// Returns the number of devices whose state or mapping changed, plus
    /// the number of vanished devices dropped from the list. Nothing is
    /// published when that number is zero.
    pub async fn poll_once(&mut self) -> Result<usize, PollerError> {
        let shared = Arc::clone(&self.database);
        let database = shared.read().await;

        self.backend.refresh()?;
        let present = self.backend.devices();
        let mut changed = 0;

        // A vanished device is listed once as disconnected, then dropped
        self.devices.retain(|id, tracked| {
            let keep =
                tracked.state.is_connected() || present.iter().any(|device| device.id == *id);
            if !keep {
                debug!("Dropping joystick {} ({})", id, tracked.device.name);
                changed += 1;
            }
            keep
        });

        for device in &present {
            let mapping = database.resolve(&device.guid);
            let tracked = self.devices.entry(device.id).or_insert_with(|| {
                info!("Joystick {} ({}) attached", device.id, device.name);
                TrackedDevice {
                    device: device.clone(),
                    state: JoystickState::new(),
                    mapping: Arc::clone(&mapping),
                }
            });
            tracked.device = device.clone();

            if !Arc::ptr_eq(&tracked.mapping, &mapping) {
                info!("Joystick {} now mapped by `{}`", device.id, mapping.name);
                tracked.mapping = mapping;
                changed += 1;
            }

            let mut next = tracked.state;
            if let Err(e) = self.backend.read_state(device.id, &mut next) {
                warn!("Failed to read joystick {}: {}", device.id, e);
                next.set_connected(false);
            }

            if bump_if_changed(&mut tracked.state, next) {
                debug!("Joystick {} changed: {}", device.id, tracked.state);
                changed += 1;
            }
        }

        for (id, tracked) in self.devices.iter_mut() {
            if present.iter().any(|device| device.id == *id) || !tracked.state.is_connected() {
                continue;
            }
            warn!("Joystick {} ({}) vanished", id, tracked.device.name);
            let mut next = tracked.state;
            next.set_connected(false);
            bump_if_changed(&mut tracked.state, next);
            changed += 1;
        }

        if changed > 0 {
            let now = Local::now();
            let snapshots = self
                .devices
                .values()
                .map(|tracked| DeviceSnapshot {
                    id: tracked.device.id,
                    guid: tracked.device.guid,
                    name: tracked.device.name.clone(),
                    mapping: tracked.mapping.name.clone(),
                    raw: tracked.state,
                    gamepad: translate(&tracked.mapping, &tracked.state),
                    timestamp: now,
                })
                .collect();
            self.sender.send_replace(snapshots);
        }

        Ok(changed)
    }

    /// Polls at the configured interval until `shutdown` fires or its sender
    /// is dropped
    pub async fn run_until_shutdown(
        mut self,
        mut shutdown: oneshot::Receiver<()>,
    ) -> DevicePoller<Idle> {
        info!(
            "Starting poller loop with {}ms interval",
            self.settings.poll_interval_ms
        );

        let mut interval_timer = tokio::time::interval(tokio::time::Duration::from_millis(
            self.settings.poll_interval_ms,
        ));
        interval_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut cycles: u64 = 0;
        let mut changes: usize = 0;
        let mut last_stats_time = Local::now();
        let stats_interval = chrono::Duration::seconds(30);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poller loop");
                    break;
                }
                _ = interval_timer.tick() => {
                    match self.poll_once().await {
                        Ok(changed) => changes += changed,
                        Err(e) => error!("Error polling joysticks: {}", e),
                    }
                    cycles += 1;
                }
            }

            let now = Local::now();
            if now - last_stats_time > stats_interval {
                info!(
                    "Poller stats: {} cycles, {} state changes in {} seconds",
                    cycles,
                    changes,
                    (now - last_stats_time).num_seconds()
                );
                cycles = 0;
                changes = 0;
                last_stats_time = now;
            }
        }

        self.stop()
    }

    pub fn stop(self) -> DevicePoller<Idle> {
        info!("Device Poller stopped");
        self.transition()
    }
}

// Stores `next`, advancing the packet number if it differs from the current state.
// The number saturates at u32::MAX so it never goes backwards.
fn bump_if_changed(current: &mut JoystickState, mut next: JoystickState) -> bool {
    if *current == next {
        return false;
    }
    next.set_packet_number(current.packet_number().saturating_add(1));
    *current = next;
    true
}

/// Running poller task
pub struct PollerHandle {
    receiver: watch::Receiver<Vec<DeviceSnapshot>>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Creates a poller and spawns it as a tokio task
    pub fn spawn(
        backend: Box<dyn JoystickBackend>,
        database: SharedDatabase,
        settings: Option<PollerSettings>,
    ) -> Result<Self, PollerError> {
        info!("Spawning Device Poller with settings: {:?}", settings);

        let poller = DevicePoller::create(backend, database, settings)?.start()?;
        let receiver = poller.subscribe();
        let (shutdown, shutdown_receiver) = oneshot::channel();

        let task = tokio::spawn(async move {
            let _idle = poller.run_until_shutdown(shutdown_receiver).await;
            info!("Device Poller task finished");
        });
        debug!("Tokio task spawned with handle: {:?}", task);

        Ok(Self {
            receiver,
            shutdown,
            task,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<DeviceSnapshot>> {
        self.receiver.clone()
    }

    /// Stops the poller and waits for its task to finish
    pub async fn shutdown(self) -> Result<(), PollerError> {
        if self.shutdown.send(()).is_err() {
            debug!("Poller task already gone");
        }
        self.task
            .await
            .map_err(|e| PollerError::TaskError(e.to_string()))
    }
}
