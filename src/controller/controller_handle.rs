//! Controller Handle - Unified API for joystick polling and mapping
//!
//! Ties a [`JoystickBackend`] to the shared mapping database through a
//! [`PollerHandle`], and exposes what the application needs at runtime:
//! snapshot subscription, mapping registration and shutdown.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

pub use super::backend::{BackendError, JoystickBackend, JoystickDevice, MemoryBackend};
pub use super::poller::{DeviceSnapshot, PollerError, PollerHandle, PollerSettings};
use crate::mapping::database::{LoadReport, SharedDatabase};
use crate::mapping::error::MappingError;
use crate::mapping::guid::DeviceGuid;

/// Configuration settings for the controller subsystem
///
/// # Examples
///
/// ```rust
/// use padmap::controller::ControllerSettings;
///
/// // Poll at roughly 120 Hz
/// let settings = ControllerSettings {
///     poll_interval_ms: 8,
/// };
/// assert_eq!(ControllerSettings::default().poll_interval_ms, 16);
/// ```
#[derive(Clone, Debug)]
pub struct ControllerSettings {
    /// Polling interval in milliseconds
    ///
    /// 16ms matches one frame at 60 Hz. Must be greater than zero.
    pub poll_interval_ms: u64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 16,
        }
    }
}

/// Errors that can occur during controller initialization or operation
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// Error from the polling task
    #[error("Poller error: {0}")]
    PollerError(#[from] PollerError),

    /// Error from the joystick backend
    ///
    /// Typically indicates gamepad detection issues or driver problems.
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    /// A mapping record was rejected
    #[error("Mapping error: {0}")]
    MappingError(#[from] MappingError),
}

/// Handle for managing the controller subsystem lifecycle
///
/// Owns the polling task. Dropping the handle without calling
/// [`shutdown`](Self::shutdown) stops the task at its next tick, because the
/// shutdown channel closes.
pub struct ControllerHandle {
    poller: PollerHandle,
    database: SharedDatabase,
}

impl ControllerHandle {
    /// Spawns the polling task
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Thread Communication
    ///
    /// ```text
    /// JoystickBackend ──► DevicePoller ─[Vec<DeviceSnapshot>]→ Application
    ///                          ▲          (watch::channel)
    ///                  SharedDatabase
    /// ```
    ///
    /// # Errors
    ///
    /// * [`ControllerError::PollerError`] - Invalid settings or the backend
    ///   failed its first refresh
    pub fn spawn(
        settings: Option<ControllerSettings>,
        backend: Box<dyn JoystickBackend>,
        database: SharedDatabase,
    ) -> Result<Self, ControllerError> {
        info!(
            "Initializing Controller system with settings: {:?}",
            settings
        );

        let settings = settings.unwrap_or_default();
        let poller_settings = PollerSettings {
            poll_interval_ms: settings.poll_interval_ms,
        };
        debug!("Poller settings: {:?}", poller_settings);

        info!("Creating Device Poller on {} backend", backend.name());
        let poller = PollerHandle::spawn(backend, Arc::clone(&database), Some(poller_settings))?;

        info!("Controller system initialized successfully");
        Ok(Self { poller, database })
    }

    /// Receiver of the snapshots published after every poll with changes
    pub fn subscribe(&self) -> watch::Receiver<Vec<DeviceSnapshot>> {
        self.poller.subscribe()
    }

    pub fn database(&self) -> SharedDatabase {
        Arc::clone(&self.database)
    }

    /// Registers a mapping record; the poller republishes affected devices on its next cycle
    pub async fn add_mapping(&self, record: &str) -> Result<DeviceGuid, ControllerError> {
        let guid = self.database.write().await.add(record)?;
        info!("Registered mapping for {}", guid);
        Ok(guid)
    }

    /// Registers every record of a `gamecontrollerdb.txt` style document
    pub async fn add_mappings(&self, text: &str) -> LoadReport {
        self.database.write().await.add_from_str(text)
    }

    pub async fn shutdown(self) -> Result<(), ControllerError> {
        info!("Shutting down Controller system");
        self.poller.shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::database::{ControllerDatabase, InputBackend};
    use crate::mapping::mapping_types::GamePadControl;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawn_rejects_zero_interval() {
        let database = ControllerDatabase::empty(InputBackend::Sdl2).into_shared();
        let result = ControllerHandle::spawn(
            Some(ControllerSettings {
                poll_interval_ms: 0,
            }),
            Box::new(MemoryBackend::new()),
            database,
        );
        assert!(matches!(
            result,
            Err(ControllerError::PollerError(PollerError::InvalidSettings(_)))
        ));
    }

    #[tokio::test]
    async fn test_mapping_registered_at_runtime() {
        let backend = MemoryBackend::new();
        let database = ControllerDatabase::empty(InputBackend::Legacy).into_shared();
        let handle = ControllerHandle::spawn(
            Some(ControllerSettings {
                poll_interval_ms: 1,
            }),
            Box::new(backend.clone()),
            database,
        )
        .unwrap();

        let guid = handle
            .add_mapping("03000000aaaa0000bbbb000000000000,Runtime Pad,a:b3,")
            .await
            .unwrap();
        assert!(handle.database().read().await.contains(&guid));
        assert!(matches!(
            handle.add_mapping("bogus").await,
            Err(ControllerError::MappingError(MappingError::InvalidGuid(_)))
        ));

        let mut receiver = handle.subscribe();
        let id = backend.attach(guid, "Runtime Pad");
        backend
            .update(id, |state| {
                state.set_button(3, true);
                Ok(())
            })
            .unwrap();

        let snapshot = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                receiver.changed().await.unwrap();
                let snapshots = receiver.borrow_and_update().clone();
                if let Some(snapshot) = snapshots.into_iter().find(|s| s.id == id) {
                    if snapshot.raw.is_down(3) {
                        return snapshot;
                    }
                }
            }
        })
        .await
        .expect("snapshot not published");

        assert_eq!(snapshot.mapping, "Runtime Pad");
        assert!(snapshot.gamepad.is_pressed(GamePadControl::A));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_add_mappings_reports_rejections() {
        let database = ControllerDatabase::empty(InputBackend::Sdl2).into_shared();
        let handle =
            ControllerHandle::spawn(None, Box::new(MemoryBackend::new()), database).unwrap();

        let report = handle
            .add_mappings("03000000aaaa0000bbbb000000000000,One,a:b0,\nbroken line\n")
            .await;
        assert_eq!(report.added, 1);
        assert_eq!(report.rejected.len(), 1);

        handle.shutdown().await.unwrap();
    }
}
