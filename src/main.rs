use std::path::PathBuf;

use color_eyre::{eyre::eyre, Result};
use padmap::config::Config;
use padmap::controller::{ControllerHandle, DeviceSnapshot, JoystickBackend};
use tokio::sync::watch;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    setup()?;

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)
        .await
        .map_err(|e| eyre!("Failed to load config: {}", e))?;

    let database = config
        .build_database()
        .await
        .map_err(|e| eyre!("Failed to build controller database: {}", e))?;
    info!(
        "Controller database ready: {} mappings, {} fallback",
        database.len(),
        database.backend()
    );

    let backend = create_backend()?;
    let controller_handle = ControllerHandle::spawn(
        Some(config.controller_settings()),
        backend,
        database.into_shared(),
    )
    .map_err(|e| eyre!("Failed to spawn controller: {}", e))?;

    let receiver = controller_handle.subscribe();
    let reporter = tokio::spawn(report_snapshots(receiver));

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| eyre!("Failed to listen for ctrl-c: {}", e))?;
    info!("Ctrl-C received");

    reporter.abort();
    controller_handle
        .shutdown()
        .await
        .map_err(|e| eyre!("Failed to stop controller: {}", e))?;
    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}

#[cfg(feature = "gilrs")]
fn create_backend() -> Result<Box<dyn JoystickBackend>> {
    let backend = padmap::controller::GilrsBackend::new()
        .map_err(|e| eyre!("Failed to initialize gilrs: {}", e))?;
    Ok(Box::new(backend))
}

#[cfg(not(feature = "gilrs"))]
fn create_backend() -> Result<Box<dyn JoystickBackend>> {
    tracing::warn!("Built without the `gilrs` feature, no hardware will be polled");
    Ok(Box::new(padmap::controller::MemoryBackend::new()))
}

async fn report_snapshots(mut receiver: watch::Receiver<Vec<DeviceSnapshot>>) {
    while receiver.changed().await.is_ok() {
        let snapshots = receiver.borrow_and_update().clone();
        for snapshot in snapshots {
            let pressed: Vec<String> = snapshot
                .gamepad
                .pressed_controls()
                .map(|control| control.to_string())
                .collect();
            let left = snapshot.gamepad.left_stick();
            let right = snapshot.gamepad.right_stick();
            info!(
                "[{}] {} ({}) packet {} at {}: pressed [{}], left ({:.2}, {:.2}), right ({:.2}, {:.2}), triggers ({:.2}, {:.2})",
                snapshot.id,
                snapshot.name,
                snapshot.mapping,
                snapshot.raw.packet_number(),
                snapshot.timestamp.format("%H:%M:%S.%3f"),
                pressed.join(" "),
                left.x,
                left.y,
                right.x,
                right.y,
                snapshot.gamepad.left_trigger(),
                snapshot.gamepad.right_trigger()
            );
            debug!("Raw state: {}", snapshot.raw);
        }
    }
}
