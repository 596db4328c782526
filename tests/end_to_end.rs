use std::collections::HashSet;
use std::time::Duration;

use padmap::controller::{
    ControllerHandle, ControllerSettings, HatPosition, JoystickState, MemoryBackend,
};
use padmap::mapping::{
    translate, ControllerDatabase, DeviceGuid, GamePadControl, InputBackend, InputSource,
    MappingEntry,
};

#[test]
fn raw_state_through_mapping() {
    let mapping = MappingEntry::parse("00000000000000000000000000000000,Test,a:b0,leftx:a0,").unwrap();

    let mut raw = JoystickState::new();
    raw.set_connected(true);
    raw.set_axis(0, 16383).unwrap();
    raw.set_button(0, true);

    let pad = translate(&mapping, &raw);
    assert!((pad.left_stick().x - 0.49998).abs() < 1e-4);
    assert!(pad.is_pressed(GamePadControl::A));
    assert!(pad.connected);
}

#[test]
fn same_pad_on_three_platforms() {
    let database = ControllerDatabase::new(InputBackend::Sdl2);
    let windows = DeviceGuid::windows(0x054c, 0x0268);
    let macos = DeviceGuid::macos(0x054c, 0x0268);

    for guid in [windows, macos] {
        assert!(database.contains(&guid));
        assert_eq!(database.resolve(&guid).name, "PS3 Controller");
        assert_eq!(guid.vendor_id(), Some(0x054c));
    }

    // The DualShock 3 layout on Linux hid-sony differs
    let linux = DeviceGuid::linux(0x03, 0x054c, 0x0268, 0x0111);
    let entry = database.resolve(&linux);
    assert_eq!(entry.name, "PS3 Controller (hid-sony)");
    assert_eq!(entry.source(GamePadControl::DPadUp), InputSource::Button(13));
}

#[test]
fn unknown_devices_share_the_fallback() {
    let database = ControllerDatabase::new(InputBackend::Legacy);
    let unknown: DeviceGuid = "0123456789abcdef0123456789abcdef".parse().unwrap();

    assert_eq!(database.lookup(&unknown), database.lookup(&DeviceGuid::ZERO));

    let mut raw = JoystickState::new();
    raw.set_hat(0, HatPosition::LEFT).unwrap();
    let pad = translate(&database.resolve(&unknown), &raw);
    assert!(pad.is_pressed(GamePadControl::DPadLeft));
}

#[test]
fn states_hash_by_value() {
    let mut a = JoystickState::new();
    a.set_axis(3, -1200).unwrap();
    a.set_packet_number(1);
    let mut b = a;
    b.set_packet_number(2);

    let set: HashSet<JoystickState> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[tokio::test]
async fn polling_publishes_translated_snapshots() {
    let backend = MemoryBackend::new();
    let database = ControllerDatabase::new(InputBackend::Sdl2).into_shared();
    let handle = ControllerHandle::spawn(
        Some(ControllerSettings { poll_interval_ms: 2 }),
        Box::new(backend.clone()),
        database,
    )
    .unwrap();
    let mut receiver = handle.subscribe();

    let guid: DeviceGuid = "050000004c050000c405000000010000".parse().unwrap();
    let id = backend.attach(guid, "Wireless Controller");
    backend
        .update(id, |state| {
            state.set_button(1, true);
            state.set_axis(4, 32767)?;
            Ok(())
        })
        .unwrap();

    let snapshot = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            receiver.changed().await.unwrap();
            let latest = receiver.borrow_and_update().clone();
            if let Some(snapshot) = latest.into_iter().find(|s| s.raw.is_down(1)) {
                return snapshot;
            }
        }
    })
    .await
    .expect("no snapshot published");

    assert_eq!(snapshot.mapping, "Sony DualShock 4 BT");
    assert!(snapshot.gamepad.is_pressed(GamePadControl::A));
    assert!(snapshot.gamepad.is_pressed(GamePadControl::RightTrigger));

    handle.shutdown().await.unwrap();
}
