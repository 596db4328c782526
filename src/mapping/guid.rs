//! Device identity
//!
//! Controllers are identified by a 16-byte GUID whose layout depends on the
//! platform and input backend that produced it. The same physical pad shows
//! up with a different GUID on Windows, macOS and Linux, so the database keys
//! on the GUID, never on the physical model.
//!
//! ```text
//! Windows (DirectInput)  4c05 6802 0000 0000 0000 5049 4456 4944   vendor,product,"PIDVID"
//! macOS                  4c05 0000 0000 0000 6802 0000 0000 0000   vendor@0, product@8
//! Linux (evdev)          0300 0000 4c05 0000 6802 0000 1101 0000   bus,vendor,product,version
//! ```

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::mapping::error::MappingError;

/// Length of the textual GUID in a mapping record
pub const GUID_TEXT_LEN: usize = 32;

const PIDVID_MARKER: &[u8; 6] = b"PIDVID";

/// USB bus type as reported by the Linux input subsystem
pub const BUS_USB: u16 = 0x03;

/// Platform layout a GUID was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidEncoding {
    WindowsDirectInput,
    MacOs,
    Linux,
}

/// 16-byte hardware identifier of a controller model
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DeviceGuid(Uuid);

impl DeviceGuid {
    /// The "unmapped controller" key used for fallback lookups
    pub const ZERO: DeviceGuid = DeviceGuid(Uuid::nil());

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_nil()
    }

    /// GUID of a Windows DirectInput device
    pub fn windows(vendor: u16, product: u16) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..2].copy_from_slice(&vendor.to_le_bytes());
        bytes[2..4].copy_from_slice(&product.to_le_bytes());
        bytes[10..16].copy_from_slice(PIDVID_MARKER);
        Self::from_bytes(bytes)
    }

    /// GUID of a macOS IOKit HID device
    pub fn macos(vendor: u16, product: u16) -> Self {
        let mut bytes = [0u8; 16];
        bytes[0..2].copy_from_slice(&vendor.to_le_bytes());
        bytes[8..10].copy_from_slice(&product.to_le_bytes());
        Self::from_bytes(bytes)
    }

    /// GUID of a Linux evdev device, built from `struct input_id`
    pub fn linux(bus: u16, vendor: u16, product: u16, version: u16) -> Self {
        let mut bytes = [0u8; 16];
        let parts = [bus, 0, vendor, 0, product, 0, version, 0];
        for (chunk, part) in bytes.chunks_exact_mut(2).zip(parts.iter()) {
            chunk.copy_from_slice(&part.to_le_bytes());
        }
        Self::from_bytes(bytes)
    }

    /// Guesses which platform layout produced this GUID.
    ///
    /// Returns `None` for layouts without vendor/product fields, such as the
    /// name-derived GUIDs used on Android.
    pub fn encoding(&self) -> Option<GuidEncoding> {
        let b = self.as_bytes();
        let zero = |range: std::ops::Range<usize>| b[range].iter().all(|byte| *byte == 0);

        if &b[10..16] == PIDVID_MARKER && zero(4..10) {
            return Some(GuidEncoding::WindowsDirectInput);
        }
        if self.is_zero() {
            return None;
        }
        if zero(2..8) && zero(10..16) && b[0..2] != [0, 0] {
            return Some(GuidEncoding::MacOs);
        }
        let linux_padding = [2usize, 3, 6, 7, 10, 11, 14, 15];
        if b[0..2] != [0, 0] && linux_padding.iter().all(|i| b[*i] == 0) {
            return Some(GuidEncoding::Linux);
        }
        None
    }

    /// USB vendor id, if the layout carries one
    pub fn vendor_id(&self) -> Option<u16> {
        let b = self.as_bytes();
        match self.encoding()? {
            GuidEncoding::WindowsDirectInput | GuidEncoding::MacOs => {
                Some(u16::from_le_bytes([b[0], b[1]]))
            }
            GuidEncoding::Linux => Some(u16::from_le_bytes([b[4], b[5]])),
        }
    }

    /// USB product id, if the layout carries one
    pub fn product_id(&self) -> Option<u16> {
        let b = self.as_bytes();
        match self.encoding()? {
            GuidEncoding::WindowsDirectInput => Some(u16::from_le_bytes([b[2], b[3]])),
            GuidEncoding::MacOs | GuidEncoding::Linux => Some(u16::from_le_bytes([b[8], b[9]])),
        }
    }
}

impl FromStr for DeviceGuid {
    type Err = MappingError;

    /// Parses exactly 32 hex characters without separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != GUID_TEXT_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MappingError::InvalidGuid(s.to_string()));
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| MappingError::InvalidGuid(format!("{}: {}", s, e)))
    }
}

impl From<[u8; 16]> for DeviceGuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for DeviceGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl fmt::Debug for DeviceGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceGuid({})", self.0.simple())
    }
}
