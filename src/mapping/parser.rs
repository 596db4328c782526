//! Parser for SDL-style mapping records
//!
//! A record binds the raw inputs of one controller model to semantic gamepad
//! controls:
//!
//! ```text
//! 030000004c0500006802000011010000,PS3 Controller,a:b0,b:b1,dpup:h0.1,leftx:a0,guide:,
//! └──────────── GUID ────────────┘ └─ name ─────┘ └──── token:source pairs ────────┘
//! ```
//!
//! Unknown tokens (`platform:Linux`, `misc1:b15`, ...) are skipped so newer
//! records keep loading. When a token repeats, the last occurrence wins.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::mapping::error::MappingError;
use crate::mapping::guid::DeviceGuid;
use crate::mapping::mapping_types::{GamePadControl, InputSource};

/// Parsed mapping record for one controller model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub guid: DeviceGuid,
    pub name: String,
    bindings: BTreeMap<GamePadControl, InputSource>,
}

impl MappingEntry {
    pub fn new(guid: DeviceGuid, name: impl Into<String>) -> Self {
        Self {
            guid,
            name: name.into(),
            bindings: BTreeMap::new(),
        }
    }

    /// Parses one record; any malformed field rejects the whole record
    pub fn parse(record: &str) -> Result<Self, MappingError> {
        let record = record.trim();
        let mut fields = record.split(',');

        let guid: DeviceGuid = fields.next().unwrap_or_default().trim().parse()?;
        let name = fields.next().ok_or_else(|| {
            MappingError::MalformedMapping(format!("record for {} has no display name", guid))
        })?;

        let mut entry = Self::new(guid, name.trim());
        for field in fields.map(str::trim) {
            if field.is_empty() {
                // Trailing comma
                continue;
            }
            let (token, value) = field.split_once(':').ok_or_else(|| {
                MappingError::MalformedMapping(format!("field `{}` is not `token:value`", field))
            })?;
            let (token, value) = (token.trim(), value.trim());
            match GamePadControl::from_token(token) {
                Some(control) => {
                    let source = value.parse::<InputSource>()?;
                    entry.bind(control, source);
                }
                None => debug!("Skipping unknown mapping token `{}` for {}", token, guid),
            }
        }

        Ok(entry)
    }

    /// Binds a control, replacing any earlier binding
    pub fn bind(&mut self, control: GamePadControl, source: InputSource) -> &mut Self {
        self.bindings.insert(control, source);
        self
    }

    /// Source of a control, `None` when the record does not mention it
    pub fn binding(&self, control: GamePadControl) -> Option<InputSource> {
        self.bindings.get(&control).copied()
    }

    /// Source of a control, treating unmentioned controls as unbound
    pub fn source(&self, control: GamePadControl) -> InputSource {
        self.binding(control).unwrap_or_default()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (GamePadControl, InputSource)> + '_ {
        self.bindings.iter().map(|(control, source)| (*control, *source))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Serializes back into the wire format, bindings sorted by token
    pub fn to_record(&self) -> String {
        self.to_string()
    }
}

impl FromStr for MappingEntry {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MappingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},", self.guid, self.name)?;
        let mut pairs: Vec<_> = self.bindings().collect();
        pairs.sort_by_key(|(control, _)| control.token());
        for (control, source) in pairs {
            write!(f, "{}:{},", control, source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::joystick_state::HatPosition;

    const ZERO: &str = "00000000000000000000000000000000";

    #[test]
    fn test_parse_simple_record() {
        let entry = MappingEntry::parse(&format!("{ZERO},Test,a:b0,leftx:a0,")).unwrap();
        assert_eq!(entry.guid, DeviceGuid::ZERO);
        assert_eq!(entry.name, "Test");
        assert_eq!(entry.len(), 2);
        assert_eq!(entry.binding(GamePadControl::A), Some(InputSource::Button(0)));
        assert_eq!(entry.binding(GamePadControl::LeftX), Some(InputSource::axis(0)));
        assert_eq!(entry.binding(GamePadControl::B), None);
        assert_eq!(entry.source(GamePadControl::B), InputSource::Unbound);
    }

    #[test]
    fn test_whitespace_around_fields_is_ignored() {
        let entry =
            MappingEntry::parse(&format!("{ZERO}, Spaced Pad , a:b0, leftx : a1 ,")).unwrap();
        assert_eq!(entry.name, "Spaced Pad");
        assert_eq!(entry.binding(GamePadControl::A), Some(InputSource::Button(0)));
        assert_eq!(entry.binding(GamePadControl::LeftX), Some(InputSource::axis(1)));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let entry = MappingEntry::parse(&format!("{ZERO},Test,dpup:h0.0,dpup:h0.1,")).unwrap();
        assert_eq!(entry.len(), 1);
        assert_eq!(
            entry.binding(GamePadControl::DPadUp),
            Some(InputSource::hat(0, HatPosition::UP))
        );
    }

    #[test]
    fn test_explicit_unbound() {
        let entry = MappingEntry::parse(&format!("{ZERO},Test,guide:,a:b1,")).unwrap();
        assert_eq!(entry.binding(GamePadControl::Guide), Some(InputSource::Unbound));
    }

    #[test]
    fn test_trailing_comma_is_optional() {
        let with = MappingEntry::parse(&format!("{ZERO},Test,a:b0,")).unwrap();
        let without = MappingEntry::parse(&format!("{ZERO},Test,a:b0")).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_unknown_tokens_are_ignored() {
        let entry = MappingEntry::parse(&format!(
            "{ZERO},Test,a:b0,platform:Linux,misc1:b15,paddle1:b16,"
        ))
        .unwrap();
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_malformed_guid_rejects_record() {
        let result = MappingEntry::parse("not-a-guid,Test,a:b0,");
        assert!(matches!(result, Err(MappingError::InvalidGuid(_))));

        let result = MappingEntry::parse("0300000,Test,a:b0,");
        assert!(matches!(result, Err(MappingError::InvalidGuid(_))));
    }

    #[test]
    fn test_malformed_fields_reject_record() {
        for record in [
            format!("{ZERO}"),
            format!("{ZERO},Test,a:b0,garbage,"),
            format!("{ZERO},Test,a:q0,"),
            format!("{ZERO},Test,dpup:h0,"),
        ] {
            assert!(
                matches!(MappingEntry::parse(&record), Err(MappingError::MalformedMapping(_))),
                "{record} should be rejected"
            );
        }
    }

    #[test]
    fn test_record_round_trip() {
        let record = "030000004c0500006802000011010000,PS3 Controller,a:b14,b:b13,back:b0,\
            dpdown:b6,dpleft:b7,dpright:b5,dpup:b4,guide:b16,leftshoulder:b10,leftstick:b1,\
            lefttrigger:b8,leftx:a0,lefty:a1,rightshoulder:b11,rightstick:b2,righttrigger:b9,\
            rightx:a2,righty:-a3,start:b3,x:b15,y:b12,";
        let entry = MappingEntry::parse(record).unwrap();
        let emitted = entry.to_record();

        assert!(emitted.ends_with(','));
        assert_eq!(MappingEntry::parse(&emitted).unwrap(), entry);

        let mut original: Vec<&str> = record.split(',').skip(2).filter(|f| !f.is_empty()).collect();
        let mut reemitted: Vec<&str> = emitted.split(',').skip(2).filter(|f| !f.is_empty()).collect();
        original.sort_unstable();
        reemitted.sort_unstable();
        assert_eq!(original, reemitted);
    }

    #[test]
    fn test_builder_bind() {
        let mut entry = MappingEntry::new(DeviceGuid::ZERO, "Built");
        entry
            .bind(GamePadControl::A, InputSource::Button(0))
            .bind(GamePadControl::A, InputSource::Button(3));
        assert_eq!(entry.binding(GamePadControl::A), Some(InputSource::Button(3)));
        assert_eq!(entry.to_record(), format!("{ZERO},Built,a:b3,"));
    }
}
