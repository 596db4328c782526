//! Shared vocabulary of the mapping grammar
//!
//! [`GamePadControl`] is the fixed set of semantic controls a mapping record
//! can bind, [`InputSource`] is where one of them reads its value from.

use std::fmt;
use std::str::FromStr;

use crate::controller::joystick_state::HatPosition;
use crate::mapping::error::MappingError;

/// Semantic control of a standard gamepad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GamePadControl {
    A,
    B,
    X,
    Y,
    Back,
    Start,
    Guide,
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// Number of controls in [`GamePadControl::ALL`]
pub const CONTROL_COUNT: usize = 21;

impl GamePadControl {
    pub const ALL: [GamePadControl; CONTROL_COUNT] = [
        GamePadControl::A,
        GamePadControl::B,
        GamePadControl::X,
        GamePadControl::Y,
        GamePadControl::Back,
        GamePadControl::Start,
        GamePadControl::Guide,
        GamePadControl::LeftShoulder,
        GamePadControl::RightShoulder,
        GamePadControl::LeftStick,
        GamePadControl::RightStick,
        GamePadControl::LeftX,
        GamePadControl::LeftY,
        GamePadControl::RightX,
        GamePadControl::RightY,
        GamePadControl::LeftTrigger,
        GamePadControl::RightTrigger,
        GamePadControl::DPadUp,
        GamePadControl::DPadDown,
        GamePadControl::DPadLeft,
        GamePadControl::DPadRight,
    ];

    /// Token used for this control in mapping records
    pub const fn token(self) -> &'static str {
        match self {
            GamePadControl::A => "a",
            GamePadControl::B => "b",
            GamePadControl::X => "x",
            GamePadControl::Y => "y",
            GamePadControl::Back => "back",
            GamePadControl::Start => "start",
            GamePadControl::Guide => "guide",
            GamePadControl::LeftShoulder => "leftshoulder",
            GamePadControl::RightShoulder => "rightshoulder",
            GamePadControl::LeftStick => "leftstick",
            GamePadControl::RightStick => "rightstick",
            GamePadControl::LeftX => "leftx",
            GamePadControl::LeftY => "lefty",
            GamePadControl::RightX => "rightx",
            GamePadControl::RightY => "righty",
            GamePadControl::LeftTrigger => "lefttrigger",
            GamePadControl::RightTrigger => "righttrigger",
            GamePadControl::DPadUp => "dpup",
            GamePadControl::DPadDown => "dpdown",
            GamePadControl::DPadLeft => "dpleft",
            GamePadControl::DPadRight => "dpright",
        }
    }

    /// Looks up a control by its record token; unknown tokens yield `None`
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|control| control.token() == token)
    }

    /// Position in [`GamePadControl::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sticks and triggers; everything else is a digital button
    pub const fn is_analog(self) -> bool {
        matches!(
            self,
            GamePadControl::LeftX
                | GamePadControl::LeftY
                | GamePadControl::RightX
                | GamePadControl::RightY
                | GamePadControl::LeftTrigger
                | GamePadControl::RightTrigger
        )
    }
}

impl fmt::Display for GamePadControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Raw input a semantic control is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputSource {
    /// Explicitly bound to nothing (`guide:`)
    #[default]
    Unbound,
    /// Raw button ordinal (`b3`)
    Button(u8),
    /// Raw axis ordinal, optionally sign-inverted (`a2`, `-a2`)
    Axis { index: u8, inverted: bool },
    /// Raw hat ordinal and direction mask (`h0.4`)
    Hat { index: u8, direction: HatPosition },
}

impl InputSource {
    pub const fn axis(index: u8) -> Self {
        InputSource::Axis {
            index,
            inverted: false,
        }
    }

    pub const fn hat(index: u8, direction: HatPosition) -> Self {
        InputSource::Hat { index, direction }
    }
}

impl FromStr for InputSource {
    type Err = MappingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Ok(InputSource::Unbound);
        }

        let malformed = |reason: &str| {
            MappingError::MalformedMapping(format!("source `{}`: {}", value, reason))
        };

        // Polarity prefix (`-a2`) and SDL's inversion suffix (`a2~`)
        let (sign, rest) = match value.as_bytes()[0] {
            b'-' => (Some(true), &value[1..]),
            b'+' => (Some(false), &value[1..]),
            _ => (None, value),
        };
        let (rest, tilde) = match rest.strip_suffix('~') {
            Some(stripped) => (stripped, true),
            None => (rest, false),
        };

        let mut chars = rest.chars();
        let kind = chars.next().ok_or_else(|| malformed("missing source kind"))?;
        let body = chars.as_str();

        if kind != 'a' && (sign.is_some() || tilde) {
            return Err(malformed("only axes can be inverted"));
        }

        match kind {
            'b' => parse_ordinal(body)
                .map(InputSource::Button)
                .ok_or_else(|| malformed("invalid button ordinal")),
            'a' => {
                let index = parse_ordinal(body).ok_or_else(|| malformed("invalid axis ordinal"))?;
                let inverted = sign.unwrap_or(false) ^ tilde;
                Ok(InputSource::Axis { index, inverted })
            }
            'h' => {
                let (hat, mask) = body
                    .split_once('.')
                    .ok_or_else(|| malformed("hat needs `index.direction`"))?;
                let index = parse_ordinal(hat).ok_or_else(|| malformed("invalid hat ordinal"))?;
                let direction = parse_ordinal(mask)
                    .and_then(HatPosition::from_bits)
                    .ok_or_else(|| malformed("invalid hat direction"))?;
                Ok(InputSource::Hat { index, direction })
            }
            _ => Err(malformed("unknown source kind")),
        }
    }
}

fn parse_ordinal(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Unbound => Ok(()),
            InputSource::Button(index) => write!(f, "b{}", index),
            InputSource::Axis {
                index,
                inverted: false,
            } => write!(f, "a{}", index),
            InputSource::Axis {
                index,
                inverted: true,
            } => write!(f, "-a{}", index),
            InputSource::Hat { index, direction } => write!(f, "h{}.{}", index, direction.bits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_tokens_round_trip() {
        for control in GamePadControl::ALL {
            assert_eq!(GamePadControl::from_token(control.token()), Some(control));
        }
        assert_eq!(GamePadControl::from_token("platform"), None);
        assert_eq!(GamePadControl::from_token("A"), None);
    }

    #[test]
    fn test_control_index_matches_table() {
        for (position, control) in GamePadControl::ALL.iter().enumerate() {
            assert_eq!(control.index(), position);
        }
    }

    #[test]
    fn test_parse_sources() {
        assert_eq!("".parse::<InputSource>(), Ok(InputSource::Unbound));
        assert_eq!("b12".parse::<InputSource>(), Ok(InputSource::Button(12)));
        assert_eq!("a3".parse::<InputSource>(), Ok(InputSource::axis(3)));
        assert_eq!("+a3".parse::<InputSource>(), Ok(InputSource::axis(3)));
        assert_eq!(
            "-a3".parse::<InputSource>(),
            Ok(InputSource::Axis {
                index: 3,
                inverted: true
            })
        );
        assert_eq!(
            "a3~".parse::<InputSource>(),
            Ok(InputSource::Axis {
                index: 3,
                inverted: true
            })
        );
        assert_eq!(
            "h0.4".parse::<InputSource>(),
            Ok(InputSource::hat(0, HatPosition::DOWN))
        );
        assert_eq!(
            "h1.3".parse::<InputSource>(),
            Ok(InputSource::hat(1, HatPosition::UP_RIGHT))
        );
        assert_eq!(
            "h0.0".parse::<InputSource>(),
            Ok(InputSource::hat(0, HatPosition::CENTERED))
        );
    }

    #[test]
    fn test_reject_malformed_sources() {
        for value in ["x1", "b", "bq", "b-1", "a", "h0", "h0.", "h.1", "h0.16", "-b2", "b2~", "b999", "-"] {
            assert!(
                matches!(value.parse::<InputSource>(), Err(MappingError::MalformedMapping(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_grammar() {
        let sources = [
            InputSource::Unbound,
            InputSource::Button(7),
            InputSource::axis(1),
            InputSource::Axis {
                index: 5,
                inverted: true,
            },
            InputSource::hat(0, HatPosition::LEFT),
        ];
        for source in sources {
            assert_eq!(source.to_string().parse::<InputSource>(), Ok(source));
        }
        assert_eq!(InputSource::hat(0, HatPosition::LEFT).to_string(), "h0.8");
    }
}
