//! Channel operating modes
//!
//! Modes are a closed set of variants; the behavior of each one is described
//! by the resolver in [`resolve`], not by per-mode types.

mod resolver;

pub use resolver::{Action, Sequence, resolve};

const MODE_NAME_DAY_NIGHT: &str = "DayNight";
const MODE_NAME_DUSK: &str = "Dusk";
const MODE_NAME_DAWN: &str = "Dawn";
const MODE_NAME_DUSK_DAWN: &str = "DuskDawn";
const MODE_NAME_NIGHT_ON_OFF: &str = "NightOnOff";

const MODE_ID_DAY_NIGHT: u8 = 0;
const MODE_ID_DUSK: u8 = 1;
const MODE_ID_DAWN: u8 = 2;
const MODE_ID_DUSK_DAWN: u8 = 3;
const MODE_ID_NIGHT_ON_OFF: u8 = 4;

/// Timing behavior of a single channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// Follow the input: fade to the night target at night, back at day
    DayNight = MODE_ID_DAY_NIGHT,
    /// React to night only
    Dusk = MODE_ID_DUSK,
    /// React to day only
    Dawn = MODE_ID_DAWN,
    /// Any edge runs night then day stages once
    DuskDawn = MODE_ID_DUSK_DAWN,
    /// Alternate night and day stages for as long as the input stays night
    NightOnOff = MODE_ID_NIGHT_ON_OFF,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_DAY_NIGHT => Self::DayNight,
            MODE_ID_DUSK => Self::Dusk,
            MODE_ID_DAWN => Self::Dawn,
            MODE_ID_DUSK_DAWN => Self::DuskDawn,
            MODE_ID_NIGHT_ON_OFF => Self::NightOnOff,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DayNight => MODE_NAME_DAY_NIGHT,
            Self::Dusk => MODE_NAME_DUSK,
            Self::Dawn => MODE_NAME_DAWN,
            Self::DuskDawn => MODE_NAME_DUSK_DAWN,
            Self::NightOnOff => MODE_NAME_NIGHT_ON_OFF,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_DAY_NIGHT => Some(Self::DayNight),
            MODE_NAME_DUSK => Some(Self::Dusk),
            MODE_NAME_DAWN => Some(Self::Dawn),
            MODE_NAME_DUSK_DAWN => Some(Self::DuskDawn),
            MODE_NAME_NIGHT_ON_OFF => Some(Self::NightOnOff),
            _ => None,
        }
    }

    /// Whether a single edge can keep the channel busy indefinitely
    pub const fn is_repeating(self) -> bool {
        matches!(self, Self::NightOnOff)
    }
}
