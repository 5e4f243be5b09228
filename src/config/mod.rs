//! Compiled-in module configuration
//!
//! Four channel tables ship with the firmware. Two address jumpers on the
//! board pick one of them at startup; the choice holds until the next reset.

mod tables;

pub use tables::CONFIG_SETS;

use crate::CHANNEL_COUNT;
use crate::input::Level;
use crate::mode::Mode;
use crate::pacing::StepPacing;

/// Number of selectable channel tables
pub const CONFIG_SET_COUNT: usize = 4;

/// Static configuration of one light channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Seconds to fade between the two duty targets, 0 for a quick fade
    pub fade_seconds: u8,
    /// Seconds to wait after an edge, `[toward day, toward night]`
    pub delay_seconds: [u8; 2],
    /// Duty targets, `[day, night]`
    pub duty_target: [u8; 2],
    pub mode: Mode,
}

impl ChannelConfig {
    pub const fn new(
        fade_seconds: u8,
        delay_seconds: [u8; 2],
        duty_target: [u8; 2],
        mode: Mode,
    ) -> Self {
        Self {
            fade_seconds,
            delay_seconds,
            duty_target,
            mode,
        }
    }

    /// Delay before a stage toward `level`
    pub const fn delay(&self, level: Level) -> u8 {
        self.delay_seconds[level.index()]
    }

    /// Duty target of a stage toward `level`
    pub const fn target(&self, level: Level) -> u8 {
        self.duty_target[level.index()]
    }

    /// Step pacing for this channel's transits
    pub const fn pacing(&self) -> StepPacing {
        StepPacing::derive(
            self.fade_seconds,
            self.duty_target[0],
            self.duty_target[1],
        )
    }

    /// Length of one night stage plus one day stage of a repeating mode.
    ///
    /// `None` for modes that settle after their stages.
    #[allow(clippy::cast_lossless)]
    pub const fn cycle_ms(&self) -> Option<u32> {
        if !self.mode.is_repeating() {
            return None;
        }
        let transit = self
            .pacing()
            .transit_ms(self.duty_target[0].abs_diff(self.duty_target[1]));
        let delays = self.delay_seconds[0] as u32 + self.delay_seconds[1] as u32;
        Some(delays * 1000 + 2 * transit)
    }
}

/// One selectable table of channel configs
#[derive(Debug, Clone, Copy)]
pub struct ConfigSet {
    /// Free-form description shown by diagnostics
    pub note: &'static str,
    pub channels: [ChannelConfig; CHANNEL_COUNT],
}

/// Address of a config set, read from two jumpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigAddress(u8);

impl ConfigAddress {
    /// Combine the two address jumpers, `adr0` being the low bit
    #[allow(clippy::cast_lossless)]
    pub const fn from_pins(adr0: bool, adr1: bool) -> Self {
        Self((adr0 as u8) | ((adr1 as u8) << 1))
    }

    #[allow(clippy::cast_lossless)]
    pub const fn from_raw(value: u8) -> Option<Self> {
        if (value as usize) < CONFIG_SET_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    #[allow(clippy::cast_lossless)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The table this address selects
    pub fn config_set(self) -> &'static ConfigSet {
        &CONFIG_SETS[self.index()]
    }
}

/// Module-wide settings that are not per channel
#[derive(Debug, Clone, Copy)]
pub struct ModuleConfig {
    /// Shown in the startup log
    pub note: &'static str,
    /// Sense reading above which the over-current alarm trips
    pub sense_threshold: u16,
    /// Treat a low input as night instead of a high one
    pub invert_input: bool,
}

/// Settings of the shipped firmware
pub const MODULE_CONFIG: ModuleConfig = ModuleConfig {
    note: "layout lighting, 10 channels",
    // ~2 A through the 0R05 sense resistor
    sense_threshold: 100,
    invert_input: false,
};
