//! Step pacing derived from a channel's fade duration
//!
//! A transit moves the duty one unit at a time. The interval between units
//! is derived once, when the config is loaded, from the fade duration and
//! the distance between the two duty targets.

/// Largest step interval the pacing storage holds.
///
/// Long fades across a tiny duty delta (3 units or fewer at 255 s) would
/// exceed it; those are capped and simply finish early.
pub const MAX_MS_PER_STEP: u16 = u16::MAX;

/// Interval between duty steps of a transit.
///
/// `fade_ms / steps` rarely divides evenly. The remainder is spread over the
/// steps, one extra millisecond at a time, so a full transit lasts exactly the
/// configured fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPacing {
    ms_per_step: u16,
    remainder: u16,
    steps: u16,
}

impl StepPacing {
    /// Quick fade: one unit per millisecond
    pub const QUICK: Self = Self {
        ms_per_step: 1,
        remainder: 0,
        steps: 1,
    };

    /// Derive the pacing for fading `fade_seconds` between `from` and `to`.
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn derive(fade_seconds: u8, from: u8, to: u8) -> Self {
        if fade_seconds == 0 {
            return Self::QUICK;
        }

        let steps = from.abs_diff(to) as u32;
        if steps == 0 {
            // Nothing to step; any value is safe.
            return Self {
                ms_per_step: MAX_MS_PER_STEP,
                remainder: 0,
                steps: 1,
            };
        }

        let fade_ms = fade_seconds as u32 * 1000;
        let ms_per_step = fade_ms / steps;
        if ms_per_step > MAX_MS_PER_STEP as u32 {
            return Self {
                ms_per_step: MAX_MS_PER_STEP,
                remainder: 0,
                steps: steps as u16,
            };
        }

        Self {
            ms_per_step: ms_per_step as u16,
            remainder: (fade_ms % steps) as u16,
            steps: steps as u16,
        }
    }

    /// Whole milliseconds between steps
    pub const fn ms_per_step(self) -> u16 {
        self.ms_per_step
    }

    /// Whether the interval was capped at [`MAX_MS_PER_STEP`]
    pub const fn is_capped(self) -> bool {
        self.ms_per_step == MAX_MS_PER_STEP && self.remainder == 0
    }

    /// Duration of a transit across the full derived delta
    #[allow(clippy::cast_lossless)]
    pub const fn full_transit_ms(self) -> u32 {
        self.ms_per_step as u32 * self.steps as u32 + self.remainder as u32
    }

    /// Duration of a transit across `delta` units, starting a fresh spread
    #[allow(clippy::cast_lossless)]
    pub const fn transit_ms(self, delta: u8) -> u32 {
        let delta = delta as u32;
        self.ms_per_step as u32 * delta + self.remainder as u32 * delta / self.steps as u32
    }

    /// Interval before the next step.
    ///
    /// `error` carries the spread remainder between calls and starts at zero
    /// for each transit.
    pub fn next_interval(self, error: &mut u16) -> u32 {
        *error += self.remainder;
        if *error >= self.steps {
            *error -= self.steps;
            u32::from(self.ms_per_step) + 1
        } else {
            u32::from(self.ms_per_step)
        }
    }
}

impl Default for StepPacing {
    fn default() -> Self {
        Self::QUICK
    }
}
