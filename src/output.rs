//! Output stage
//!
//! Channels track duty linearly; correction happens only here, on the way
//! out to the PWM hardware.

use crate::gamma::GammaTable;
use crate::{CHANNEL_COUNT, PwmOutput};

/// Gamma correction applied at emission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputStage {
    gamma: GammaTable,
}

impl OutputStage {
    /// Standard gamma 2.8 correction
    pub const STANDARD: Self = Self {
        gamma: GammaTable::STANDARD,
    };

    pub const fn new(gamma: GammaTable) -> Self {
        Self { gamma }
    }

    /// Corrected duty for a linear request
    #[inline]
    pub const fn correct(&self, duty: u8) -> u8 {
        self.gamma.correct(duty)
    }

    pub const fn gamma(&self) -> &GammaTable {
        &self.gamma
    }
}

/// Write one frame of already corrected duties, channel by channel
pub fn write_frame<O: PwmOutput>(output: &mut O, duties: &[u8; CHANNEL_COUNT]) {
    for (channel, duty) in duties.iter().enumerate() {
        output.write(channel, *duty);
    }
}
