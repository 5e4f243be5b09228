use crate::pacing::StepPacing;

/// Moves a live duty value toward a target, one unit per paced interval.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DutyStepper {
    target: u8,
    /// Milliseconds accumulated toward the next step
    elapsed_ms: u32,
    /// Interval the next step waits for
    interval_ms: u32,
    /// Spread remainder, see [`StepPacing::next_interval`]
    error: u16,
}

impl DutyStepper {
    pub(crate) const fn idle(duty: u8) -> Self {
        Self {
            target: duty,
            elapsed_ms: 0,
            interval_ms: 0,
            error: 0,
        }
    }

    pub(crate) fn start(target: u8, pacing: StepPacing) -> Self {
        let mut error = 0;
        let interval_ms = pacing.next_interval(&mut error);
        Self {
            target,
            elapsed_ms: 0,
            interval_ms,
            error,
        }
    }

    pub(crate) const fn target(&self) -> u8 {
        self.target
    }

    /// Time left until the next step
    pub(crate) const fn ms_remaining(&self) -> u32 {
        self.interval_ms.saturating_sub(self.elapsed_ms)
    }

    /// Spend up to `budget` milliseconds stepping `duty`.
    ///
    /// Returns `true` once `duty` equals the target; whatever is left of the
    /// budget stays in `budget` for the next stage.
    pub(crate) fn advance(&mut self, duty: &mut u8, budget: &mut u32, pacing: StepPacing) -> bool {
        while *duty != self.target {
            let needed = self.ms_remaining();
            if *budget < needed {
                self.elapsed_ms += *budget;
                *budget = 0;
                return false;
            }

            *budget -= needed;
            *duty = step_toward(*duty, self.target);
            self.elapsed_ms = 0;
            self.interval_ms = pacing.next_interval(&mut self.error);
        }
        true
    }
}

/// One unit from `duty` toward `target`, never past it
const fn step_toward(duty: u8, target: u8) -> u8 {
    if duty < target {
        duty + 1
    } else if duty > target {
        duty - 1
    } else {
        duty
    }
}
