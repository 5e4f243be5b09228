//! Tick scheduling and timing utilities.
//!
//! Provides portable tick pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::event::EventSink;
use crate::input::{InputSignal, Level};
use crate::output::write_frame;
use crate::{CHANNEL_COUNT, LightController, PwmOutput};

/// Default tick period. Quick fades step once per millisecond.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Corrected duties written during this tick.
    pub duties: [u8; CHANNEL_COUNT],
}

/// Portable tick scheduler that manages timing without async.
///
/// This scheduler:
/// - Measures the time elapsed since the previous tick
/// - Advances the controller and writes every channel to the PWM output
/// - Returns timing info so the caller can sleep appropriately
///
/// Elapsed time is measured between actual tick instants, so a late tick
/// never loses time; only the deadline is re-anchored after a stall.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(controller, pwm, events);
///
/// loop {
///     let now = Instant::now();
///     if let Some(result) = scheduler.tick_from(now, &INPUT) {
///         // Platform-specific sleep
///         sleep_ms(result.sleep_duration.as_millis());
///     }
/// }
/// ```
pub struct TickScheduler<'a, O: PwmOutput, S: EventSink> {
    output: O,
    events: S,
    controller: LightController<'a>,
    last_tick: Option<Instant>,
    next_tick: Instant,
    tick_period: Duration,
}

impl<'a, O: PwmOutput, S: EventSink> TickScheduler<'a, O, S> {
    /// Create a new tick scheduler.
    ///
    /// Uses `DEFAULT_TICK_PERIOD` (1 ms) for tick timing.
    pub fn new(controller: LightController<'a>, output: O, events: S) -> Self {
        Self::with_tick_period(controller, output, events, DEFAULT_TICK_PERIOD)
    }

    /// Create a new tick scheduler with custom tick period.
    pub fn with_tick_period(
        controller: LightController<'a>,
        output: O,
        events: S,
        tick_period: Duration,
    ) -> Self {
        Self {
            output,
            events,
            controller,
            last_tick: None,
            next_tick: Instant::from_millis(0),
            tick_period,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Advances all channels by the time since the previous tick
    /// 3. Writes every channel to the output
    /// 4. Returns the deadline for the next tick
    pub fn tick(&mut self, now: Instant, level: Level) -> TickResult {
        let first_tick = self.last_tick.is_none();
        let elapsed = self
            .last_tick
            .and_then(|last| now.checked_duration_since(last))
            .unwrap_or(Duration::from_millis(0));
        self.last_tick = Some(now);

        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift = self.tick_period * 2;
        if first_tick || now > self.next_tick + max_drift {
            self.next_tick = now;
        }

        let duties = self.controller.tick(elapsed, level, &mut self.events);
        write_frame(&mut self.output, &duties);

        self.next_tick += self.tick_period;

        let sleep_duration = self
            .next_tick
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
            duties,
        }
    }

    /// Tick with the level held by `input`.
    ///
    /// Returns `None` without touching the channels while the input is still
    /// undefined after boot.
    pub fn tick_from(&mut self, now: Instant, input: &InputSignal) -> Option<TickResult> {
        input.level().map(|level| self.tick(now, level))
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &LightController<'a> {
        &self.controller
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Get a reference to the event sink.
    pub fn events(&self) -> &S {
        &self.events
    }
}
