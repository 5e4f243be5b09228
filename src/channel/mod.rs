//! Per-channel timing engine
//!
//! Each [`LightChannel`] is a small state machine advanced by elapsed time and
//! by edges of the shared input. It never waits: a tick spends the elapsed
//! milliseconds on the current delay or transit and returns straight away.

mod stepper;

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::ChannelConfig;
use crate::event::{EventSink, LightEvent, NoEvents};
use crate::input::{EdgeDetector, Level};
use crate::mode::{Action, Sequence, resolve};
use crate::output::OutputStage;
use crate::pacing::StepPacing;
use stepper::DutyStepper;

const STATE_NAME_STEADY: &str = "Steady";
const STATE_NAME_TRANSIT: &str = "Transit";
const STATE_NAME_DELAY: &str = "Delay";

/// Upper bound on stage changes handled within one tick.
///
/// Whole cycles of a repeating sequence are skipped, so only a cycle that
/// takes no time at all reaches it. Such a channel holds one duty anyway.
const MAX_STAGES_PER_TICK: usize = 16;

/// Runtime state of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelState {
    /// Duty fixed, nothing counting down
    Steady = 0,
    /// Duty moving toward the stage target
    Transit = 1,
    /// Waiting out the stage delay
    Delay = 2,
}

impl ChannelState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steady => STATE_NAME_STEADY,
            Self::Transit => STATE_NAME_TRANSIT,
            Self::Delay => STATE_NAME_DELAY,
        }
    }
}

/// One light output with its config and runtime state
#[derive(Debug, Clone)]
pub struct LightChannel<'a> {
    index: u8,
    config: ChannelConfig,
    pacing: StepPacing,
    cycle_ms: Option<u32>,
    output: &'a OutputStage,
    edges: EdgeDetector,
    /// Sub-millisecond part of elapsed time not yet spent
    pending_us: u32,

    duty: u8,
    state: ChannelState,
    phase: Level,
    sequence: Option<Sequence>,
    sec_remaining: u8,
    /// Milliseconds accumulated toward the next whole delay second
    delay_ms: u32,
    stepper: DutyStepper,
}

impl<'a> LightChannel<'a> {
    /// Create a steady channel at its day duty
    pub fn new(index: u8, config: ChannelConfig, output: &'a OutputStage) -> Self {
        let duty = config.target(Level::Day);
        Self {
            index,
            config,
            pacing: config.pacing(),
            cycle_ms: config.cycle_ms(),
            output,
            edges: EdgeDetector::new(),
            pending_us: 0,
            duty,
            state: ChannelState::Steady,
            phase: Level::Day,
            sequence: None,
            sec_remaining: 0,
            delay_ms: 0,
            stepper: DutyStepper::idle(duty),
        }
    }

    /// Advance by `elapsed` with the current input `level`.
    ///
    /// Returns the gamma corrected duty to write to the output.
    pub fn tick(&mut self, elapsed: Duration, level: Level) -> u8 {
        self.tick_with_events(elapsed, level, &mut NoEvents)
    }

    /// Same as [`Self::tick`], reporting state changes to `events`.
    ///
    /// Elapsed time belongs to whatever was running before this call, so it
    /// is spent first; an edge seen in `level` then starts its sequence with
    /// nothing accumulated.
    pub fn tick_with_events<S: EventSink>(
        &mut self,
        elapsed: Duration,
        level: Level,
        events: &mut S,
    ) -> u8 {
        let budget = self.take_elapsed_ms(elapsed);
        self.advance(budget, events);

        if let Some(edge) = self.edges.update(level) {
            self.on_edge(edge, events);
            // A stage without delay starts its transit right away
            self.advance(0, events);
        }

        self.output.correct(self.duty)
    }

    /// Channel position in its config set
    pub const fn index(&self) -> u8 {
        self.index
    }

    pub const fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Live, uncorrected duty
    pub const fn duty(&self) -> u8 {
        self.duty
    }

    /// Duty as it is emitted
    pub const fn corrected_duty(&self) -> u8 {
        self.output.correct(self.duty)
    }

    pub const fn state(&self) -> ChannelState {
        self.state
    }

    /// Level of the active (or last) stage
    pub const fn phase(&self) -> Level {
        self.phase
    }

    /// Sequence in progress, `None` when steady
    pub const fn sequence(&self) -> Option<Sequence> {
        self.sequence
    }

    pub const fn pacing(&self) -> StepPacing {
        self.pacing
    }

    pub const fn ms_per_step(&self) -> u16 {
        self.pacing.ms_per_step()
    }

    /// Whole delay seconds still to wait
    pub const fn sec_remaining(&self) -> u8 {
        self.sec_remaining
    }

    /// Milliseconds until the next countdown event: the next duty step in
    /// transit, the next delay second in delay, zero when steady.
    pub const fn ms_remaining(&self) -> u32 {
        match self.state {
            ChannelState::Steady => 0,
            ChannelState::Delay if self.sec_remaining == 0 => 0,
            ChannelState::Delay => 1000 - self.delay_ms,
            ChannelState::Transit => self.stepper.ms_remaining(),
        }
    }

    /// Duty the active transit is heading for
    pub const fn target(&self) -> u8 {
        match self.state {
            ChannelState::Transit => self.stepper.target(),
            ChannelState::Delay => self.config.target(self.phase),
            ChannelState::Steady => self.duty,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn take_elapsed_ms(&mut self, elapsed: Duration) -> u32 {
        let total_us = elapsed.as_micros() + u64::from(self.pending_us);
        self.pending_us = (total_us % 1000) as u32;
        u32::try_from(total_us / 1000).unwrap_or(u32::MAX)
    }

    fn on_edge<S: EventSink>(&mut self, edge: Level, events: &mut S) {
        let action = resolve(self.config.mode, edge, self.state);
        let Some(sequence) = action.sequence() else {
            return;
        };
        let interrupted = matches!(action, Action::Restart(_));

        #[cfg(feature = "esp32-log")]
        println!(
            "[LightChannel.on_edge] ch{} {} edge: {:?} from duty {}{}",
            self.index,
            edge.as_str(),
            sequence,
            self.duty,
            if interrupted { " (interrupted)" } else { "" }
        );

        events.publish(LightEvent::SequenceStarted {
            channel: self.index,
            sequence,
            interrupted,
        });
        self.sequence = Some(sequence);
        self.enter_delay(sequence.first_stage(), events);
    }

    /// Spend `budget` milliseconds on the current state and whatever follows
    fn advance<S: EventSink>(&mut self, mut budget: u32, events: &mut S) {
        for _ in 0..MAX_STAGES_PER_TICK {
            match self.state {
                ChannelState::Steady => return,
                ChannelState::Delay => {
                    let remaining = u32::from(self.sec_remaining) * 1000 - self.delay_ms;
                    if budget < remaining {
                        self.count_down(budget);
                        return;
                    }
                    budget -= remaining;
                    self.sec_remaining = 0;
                    self.delay_ms = 0;
                    self.enter_transit(events);
                }
                ChannelState::Transit => {
                    if !self.stepper.advance(&mut self.duty, &mut budget, self.pacing) {
                        return;
                    }
                    self.finish_stage(events);
                    budget = self.skip_cycles(budget);
                }
            }
        }
    }

    /// Drop whole cycles from `budget` at a stage boundary of a cycle.
    ///
    /// Each completed stage leaves the duty on a target, so from here every
    /// cycle takes exactly [`ChannelConfig::cycle_ms`] and ends where it began.
    fn skip_cycles(&self, budget: u32) -> u32 {
        match (self.sequence, self.cycle_ms) {
            (Some(Sequence::Cycle), Some(cycle_ms)) if cycle_ms > 0 => budget % cycle_ms,
            _ => budget,
        }
    }

    /// Spend time on the delay without finishing it
    #[allow(clippy::cast_possible_truncation)]
    fn count_down(&mut self, ms: u32) {
        self.delay_ms += ms;
        self.sec_remaining -= (self.delay_ms / 1000) as u8;
        self.delay_ms %= 1000;
    }

    fn enter_delay<S: EventSink>(&mut self, phase: Level, events: &mut S) {
        self.phase = phase;
        self.sec_remaining = self.config.delay(phase);
        self.delay_ms = 0;
        self.set_state(ChannelState::Delay, events);
    }

    fn enter_transit<S: EventSink>(&mut self, events: &mut S) {
        self.stepper = DutyStepper::start(self.config.target(self.phase), self.pacing);
        self.set_state(ChannelState::Transit, events);
    }

    fn finish_stage<S: EventSink>(&mut self, events: &mut S) {
        match self.sequence.and_then(|sequence| sequence.next_stage(self.phase)) {
            Some(next) => self.enter_delay(next, events),
            None => {
                self.sequence = None;
                self.stepper = DutyStepper::idle(self.duty);
                self.set_state(ChannelState::Steady, events);
            }
        }
    }

    fn set_state<S: EventSink>(&mut self, state: ChannelState, events: &mut S) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightChannel.set_state] ch{} {} -> {} ({} duty {})",
            self.index,
            self.state.as_str(),
            state.as_str(),
            self.phase.as_str(),
            self.duty
        );

        self.state = state;
        events.publish(LightEvent::StateChanged {
            channel: self.index,
            state,
            phase: self.phase,
            duty: self.duty,
        });
    }
}
