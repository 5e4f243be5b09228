use super::Mode;
use crate::channel::ChannelState;
use crate::input::Level;

/// Stages a channel runs after an edge.
///
/// Every stage is a delay followed by a transit, both taken from the same
/// half (`Level`) of the channel config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    /// One stage toward the given level's target, then steady
    Once(Level),
    /// Night stage, then day stage, then steady
    RoundTrip,
    /// Night and day stages alternating until interrupted
    Cycle,
}

impl Sequence {
    /// Level of the stage the sequence opens with
    pub const fn first_stage(self) -> Level {
        match self {
            Self::Once(level) => level,
            Self::RoundTrip | Self::Cycle => Level::Night,
        }
    }

    /// Stage to run after `completed`, `None` once the sequence is over
    pub const fn next_stage(self, completed: Level) -> Option<Level> {
        match (self, completed) {
            (Self::Once(_), _) => None,
            (Self::RoundTrip, Level::Night) => Some(Level::Day),
            (Self::RoundTrip, Level::Day) => None,
            (Self::Cycle, level) => Some(level.toggled()),
        }
    }
}

/// What a channel does about an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No reaction; anything already running carries on
    Ignore,
    /// Begin a sequence on a steady channel
    Start(Sequence),
    /// Abandon the running delay or transit and begin a new sequence
    Restart(Sequence),
}

impl Action {
    /// Sequence to begin, if any
    pub const fn sequence(self) -> Option<Sequence> {
        match self {
            Self::Ignore => None,
            Self::Start(sequence) | Self::Restart(sequence) => Some(sequence),
        }
    }
}

/// Decide how a channel in `state` running `mode` reacts to an edge to `edge`.
pub const fn resolve(mode: Mode, edge: Level, state: ChannelState) -> Action {
    let sequence = match (mode, edge) {
        (Mode::DayNight, level) => Sequence::Once(level),
        (Mode::DuskDawn, _) => Sequence::RoundTrip,
        (Mode::NightOnOff, Level::Night) => Sequence::Cycle,
        (Mode::NightOnOff, Level::Day) => Sequence::Once(Level::Day),
        (Mode::Dusk, Level::Night) => Sequence::Once(Level::Night),
        (Mode::Dawn, Level::Day) => Sequence::Once(Level::Day),
        (Mode::Dusk, Level::Day) | (Mode::Dawn, Level::Night) => return Action::Ignore,
    };

    match state {
        ChannelState::Steady => Action::Start(sequence),
        ChannelState::Delay | ChannelState::Transit => Action::Restart(sequence),
    }
}
