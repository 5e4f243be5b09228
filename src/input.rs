//! Shared day/night input
//!
//! The debounce collaborator writes the level from whatever context samples
//! the opto-isolated input; the main loop reads it once per tick and hands it
//! to every channel.

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::ModuleConfig;

const LEVEL_NAME_DAY: &str = "Day";
const LEVEL_NAME_NIGHT: &str = "Night";

/// Level of the shared day/night input.
///
/// Also selects one half of the per-channel `[day, night]` config pairs,
/// which is why it doubles as the channel phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Level {
    Day = 0,
    Night = 1,
}

impl Level {
    /// Map a raw input pin state onto a level.
    ///
    /// A high input means night unless the module is configured to invert it.
    pub const fn from_raw(high: bool, invert: bool) -> Self {
        if high != invert { Self::Night } else { Self::Day }
    }

    /// Index into `[day, night]` config pairs
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other level
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => LEVEL_NAME_DAY,
            Self::Night => LEVEL_NAME_NIGHT,
        }
    }
}

/// Debounced input level shared between the sampling context and the loop.
///
/// Holds `None` until the first sample arrives; the loop must not tick the
/// engine before then.
pub struct InputSignal {
    level: Mutex<Cell<Option<Level>>>,
    invert: bool,
}

impl InputSignal {
    /// Create an undefined signal
    pub const fn new(invert: bool) -> Self {
        Self {
            level: Mutex::new(Cell::new(None)),
            invert,
        }
    }

    /// Create an undefined signal with the module's input polarity
    pub const fn from_config(config: &ModuleConfig) -> Self {
        Self::new(config.invert_input)
    }

    /// Store a raw debounced pin state
    pub fn set_raw(&self, high: bool) {
        self.set(Level::from_raw(high, self.invert));
    }

    /// Store an already resolved level
    pub fn set(&self, level: Level) {
        critical_section::with(|cs| self.level.borrow(cs).set(Some(level)));
    }

    /// Current level, `None` while still undefined
    pub fn level(&self) -> Option<Level> {
        critical_section::with(|cs| self.level.borrow(cs).get())
    }

    pub const fn is_inverted(&self) -> bool {
        self.invert
    }
}

/// Derives edges from successive level observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: Option<Level>,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Record an observation and return the new level if it changed.
    ///
    /// Outputs boot at their day duty, so a first observation of night is an
    /// edge and a first observation of day is not.
    pub fn update(&mut self, level: Level) -> Option<Level> {
        let previous = self.last.replace(level);
        match previous {
            Some(previous) if previous == level => None,
            None if level == Level::Day => None,
            _ => Some(level),
        }
    }

    /// Last observed level
    pub const fn last(&self) -> Option<Level> {
        self.last
    }
}
