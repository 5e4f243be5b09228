//! Over-current alarm
//!
//! Runs beside the light engine and never influences it. The shell feeds it
//! the current-sense reading; the monitor raises the alarm output (red error
//! LED and buzzer) while the reading is above the threshold.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::ModuleConfig;
use crate::event::{EventSink, LightEvent};

/// Hardware that signals an over-current condition
pub trait AlarmOutput {
    fn set_alarm(&mut self, active: bool);
}

/// Compares sense readings against a fixed threshold
#[derive(Debug, Clone, Copy)]
pub struct OverCurrentMonitor {
    threshold: u16,
    active: bool,
}

impl OverCurrentMonitor {
    pub const fn new(threshold: u16) -> Self {
        Self {
            threshold,
            active: false,
        }
    }

    /// Monitor with the module's sense threshold
    pub const fn from_config(config: &ModuleConfig) -> Self {
        Self::new(config.sense_threshold)
    }

    /// Process one sense reading and return whether the alarm is active.
    ///
    /// The alarm output is only written when the condition changes.
    pub fn update<A: AlarmOutput, S: EventSink>(
        &mut self,
        sense: u16,
        alarm: &mut A,
        events: &mut S,
    ) -> bool {
        let over = sense > self.threshold;
        if over != self.active {
            #[cfg(feature = "esp32-log")]
            println!(
                "[OverCurrentMonitor.update] sense {} threshold {}: alarm {}",
                sense,
                self.threshold,
                if over { "on" } else { "off" }
            );

            self.active = over;
            alarm.set_alarm(over);
            events.publish(LightEvent::Alarm { active: over });
        }
        over
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn threshold(&self) -> u16 {
        self.threshold
    }
}
