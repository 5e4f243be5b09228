//! All channels of one module
//!
//! Owns the ten [`LightChannel`]s built from the selected config set and
//! ticks them together with the same elapsed time and input level.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::CHANNEL_COUNT;
use crate::channel::LightChannel;
#[cfg(feature = "esp32-log")]
use crate::config::MODULE_CONFIG;
use crate::config::{ChannelConfig, ConfigAddress, ConfigSet};
use crate::event::{EventSink, LightEvent};
use crate::input::{EdgeDetector, Level};
use crate::output::OutputStage;

/// Light controller - the main orchestrator
pub struct LightController<'a> {
    note: &'static str,
    channels: [LightChannel<'a>; CHANNEL_COUNT],
    edges: EdgeDetector,
}

impl<'a> LightController<'a> {
    /// Load the config set selected by `address`
    pub fn new(address: ConfigAddress, output: &'a OutputStage) -> Self {
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightController.new] {}, config address {}",
            MODULE_CONFIG.note,
            address.index()
        );

        Self::from_set(address.config_set(), output)
    }

    /// Load an explicit config set
    pub fn from_set(set: &ConfigSet, output: &'a OutputStage) -> Self {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.from_set] {}", set.note);

        let mut controller = Self::from_configs(&set.channels, output);
        controller.note = set.note;
        controller
    }

    /// Build channels from bare configs
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_configs(configs: &[ChannelConfig; CHANNEL_COUNT], output: &'a OutputStage) -> Self {
        let channels = core::array::from_fn(|index| {
            let config = configs[index];

            #[cfg(feature = "esp32-log")]
            println!(
                "[LightController] ch{} {}{} fade {}s delay {:?}s duty {:?} -> {}ms/step{}",
                index,
                config.mode.as_str(),
                if config.mode.is_repeating() { " (repeating)" } else { "" },
                config.fade_seconds,
                config.delay_seconds,
                config.duty_target,
                config.pacing().ms_per_step(),
                if config.pacing().is_capped() { " (capped)" } else { "" }
            );

            LightChannel::new(index as u8, config, output)
        });

        Self {
            note: "",
            channels,
            edges: EdgeDetector::new(),
        }
    }

    /// Advance every channel and return the corrected duties to emit
    pub fn tick<S: EventSink>(
        &mut self,
        elapsed: Duration,
        level: Level,
        events: &mut S,
    ) -> [u8; CHANNEL_COUNT] {
        if let Some(edge) = self.edges.update(level) {
            #[cfg(feature = "esp32-log")]
            println!("[LightController.tick] input edge to {}", edge.as_str());

            events.publish(LightEvent::Edge { level: edge });
        }

        let mut duties = [0; CHANNEL_COUNT];
        for (duty, channel) in duties.iter_mut().zip(self.channels.iter_mut()) {
            *duty = channel.tick_with_events(elapsed, level, events);
        }
        duties
    }

    /// Description of the loaded config set
    pub const fn note(&self) -> &'static str {
        self.note
    }

    pub fn channels(&self) -> &[LightChannel<'a>] {
        &self.channels
    }

    pub fn channel(&self, index: usize) -> Option<&LightChannel<'a>> {
        self.channels.get(index)
    }

    /// Uncorrected duties of all channels
    pub fn duties(&self) -> [u8; CHANNEL_COUNT] {
        core::array::from_fn(|index| self.channels[index].duty())
    }
}
