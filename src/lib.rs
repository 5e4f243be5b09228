#![no_std]

pub mod alarm;
pub mod channel;
pub mod config;
pub mod controller;
pub mod event;
pub mod gamma;
pub mod input;
pub mod mode;
pub mod output;
pub mod pacing;
pub mod scheduler;

pub use alarm::{AlarmOutput, OverCurrentMonitor};
pub use channel::{ChannelState, LightChannel};
pub use config::{
    CONFIG_SETS, ChannelConfig, ConfigAddress, ConfigSet, MODULE_CONFIG, ModuleConfig,
};
pub use controller::LightController;
pub use event::{EventChannel, EventReceiver, EventSender, EventSink, LightEvent, NoEvents};
pub use gamma::{GAMMA8, GammaTable, gamma8};
pub use input::{EdgeDetector, InputSignal, Level};
pub use mode::{Action, Mode, Sequence, resolve};
pub use output::OutputStage;
pub use pacing::StepPacing;
pub use scheduler::TickScheduler;
pub use embassy_time::{Duration, Instant};

/// Number of light channels on one module
pub const CHANNEL_COUNT: usize = 10;

/// Abstract PWM output trait
///
/// Implement this trait to support different hardware platforms.
/// Receives gamma corrected duties; 0 and 255 mean steady off and on.
pub trait PwmOutput {
    /// Write the duty of one channel
    fn write(&mut self, channel: usize, duty: u8);
}
