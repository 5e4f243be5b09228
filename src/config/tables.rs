use super::{CONFIG_SET_COUNT, ChannelConfig, ConfigSet};
use crate::mode::Mode::{Dawn, DayNight, Dusk, DuskDawn, NightOnOff};

const fn ch(
    fade_seconds: u8,
    delay_seconds: [u8; 2],
    duty_target: [u8; 2],
    mode: crate::mode::Mode,
) -> ChannelConfig {
    ChannelConfig::new(fade_seconds, delay_seconds, duty_target, mode)
}

/// Shipped channel tables, indexed by [`super::ConfigAddress`].
///
/// Row layout: `ch(fade_s, [delay_day_s, delay_night_s], [duty_day, duty_night], mode)`.
/// Duty 0 and 255 are steady off / on; 1 and 254 the dimmest and brightest PWM.
/// Longest fade or delay is 255 s (4 min 15 s).
#[rustfmt::skip]
pub static CONFIG_SETS: [ConfigSet; CONFIG_SET_COUNT] = [
    ConfigSet {
        note: "development bench",
        channels: [
            ch(0,        [0, 0],   [1, 100],  DayNight),
            ch(1,        [0, 1],   [1, 254],  DayNight),
            ch(1,        [3, 3],   [0, 255],  DayNight),
            ch(1,        [4, 4],   [0, 254],  DayNight),
            ch(1,        [5, 5],   [50, 150], DayNight),
            ch(15,       [6, 6],   [60, 160], DayNight),
            ch(30,       [2, 1],   [70, 254], DayNight),
            ch(3 * 60,   [1, 2],   [254, 1],  DayNight),
            ch(4 * 60 + 15, [2, 1], [0, 254], DayNight),
            ch(0,        [2, 1],   [0, 254],  DayNight),
        ],
    },
    ConfigSet {
        note: "short delays",
        channels: [
            ch(0,        [0, 0],   [1, 100],  DayNight),
            ch(1,        [1, 1],   [1, 254],  DayNight),
            ch(1,        [2, 2],   [0, 255],  DayNight),
            ch(1,        [3, 3],   [0, 254],  DayNight),
            ch(1,        [1, 1],   [50, 150], DayNight),
            ch(15,       [1, 1],   [60, 160], DayNight),
            ch(30,       [1, 1],   [70, 254], DayNight),
            ch(3 * 60,   [1, 1],   [254, 1],  DayNight),
            ch(4 * 60 + 15, [1, 1], [0, 254], DayNight),
            ch(1,        [1, 1],   [0, 254],  DayNight),
        ],
    },
    ConfigSet {
        note: "one second delays",
        channels: [
            ch(0,        [1, 1],   [1, 254],  DayNight),
            ch(1,        [1, 1],   [1, 254],  DayNight),
            ch(1,        [1, 1],   [0, 255],  DayNight),
            ch(1,        [1, 1],   [0, 254],  DayNight),
            ch(1,        [1, 1],   [50, 150], DayNight),
            ch(15,       [1, 1],   [60, 160], DayNight),
            ch(30,       [10, 10], [10, 254], DayNight),
            ch(3 * 60,   [1, 1],   [254, 1],  DayNight),
            ch(4 * 60 + 15, [2, 2], [0, 254], DayNight),
            ch(0,        [1, 1],   [0, 254],  DayNight),
        ],
    },
    ConfigSet {
        note: "test LED board, all modes",
        channels: [
            ch(1,        [3, 2],   [200, 0],  NightOnOff), // blue
            ch(5,        [1, 1],   [0, 200],  DayNight),   // blue
            ch(5,        [1, 1],   [0, 200],  DayNight),   // blue
            ch(5,        [1, 2],   [0, 250],  DuskDawn),   // red
            ch(2,        [1, 2],   [0, 250],  Dusk),       // red
            ch(3,        [1, 1],   [0, 250],  Dawn),       // red
            ch(0,        [0, 0],   [127, 0],  DayNight),   // white
            ch(5,        [1, 1],   [127, 0],  DayNight),   // white
            ch(1,        [3, 6],   [127, 0],  NightOnOff), // white
            ch(1,        [5, 5],   [0, 200],  NightOnOff), // white
        ],
    },
];
