mod tests {
    use embassy_time::{Duration, Instant};
    use layout_lights::{
        CHANNEL_COUNT, ChannelConfig, ChannelState, EventChannel, InputSignal, LightController,
        LightEvent, Level, MODULE_CONFIG, Mode, NoEvents, OutputStage, PwmOutput, TickScheduler,
    };

    static OUTPUT: OutputStage = OutputStage::STANDARD;

    #[derive(Default)]
    struct RecordingPwm {
        duties: [u8; CHANNEL_COUNT],
        writes: usize,
    }

    impl PwmOutput for RecordingPwm {
        fn write(&mut self, channel: usize, duty: u8) {
            self.duties[channel] = duty;
            self.writes += 1;
        }
    }

    fn quick_fade_controller() -> LightController<'static> {
        let configs = [ChannelConfig::new(0, [0, 0], [0, 255], Mode::DayNight); CHANNEL_COUNT];
        LightController::from_configs(&configs, &OUTPUT)
    }

    #[test]
    fn test_writes_every_channel() {
        let mut scheduler =
            TickScheduler::new(quick_fade_controller(), RecordingPwm::default(), NoEvents);

        scheduler.tick(Instant::from_millis(0), Level::Night);
        assert_eq!(scheduler.output().writes, CHANNEL_COUNT);

        for t in 1..=255 {
            scheduler.tick(Instant::from_millis(t), Level::Night);
        }
        assert_eq!(scheduler.output().duties, [255; CHANNEL_COUNT]);
        assert_eq!(scheduler.output().writes, 256 * CHANNEL_COUNT);
    }

    #[test]
    fn test_elapsed_time_follows_instants() {
        let mut scheduler =
            TickScheduler::new(quick_fade_controller(), RecordingPwm::default(), NoEvents);

        scheduler.tick(Instant::from_millis(5_000), Level::Night);
        let result = scheduler.tick(Instant::from_millis(5_100), Level::Night);
        assert_eq!(scheduler.controller().duties(), [100; CHANNEL_COUNT]);
        assert_eq!(result.duties, [layout_lights::gamma8(100); CHANNEL_COUNT]);
    }

    #[test]
    fn test_sleep_and_drift_correction() {
        let mut scheduler = TickScheduler::with_tick_period(
            quick_fade_controller(),
            RecordingPwm::default(),
            NoEvents,
            Duration::from_millis(10),
        );

        let result = scheduler.tick(Instant::from_millis(0), Level::Day);
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(13), Level::Day);
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(7));

        // Far behind: deadline re-anchors on now instead of bursting
        let result = scheduler.tick(Instant::from_millis(500), Level::Day);
        assert_eq!(result.next_deadline, Instant::from_millis(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_waits_for_defined_input() {
        let input = InputSignal::from_config(&MODULE_CONFIG);
        let events = EventChannel::<{ 3 * CHANNEL_COUNT + 1 }>::new();
        let mut scheduler =
            TickScheduler::new(quick_fade_controller(), RecordingPwm::default(), events.sender());

        assert!(scheduler.tick_from(Instant::from_millis(0), &input).is_none());
        assert_eq!(scheduler.output().writes, 0);

        input.set_raw(true);
        assert!(scheduler.tick_from(Instant::from_millis(1), &input).is_some());
        assert_eq!(events.len(), 3 * CHANNEL_COUNT + 1);
        assert_eq!(events.dropped(), 0);
        assert_eq!(events.try_receive(), Ok(LightEvent::Edge { level: Level::Night }));
    }

    #[test]
    fn test_small_event_queue_keeps_latest() {
        let events = EventChannel::<16>::new();
        let mut scheduler =
            TickScheduler::new(quick_fade_controller(), RecordingPwm::default(), events.sender());

        scheduler.tick(Instant::from_millis(0), Level::Night);
        assert_eq!(events.len(), 16);
        assert_eq!(events.dropped(), 3 * CHANNEL_COUNT as u32 + 1 - 16);

        let mut last = None;
        while let Ok(event) = events.try_receive() {
            last = Some(event);
        }
        assert_eq!(
            last,
            Some(LightEvent::StateChanged {
                channel: CHANNEL_COUNT as u8 - 1,
                state: ChannelState::Transit,
                phase: Level::Night,
                duty: 0,
            })
        );
    }
}
