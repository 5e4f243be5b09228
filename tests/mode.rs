mod tests {
    use layout_lights::{Action, ChannelState, Level, Mode, Sequence, resolve};

    const MODES: [Mode; 5] = [
        Mode::DayNight,
        Mode::Dusk,
        Mode::Dawn,
        Mode::DuskDawn,
        Mode::NightOnOff,
    ];

    #[test]
    fn test_mode_from_raw() {
        assert_eq!(Mode::from_raw(0), Some(Mode::DayNight));
        assert_eq!(Mode::from_raw(4), Some(Mode::NightOnOff));
        assert_eq!(Mode::from_raw(5), None);
    }

    #[test]
    fn test_mode_names() {
        for mode in MODES {
            assert_eq!(Mode::parse_from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::DuskDawn.as_str(), "DuskDawn");
        assert_eq!(Mode::parse_from_str("daynight"), None);
    }

    #[test]
    fn test_resolve_night_edge() {
        let state = ChannelState::Steady;
        assert_eq!(
            resolve(Mode::DayNight, Level::Night, state),
            Action::Start(Sequence::Once(Level::Night))
        );
        assert_eq!(
            resolve(Mode::Dusk, Level::Night, state),
            Action::Start(Sequence::Once(Level::Night))
        );
        assert_eq!(resolve(Mode::Dawn, Level::Night, state), Action::Ignore);
        assert_eq!(
            resolve(Mode::DuskDawn, Level::Night, state),
            Action::Start(Sequence::RoundTrip)
        );
        assert_eq!(
            resolve(Mode::NightOnOff, Level::Night, state),
            Action::Start(Sequence::Cycle)
        );
    }

    #[test]
    fn test_resolve_day_edge() {
        let state = ChannelState::Steady;
        assert_eq!(
            resolve(Mode::DayNight, Level::Day, state),
            Action::Start(Sequence::Once(Level::Day))
        );
        assert_eq!(resolve(Mode::Dusk, Level::Day, state), Action::Ignore);
        assert_eq!(
            resolve(Mode::Dawn, Level::Day, state),
            Action::Start(Sequence::Once(Level::Day))
        );
        assert_eq!(
            resolve(Mode::DuskDawn, Level::Day, state),
            Action::Start(Sequence::RoundTrip)
        );
        assert_eq!(
            resolve(Mode::NightOnOff, Level::Day, state),
            Action::Start(Sequence::Once(Level::Day))
        );
    }

    #[test]
    fn test_resolve_interrupts_running_sequence() {
        for state in [ChannelState::Delay, ChannelState::Transit] {
            assert_eq!(
                resolve(Mode::NightOnOff, Level::Day, state),
                Action::Restart(Sequence::Once(Level::Day))
            );
            assert_eq!(resolve(Mode::Dusk, Level::Day, state), Action::Ignore);
        }
    }

    #[test]
    fn test_sequence_stages() {
        assert_eq!(Sequence::Once(Level::Day).first_stage(), Level::Day);
        assert_eq!(Sequence::Once(Level::Day).next_stage(Level::Day), None);

        assert_eq!(Sequence::RoundTrip.first_stage(), Level::Night);
        assert_eq!(Sequence::RoundTrip.next_stage(Level::Night), Some(Level::Day));
        assert_eq!(Sequence::RoundTrip.next_stage(Level::Day), None);

        assert_eq!(Sequence::Cycle.first_stage(), Level::Night);
        assert_eq!(Sequence::Cycle.next_stage(Level::Night), Some(Level::Day));
        assert_eq!(Sequence::Cycle.next_stage(Level::Day), Some(Level::Night));
    }

    #[test]
    fn test_only_night_on_off_repeats() {
        for mode in MODES {
            assert_eq!(mode.is_repeating(), mode == Mode::NightOnOff);
        }
    }
}
