mod tests {
    use layout_lights::{EdgeDetector, InputSignal, Level, MODULE_CONFIG, ModuleConfig};

    #[test]
    fn test_level_from_raw() {
        assert_eq!(Level::from_raw(true, false), Level::Night);
        assert_eq!(Level::from_raw(false, false), Level::Day);
        assert_eq!(Level::from_raw(true, true), Level::Day);
        assert_eq!(Level::from_raw(false, true), Level::Night);
    }

    #[test]
    fn test_level_helpers() {
        assert_eq!(Level::Day.index(), 0);
        assert_eq!(Level::Night.index(), 1);
        assert_eq!(Level::Day.toggled(), Level::Night);
        assert_eq!(Level::Night.as_str(), "Night");
    }

    #[test]
    fn test_input_signal_is_undefined_until_set() {
        static INPUT: InputSignal = InputSignal::new(false);
        assert_eq!(INPUT.level(), None);

        INPUT.set_raw(true);
        assert_eq!(INPUT.level(), Some(Level::Night));
        INPUT.set(Level::Day);
        assert_eq!(INPUT.level(), Some(Level::Day));
    }

    #[test]
    fn test_inverted_input_signal() {
        let input = InputSignal::new(true);
        assert!(input.is_inverted());
        input.set_raw(true);
        assert_eq!(input.level(), Some(Level::Day));
    }

    #[test]
    fn test_input_signal_from_module_config() {
        let input = InputSignal::from_config(&MODULE_CONFIG);
        assert!(!input.is_inverted());
        input.set_raw(true);
        assert_eq!(input.level(), Some(Level::Night));

        let inverted = ModuleConfig {
            invert_input: true,
            ..MODULE_CONFIG
        };
        let input = InputSignal::from_config(&inverted);
        assert!(input.is_inverted());
        input.set_raw(true);
        assert_eq!(input.level(), Some(Level::Day));
        input.set_raw(false);
        assert_eq!(input.level(), Some(Level::Night));
    }

    #[test]
    fn test_edge_detector() {
        let mut edges = EdgeDetector::new();
        assert_eq!(edges.update(Level::Day), None);
        assert_eq!(edges.update(Level::Day), None);
        assert_eq!(edges.update(Level::Night), Some(Level::Night));
        assert_eq!(edges.update(Level::Night), None);
        assert_eq!(edges.update(Level::Day), Some(Level::Day));
        assert_eq!(edges.last(), Some(Level::Day));
    }

    #[test]
    fn test_first_night_observation_is_an_edge() {
        let mut edges = EdgeDetector::new();
        assert_eq!(edges.update(Level::Night), Some(Level::Night));
    }
}
