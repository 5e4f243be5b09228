mod tests {
    use layout_lights::event::TryReceiveError;
    use layout_lights::{EventChannel, EventSink, LightEvent, Level};

    #[test]
    fn test_event_channel_order() {
        let channel = EventChannel::<4>::new();
        let mut sender = channel.sender();
        let receiver = channel.receiver();

        sender.publish(LightEvent::Edge { level: Level::Night });
        sender.publish(LightEvent::Alarm { active: true });
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(LightEvent::Edge { level: Level::Night }));
        assert_eq!(receiver.try_receive(), Ok(LightEvent::Alarm { active: true }));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_full_channel_drops_oldest() {
        let channel = EventChannel::<2>::new();
        channel.publish(LightEvent::Alarm { active: true });
        channel.publish(LightEvent::Alarm { active: false });
        channel.publish(LightEvent::Edge { level: Level::Day });

        assert_eq!(channel.dropped(), 1);
        assert_eq!(channel.try_receive(), Ok(LightEvent::Alarm { active: false }));
        assert_eq!(channel.try_receive(), Ok(LightEvent::Edge { level: Level::Day }));
    }
}
