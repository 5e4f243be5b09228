//! Diagnostic events
//!
//! The engine reports what it does as [`LightEvent`]s through an
//! [`EventSink`]. On target the sink is usually an [`EventSender`] feeding a
//! bounded [`EventChannel`], drained by whatever task owns the serial port.
//! The channel is built on `critical-section` and `heapless::Deque`, so the
//! producer and the consumer may live in different interrupt contexts.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use heapless::{Deque, Vec};

use crate::channel::ChannelState;
use crate::input::Level;
use crate::mode::Sequence;

/// Something observable happened in the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightEvent {
    /// The shared input changed level
    Edge { level: Level },
    /// A channel began a sequence, `interrupted` if it abandoned one to do so
    SequenceStarted {
        channel: u8,
        sequence: Sequence,
        interrupted: bool,
    },
    /// A channel entered a new state
    StateChanged {
        channel: u8,
        state: ChannelState,
        phase: Level,
        duty: u8,
    },
    /// The over-current alarm was raised or cleared
    Alarm { active: bool },
}

/// Destination for engine events
pub trait EventSink {
    fn publish(&mut self, event: LightEvent);
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl EventSink for NoEvents {
    fn publish(&mut self, _event: LightEvent) {}
}

/// Collects events until full; later events are dropped
impl<const N: usize> EventSink for Vec<LightEvent, N> {
    fn publish(&mut self, event: LightEvent) {
        let _ = self.push(event);
    }
}

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded, lossy event queue.
///
/// Publishing never fails: when the queue is full the oldest event is
/// discarded and counted, so a stalled reader sees the most recent history.
///
/// One input edge can publish up to `3 * CHANNEL_COUNT + 1` events in a single
/// tick (the edge, then a sequence start and two state changes per channel);
/// size the queue for at least that if nothing may be lost.
pub struct EventChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LightEvent, SIZE>>>,
    dropped: Mutex<Cell<u32>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
            dropped: Mutex::new(Cell::new(0)),
        }
    }

    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Queue an event, evicting the oldest one if full
    pub fn publish(&self, event: LightEvent) {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.is_full() {
                queue.pop_front();
                let dropped = self.dropped.borrow(cs);
                dropped.set(dropped.get().saturating_add(1));
            }
            let _ = queue.push_back(event);
        });
    }

    /// Take the oldest queued event
    pub fn try_receive(&self) -> Result<LightEvent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events evicted because the reader fell behind
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.dropped.borrow(cs).get())
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing handle for an [`EventChannel`]
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSink for EventSender<'_, SIZE> {
    fn publish(&mut self, event: LightEvent) {
        self.channel.publish(event);
    }
}

/// Draining handle for an [`EventChannel`]
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<LightEvent, TryReceiveError> {
        self.channel.try_receive()
    }
}
