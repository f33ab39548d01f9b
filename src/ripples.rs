// Bounded, time-ordered log of spawn events.
// Visual: each entry is one expanding wave on screen until it fades out.

use std::collections::VecDeque;

/// One pointer-triggered disturbance: where it hit and when.
/// Never mutated after creation; age is always recomputed from "now".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleEvent {
    pub x: f32,          // normalized [0,1], left to right
    pub y: f32,          // normalized [0,1], top to bottom
    pub spawn_time: f32, // seconds since simulation start
}

/// FIFO pool of the most recent spawn events.
/// Length never exceeds the capacity; overflow drops the oldest entry.
pub struct RippleLog {
    events: VecDeque<RippleEvent>,
    capacity: usize,
}

impl RippleLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a new event; at capacity the front (oldest) entry is evicted.
    /// Overflow is normal operation, not an error.
    pub fn append(&mut self, event: RippleEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Contiguous view of the current events, oldest first.
    /// Stable for the duration of one render pass: all appends happen
    /// between frames, never while a pass is reading.
    pub fn snapshot(&mut self) -> &[RippleEvent] {
        self.events.make_contiguous()
    }

    /// The most recently appended event, if any.
    pub fn latest(&self) -> Option<RippleEvent> {
        self.events.back().copied()
    }

    /// Drop everything (user-initiated reset; the simulation itself
    /// only ever removes entries through FIFO eviction).
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
