// Turns raw window mouse state into ripple spawns.
// Visual: a press always lands a ripple; dragging lays a trail, thinned
// by the minimum-distance throttle when one is configured.

use crate::ripples::{RippleEvent, RippleLog};

pub struct PointerTracker {
    width: f32,
    height: f32,
    min_drag_dist: f32,             // display px; 0 accepts any drag movement
    was_down: bool,
    last_spawn: Option<(f32, f32)>, // display px of the last accepted sample
}

impl PointerTracker {
    pub fn new(width: usize, height: usize, min_drag_dist: f32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            min_drag_dist,
            was_down: false,
            last_spawn: None,
        }
    }

    /// Switching renderer variants changes the throttle mid-run.
    pub fn set_min_drag_dist(&mut self, min_drag_dist: f32) {
        self.min_drag_dist = min_drag_dist;
    }

    /// Feed one frame's polled mouse state; appends at most one event.
    /// Appends happen here, between frames, so the render pass always
    /// reads a settled log.
    pub fn sample(
        &mut self,
        down: bool,
        pos: Option<(f32, f32)>,
        now: f32,
        log: &mut RippleLog,
    ) {
        if !down {
            self.was_down = false;
            self.last_spawn = None;
            return;
        }

        let pressed = !self.was_down;
        self.was_down = true;

        let Some((mx, my)) = pos else {
            return;
        };

        // Clamp into the window before normalizing; the field never sees
        // a coordinate outside [0,1].
        let mx = mx.clamp(0.0, self.width - 1.0);
        let my = my.clamp(0.0, self.height - 1.0);

        if !pressed {
            if let Some((lx, ly)) = self.last_spawn {
                let dx = mx - lx;
                let dy = my - ly;
                // A held, unmoved pointer spawns nothing; a drag must
                // travel past the throttle distance.
                if (dx * dx + dy * dy).sqrt() <= self.min_drag_dist {
                    return;
                }
            }
        }

        self.last_spawn = Some((mx, my));
        log.append(RippleEvent {
            x: mx / self.width,
            y: my / self.height,
            spawn_time: now,
        });
    }
}
