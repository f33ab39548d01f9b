// The ripple field: time-decayed wave superposition over the spawn log.
// For one pixel and one instant this answers "how far does the background
// sample shift, and how much brighter does the pixel get".

use crate::config::AggregationMode;
use crate::ripples::RippleEvent;

/// Distances below this count as "at the wave center". Dividing by the
/// clamped distance keeps the output finite there.
const DIST_EPSILON: f32 = 1e-4;

/// Tunable constants of the wave field, shared by every ripple.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub decay_rate: f32,     // strength lost per second of age
    pub spatial_freq: f32,   // ring density across the screen
    pub temporal_freq: f32,  // how fast rings travel outward
    pub distort_amp: f32,    // sampling offset at full strength
    pub brightness_amp: f32, // highlight/shadow swing at full strength
    pub ambient_amp: f32,    // amplitude scale of the spawn-independent swell
    pub ambient_speed: f32,  // phase speed of that swell
    pub mode: AggregationMode,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            decay_rate: 2.0,
            spatial_freq: 20.0,
            temporal_freq: 12.0,
            distort_amp: 0.01,
            brightness_amp: 0.05,
            ambient_amp: 0.2,
            ambient_speed: 4.0,
            mode: AggregationMode::All,
        }
    }
}

/// What the field says about one pixel at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldSample {
    pub du: f32, // background-sampling offset along u
    pub dv: f32, // background-sampling offset along v
    pub dc: f32, // brightness delta, added to every channel
}

/// One still-active ripple with its per-frame terms hoisted out of the
/// pixel loop: position remapped to [-1,1], age and strength fixed for
/// the whole pass.
#[derive(Clone, Copy, Debug)]
pub struct ActiveRipple {
    px: f32,
    py: f32,
    age: f32,
    strength: f32,
}

impl ActiveRipple {
    fn from_event(event: RippleEvent, now: f32, params: &FieldParams) -> Option<Self> {
        let age = now - event.spawn_time;
        let strength = (1.0 - age * params.decay_rate).max(0.0);
        if strength <= 0.0 {
            // Fully decayed entries contribute exactly zero; skipping them
            // here keeps the per-pixel cost bounded by the active count.
            return None;
        }
        Some(Self {
            px: event.x * 2.0 - 1.0,
            py: event.y * 2.0 - 1.0,
            age,
            strength,
        })
    }
}

/// Hoist the contributing subset of the snapshot for one frame's pass.
/// In `Latest` mode only the newest spawn survives the cut; older events
/// keep their log slots but fold into nothing.
pub fn activate(snapshot: &[RippleEvent], now: f32, params: &FieldParams) -> Vec<ActiveRipple> {
    match params.mode {
        AggregationMode::All => snapshot
            .iter()
            .filter_map(|e| ActiveRipple::from_event(*e, now, params))
            .collect(),
        AggregationMode::Latest => snapshot
            .last()
            .and_then(|e| ActiveRipple::from_event(*e, now, params))
            .into_iter()
            .collect(),
    }
}

/// Evaluate the field at one pixel. Pure, runs identically for every
/// pixel, no shared state: safe to call from any number of threads.
pub fn evaluate(u: f32, v: f32, now: f32, active: &[ActiveRipple], params: &FieldParams) -> FieldSample {
    // The waves live in a symmetric space; pixel and spawn positions get
    // the same [0,1] -> [-1,1] remap.
    let px = u * 2.0 - 1.0;
    let py = v * 2.0 - 1.0;

    let mut sample = FieldSample::default();

    if params.mode == AggregationMode::Latest {
        // Undecayed swell centered on the screen, always on in this mode.
        let d = (px * px + py * py).sqrt().max(DIST_EPSILON);
        let phase = d * params.spatial_freq - now * params.ambient_speed;
        let swirl = phase.cos() * params.distort_amp * params.ambient_amp;
        sample.du += px / d * swirl;
        sample.dv += py / d * swirl;
        sample.dc += phase.sin() * params.brightness_amp * params.ambient_amp;
    }

    for ripple in active {
        let dx = px - ripple.px;
        let dy = py - ripple.py;
        let d = (dx * dx + dy * dy).sqrt().max(DIST_EPSILON);
        let phase = d * params.spatial_freq - ripple.age * params.temporal_freq;
        let wave = phase.cos() * params.distort_amp * ripple.strength;
        sample.du += dx / d * wave;
        sample.dv += dy / d * wave;
        sample.dc += phase.sin() * params.brightness_amp * ripple.strength;
    }

    sample
}
