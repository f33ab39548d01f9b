// Alternate renderer: concentric fading circles drawn straight onto a
// copy of the background. A much simpler technique than the wave field,
// no distortion, just additive ring stamps that ride each spawn outward.

use crate::background::Background;
use crate::error::Error;
use crate::ripples::RippleEvent;
use crate::types::FrameBuffer;
use std::f32::consts::TAU;

const RING_SPEED: f32 = 160.0;  // ring radius growth, display px per second
const RING_COUNT: usize = 3;    // trailing rings behind the front
const RING_SPACING: f32 = 14.0; // px between successive rings
const RING_LEVEL: f32 = 0.8;    // brightness of the front ring at full strength

/// Draw every still-visible ripple as expanding rings over the background.
pub fn render(
    background: &Background,
    snapshot: &[RippleEvent],
    now: f32,
    decay_rate: f32,
    screen: &mut FrameBuffer,
) -> Result<(), Error> {
    if screen.width != background.width() || screen.height != background.height() {
        return Err(Error::SizeMismatch("circles::render"));
    }

    screen.pixels.copy_from_slice(background.pixels());

    let w = screen.width as f32;
    let h = screen.height as f32;

    for event in snapshot {
        let age = now - event.spawn_time;
        let strength = (1.0 - age * decay_rate).max(0.0);
        if strength <= 0.0 {
            continue; // visually inert, still occupies its log slot
        }

        let cx = event.x * w;
        let cy = event.y * h;

        for k in 0..RING_COUNT {
            let radius = age * RING_SPEED - k as f32 * RING_SPACING;
            if radius <= 0.0 {
                continue; // trailing ring has not emerged yet
            }
            let level = strength * RING_LEVEL / (k + 1) as f32;
            draw_ring(screen, cx, cy, radius, level);
        }
    }

    Ok(())
}

/// Stamp a thin ring by walking the circumference in ~2 px steps.
fn draw_ring(fb: &mut FrameBuffer, cx: f32, cy: f32, radius: f32, level: f32) {
    let steps = ((TAU * radius) / 2.0).ceil().max(8.0) as usize;
    for i in 0..steps {
        let a = i as f32 / steps as f32 * TAU;
        let x = (cx + a.cos() * radius).round() as i32;
        let y = (cy + a.sin() * radius).round() as i32;
        add_white_saturating(fb, x, y, level);
    }
}

/// Additive blend a white glow into one pixel, clamped to 255 per channel.
#[inline]
fn add_white_saturating(fb: &mut FrameBuffer, x: i32, y: i32, level: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }

    let idx = y * fb.width + x;
    let old = fb.pixels[idx];
    let add = (level.clamp(0.0, 1.0) * 255.0) as u16;

    let r = (((old >> 16) & 0xFF) as u16 + add).min(255) as u32;
    let g = (((old >> 8) & 0xFF) as u16 + add).min(255) as u32;
    let b = ((old & 0xFF) as u16 + add).min(255) as u32;

    fb.pixels[idx] = (r << 16) | (g << 8) | b;
}
