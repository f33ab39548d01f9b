// Composites the distorted background into the screen buffer, one full
// frame per call. Rows fan out across the thread pool; no pixel depends
// on any other pixel.

use crate::background::Background;
use crate::error::Error;
use crate::field::{self, FieldParams, FieldSample};
use crate::ripples::RippleEvent;
use crate::types::FrameBuffer;
use rayon::prelude::*;

/// Apply one field sample to one pixel: sample the background at the
/// distorted coordinate, lift every channel by the brightness delta,
/// pack. Pure function; same inputs always give the same pixel.
#[inline]
pub fn composite(background: &Background, u: f32, v: f32, sample: FieldSample) -> u32 {
    let (r, g, b) = background.sample(u + sample.du, v + sample.dv);
    pack(r + sample.dc, g + sample.dc, b + sample.dc)
}

/// Pack [0,1] channels as 0x00RRGGBB, saturating: a strong wave crest
/// clips to white instead of wrapping around.
#[inline]
fn pack(r: f32, g: f32, b: f32) -> u32 {
    let r = (r.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
    let g = (g.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
    let b = (b.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
    (r << 16) | (g << 8) | b
}

/// One full evaluation + composite pass over the frame.
/// The snapshot is read-only for the whole pass; the active-ripple set
/// is hoisted once and shared by every row.
pub fn render(
    background: &Background,
    snapshot: &[RippleEvent],
    now: f32,
    params: &FieldParams,
    screen: &mut FrameBuffer,
) -> Result<(), Error> {
    if screen.width != background.width() || screen.height != background.height() {
        return Err(Error::SizeMismatch("compositor::render"));
    }

    let w = screen.width;
    let h = screen.height;
    let active = field::activate(snapshot, now, params);

    screen
        .pixels
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f32 + 0.5) / h as f32;
            for (x, px) in row.iter_mut().enumerate() {
                let u = (x as f32 + 0.5) / w as f32;
                let s = field::evaluate(u, v, now, &active, params);
                *px = composite(background, u, v, s);
            }
        });

    Ok(())
}
