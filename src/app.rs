// The frame loop: pointer in, ripples out.
// What you SEE when this runs:
// • The background picture fills the window.
// • Clicking or dragging drops ripples that warp and shimmer the picture,
//   then fade out on their own within half a second.
// • C clears all ripples. M toggles all-ripples vs latest-only.
//   V switches to the drawn-circles variant. B previews the raw image.
//   ESC quits.

use crate::background::Background;
use crate::circles;
use crate::compositor;
use crate::config::{Config, RendererMode};
use crate::draw::{draw_crosshair, draw_text_5x7, Drawer};
use crate::error::Error;
use crate::interact::PointerTracker;
use crate::ripples::RippleLog;
use crate::types::FrameBuffer;
use std::time::{Duration, Instant};

const TARGET_FPS: usize = 60;

pub fn run(cfg: Config) -> Result<(), Error> {
    /* --- Background + window setup ---
       Visual: window opens already showing the picture. */
    let background = Background::load(&cfg.image, cfg.width, cfg.height)?;
    log::info!(
        "background {}x{} loaded from {}",
        background.width(),
        background.height(),
        cfg.image.display()
    );
    let mut drawer = Drawer::new("Ripple Pond", cfg.width, cfg.height, TARGET_FPS)?;

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(cfg.width, cfg.height);

    /* --- Simulation state ---
       The log is the only mutable simulation state; everything the
       per-pixel pass computes derives from it plus "now". */
    let mut ripples = RippleLog::new(cfg.max_ripples);
    let mut params = cfg.field_params();
    let mut renderer = cfg.renderer;
    let mut tracker = PointerTracker::new(cfg.width, cfg.height, cfg.drag_threshold_for(renderer));

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    let mut show_background = false;
    let start = Instant::now();

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = start.elapsed().as_secs_f32();

        /* 1) Keys */
        if drawer.c_pressed_once() {
            ripples.clear(); // visual: picture settles back to still
        }
        if drawer.m_pressed_once() {
            params.mode = params.mode.toggled();
        }
        if drawer.v_pressed_once() {
            renderer = renderer.toggled();
            tracker.set_min_drag_dist(cfg.drag_threshold_for(renderer));
        }
        if drawer.b_pressed_once() {
            show_background = !show_background;
        }

        /* 2) Pointer sampling. Every spawn for this frame lands here,
           before the pass below reads the log: the single synchronization
           point between writer and readers. */
        tracker.sample(
            drawer.left_mouse_down(),
            drawer.mouse_pos(),
            now,
            &mut ripples,
        );

        /* 3) Produce the frame. */
        let snapshot = ripples.snapshot();
        if show_background {
            // Visual: the untouched picture (debug view)
            screen.pixels.copy_from_slice(background.pixels());
        } else {
            match renderer {
                RendererMode::Field => {
                    compositor::render(&background, snapshot, now, &params, &mut screen)?
                }
                RendererMode::Circles => {
                    circles::render(&background, snapshot, now, params.decay_rate, &mut screen)?
                }
            }
        }

        /* 4) Crosshair + HUD text on top */
        if let Some((mx, my)) = drawer.mouse_pos() {
            draw_crosshair(&mut screen, mx as i32, my as i32, 12, 0x00_FF_CC_33);
        }

        let hud = format!(
            "{} | {} | C:CLEAR M:MODE V:VIEW B:BG | {}",
            renderer.label(),
            params.mode.label(),
            hud_fps_text
        );
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_FF_FF_FF);

        /* 5) Present (this is also where the 60 Hz pacing happens). */
        drawer.present(&screen)?;

        /* 6) FPS counter, refreshed once per second */
        frames_this_second += 1;
        let tick = Instant::now();
        if tick.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = tick.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("fps {:.1}, ripples {}", fps, ripples.len());
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = tick;
        }
    }

    Ok(())
}
