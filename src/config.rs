use crate::field::FieldParams;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ripple-pond", version, about = "Pointer-driven ripple distortion over a background image")]
pub struct Config {
    /// Background picture shown behind (and warped by) the ripples.
    #[arg(long)]
    pub image: PathBuf,

    #[arg(long, default_value_t = 800)]
    pub width: usize,

    #[arg(long, default_value_t = 600)]
    pub height: usize,

    #[arg(long, value_enum, default_value_t = RendererMode::Field)]
    pub renderer: RendererMode,

    #[arg(long, value_enum, default_value_t = AggregationMode::All)]
    pub mode: AggregationMode,

    /// Most spawn events kept at once; older ones are dropped first.
    #[arg(long, default_value_t = 50)]
    pub max_ripples: usize,

    /// Strength lost per second of age; 2.0 means a ripple dies by 0.5 s.
    #[arg(long, default_value_t = 2.0)]
    pub decay_rate: f32,

    /// Ring density across the screen.
    #[arg(long, default_value_t = 20.0)]
    pub spatial_freq: f32,

    /// How fast the rings travel outward.
    #[arg(long, default_value_t = 12.0)]
    pub temporal_freq: f32,

    /// Background-sampling offset of one full-strength ripple.
    #[arg(long, default_value_t = 0.01)]
    pub distort_amp: f32,

    /// Highlight/shadow swing of one full-strength ripple.
    #[arg(long, default_value_t = 0.05)]
    pub brightness_amp: f32,

    /// Minimum pointer travel (display px) between accepted drag spawns.
    /// Unset picks the renderer's default: 0 for field, 20 for circles.
    #[arg(long)]
    pub drag_threshold: Option<f32>,
}

impl Config {
    /// Bundle the wave tunables for the evaluation pass.
    pub fn field_params(&self) -> FieldParams {
        FieldParams {
            decay_rate: self.decay_rate,
            spatial_freq: self.spatial_freq,
            temporal_freq: self.temporal_freq,
            distort_amp: self.distort_amp,
            brightness_amp: self.brightness_amp,
            mode: self.mode,
            ..FieldParams::default()
        }
    }

    /// Drag throttle for the given renderer, honoring an explicit override.
    pub fn drag_threshold_for(&self, renderer: RendererMode) -> f32 {
        self.drag_threshold
            .unwrap_or_else(|| renderer.default_drag_threshold())
    }
}

/// Which events fold into a pixel's field sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AggregationMode {
    /// Superpose every ripple still in the log.
    All,
    /// A fixed ambient swell plus only the most recent spawn.
    Latest,
}

impl AggregationMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::All => Self::Latest,
            Self::Latest => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Latest => "LATEST",
        }
    }
}

/// How the frame is produced each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RendererMode {
    /// Wave-field distortion of the sampled background.
    Field,
    /// Concentric fading circles drawn straight over the background.
    Circles,
}

impl RendererMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Field => Self::Circles,
            Self::Circles => Self::Field,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Field => "FIELD",
            Self::Circles => "CIRCLES",
        }
    }

    /// The field renderer takes every drag sample; the circle renderer
    /// thins fast drags so rings stay readable.
    pub fn default_drag_threshold(self) -> f32 {
        match self {
            Self::Field => 0.0,
            Self::Circles => 20.0,
        }
    }
}
