// Loads the background picture and answers bilinear sample queries.
// Visual expectation: the window shows this image, warped by the ripples.

use crate::error::Error;
use image::imageops::FilterType;
use std::path::Path;

pub struct Background {
    width: usize,
    height: usize,
    pixels: Vec<u32>, // 0x00RRGGBB, row-major, top-left origin
}

impl Background {
    /// Decode the image file and scale it to the window size.
    /// A missing or corrupt file is fatal; the caller exits rather than
    /// rendering an undefined surface.
    pub fn load(path: &Path, width: usize, height: usize) -> Result<Self, Error> {
        let img = image::open(path)?
            .resize_exact(width as u32, height as u32, FilterType::Triangle)
            .to_rgb8();

        // Pack RGB bytes as 0x00RRGGBB, the layout the window wants.
        let mut pixels = Vec::with_capacity(width * height);
        for p in img.pixels() {
            let r = p[0] as u32;
            let g = p[1] as u32;
            let b = p[2] as u32;
            pixels.push((r << 16) | (g << 8) | b);
        }

        Ok(Self { width, height, pixels })
    }

    /// Build from an already packed buffer (solid fills, tests).
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, Error> {
        if pixels.len() != width * height {
            return Err(Error::SizeMismatch("Background::from_pixels"));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw packed pixels, for whole-frame copies.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Bilinear sample at normalized (u, v) with texel centers at
    /// (i + 0.5) / size. Coordinates outside [0,1] clamp to the edge,
    /// never wrap: distorted lookups at the frame boundary stretch the
    /// border pixel instead of pulling in the opposite side.
    pub fn sample(&self, u: f32, v: f32) -> (f32, f32, f32) {
        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;
        let x = (u * self.width as f32 - 0.5).clamp(0.0, max_x);
        let y = (v * self.height as f32 - 0.5).clamp(0.0, max_y);

        let x0 = x.floor();
        let y0 = y.floor();
        let tx = x - x0;
        let ty = y - y0;

        let x0 = x0 as usize;
        let y0 = y0 as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let (r00, g00, b00) = self.texel(x0, y0);
        let (r10, g10, b10) = self.texel(x1, y0);
        let (r01, g01, b01) = self.texel(x0, y1);
        let (r11, g11, b11) = self.texel(x1, y1);

        let r0 = r00 + (r10 - r00) * tx;
        let g0 = g00 + (g10 - g00) * tx;
        let b0 = b00 + (b10 - b00) * tx;
        let r1 = r01 + (r11 - r01) * tx;
        let g1 = g01 + (g11 - g01) * tx;
        let b1 = b01 + (b11 - b01) * tx;

        (r0 + (r1 - r0) * ty, g0 + (g1 - g0) * ty, b0 + (b1 - b0) * ty)
    }

    /// Unpack one texel to [0,1] channel floats.
    #[inline]
    fn texel(&self, x: usize, y: usize) -> (f32, f32, f32) {
        let p = self.pixels[y * self.width + x];
        let r = ((p >> 16) & 0xFF) as f32 / 255.0;
        let g = ((p >> 8) & 0xFF) as f32 / 255.0;
        let b = (p & 0xFF) as f32 / 255.0;
        (r, g, b)
    }
}
