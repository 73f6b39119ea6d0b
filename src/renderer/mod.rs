//! Heatmap rendering for block transaction sizes
//!
//! Scatters one color-coded square tile per transaction over a fixed-size
//! raster. Tile color encodes the transaction's serialized size as a linear
//! interpolation between the two ramp endpoints; tile position comes from an
//! injected [`TilePlacement`] strategy so rendering stays deterministic under
//! test.

mod placement;

use crate::constants::{GREEN, GRID_SIZE, HEIGHT, PURPLE, WIDTH};

pub use self::placement::{RandomPlacement, TilePlacement};

/// One RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Linearly interpolate toward `other`, per channel, rounded to nearest.
    /// `weight` must lie in [0, 1].
    pub fn lerp(self, other: Rgb, weight: f64) -> Rgb {
        let channel = |a: u8, b: u8| (f64::from(a) + weight * (f64::from(b) - f64::from(a))).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// Rendering parameters: raster dimensions, tile size, and the color ramp.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Edge length of one tile, in pixels. Must fit inside the raster.
    pub tile_size: u32,
    /// Background color and low end of the ramp.
    pub low_color: Rgb,
    /// High end of the ramp; a maximally sized transaction renders in
    /// exactly this color.
    pub high_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            tile_size: GRID_SIZE,
            low_color: GREEN,
            high_color: PURPLE,
        }
    }
}

/// A rendered raster: row-major RGBA pixel data, alpha always 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Create a raster with every pixel set to `color` at full opacity.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color at pixel (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = (self.width as usize * y as usize + x as usize) * 4;
        Rgb {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
        }
    }

    /// Pixel data repacked as 3-byte RGB, the layout the PNG encoder stores.
    pub fn rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for pixel in self.data.chunks_exact(4) {
            rgb.extend_from_slice(&pixel[..3]);
        }
        rgb
    }

    fn fill_tile(&mut self, offset_x: u32, offset_y: u32, tile_size: u32, color: Rgb) {
        for y in 0..tile_size {
            for x in 0..tile_size {
                let idx =
                    (self.width as usize * (offset_y + y) as usize + (offset_x + x) as usize) * 4;
                self.data[idx] = color.r;
                self.data[idx + 1] = color.g;
                self.data[idx + 2] = color.b;
                self.data[idx + 3] = 255;
            }
        }
    }
}

/// Render one tile per size value onto a fresh background-filled raster.
///
/// Sizes are normalized against the maximum of the set with a fixed minimum
/// of 0, so the largest transaction always lands on the high ramp color and
/// a near-zero one stays near the background. An all-zero set normalizes to
/// 0 and renders every tile in the low color. Tiles may overlap; later sizes
/// overwrite earlier ones.
pub fn render(sizes: &[u64], config: &RenderConfig, placement: &mut dyn TilePlacement) -> Raster {
    assert!(
        config.tile_size > 0 && config.tile_size <= config.width && config.tile_size <= config.height,
        "tile must fit inside the raster"
    );

    let mut raster = Raster::filled(config.width, config.height, config.low_color);

    let max_size = sizes.iter().copied().max().unwrap_or(0);

    for &size in sizes {
        let (offset_x, offset_y) =
            placement.next_offset(config.tile_size, config.width, config.height);

        let normalized = if max_size == 0 {
            0.0
        } else {
            size as f64 / max_size as f64
        };

        let color = config.low_color.lerp(config.high_color, normalized);
        raster.fill_tile(offset_x, offset_y, config.tile_size, color);
    }

    raster
}
