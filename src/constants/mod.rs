//! Constants used throughout the renderer

use crate::renderer::Rgb;

/// Raster width in pixels.
pub const WIDTH: u32 = 1000;

/// Raster height in pixels.
pub const HEIGHT: u32 = 1000;

/// Edge length of one scattered tile, in pixels.
pub const GRID_SIZE: u32 = 32;

/// Background and low end of the color ramp.
pub const GREEN: Rgb = Rgb { r: 20, g: 241, b: 149 };

/// High end of the color ramp.
pub const PURPLE: Rgb = Rgb { r: 153, g: 69, b: 255 };

/// One solmap number spans exactly this many consecutive slots; solmap N
/// visualizes the block at slot N * SLOTS_PER_SOLMAP.
pub const SLOTS_PER_SOLMAP: u64 = 1000;

/// RPC endpoint used when no cluster is configured.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
