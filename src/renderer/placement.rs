//! Tile placement strategies

use rand::rngs::ThreadRng;
use rand::Rng;

/// Chooses where the next tile lands on the raster.
///
/// Implementations must return offsets such that a `tile_size` square at the
/// offset lies entirely within a `width` x `height` raster.
pub trait TilePlacement {
    /// Top-left offset for the next tile.
    fn next_offset(&mut self, tile_size: u32, width: u32, height: u32) -> (u32, u32);
}

/// Uniformly random placement over all in-bounds offsets.
pub struct RandomPlacement<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomPlacement<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomPlacement<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPlacement<R> {
    /// Use a caller-supplied RNG, e.g. a seeded one for reproducible output.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TilePlacement for RandomPlacement<R> {
    fn next_offset(&mut self, tile_size: u32, width: u32, height: u32) -> (u32, u32) {
        let x = self.rng.gen_range(0..=width - tile_size);
        let y = self.rng.gen_range(0..=height - tile_size);
        (x, y)
    }
}
