//! Renders the transaction-size heatmap of a Solana block as a PNG.
//!
//! One solmap number maps to the block at slot `number * 1000`. The pipeline
//! fetches that block's transactions at confirmed commitment, measures each
//! transaction's serialized payload size, scatters one color-coded tile per
//! transaction over a fixed-size raster, and encodes the result as a PNG.
//! A solmap number with no block behind it renders as pure background.

pub mod config;
pub mod constants;
pub mod encoder;
pub mod errors;
pub mod fetcher;
pub mod renderer;
pub mod server;

use log::{debug, info};

use crate::constants::SLOTS_PER_SOLMAP;
use crate::errors::SolmapResult;
use crate::fetcher::BlockFetcher;
use crate::renderer::{RandomPlacement, Raster, RenderConfig};

/// The slot visualized by a solmap number.
pub fn solmap_to_slot(solmap_number: u64) -> u64 {
    solmap_number.saturating_mul(SLOTS_PER_SOLMAP)
}

/// Fetch the block for `solmap_number` and render it with the default
/// 1000x1000 / 32px / green-purple scheme.
pub async fn render_solmap(rpc_url: &str, solmap_number: u64) -> SolmapResult<Raster> {
    let slot = solmap_to_slot(solmap_number);
    info!("Rendering solmap {} (slot {})", solmap_number, slot);

    let fetcher = BlockFetcher::new(rpc_url);
    let transactions = fetcher.block_transactions(slot).await?;
    let sizes = fetcher::extract_sizes(&transactions)?;
    debug!("Extracted {} transaction sizes", sizes.len());

    let config = RenderConfig::default();
    Ok(renderer::render(&sizes, &config, &mut RandomPlacement::new()))
}

/// Main entry point: render `solmap_number` and return the encoded PNG bytes.
pub async fn generate_solmap_image(rpc_url: &str, solmap_number: u64) -> SolmapResult<Vec<u8>> {
    let raster = render_solmap(rpc_url, solmap_number).await?;
    encoder::encode_png(&raster)
}

/// Version of the solmap renderer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solmap_to_slot_scale_factor() {
        assert_eq!(solmap_to_slot(0), 0);
        assert_eq!(solmap_to_slot(1), 1000);
        assert_eq!(solmap_to_slot(250), 250_000);
        // Absurd numbers stay finite; the fetcher degrades them to empty.
        assert_eq!(solmap_to_slot(u64::MAX), u64::MAX);
    }
}
