//! PNG encoding for rendered rasters

#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::errors::SolmapResult;
use crate::renderer::Raster;

/// Encode a raster as a PNG with RGB color type and 8-bit depth.
///
/// The raster's alpha channel is not stored; output is deterministic for a
/// given raster. Failures here mean the raster violated an internal
/// invariant, not a recoverable runtime condition.
pub fn encode_png(raster: &Raster) -> SolmapResult<Vec<u8>> {
    let mut bytes = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, raster.width(), raster.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&raster.rgb_bytes())?;
    writer.finish()?;

    debug!(
        "Encoded {}x{} raster into {} PNG bytes",
        raster.width(),
        raster.height(),
        bytes.len()
    );

    Ok(bytes)
}

/// Encode a raster and write it to the given path, creating parent
/// directories as needed.
pub fn save_image(raster: &Raster, path: &Path) -> SolmapResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let bytes = encode_png(raster)?;
    fs::write(path, &bytes)?;

    info!("Saved solmap image to: {}", path.display());
    Ok(())
}
