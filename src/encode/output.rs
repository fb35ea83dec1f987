use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbImage, RgbaImage};

use crate::foundation::error::{LayerError, LayerResult};
use crate::layer::Layer;
use crate::render::blit::premultiply_rgba8_in_place;

/// JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Target raster format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG, default compression.
    Png,
    /// Lossy JPEG; `quality` is on the usual 1..=100 scale.
    Jpeg { quality: u8 },
}

/// Pick a format from the file extension: `.jpg`/`.jpeg` select JPEG, anything else PNG.
pub fn format_for_path(path: &Path, jpeg_quality: u8) -> OutputFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => OutputFormat::Jpeg {
            quality: jpeg_quality,
        },
        _ => OutputFormat::Png,
    }
}

/// Render `layer` and write it as PNG, overwriting `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_to_png(layer: &dyn Layer, path: impl AsRef<Path>) -> LayerResult<()> {
    write_image(&layer.render(), path.as_ref(), OutputFormat::Png)
}

/// Render `layer` and write it as JPEG at `quality`, overwriting `path`.
#[tracing::instrument(
    skip_all,
    fields(path = %path.as_ref().display(), quality = quality)
)]
pub fn write_to_jpeg(layer: &dyn Layer, path: impl AsRef<Path>, quality: u8) -> LayerResult<()> {
    write_image(&layer.render(), path.as_ref(), OutputFormat::Jpeg { quality })
}

/// Encode `img` into a new file at `path`.
///
/// The file is created (or truncated) first; the encoder writes through a buffered writer
/// which is flushed explicitly, so a failure that only shows up at flush time is reported as
/// [`LayerError::Flush`] instead of being lost when the handle is dropped.
pub fn write_image(img: &RgbaImage, path: &Path, format: OutputFormat) -> LayerResult<()> {
    ensure_encodable(img)?;

    let file = File::create(path).map_err(|source| LayerError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    encode_into(&mut writer, img, format)?;
    writer.flush().map_err(|source| LayerError::Flush {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        ?format,
        "wrote image"
    );
    Ok(())
}

/// Encode `img` into memory.
pub fn encode_to_vec(img: &RgbaImage, format: OutputFormat) -> LayerResult<Vec<u8>> {
    ensure_encodable(img)?;
    let mut out = Vec::new();
    encode_into(&mut out, img, format)?;
    Ok(out)
}

fn encode_into<W: Write>(w: W, img: &RgbaImage, format: OutputFormat) -> LayerResult<()> {
    let (width, height) = img.dimensions();
    match format {
        OutputFormat::Png => {
            PngEncoder::new(w).write_image(
                img.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        OutputFormat::Jpeg { quality } => {
            let rgb = flatten_onto_black(img);
            JpegEncoder::new_with_quality(w, clamp_quality(quality)).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
    }
    Ok(())
}

fn ensure_encodable(img: &RgbaImage) -> LayerResult<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(LayerError::Encode(ImageError::Parameter(
            ParameterError::from_kind(ParameterErrorKind::Generic(format!(
                "cannot encode a {}x{} image",
                img.width(),
                img.height()
            ))),
        )));
    }
    Ok(())
}

fn clamp_quality(quality: u8) -> u8 {
    let clamped = quality.clamp(1, 100);
    if clamped != quality {
        tracing::warn!(quality, clamped, "jpeg quality out of range, clamping");
    }
    clamped
}

// JPEG carries no alpha: drop it after premultiplying, which composites onto black.
fn flatten_onto_black(img: &RgbaImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut rgba = img.as_raw().clone();
    premultiply_rgba8_in_place(&mut rgba);
    let rgb: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    RgbImage::from_raw(width, height, rgb).unwrap_or_else(|| RgbImage::new(width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
