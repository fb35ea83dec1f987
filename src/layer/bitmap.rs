use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{LayerError, LayerResult};
use crate::layer::Layer;
use crate::layout::align::{Alignment, VerticalAlignment};

/// A decoded bitmap placed at an origin.
///
/// Pixels are shared behind an `Arc`, so cloning an `ImageLayer` to reuse the same
/// picture at several positions does not copy the raster.
#[derive(Clone, Debug)]
pub struct ImageLayer {
    origin: Point,
    size: Size,
    pixels: Arc<RgbaImage>,
    alignment: Alignment,
    vertical_alignment: VerticalAlignment,
}

impl ImageLayer {
    /// Wrap an already decoded raster. Rasters wider or taller than `i32::MAX` cannot be
    /// described by a [`Rect`] and are rejected.
    pub fn from_rgba(origin: Point, pixels: RgbaImage) -> LayerResult<Self> {
        let size = raster_size(pixels.width(), pixels.height())?;
        Ok(Self {
            origin,
            size,
            pixels: Arc::new(pixels),
            alignment: Alignment::Default,
            vertical_alignment: VerticalAlignment::Default,
        })
    }

    /// Decode encoded image bytes (any format the `image` crate can sniff).
    pub fn from_bytes(origin: Point, bytes: &[u8]) -> LayerResult<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| LayerError::decode(format!("decode image from memory: {e}")))?;
        Self::from_rgba(origin, decoded.to_rgba8())
    }

    /// Read and decode an image file.
    pub fn open(origin: Point, path: impl AsRef<Path>) -> LayerResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        Self::from_bytes(origin, &bytes).map_err(|e| match e {
            LayerError::Decode(msg) => LayerError::decode(format!("'{}': {msg}", path.display())),
            other => other,
        })
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

fn raster_size(width: u32, height: u32) -> LayerResult<Size> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok(Size::new(w, h)),
        _ => Err(LayerError::validation(format!(
            "image {width}x{height} exceeds the coordinate range"
        ))),
    }
}

impl Layer for ImageLayer {
    fn render(&self) -> RgbaImage {
        self.pixels.as_ref().clone()
    }

    fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    fn alignment(&self) -> Alignment {
        self.alignment
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/bitmap.rs"]
mod tests;
