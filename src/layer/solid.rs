use image::RgbaImage;

use crate::foundation::core::{Point, Rect, Rgba8, Size};
use crate::layer::Layer;
use crate::layout::align::{Alignment, VerticalAlignment};

/// A rectangle filled with a single color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidLayer {
    rect: Rect,
    color: Rgba8,
    alignment: Alignment,
    vertical_alignment: VerticalAlignment,
}

impl SolidLayer {
    pub fn new(rect: Rect, color: Rgba8) -> Self {
        Self {
            rect,
            color,
            alignment: Alignment::Default,
            vertical_alignment: VerticalAlignment::Default,
        }
    }

    /// Solid layer anchored at the origin.
    pub fn sized(size: Size, color: Rgba8) -> Self {
        Self::new(Rect::from_origin_size(Point::ZERO, size), color)
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn color(&self) -> Rgba8 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }
}

impl Layer for SolidLayer {
    fn render(&self) -> RgbaImage {
        let (w, h) = self.rect.size().to_dimensions();
        RgbaImage::from_pixel(w, h, self.color.to_pixel())
    }

    fn rect(&self) -> Rect {
        self.rect
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
#[path = "../../tests/unit/layer/solid.rs"]
mod tests;
