//! Renderable, alignable layers.
//!
//! A [`Layer`] reports its own rectangle in its parent's coordinate space, carries a
//! horizontal and a vertical alignment preference, and renders itself into an RGBA8 raster.
//! Parents place each child with [`compute_rect`](crate::compute_rect) using their own
//! rectangle as the parent and the child's rectangle as the source.

mod bitmap;
mod composite;
mod solid;

pub use bitmap::ImageLayer;
pub use composite::CompositeLayer;
pub use solid::SolidLayer;

use image::RgbaImage;

use crate::foundation::core::Rect;
use crate::layout::align::{Alignment, VerticalAlignment};

/// Capability set shared by every layer kind.
pub trait Layer: Send + Sync + std::fmt::Debug {
    /// Produce the fully composited straight-alpha RGBA8 raster for this layer.
    fn render(&self) -> RgbaImage;

    /// Bounds of this layer in its parent's coordinate space.
    fn rect(&self) -> Rect;

    fn alignment(&self) -> Alignment;

    fn set_alignment(&mut self, alignment: Alignment);

    fn vertical_alignment(&self) -> VerticalAlignment;

    fn set_vertical_alignment(&mut self, alignment: VerticalAlignment);
}

impl<L: Layer + ?Sized> Layer for Box<L> {
    fn render(&self) -> RgbaImage {
        (**self).render()
    }

    fn rect(&self) -> Rect {
        (**self).rect()
    }

    fn alignment(&self) -> Alignment {
        (**self).alignment()
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        (**self).set_alignment(alignment);
    }

    fn vertical_alignment(&self) -> VerticalAlignment {
        (**self).vertical_alignment()
    }

    fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        (**self).set_vertical_alignment(alignment);
    }
}
