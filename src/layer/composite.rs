use image::RgbaImage;
use rayon::prelude::*;

use crate::foundation::core::{Point, Rect, Rgba8, Size};
use crate::layer::Layer;
use crate::layout::align::{Alignment, VerticalAlignment, compute_rect};
use crate::render::blit::blit_over;

/// A layer made of other layers.
///
/// Children are drawn in insertion order with source-over, so later children cover
/// earlier ones. Each child is placed with [`compute_rect`] against this layer's rectangle;
/// anything falling outside this layer's bounds is clipped.
#[derive(Debug)]
pub struct CompositeLayer {
    rect: Rect,
    background: Option<Rgba8>,
    children: Vec<Box<dyn Layer>>,
    parallel: bool,
    alignment: Alignment,
    vertical_alignment: VerticalAlignment,
}

impl CompositeLayer {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            background: None,
            children: Vec::new(),
            parallel: false,
            alignment: Alignment::Default,
            vertical_alignment: VerticalAlignment::Default,
        }
    }

    /// Composite anchored at the origin.
    pub fn sized(size: Size) -> Self {
        Self::new(Rect::from_origin_size(Point::ZERO, size))
    }

    pub fn with_background(mut self, color: Rgba8) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_child(mut self, child: impl Layer + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn push(&mut self, child: impl Layer + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn push_boxed(&mut self, child: Box<dyn Layer>) {
        self.children.push(child);
    }

    /// Append present children, skipping absent ones.
    pub fn extend_optional<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Option<Box<dyn Layer>>>,
    {
        self.children.extend(children.into_iter().flatten());
    }

    pub fn children(&self) -> &[Box<dyn Layer>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Layer>] {
        &mut self.children
    }

    pub fn background(&self) -> Option<Rgba8> {
        self.background
    }

    pub fn set_background(&mut self, color: Option<Rgba8>) {
        self.background = color;
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Render children on the rayon pool. Drawing stays serial and in insertion order, so
    /// the output matches the sequential path byte for byte.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// Destination rectangle of every child inside this layer, in insertion order.
    pub fn child_placements(&self) -> Vec<Rect> {
        self.children
            .iter()
            .map(|child| self.place(child.as_ref()))
            .collect()
    }

    fn place(&self, child: &dyn Layer) -> Rect {
        compute_rect(
            self.rect,
            child.rect(),
            child.alignment(),
            child.vertical_alignment(),
        )
    }

    fn draw(&self, canvas: &mut RgbaImage, idx: usize, child: &dyn Layer, raster: &RgbaImage) {
        let dest = self.place(child);
        tracing::debug!(
            child = idx,
            min_x = dest.min.x,
            min_y = dest.min.y,
            max_x = dest.max.x,
            max_y = dest.max.y,
            "place child"
        );
        blit_over(
            canvas,
            raster,
            i64::from(dest.min.x),
            i64::from(dest.min.y),
        );
    }
}

impl Layer for CompositeLayer {
    #[tracing::instrument(
        skip(self),
        fields(children = self.children.len(), parallel = self.parallel)
    )]
    fn render(&self) -> RgbaImage {
        let (w, h) = self.rect.size().to_dimensions();
        let fill = self.background.unwrap_or(Rgba8::TRANSPARENT);
        let mut canvas = RgbaImage::from_pixel(w, h, fill.to_pixel());

        if self.parallel {
            let rasters: Vec<RgbaImage> = self.children.par_iter().map(|c| c.render()).collect();
            for (idx, (child, raster)) in self.children.iter().zip(&rasters).enumerate() {
                self.draw(&mut canvas, idx, child.as_ref(), raster);
            }
        } else {
            for (idx, child) in self.children.iter().enumerate() {
                let raster = child.render();
                self.draw(&mut canvas, idx, child.as_ref(), &raster);
            }
        }
        canvas
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
#[path = "../../tests/unit/layer/composite.rs"]
mod tests;
