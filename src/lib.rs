//! layercomp composes rectangular bitmap layers into a single raster image.
//!
//! Every layer reports its rectangle in its parent's coordinate space and carries a horizontal
//! ([`Alignment`]) and vertical ([`VerticalAlignment`]) placement preference. A parent places
//! each child with [`compute_rect`], a pure per-axis function of the parent rectangle, the child
//! rectangle and the two alignments, and then draws the child's pixels there.
//!
//! # Pipeline overview
//!
//! 1. **Build**: construct a tree of [`SolidLayer`], [`ImageLayer`] and [`CompositeLayer`] values,
//!    directly or from a JSON [`Scene`].
//! 2. **Render**: [`Layer::render`] on the root produces a straight-alpha RGBA8 raster.
//! 3. **Encode**: [`write_to_png`] / [`write_to_jpeg`] write the raster to disk.
//!
//! ```no_run
//! use layercomp::{
//!     Alignment, CompositeLayer, Rgba8, Size, SolidLayer, VerticalAlignment, write_to_png,
//! };
//!
//! let badge = SolidLayer::sized(Size::new(50, 50), Rgba8::opaque(220, 40, 40))
//!     .with_alignment(Alignment::Center)
//!     .with_vertical_alignment(VerticalAlignment::Middle);
//! let root = CompositeLayer::sized(Size::new(200, 200))
//!     .with_background(Rgba8::WHITE)
//!     .with_child(badge);
//! write_to_png(&root, "badge.png")?;
//! # Ok::<(), layercomp::LayerError>(())
//! ```
#![forbid(unsafe_code)]

mod encode;
mod foundation;
mod layer;
mod layout;
mod render;
mod scene;

pub use encode::output::{
    DEFAULT_JPEG_QUALITY, OutputFormat, encode_to_vec, format_for_path, write_image,
    write_to_jpeg, write_to_png,
};
pub use foundation::core::{Point, Rect, Rgba8, Size};
pub use foundation::error::{LayerError, LayerResult};
pub use layer::{CompositeLayer, ImageLayer, Layer, SolidLayer};
pub use layout::align::{Alignment, VerticalAlignment, compute_rect};
pub use render::blit::blit_over;
pub use scene::model::{CompositeDesc, ImageDesc, LayerDesc, Scene, SolidDesc};
