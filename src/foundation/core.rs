/// Integer point in a layer coordinate space.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn translate(self, by: Point) -> Self {
        Self::new(self.x.wrapping_add(by.x), self.y.wrapping_add(by.y))
    }
}

/// Integer extent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent as raster dimensions. Negative components clamp to zero.
    pub fn to_dimensions(self) -> (u32, u32) {
        (
            u32::try_from(self.width.max(0)).unwrap_or(0),
            u32::try_from(self.height.max(0)).unwrap_or(0),
        )
    }
}

/// Axis-aligned rectangle in min/max corner form. `max` is exclusive.
///
/// Width and height are `max - min`. Nothing here enforces `min <= max`; callers that
/// need a non-inverted rectangle validate it themselves.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Rectangle spanning `origin .. origin + size`.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min: origin,
            max: Point::new(
                origin.x.wrapping_add(size.width),
                origin.y.wrapping_add(size.height),
            ),
        }
    }

    pub const fn width(&self) -> i32 {
        self.max.x.wrapping_sub(self.min.x)
    }

    pub const fn height(&self) -> i32 {
        self.max.y.wrapping_sub(self.min.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// True when the rectangle covers no pixels (zero or negative extent on either axis).
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub const fn translate(self, by: Point) -> Self {
        Self {
            min: self.min.translate(by),
            max: self.max.translate(by),
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
