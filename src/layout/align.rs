use crate::foundation::core::{Point, Rect};

/// Horizontal placement of a layer inside its parent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "AlignRepr")]
pub enum Alignment {
    /// Keep the layer's own horizontal coordinates.
    #[default]
    Default,
    /// Pin to `x = 0`.
    Left,
    /// Center in the parent's width.
    Center,
    /// Pin to the parent's right edge.
    Right,
}

/// Vertical placement of a layer inside its parent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "AlignRepr")]
pub enum VerticalAlignment {
    /// Keep the layer's own vertical coordinates.
    #[default]
    Default,
    /// Pin to `y = 0`.
    Top,
    /// Center in the parent's height.
    Middle,
    /// Pin to the parent's bottom edge.
    Bottom,
}

impl Alignment {
    pub const ALL: [Self; 4] = [Self::Default, Self::Left, Self::Center, Self::Right];

    /// Map a numeric alignment code (`0..=3`). Any other code falls back to
    /// [`Alignment::Default`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Left,
            2 => Self::Center,
            3 => Self::Right,
            _ => Self::Default,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Default => 0,
            Self::Left => 1,
            Self::Center => 2,
            Self::Right => 3,
        }
    }
}

impl VerticalAlignment {
    pub const ALL: [Self; 4] = [Self::Default, Self::Top, Self::Middle, Self::Bottom];

    /// Map a numeric alignment code (`0..=3`). Any other code falls back to
    /// [`VerticalAlignment::Default`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Top,
            2 => Self::Middle,
            3 => Self::Bottom,
            _ => Self::Default,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Default => 0,
            Self::Top => 1,
            Self::Middle => 2,
            Self::Bottom => 3,
        }
    }
}

impl std::str::FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown alignment '{other}'")),
        }
    }
}

impl std::str::FromStr for VerticalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown vertical alignment '{other}'")),
        }
    }
}

// Scene files may spell alignments as names or as numeric codes.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum AlignRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<AlignRepr> for Alignment {
    type Error = String;

    fn try_from(value: AlignRepr) -> Result<Self, Self::Error> {
        match value {
            AlignRepr::Code(c) => Ok(Self::from_code(c)),
            AlignRepr::Name(n) => n.parse(),
        }
    }
}

impl TryFrom<AlignRepr> for VerticalAlignment {
    type Error = String;

    fn try_from(value: AlignRepr) -> Result<Self, Self::Error> {
        match value {
            AlignRepr::Code(c) => Ok(Self::from_code(c)),
            AlignRepr::Name(n) => n.parse(),
        }
    }
}

/// Compute where `source` lands inside `parent`'s coordinate space.
///
/// Each axis is placed independently:
///
/// - `Default` keeps the source's own min/max on that axis.
/// - `Left`/`Top` pin the source to `0`.
/// - `Center`/`Middle` start at `(parent_extent - source_extent) / 2`, truncating toward zero,
///   so an odd remainder leaves the layer one pixel closer to the left/top edge.
/// - `Right`/`Bottom` start at `parent_extent - source_extent`.
///
/// The source extent is always preserved. Degenerate or negative extents are carried
/// through arithmetically; the function is total and never panics.
pub fn compute_rect(
    parent: Rect,
    source: Rect,
    alignment: Alignment,
    vertical_alignment: VerticalAlignment,
) -> Rect {
    let (min_x, max_x) = place_axis(
        parent.width(),
        source.min.x,
        source.max.x,
        alignment.into(),
    );
    let (min_y, max_y) = place_axis(
        parent.height(),
        source.min.y,
        source.max.y,
        vertical_alignment.into(),
    );
    Rect::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
}

fn place_axis(container: i32, min: i32, max: i32, align: AxisAlign) -> (i32, i32) {
    let extent = max.wrapping_sub(min);
    let start = match align {
        AxisAlign::Keep => return (min, max),
        AxisAlign::Start => 0,
        AxisAlign::Center => container.wrapping_sub(extent) / 2,
        AxisAlign::End => container.wrapping_sub(extent),
    };
    (start, start.wrapping_add(extent))
}

enum AxisAlign {
    Keep,
    Start,
    Center,
    End,
}

impl From<Alignment> for AxisAlign {
    fn from(value: Alignment) -> Self {
        match value {
            Alignment::Default => AxisAlign::Keep,
            Alignment::Left => AxisAlign::Start,
            Alignment::Center => AxisAlign::Center,
            Alignment::Right => AxisAlign::End,
        }
    }
}

impl From<VerticalAlignment> for AxisAlign {
    fn from(value: VerticalAlignment) -> Self {
        match value {
            VerticalAlignment::Default => AxisAlign::Keep,
            VerticalAlignment::Top => AxisAlign::Start,
            VerticalAlignment::Middle => AxisAlign::Center,
            VerticalAlignment::Bottom => AxisAlign::End,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/align.rs"]
mod tests;
