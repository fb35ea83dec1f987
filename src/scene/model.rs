use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{Point, Rect, Rgba8, Size};
use crate::foundation::error::{LayerError, LayerResult};
use crate::layer::{CompositeLayer, ImageLayer, Layer, SolidLayer};
use crate::layout::align::{Alignment, VerticalAlignment};

/// Serializable description of a layer tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub root: LayerDesc,
}

/// One node of a scene description.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayerDesc {
    Solid(SolidDesc),
    Image(ImageDesc),
    Composite(CompositeDesc),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SolidDesc {
    pub rect: Rect,
    pub color: Rgba8,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub valign: VerticalAlignment,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImageDesc {
    /// Image file, relative to the scene's asset root.
    pub source: String,
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub valign: VerticalAlignment,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CompositeDesc {
    #[serde(default)]
    pub origin: Point,
    pub size: Size,
    #[serde(default)]
    pub background: Option<Rgba8>,
    #[serde(default)]
    pub parallel: bool,
    /// `null` entries are allowed and skipped.
    #[serde(default)]
    pub children: Vec<Option<LayerDesc>>,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub valign: VerticalAlignment,
}

impl Scene {
    pub fn from_json_str(s: &str) -> LayerResult<Self> {
        serde_json::from_str(s).map_err(|e| LayerError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> LayerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> LayerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LayerError::serde(e.to_string()))
    }

    pub fn validate(&self) -> LayerResult<()> {
        self.root.validate("root")
    }

    /// Validate and turn the description into a layer tree. Image sources are resolved
    /// against `assets_root`.
    #[tracing::instrument(
        skip(self, assets_root),
        fields(assets_root = %assets_root.as_ref().display())
    )]
    pub fn build(&self, assets_root: impl AsRef<Path>) -> LayerResult<Box<dyn Layer>> {
        self.validate()?;
        self.root.build(assets_root.as_ref())
    }
}

impl LayerDesc {
    fn validate(&self, at: &str) -> LayerResult<()> {
        match self {
            Self::Solid(s) => {
                if s.rect.max.x < s.rect.min.x || s.rect.max.y < s.rect.min.y {
                    return Err(LayerError::validation(format!("{at}: rect max must be >= min")));
                }
            }
            Self::Image(i) => {
                if i.source.trim().is_empty() {
                    return Err(LayerError::validation(format!(
                        "{at}: image source must be non-empty"
                    )));
                }
            }
            Self::Composite(c) => {
                if c.size.width < 0 || c.size.height < 0 {
                    return Err(LayerError::validation(format!(
                        "{at}: composite size must be non-negative"
                    )));
                }
                for (idx, child) in c.children.iter().enumerate() {
                    let Some(child) = child else {
                        continue;
                    };
                    child.validate(&format!("{at}.children[{idx}]"))?;
                }
            }
        }
        Ok(())
    }

    fn build(&self, assets_root: &Path) -> LayerResult<Box<dyn Layer>> {
        let layer: Box<dyn Layer> = match self {
            Self::Solid(s) => Box::new(
                SolidLayer::new(s.rect, s.color)
                    .with_alignment(s.align)
                    .with_vertical_alignment(s.valign),
            ),
            Self::Image(i) => Box::new(
                ImageLayer::open(i.origin, assets_root.join(&i.source))?
                    .with_alignment(i.align)
                    .with_vertical_alignment(i.valign),
            ),
            Self::Composite(c) => {
                let mut layer = CompositeLayer::new(Rect::from_origin_size(c.origin, c.size))
                    .with_alignment(c.align)
                    .with_vertical_alignment(c.valign);
                layer.set_background(c.background);
                layer.set_parallel(c.parallel);
                let children = c
                    .children
                    .iter()
                    .map(|child| child.as_ref().map(|s| s.build(assets_root)).transpose())
                    .collect::<LayerResult<Vec<_>>>()?;
                layer.extend_optional(children);
                Box::new(layer)
            }
        };
        Ok(layer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
