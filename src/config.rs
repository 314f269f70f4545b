//! Scene configuration.
//!
//! A scene is a YAML file describing the world size, the view onto the screen,
//! the destination mode and the segments to draw. Every field has a default, so an
//! empty document is a valid (blank) 128x128 scene at scale 4.
//!
//! ```yaml
//! world: { width: 128, height: 128 }
//! view: { scale: 4 }
//! mode: buffer
//! background: [0, 0, 0, 255]
//! options: { degenerate: draw, endpoint: exclusive }
//! segments:
//!   - { from: [0, 0], to: [127, 64], color: [255, 0, 0, 255] }
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Segment;
use crate::render::{RasterOptions, Rasterizer};
use crate::view::ViewTransform;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World-space resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Width in world units.
    #[serde(default = "default_world_size")]
    pub width: u32,

    /// Height in world units.
    #[serde(default = "default_world_size")]
    pub height: u32,
}

fn default_world_size() -> u32 {
    128
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: default_world_size(),
            height: default_world_size(),
        }
    }
}

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// World-to-screen mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Screen pixels per world unit.
    #[serde(default = "default_scale")]
    pub scale: i32,

    /// Horizontal screen offset.
    #[serde(default)]
    pub offset_x: i32,

    /// Vertical screen offset.
    #[serde(default)]
    pub offset_y: i32,

    /// Fit the world into this screen instead, centred. Overrides the fields above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letterbox: Option<ScreenSize>,
}

fn default_scale() -> i32 {
    4
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            offset_x: 0,
            offset_y: 0,
            letterbox: None,
        }
    }
}

/// Where rasterized lines are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Direct writes into a world-resolution ARGB buffer, scaled on present.
    #[default]
    Buffer,
    /// Point/rectangle primitives on a screen-resolution renderer.
    Renderer,
}

impl std::str::FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "buffer" => Ok(Self::Buffer),
            "renderer" => Ok(Self::Renderer),
            other => Err(Error::InvalidArgument(format!("unknown render mode '{other}'"))),
        }
    }
}

/// One segment to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// First endpoint `[x, y]`.
    pub from: [i32; 2],

    /// Second endpoint `[x, y]`.
    pub to: [i32; 2],

    /// Color `[r, g, b, a]`.
    #[serde(default = "default_color")]
    pub color: [u8; 4],
}

fn default_color() -> [u8; 4] {
    Rgba::WHITE.to_array()
}

impl SegmentConfig {
    /// Geometric segment.
    #[must_use]
    pub const fn segment(&self) -> Segment {
        Segment::from_coords(self.from[0], self.from[1], self.to[0], self.to[1])
    }

    /// Segment color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        Rgba::from_array(self.color)
    }
}

/// Main scene structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// World resolution.
    #[serde(default)]
    pub world: WorldConfig,

    /// World-to-screen mapping.
    #[serde(default)]
    pub view: ViewConfig,

    /// Destination mode.
    #[serde(default)]
    pub mode: RenderMode,

    /// Clear color `[r, g, b, a]`.
    #[serde(default = "default_background")]
    pub background: [u8; 4],

    /// Rasterizer options.
    #[serde(default)]
    pub options: RasterOptions,

    /// Segments, drawn in order.
    #[serde(default)]
    pub segments: Vec<SegmentConfig>,
}

fn default_version() -> u32 {
    1
}
fn default_background() -> [u8; 4] {
    Rgba::BLACK.to_array()
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            world: WorldConfig::default(),
            view: ViewConfig::default(),
            mode: RenderMode::default(),
            background: default_background(),
            options: RasterOptions::default(),
            segments: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Creates a new scene with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a scene from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!(
            "loaded scene {} ({} segments, {:?} mode)",
            path.display(),
            config.segments.len(),
            config.mode
        );
        Ok(config)
    }

    /// Parses a scene from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serializes the scene to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Checks that the scene describes a drawable setup.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: zero world size, non-positive scale, or a
    /// letterbox screen smaller than the world.
    pub fn validate(&self) -> Result<()> {
        if self.world.width == 0 || self.world.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.world.width,
                height: self.world.height,
            });
        }
        self.view_transform().map(|_| ())
    }

    /// View transform described by the `view` section.
    ///
    /// # Errors
    ///
    /// See [`ViewTransform::new`] and [`ViewTransform::letterbox`].
    pub fn view_transform(&self) -> Result<ViewTransform> {
        match self.view.letterbox {
            Some(screen) => ViewTransform::letterbox(
                self.world.width,
                self.world.height,
                screen.width,
                screen.height,
            ),
            None => ViewTransform::new(self.view.scale, self.view.offset_x, self.view.offset_y),
        }
    }

    /// Screen size in pixels: the letterbox screen, or the scaled world plus offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the size does not fit in `u32`, or
    /// the errors of [`Self::view_transform`].
    pub fn screen_size(&self) -> Result<(u32, u32)> {
        if let Some(screen) = self.view.letterbox {
            return Ok((screen.width, screen.height));
        }

        let view = self.view_transform()?;
        let extent = |world: u32, offset: i32| {
            u64::from(world) * u64::from(view.scale()) + u64::from(offset.max(0) as u32)
        };
        let (w, h) = (
            extent(self.world.width, self.view.offset_x),
            extent(self.world.height, self.view.offset_y),
        );

        match (u32::try_from(w), u32::try_from(h)) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(Error::InvalidDimensions {
                width: u32::MAX,
                height: u32::MAX,
            }),
        }
    }

    /// Rasterizer configured from `options`.
    #[must_use]
    pub const fn rasterizer(&self) -> Rasterizer {
        Rasterizer::new(self.options)
    }

    /// Background color.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        Rgba::from_array(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::render::{DegeneratePolicy, EndpointMode};

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SceneConfig::parse("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.world.width, 128);
        assert_eq!(config.view.scale, 4);
        assert_eq!(config.mode, RenderMode::Buffer);
    }

    #[test]
    fn test_parse_full_scene() {
        let yaml = r"
version: 1
world: { width: 400, height: 300 }
view: { scale: 2, offset_x: 5 }
mode: renderer
background: [10, 20, 30, 255]
options: { degenerate: reject, endpoint: inclusive }
segments:
  - { from: [0, 0], to: [10, 4], color: [255, 0, 0, 255] }
  - { from: [3, 3], to: [3, 9] }
";
        let config = SceneConfig::parse(yaml).unwrap();
        assert_eq!(config.world.width, 400);
        assert_eq!(config.view.offset_x, 5);
        assert_eq!(config.mode, RenderMode::Renderer);
        assert_eq!(config.options.degenerate, DegeneratePolicy::Reject);
        assert_eq!(config.options.endpoint, EndpointMode::Inclusive);
        assert_eq!(config.segments.len(), 2);
        assert_eq!(config.segments[0].color(), Rgba::RED);
        assert_eq!(config.segments[1].color(), Rgba::WHITE);
        assert_eq!(config.segments[1].segment().p2, Point::new(3, 9));
    }

    #[test]
    fn test_parse_error_has_line() {
        let err = SceneConfig::parse("world:\n  width: [oops\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { line, .. } if line > 0));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(SceneConfig::parse("mode: hologram").is_err());
        assert!("hologram".parse::<RenderMode>().is_err());
        assert_eq!("Renderer".parse::<RenderMode>().unwrap(), RenderMode::Renderer);
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut config = SceneConfig::default();
        config.view.scale = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_validate_rejects_empty_world() {
        let mut config = SceneConfig::default();
        config.world.height = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_screen_size() {
        let mut config = SceneConfig::default();
        assert_eq!(config.screen_size().unwrap(), (512, 512));

        config.view.offset_x = 10;
        assert_eq!(config.screen_size().unwrap(), (522, 512));

        config.view.letterbox = Some(ScreenSize {
            width: 1920,
            height: 1080,
        });
        assert_eq!(config.screen_size().unwrap(), (1920, 1080));
        assert_eq!(config.view_transform().unwrap().scale(), 8);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = SceneConfig::default();
        config.segments.push(SegmentConfig {
            from: [1, 2],
            to: [30, 40],
            color: [1, 2, 3, 4],
        });
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SceneConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SceneConfig::load("/nonexistent/scene.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "world: { width: 64, height: 32 }\n").unwrap();

        let config = SceneConfig::load(&path).unwrap();
        assert_eq!(config.world.height, 32);
    }
}
