//! Surface, stroke and thumbnail configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// CSS color string for SVG attributes.
///
/// Opaque colors use `#rrggbb`, anything else `rgba(...)`.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == u8::MAX {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            rgba.r,
            rgba.g,
            rgba.b,
            f64::from(rgba.a) / 255.0
        )
    }
}

/// Stroke properties shared by every path on a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
}

impl PathStyle {
    /// Stroke color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Fill color, if the path is filled.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(Color::from)
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK.into(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Configuration of the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Width attribute of the host element.
    pub width: String,
    /// Height attribute of the host element.
    pub height: String,
    /// Style applied to every path.
    pub path_style: PathStyle,
    /// Dash pattern of the outline drawn around a dragged path.
    pub selection_dash: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            path_style: PathStyle::default(),
            selection_dash: "4 1".to_string(),
        }
    }
}

/// Configuration of a scaled-down copy of the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub width: String,
    pub height: String,
    /// View box mapped onto the thumbnail (`min-x min-y width height`).
    pub view_box: String,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: "200".to_string(),
            height: "200".to_string(),
            view_box: "0 0 500 500".to_string(),
        }
    }
}
