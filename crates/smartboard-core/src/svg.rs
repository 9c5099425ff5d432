//! SVG document output.

use crate::config::{PathStyle, SurfaceConfig, ThumbnailConfig, css_color};
use crate::entity::PathEntity;
use crate::path::{DRAWABLE_PATH_ATTRIBUTE, format_coordinate};
use kurbo::Rect;
use std::fmt::Write;

pub const XMLNS: &str = "http://www.w3.org/2000/svg";

/// Size attributes of the root `<svg>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgFrame<'a> {
    pub width: &'a str,
    pub height: &'a str,
    pub view_box: Option<&'a str>,
}

impl<'a> SvgFrame<'a> {
    pub fn surface(config: &'a SurfaceConfig) -> Self {
        Self {
            width: &config.width,
            height: &config.height,
            view_box: None,
        }
    }

    pub fn thumbnail(config: &'a ThumbnailConfig) -> Self {
        Self {
            width: &config.width,
            height: &config.height,
            view_box: Some(&config.view_box),
        }
    }
}

/// Render every entity, in creation order, into a standalone SVG document.
///
/// Entities being dragged also get a dashed selection outline.
pub fn render_document(entities: &[PathEntity], config: &SurfaceConfig, frame: &SvgFrame) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, entities, config, frame);
    out
}

fn write_document(
    out: &mut String,
    entities: &[PathEntity],
    config: &SurfaceConfig,
    frame: &SvgFrame,
) -> std::fmt::Result {
    write!(
        out,
        r#"<svg xmlns="{}" width="{}" height="{}""#,
        XMLNS,
        escape_attribute(frame.width),
        escape_attribute(frame.height)
    )?;
    if let Some(view_box) = frame.view_box {
        write!(out, r#" viewBox="{}""#, escape_attribute(view_box))?;
    }
    writeln!(out, ">")?;

    for entity in entities {
        write_path(out, entity.drawable_path(), &config.path_style)?;
        if let Some(bounds) = entity.selection_bounds() {
            write_outline(out, bounds, &config.path_style, &config.selection_dash)?;
        }
    }

    writeln!(out, "</svg>")
}

fn write_path(out: &mut String, d: &str, style: &PathStyle) -> std::fmt::Result {
    let fill = style
        .fill()
        .map(css_color)
        .unwrap_or_else(|| "none".to_string());
    writeln!(
        out,
        r#"  <path {}="{}" stroke="{}" fill="{}" stroke-width="{}"/>"#,
        DRAWABLE_PATH_ATTRIBUTE,
        d,
        css_color(style.stroke()),
        fill,
        format_coordinate(style.stroke_width)
    )
}

fn write_outline(out: &mut String, bounds: Rect, style: &PathStyle, dash: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" stroke="{}" fill="none" stroke-dasharray="{}"/>"#,
        format_coordinate(bounds.x0),
        format_coordinate(bounds.y0),
        format_coordinate(bounds.width()),
        format_coordinate(bounds.height()),
        css_color(style.stroke()),
        escape_attribute(dash)
    )
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let config = SurfaceConfig::default();
        let svg = render_document(&[], &config, &SvgFrame::surface(&config));
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"100%\">\n</svg>\n"
        );
    }

    #[test]
    fn test_thumbnail_frame() {
        let surface = SurfaceConfig::default();
        let thumbnail = ThumbnailConfig::default();
        let svg = render_document(&[], &surface, &SvgFrame::thumbnail(&thumbnail));
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"200\" viewBox=\"0 0 500 500\">"
        ));
    }

    #[test]
    fn test_path_element() {
        let mut out = String::new();
        write_path(&mut out, "M 1 2 L 3 4", &PathStyle::default()).unwrap();
        assert_eq!(
            out,
            "  <path d=\"M 1 2 L 3 4\" stroke=\"#000000\" fill=\"none\" stroke-width=\"2\"/>\n"
        );
    }

    #[test]
    fn test_outline_element() {
        let mut out = String::new();
        write_outline(
            &mut out,
            Rect::new(3.0, -2.0, 8.0, 3.0),
            &PathStyle::default(),
            "4 1",
        )
        .unwrap();
        assert_eq!(
            out,
            "  <rect x=\"3\" y=\"-2\" width=\"5\" height=\"5\" stroke=\"#000000\" fill=\"none\" stroke-dasharray=\"4 1\"/>\n"
        );
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute(r#"a"b<c>&"#), "a&quot;b&lt;c&gt;&amp;");
        assert_eq!(escape_attribute("100%"), "100%");
    }
}
