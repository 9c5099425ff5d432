//! Path geometry: point sequence and its rendered description.

use crate::error::{BoardError, BoardResult};
use kurbo::{Point, Rect, Vec2};
use std::fmt::Write;

/// Name of the SVG attribute holding a path description.
pub const DRAWABLE_PATH_ATTRIBUTE: &str = "d";

/// Rendered geometry handle of one path.
///
/// Holds the last description produced by [`PathBuilder::render`]; hosts copy
/// it into the element they display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathGeometry {
    drawable_path: String,
}

impl PathGeometry {
    /// The current path description (empty until first render).
    pub fn drawable_path(&self) -> &str {
        &self.drawable_path
    }
}

/// Ordered points of a single polyline.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    points: Vec<Point>,
    geometry: PathGeometry,
}

impl PathBuilder {
    /// Create an uninitialized builder. Call [`PathBuilder::create`] next.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the path with its first point.
    pub fn create(&mut self, initial: Point) -> BoardResult<()> {
        if !self.points.is_empty() {
            return Err(BoardError::InvalidState(
                "path has already been created".to_string(),
            ));
        }
        self.points.push(initial);
        self.render();
        Ok(())
    }

    /// Add a point to the end of the path.
    pub fn append_point(&mut self, point: Point) {
        self.points.push(point);
        self.render();
    }

    /// Move every point by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
        self.render();
    }

    /// Regenerate the description and store it on the geometry handle.
    pub fn render(&mut self) -> &str {
        self.geometry.drawable_path = describe(&self.points);
        &self.geometry.drawable_path
    }

    /// Get the points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether [`PathBuilder::create`] has not been called yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the rendered geometry handle.
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// Axis-aligned bounds of all points, if any.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let initial = Rect::from_points(first, first);
        Some(
            self.points
                .iter()
                .skip(1)
                .fold(initial, |rect, point| rect.union_pt(*point)),
        )
    }
}

/// Path description for a point sequence: `M x0 y0 L x1 y1 ...`.
///
/// Returns an empty string for an empty sequence.
pub fn describe(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, point) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{} {} {}",
            command,
            format_coordinate(point.x),
            format_coordinate(point.y)
        );
    }
    out
}

/// Shortest decimal form of a coordinate; `-0` prints as `0`.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, use exponent notation
/// with an explicit sign (`1e+21`, `1.5e-7`), matching how browsers print
/// path data.
pub fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) || value.is_nan() {
        return format!("{}", value);
    }
    let exponent = format!("{:e}", value);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_from(points: &[(f64, f64)]) -> PathBuilder {
        let mut path = PathBuilder::new();
        let (x, y) = points[0];
        path.create(Point::new(x, y)).unwrap();
        for &(x, y) in &points[1..] {
            path.append_point(Point::new(x, y));
        }
        path
    }

    #[test]
    fn test_create_once() {
        let mut path = PathBuilder::new();
        assert!(path.is_empty());

        path.create(Point::new(1.0, 2.0)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.geometry().drawable_path(), "M 1 2");

        let err = path.create(Point::new(3.0, 4.0)).unwrap_err();
        assert!(matches!(err, BoardError::InvalidState(_)));
        assert_eq!(path.points(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_render_scenario() {
        let mut path = path_from(&[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)]);
        assert_eq!(path.render(), "M 10 10 L 20 20 L 30 10");
        assert_eq!(path.geometry().drawable_path(), "M 10 10 L 20 20 L 30 10");
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut path = path_from(&[(0.5, 1.25), (-3.0, 7.0)]);
        let first = path.render().to_string();
        let second = path.render().to_string();
        assert_eq!(first, second);
        assert_eq!(first, "M 0.5 1.25 L -3 7");
    }

    #[test]
    fn test_append_keeps_order() {
        let mut path = path_from(&[(0.0, 0.0)]);
        for i in 1..=5 {
            path.append_point(Point::new(i as f64, (i * 2) as f64));
        }
        assert_eq!(path.len(), 6);
        for (i, point) in path.points().iter().enumerate() {
            assert_eq!(*point, Point::new(i as f64, (i * 2) as f64));
        }
    }

    #[test]
    fn test_translate_inverse() {
        let mut path = path_from(&[(0.0, 0.0), (5.0, 5.0), (12.0, -3.0)]);
        let original = path.points().to_vec();

        path.translate(Vec2::new(7.0, -11.0));
        assert_eq!(path.points()[1], Point::new(12.0, -6.0));

        path.translate(Vec2::new(-7.0, 11.0));
        assert_eq!(path.points(), original.as_slice());
    }

    #[test]
    fn test_translate_zero_delta() {
        let mut path = path_from(&[(3.0, 4.0), (5.0, 6.0)]);
        let before = path.geometry().clone();

        path.translate(Vec2::ZERO);
        path.translate(Vec2::ZERO);

        assert_eq!(path.points(), &[Point::new(3.0, 4.0), Point::new(5.0, 6.0)]);
        assert_eq!(path.geometry(), &before);
    }

    #[test]
    fn test_negative_zero_formatting() {
        assert_eq!(format_coordinate(-0.0), "0");
        assert_eq!(describe(&[Point::new(-0.0, 2.0)]), "M 0 2");
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe(&[]), "");
        assert!(PathBuilder::new().bounds().is_none());
    }

    #[test]
    fn test_bounds() {
        let path = path_from(&[(0.0, 0.0), (100.0, 50.0), (50.0, 100.0)]);
        let bounds = path.bounds().unwrap();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exponent_formatting() {
        assert_eq!(describe(&[Point::new(1e21, 1e-7)]), "M 1e+21 1e-7");
        assert_eq!(format_coordinate(-2.5e22), "-2.5e+22");
        assert_eq!(format_coordinate(1.5e-7), "1.5e-7");
        assert_eq!(format_coordinate(1e20), "100000000000000000000");
        assert_eq!(format_coordinate(0.000001), "0.000001");
        assert_eq!(format_coordinate(f64::INFINITY), "Infinity");
    }
}
