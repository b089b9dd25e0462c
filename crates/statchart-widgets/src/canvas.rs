//! The drawing backend boundary.
//!
//! The chart paints against the [`Canvas`] trait; real backends map the
//! calls onto a 2D drawing surface, while [`RecordingCanvas`] captures
//! them as [`DrawCommand`]s for testing and diffing.

use serde::{Deserialize, Serialize};
use statchart_core::{Color, GradientStop, Point};

/// Text styling for canvas text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 14.0,
        }
    }
}

/// Drawing surface the chart renders onto.
pub trait Canvas {
    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw a polyline, optionally closed back to the first point.
    fn draw_path(&mut self, points: &[Point], closed: bool, color: Color, width: f32);

    /// Fill a polygon with a single color.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Fill a polygon with a conic gradient centered at `center`. The
    /// stops span one full revolution starting at the top of the chart.
    fn fill_polygon_conic(&mut self, points: &[Point], center: Point, stops: &[GradientStop]);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw text anchored at a position.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// A recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Straight line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Polyline, optionally closed.
    Path {
        /// Vertices in order.
        points: Vec<Point>,
        /// Whether the path closes back to the first vertex.
        closed: bool,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Solid polygon fill.
    Polygon {
        /// Vertices in order.
        points: Vec<Point>,
        /// Fill color.
        color: Color,
    },
    /// Conic-gradient polygon fill.
    ConicPolygon {
        /// Vertices in order.
        points: Vec<Point>,
        /// Gradient center.
        center: Point,
        /// Gradient stops over a full revolution.
        stops: Vec<GradientStop>,
    },
    /// Filled circle.
    Circle {
        /// Center point.
        center: Point,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Text run.
    Text {
        /// The text.
        text: String,
        /// Anchor position.
        position: Point,
        /// Style.
        style: TextStyle,
    },
}

/// A Canvas implementation that records draw operations as
/// [`DrawCommand`]s.
///
/// Useful for testing (verify what was painted), serialization (send
/// commands to a remote surface), and diffing render outputs.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_path(&mut self, points: &[Point], closed: bool, color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed,
            color,
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_polygon_conic(&mut self, points: &[Point], center: Point, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::ConicPolygon {
            points: points.to_vec(),
            center,
            stops: stops.to_vec(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_starts_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(Point::ORIGIN, Point::new(1.0, 1.0), Color::BLACK, 1.0);
        canvas.fill_circle(Point::ORIGIN, 2.0, Color::WHITE);

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::Line { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_polygon(&[Point::ORIGIN], Color::BLACK);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = DrawCommand::ConicPolygon {
            points: vec![Point::ORIGIN, Point::new(1.0, 0.0)],
            center: Point::ORIGIN,
            stops: vec![GradientStop::new(0.0, Color::DEFAULT_CHART)],
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: DrawCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}
