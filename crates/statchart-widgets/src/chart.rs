//! The stat chart widget: grid, spokes, labels, and overlaid layer
//! polygons painted against a [`Canvas`].

use crate::canvas::{Canvas, TextStyle};
use statchart_core::{Axis, ChartConfig, ChartEditor, Color, Fill, Point, PolarLayout, Rect};

/// Fraction of the half-extent reserved for the drawing radius; the rest
/// is label room.
const RADIUS_FRACTION: f32 = 0.8;

/// Stat chart widget.
///
/// Owns layout bounds and presentation config; layer data stays in the
/// [`ChartEditor`] and is borrowed per paint so every paint reflects the
/// current session state.
#[derive(Debug, Clone)]
pub struct StatChart {
    config: ChartConfig,
    bounds: Rect,
}

impl StatChart {
    /// Create a chart with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ChartConfig::default(),
            bounds: Rect::default(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Cache the widget bounds for subsequent paints.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Current draw-surface center.
    #[must_use]
    pub fn center(&self) -> Point {
        self.config
            .center_override
            .unwrap_or_else(|| self.bounds.center())
    }

    /// Current drawing radius: the distance from center to a full-scale
    /// vertex.
    #[must_use]
    pub fn drawing_radius(&self) -> f32 {
        (self.bounds.width.min(self.bounds.height) / 2.0) * RADIUS_FRACTION
    }

    /// The polar layout for the current bounds.
    #[must_use]
    pub fn polar_layout(&self) -> PolarLayout {
        PolarLayout::new(self.center(), self.drawing_radius(), Axis::COUNT)
    }

    /// Paint the chart: grid, axis spokes, labels, then every layer
    /// oldest-first so newer layers stack on top.
    pub fn paint(&self, editor: &ChartEditor, canvas: &mut dyn Canvas) {
        if self.bounds.width < 1.0 || self.bounds.height < 1.0 {
            return;
        }

        let layout = self.polar_layout();
        let max = editor.global_max_with_floor(self.config.min_scale);

        let grid_color = Color::new(0.3, 0.3, 0.3, 1.0);
        let label_style = TextStyle {
            color: Color::new(0.2, 0.2, 0.2, 1.0),
            ..TextStyle::default()
        };

        if self.config.show_grid {
            for &level in &self.config.grid_levels {
                let ring = layout.ring(level);
                canvas.draw_path(&ring, true, grid_color, 1.0);
            }
            for vertex in layout.ring(1.0) {
                canvas.draw_line(layout.center, vertex, grid_color, 1.0);
            }
        }

        if self.config.show_labels {
            for axis in Axis::ALL {
                let anchor = layout.label_anchor(
                    axis.index(),
                    self.config.label_radius_factor,
                    self.config.label_offset_px,
                );
                let nudge = self.config.axis_nudges[axis.index()];
                canvas.draw_text(axis.label(), anchor + nudge, &label_style);
            }
        }

        for layer in editor.layers() {
            let polygon = layout.polygon(layer.stats.values(), max);

            match layer.fill(self.config.fill_alpha) {
                Fill::Solid(color) => canvas.fill_polygon(&polygon, color),
                Fill::Conic { stops } => {
                    canvas.fill_polygon_conic(&polygon, layout.center, &stops);
                }
            }
            canvas.draw_path(&polygon, true, layer.border_color(), 2.0);
        }

        if self.config.show_values {
            self.paint_values(editor, &layout, canvas);
        }
    }

    /// Numeric value text for the active layer, just beyond each vertex.
    fn paint_values(&self, editor: &ChartEditor, layout: &PolarLayout, canvas: &mut dyn Canvas) {
        let layer = editor.active_layer();
        let style = TextStyle {
            color: layer.border_color(),
            size: 12.0,
        };
        for axis in Axis::ALL {
            let value = layer.stats.get(axis);
            let anchor = layout.label_anchor(axis.index(), 1.0, 6.0);
            canvas.draw_text(&format_value(value), anchor, &style);
        }
    }
}

impl Default for StatChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a stat value for display: integers without a decimal point,
/// everything else with one decimal place.
fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
