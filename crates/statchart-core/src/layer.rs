//! One overlay layer: a stat polygon with its own color and fill mode.

use crate::color::Color;
use crate::gradient::Fill;
use crate::stats::{Axis, Stats};
use serde::{Deserialize, Serialize};

/// One overlayable stat polygon.
///
/// Layers are created on demand and persist for the session; they are
/// mutated in place by input changes and never explicitly destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayer {
    /// Stat vector driving the polygon shape.
    pub stats: Stats,
    /// Fill and border color in single-color mode.
    base_color: Color,
    /// Per-axis colors used in multi-color mode.
    axis_colors: [Color; Axis::COUNT],
    /// Whether the fill is a per-axis wedge gradient instead of the base
    /// color.
    multi_color: bool,
}

impl ChartLayer {
    /// Create a layer with zeroed stats in single-color mode. Axis colors
    /// start as copies of the base color.
    #[must_use]
    pub fn new(base_color: Color) -> Self {
        Self {
            stats: Stats::ZERO,
            base_color,
            axis_colors: [base_color; Axis::COUNT],
            multi_color: false,
        }
    }

    /// The base color.
    #[must_use]
    pub const fn base_color(&self) -> Color {
        self.base_color
    }

    /// The per-axis color array.
    #[must_use]
    pub const fn axis_colors(&self) -> &[Color; Axis::COUNT] {
        &self.axis_colors
    }

    /// Whether the layer is in multi-color mode.
    #[must_use]
    pub const fn is_multi_color(&self) -> bool {
        self.multi_color
    }

    /// Change the base color. While in single-color mode the change
    /// propagates to every axis color; axis colors edited in multi-color
    /// mode are left alone.
    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
        if !self.multi_color {
            self.axis_colors = [color; Axis::COUNT];
        }
    }

    /// Set one axis's color (meaningful in multi-color mode).
    pub fn set_axis_color(&mut self, axis: Axis, color: Color) {
        self.axis_colors[axis.index()] = color;
    }

    /// Replace the whole axis color array.
    pub fn set_axis_colors(&mut self, colors: [Color; Axis::COUNT]) {
        self.axis_colors = colors;
    }

    /// Switch fill mode. Stored axis colors survive a revert to
    /// single-color mode, but the flat fill always derives from the base
    /// color.
    pub fn set_multi_color(&mut self, multi: bool) {
        self.multi_color = multi;
    }

    /// Flip the fill mode.
    pub fn toggle_multi_color(&mut self) {
        self.multi_color = !self.multi_color;
    }

    /// Compute this layer's fill at the given opacity: flat base color, or
    /// a conic wedge ramp over the axis colors.
    #[must_use]
    pub fn fill(&self, alpha: f32) -> Fill {
        if self.multi_color {
            Fill::wedge(&self.axis_colors, alpha)
        } else {
            Fill::flat(self.base_color, alpha)
        }
    }

    /// Border color: the opaque base color.
    #[must_use]
    pub fn border_color(&self) -> Color {
        self.base_color.with_alpha(1.0)
    }
}

impl Default for ChartLayer {
    fn default() -> Self {
        Self::new(Color::DEFAULT_CHART)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer_defaults() {
        let layer = ChartLayer::new(Color::DEFAULT_CHART);
        assert_eq!(layer.stats, Stats::ZERO);
        assert!(!layer.is_multi_color());
        for c in layer.axis_colors() {
            assert_eq!(*c, Color::DEFAULT_CHART);
        }
    }

    #[test]
    fn test_base_color_propagates_in_single_mode() {
        let mut layer = ChartLayer::default();
        let red = Color::rgb(1.0, 0.0, 0.0);
        layer.set_base_color(red);
        for c in layer.axis_colors() {
            assert_eq!(*c, red);
        }
    }

    #[test]
    fn test_base_color_leaves_axis_colors_in_multi_mode() {
        let mut layer = ChartLayer::default();
        layer.set_multi_color(true);
        let green = Color::rgb(0.0, 1.0, 0.0);
        layer.set_axis_color(Axis::Speed, green);
        layer.set_base_color(Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(layer.axis_colors()[Axis::Speed.index()], green);
    }

    #[test]
    fn test_flat_fill_in_single_mode() {
        let layer = ChartLayer::default();
        assert_eq!(
            layer.fill(0.65),
            Fill::flat(Color::DEFAULT_CHART, 0.65)
        );
    }

    #[test]
    fn test_wedge_fill_in_multi_mode() {
        let mut layer = ChartLayer::default();
        layer.toggle_multi_color();
        match layer.fill(0.65) {
            Fill::Conic { stops } => assert_eq!(stops.len(), Axis::COUNT + 1),
            Fill::Solid(_) => panic!("expected conic fill"),
        }
    }

    #[test]
    fn test_toggle_roundtrip_restores_flat_fill() {
        let mut layer = ChartLayer::default();
        let before = layer.fill(0.65);

        layer.toggle_multi_color();
        layer.set_axis_color(Axis::Power, Color::rgb(1.0, 0.0, 0.0));
        layer.toggle_multi_color();

        // Flat rendering comes back from the original base color even
        // though the edited axis color is still stored.
        assert_eq!(layer.fill(0.65), before);
        assert_eq!(
            layer.axis_colors()[Axis::Power.index()],
            Color::rgb(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_border_is_opaque() {
        let layer = ChartLayer::new(Color::DEFAULT_CHART.with_alpha(0.3));
        assert_eq!(layer.border_color().a, 1.0);
    }
}
