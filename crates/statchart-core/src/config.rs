//! Chart configuration.
//!
//! One explicit struct enumerating every recognized option, instead of ad
//! hoc option bags merged per chart instance.

use crate::geometry::Point;
use crate::stats::Axis;
use serde::{Deserialize, Serialize};

/// Options controlling chart scale and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Lower bound of the shared scale. The global maximum never drops
    /// below this.
    pub min_scale: f64,
    /// Opacity applied to every layer fill.
    pub fill_alpha: f32,
    /// Label radius as a multiple of the drawing radius.
    pub label_radius_factor: f32,
    /// Additional fixed pixel offset pushing labels outward.
    pub label_offset_px: f32,
    /// Per-axis cosmetic label corrections. Tuning constants for text
    /// baseline quirks, not a layout rule.
    pub axis_nudges: [Point; Axis::COUNT],
    /// Radius fractions at which grid rings are drawn.
    pub grid_levels: Vec<f32>,
    /// Override the chart center instead of deriving it from the bounds.
    pub center_override: Option<Point>,
    /// Draw axis labels.
    pub show_labels: bool,
    /// Draw grid rings and spokes.
    pub show_grid: bool,
    /// Draw the numeric value next to each vertex.
    pub show_values: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_scale: 10.0,
            fill_alpha: 0.65,
            label_radius_factor: 1.08,
            label_offset_px: 12.0,
            axis_nudges: [
                Point::new(0.0, -4.0), // Power: lift clear of the top vertex
                Point::ORIGIN,
                Point::ORIGIN,
                Point::new(-6.0, 0.0), // Recovery: longest label, pull left
                Point::ORIGIN,
            ],
            grid_levels: vec![0.25, 0.5, 0.75, 1.0],
            center_override: None,
            show_labels: true,
            show_grid: true,
            show_values: true,
        }
    }
}

impl ChartConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill opacity.
    #[must_use]
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the scale lower bound.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale.max(1.0);
        self
    }

    /// Override the chart center.
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center_override = Some(center);
        self
    }

    /// Toggle labels.
    #[must_use]
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Toggle the grid.
    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }
}
