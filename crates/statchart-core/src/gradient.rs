//! Fill construction: flat color fills and conic wedge gradients.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// One stop in a gradient ramp. `offset` is the fraction of a full
/// revolution in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position of the stop along the ramp.
    pub offset: f32,
    /// Color carried at this stop.
    pub color: Color,
}

impl GradientStop {
    /// Create a stop, clamping the offset to [0.0, 1.0].
    #[must_use]
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// A layer's computed fill, ready to hand to the render boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// Single color composited at the layer opacity.
    Solid(Color),
    /// Conic gradient centered on the polygon center, one wedge per axis.
    Conic {
        /// Stops spanning the full revolution, first at 0.0, last at 1.0.
        stops: Vec<GradientStop>,
    },
}

impl Fill {
    /// Flat fill: the base color at the given opacity.
    #[must_use]
    pub fn flat(color: Color, alpha: f32) -> Self {
        Self::Solid(color.with_alpha(alpha))
    }

    /// Wedge fill: a conic ramp where each axis's angular position carries
    /// that axis's color, blending smoothly into the next wedge. The ramp
    /// wraps, closing back on the first axis's color at offset 1.0.
    #[must_use]
    pub fn wedge(axis_colors: &[Color], alpha: f32) -> Self {
        Self::Conic {
            stops: wedge_stops(axis_colors, alpha),
        }
    }
}

/// Build the conic stop list for a set of axis colors.
///
/// Produces N+1 stops: one per axis at fraction `i/N`, plus a closing stop
/// at fraction 1.0 repeating the first axis's color so the revolution has
/// no gap. Works for any non-empty color slice, duplicates included.
#[must_use]
pub fn wedge_stops(axis_colors: &[Color], alpha: f32) -> Vec<GradientStop> {
    if axis_colors.is_empty() {
        return vec![
            GradientStop::new(0.0, Color::WHITE.with_alpha(alpha)),
            GradientStop::new(1.0, Color::WHITE.with_alpha(alpha)),
        ];
    }

    let n = axis_colors.len();
    let mut stops: Vec<GradientStop> = axis_colors
        .iter()
        .enumerate()
        .map(|(i, c)| GradientStop::new(i as f32 / n as f32, c.with_alpha(alpha)))
        .collect();
    stops.push(GradientStop::new(1.0, axis_colors[0].with_alpha(alpha)));
    stops
}

/// A sampleable gradient over an ordered stop list.
///
/// Backends that cannot draw conic ramps natively rasterize them by
/// sampling; tests use it to check blend behavior at wedge boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create from a stop list. Stops are sorted by offset.
    #[must_use]
    pub fn from_stops(mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by(|a, b| {
            a.offset
                .partial_cmp(&b.offset)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { stops }
    }

    /// The stop list, sorted by offset.
    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at position t (0.0 - 1.0).
    #[must_use]
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);

        if self.stops.is_empty() {
            return Color::WHITE;
        }
        if self.stops.len() == 1 {
            return self.stops[0].color;
        }

        // Find the segment containing t
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.offset && t <= b.offset {
                let span = b.offset - a.offset;
                if span.abs() < 1e-6 {
                    return a.color;
                }
                return a.color.mix(&b.color, (t - a.offset) / span);
            }
        }

        // t past the last stop
        self.stops[self.stops.len() - 1].color
    }
}
