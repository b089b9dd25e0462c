//! State and layout model for overlayable five-axis stat charts.
//!
//! This crate holds the reusable core of a character stat chart editor:
//! - Color utilities: [`Color`] parsing, compositing, and mixing
//! - Polar layout: [`PolarLayout`] placing points and labels around the
//!   pentagon
//! - Fill construction: [`Fill`] flat fills and conic wedge gradients
//! - Session state: [`ChartEditor`] with its ordered [`ChartLayer`]
//!   collection and shared scale
//!
//! Rendering and export are trait boundaries in `statchart-widgets`; this
//! crate does no I/O and, outside explicit index lookups, no operation
//! here fails — bad input degrades to a safe default so interaction never
//! blocks.

mod color;
mod config;
mod editor;
mod geometry;
mod gradient;
mod layer;
mod stats;

pub use color::{Color, ColorParseError};
pub use config::ChartConfig;
pub use editor::{
    ChartEditor, Command, EditorMessage, LayerIndexError, LayerUpdate, MIN_SCALE,
};
pub use geometry::{Point, PolarLayout, Rect};
pub use gradient::{wedge_stops, Fill, Gradient, GradientStop};
pub use layer::ChartLayer;
pub use stats::{Axis, Stats};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==========================================================================
    // Property tests for the core invariants
    // ==========================================================================

    proptest! {
        #[test]
        fn prop_global_max_never_below_floor(values in proptest::array::uniform5(0.0f64..1000.0)) {
            let mut editor = ChartEditor::new();
            editor.update_active(LayerUpdate {
                stats: Stats::new(values),
                base_color: Color::DEFAULT_CHART,
                axis_colors: [Color::DEFAULT_CHART; 5],
                multi_color: false,
            });
            prop_assert!(editor.global_max() >= MIN_SCALE);
        }

        #[test]
        fn prop_global_max_covers_every_value(values in proptest::array::uniform5(0.0f64..1000.0)) {
            let mut editor = ChartEditor::new();
            editor.update_active(LayerUpdate {
                stats: Stats::new(values),
                base_color: Color::DEFAULT_CHART,
                axis_colors: [Color::DEFAULT_CHART; 5],
                multi_color: false,
            });
            let max = editor.global_max();
            for v in values {
                prop_assert!(v <= max);
            }
        }

        #[test]
        fn prop_mix_with_self_is_identity(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0, w in -2.0f32..=3.0) {
            let c = Color::rgb(r, g, b);
            let mixed = c.mix(&c, w);
            prop_assert!((mixed.r - c.r).abs() < 1e-5);
            prop_assert!((mixed.g - c.g).abs() < 1e-5);
            prop_assert!((mixed.b - c.b).abs() < 1e-5);
        }

        #[test]
        fn prop_alpha_composite_preserves_channels(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0.0f32..=1.0) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let parsed = Color::from_css(&hex).unwrap();
            let composited = parsed.with_alpha(a);
            prop_assert_eq!(composited.to_hex(), hex);
            prop_assert!((composited.a - a).abs() < 1e-6);
        }

        #[test]
        fn prop_wedge_stops_span_unit_interval(n in 1usize..=8, alpha in 0.0f32..=1.0) {
            let colors: Vec<Color> = (0..n)
                .map(|i| Color::from_hsl(i as f32 * 45.0, 0.7, 0.5))
                .collect();
            let stops = wedge_stops(&colors, alpha);
            prop_assert_eq!(stops.first().map(|s| s.offset), Some(0.0));
            prop_assert_eq!(stops.last().map(|s| s.offset), Some(1.0));
            for pair in stops.windows(2) {
                prop_assert!(pair[0].offset <= pair[1].offset);
            }
        }
    }
}
