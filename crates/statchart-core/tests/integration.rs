//! Integration tests for statchart-core.
//!
//! End-to-end scenarios over the public API: editor sessions, shared
//! scale, and fill computation.

use statchart_core::{
    Axis, ChartConfig, ChartEditor, Color, Command, EditorMessage, Fill, Gradient, LayerUpdate,
    Point, PolarLayout, Stats,
};

// =============================================================================
// Shared scale scenarios
// =============================================================================

#[test]
fn test_two_layer_global_max() {
    let mut editor = ChartEditor::new();
    editor.update_active(LayerUpdate {
        stats: Stats::new([5.0, 5.0, 5.0, 5.0, 5.0]),
        base_color: Color::DEFAULT_CHART,
        axis_colors: [Color::DEFAULT_CHART; 5],
        multi_color: false,
    });

    editor.add_layer();
    editor.update_active(LayerUpdate {
        stats: Stats::new([12.0, 3.0, 3.0, 3.0, 3.0]),
        base_color: Color::parse_or_default("#d96a6a"),
        axis_colors: [Color::parse_or_default("#d96a6a"); 5],
        multi_color: false,
    });

    assert_eq!(editor.global_max(), 12.0);
}

#[test]
fn test_scale_floor_with_all_zero_layers() {
    let mut editor = ChartEditor::new();
    editor.add_layer();
    editor.add_layer();
    assert_eq!(editor.global_max(), 10.0);
}

#[test]
fn test_scale_recomputes_after_edit() {
    let mut editor = ChartEditor::new();
    editor.update(EditorMessage::SetStat {
        axis: Axis::Power,
        value: 14.0,
    });
    assert_eq!(editor.global_max(), 14.0);

    editor.update(EditorMessage::SetStat {
        axis: Axis::Power,
        value: 2.0,
    });
    assert_eq!(editor.global_max(), 10.0);
}

// =============================================================================
// Fill scenarios
// =============================================================================

#[test]
fn test_default_layer_flat_fill_string() {
    let editor = ChartEditor::new();
    let config = ChartConfig::default();
    match editor.active_layer().fill(config.fill_alpha) {
        Fill::Solid(c) => assert_eq!(c.to_rgba_string(), "rgba(146,223,236,0.65)"),
        Fill::Conic { .. } => panic!("fresh layer should render flat"),
    }
}

#[test]
fn test_wedge_fill_wraps_to_first_axis_color() {
    let mut editor = ChartEditor::new();
    editor.update(EditorMessage::ToggleMultiColor);
    for (i, axis) in Axis::ALL.into_iter().enumerate() {
        editor.update(EditorMessage::SetAxisColor {
            axis,
            color: Color::from_hsl(i as f32 * 72.0, 0.8, 0.5),
        });
    }

    let Fill::Conic { stops } = editor.active_layer().fill(0.65) else {
        panic!("multi-color layer should render a wedge gradient");
    };

    assert_eq!(stops.len(), Axis::COUNT + 1);
    assert_eq!(stops[0].offset, 0.0);
    assert_eq!(stops[Axis::COUNT].offset, 1.0);
    assert_eq!(stops[Axis::COUNT].color, stops[0].color);

    // The ramp is sampleable over the whole revolution.
    let gradient = Gradient::from_stops(stops);
    let start = gradient.sample(0.0);
    let wrapped = gradient.sample(1.0);
    assert_eq!(start, wrapped);
}

#[test]
fn test_toggle_roundtrip_restores_flat_rendering() {
    let mut editor = ChartEditor::new();
    let before = editor.active_layer().fill(0.65);

    editor.update(EditorMessage::ToggleMultiColor);
    editor.update(EditorMessage::SetAxisColor {
        axis: Axis::Trick,
        color: Color::parse_or_default("#ff8800"),
    });
    editor.update(EditorMessage::ToggleMultiColor);

    assert_eq!(editor.active_layer().fill(0.65), before);
}

// =============================================================================
// Editor session scenarios
// =============================================================================

#[test]
fn test_session_add_select_edit() {
    let mut editor = ChartEditor::new();

    // Fill in the first layer.
    for (axis, value) in Axis::ALL.into_iter().zip([7.0, 4.0, 9.0, 3.0, 6.0]) {
        editor.update(EditorMessage::SetStat { axis, value });
    }

    // Add a second layer; the form should repopulate from it.
    assert_eq!(editor.update(EditorMessage::AddLayer), Command::SyncForm);
    assert_eq!(editor.active_layer().stats, Stats::ZERO);

    // Going back to the first layer exposes exactly its stored state.
    assert_eq!(
        editor.update(EditorMessage::SelectLayer(0)),
        Command::SyncForm
    );
    assert_eq!(editor.active_layer().stats.get(Axis::Trick), 9.0);

    // Selecting twice is idempotent.
    let snapshot = editor.active_layer().clone();
    editor.update(EditorMessage::SelectLayer(0));
    assert_eq!(*editor.active_layer(), snapshot);
}

#[test]
fn test_malformed_field_text_becomes_zero() {
    let mut editor = ChartEditor::new();
    editor.update(EditorMessage::SetStat {
        axis: Axis::Defense,
        value: 8.0,
    });
    editor.update(EditorMessage::SetStatField {
        axis: Axis::Defense,
        text: "not a number".to_string(),
    });
    assert_eq!(editor.active_layer().stats.get(Axis::Defense), 0.0);
}

#[test]
fn test_select_out_of_range_reports_range() {
    let mut editor = ChartEditor::new();
    editor.add_layer();
    let err = editor.select_layer(5).unwrap_err();
    assert_eq!(err.index, 5);
    assert_eq!(err.len, 2);
}

// =============================================================================
// Layout against the shared scale
// =============================================================================

#[test]
fn test_overlaid_layers_share_one_scale() {
    let mut editor = ChartEditor::new();
    editor.update(EditorMessage::SetStat {
        axis: Axis::Power,
        value: 20.0,
    });
    editor.add_layer();
    editor.update(EditorMessage::SetStat {
        axis: Axis::Power,
        value: 10.0,
    });

    let layout = PolarLayout::new(Point::new(0.0, 0.0), 100.0, Axis::COUNT);
    let max = editor.global_max();

    let big = layout.axis_point(0, editor.layers()[0].stats.get(Axis::Power), max);
    let small = layout.axis_point(0, editor.layers()[1].stats.get(Axis::Power), max);

    // Same scale: the 10-point vertex sits at half the 20-point radius.
    let big_r = layout.center.distance(&big);
    let small_r = layout.center.distance(&small);
    assert!((big_r - 100.0).abs() < 1e-3);
    assert!((small_r - 50.0).abs() < 1e-3);
}
