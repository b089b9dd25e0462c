//! Session state for the chart editor: the ordered layer collection, the
//! active layer, and the shared scale.
//!
//! State mutation follows a message pattern: the UI turns input events
//! into [`EditorMessage`]s, [`ChartEditor::update`] applies them and
//! answers with the [`Command`] the UI must run next (redraw, or redraw
//! plus repopulating the bound input fields).

use crate::color::Color;
use crate::layer::ChartLayer;
use crate::stats::{Axis, Stats};
use serde::{Deserialize, Serialize};

/// Shared-scale floor: the global maximum never drops below this.
pub const MIN_SCALE: f64 = 10.0;

/// Golden-angle hue step used to generate distinguishing layer colors.
const GOLDEN_ANGLE_DEG: f32 = 137.507_77;

/// UI side effect requested by a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Nothing to do.
    #[default]
    None,
    /// Redraw the chart surface.
    Redraw,
    /// Repopulate the bound input fields from the active layer, then
    /// redraw.
    SyncForm,
}

/// Messages that mutate editor state.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMessage {
    /// Append a new layer and make it active.
    AddLayer,
    /// Make the layer at this index active.
    SelectLayer(usize),
    /// Set one stat on the active layer.
    SetStat {
        /// Target axis.
        axis: Axis,
        /// Raw value; sanitized before storage.
        value: f64,
    },
    /// Set one stat on the active layer from raw input-field text.
    SetStatField {
        /// Target axis.
        axis: Axis,
        /// Field text; empty or malformed text stores 0.
        text: String,
    },
    /// Change the active layer's base color.
    SetBaseColor(Color),
    /// Change one axis color on the active layer.
    SetAxisColor {
        /// Target axis.
        axis: Axis,
        /// New color.
        color: Color,
    },
    /// Flip the active layer's fill mode.
    ToggleMultiColor,
    /// Write a full form snapshot through to the active layer.
    Update(LayerUpdate),
}

/// A full write-through of the input form onto the active layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerUpdate {
    /// New stat vector.
    pub stats: Stats,
    /// New base color.
    pub base_color: Color,
    /// New per-axis colors.
    pub axis_colors: [Color; Axis::COUNT],
    /// New fill mode.
    pub multi_color: bool,
}

/// The chart editor session state.
///
/// Owns the ordered layer collection (insertion order is stacking order,
/// oldest at the bottom) and the active-layer pointer. At least one layer
/// exists from construction on, and the active index always stays in
/// range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEditor {
    layers: Vec<ChartLayer>,
    active: usize,
}

impl ChartEditor {
    /// Create an editor seeded with one default-colored layer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: vec![ChartLayer::new(Color::DEFAULT_CHART)],
            active: 0,
        }
    }

    /// All layers in stacking order (oldest first).
    #[must_use]
    pub fn layers(&self) -> &[ChartLayer] {
        &self.layers
    }

    /// Number of layers. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Index of the active layer.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// The active layer.
    #[must_use]
    pub fn active_layer(&self) -> &ChartLayer {
        &self.layers[self.active]
    }

    fn active_layer_mut(&mut self) -> &mut ChartLayer {
        &mut self.layers[self.active]
    }

    /// Append a new layer with a freshly generated distinguishing color,
    /// zeroed stats, and single-color mode, and make it active. Returns
    /// the new layer's index.
    pub fn add_layer(&mut self) -> usize {
        let color = Self::distinguishing_color(self.layers.len());
        self.layers.push(ChartLayer::new(color));
        self.active = self.layers.len() - 1;
        self.active
    }

    /// Make the layer at `index` active.
    ///
    /// # Errors
    ///
    /// Fails with [`LayerIndexError`] when `index` is out of range; the
    /// active layer is left unchanged.
    pub fn select_layer(&mut self, index: usize) -> Result<&ChartLayer, LayerIndexError> {
        if index >= self.layers.len() {
            return Err(LayerIndexError {
                index,
                len: self.layers.len(),
            });
        }
        self.active = index;
        Ok(&self.layers[index])
    }

    /// Write a full form snapshot through to the active layer. Stats are
    /// sanitized on the way in; this never fails.
    pub fn update_active(&mut self, update: LayerUpdate) {
        let layer = self.active_layer_mut();
        layer.stats = Stats::new(*update.stats.values());
        layer.set_base_color(update.base_color);
        layer.set_axis_colors(update.axis_colors);
        layer.set_multi_color(update.multi_color);
    }

    /// Flip the active layer's fill mode. Other layers keep their stored
    /// mode.
    pub fn toggle_multi_color(&mut self) {
        self.active_layer_mut().toggle_multi_color();
    }

    /// The shared scale: the largest stat across all layers, rounded up
    /// to an integer, floored at [`MIN_SCALE`].
    #[must_use]
    pub fn global_max(&self) -> f64 {
        self.global_max_with_floor(MIN_SCALE)
    }

    /// Shared scale against an explicit floor.
    #[must_use]
    pub fn global_max_with_floor(&self, floor: f64) -> f64 {
        self.layers
            .iter()
            .map(|layer| layer.stats.max())
            .fold(floor, f64::max)
            .ceil()
    }

    /// Apply a message and report the UI side effect to run.
    ///
    /// Message handling is forgiving: an out-of-range `SelectLayer` is
    /// dropped with [`Command::None`] instead of surfacing the error.
    /// Callers that want the failure use [`select_layer`] directly.
    ///
    /// [`select_layer`]: Self::select_layer
    pub fn update(&mut self, msg: EditorMessage) -> Command {
        match msg {
            EditorMessage::AddLayer => {
                self.add_layer();
                Command::SyncForm
            }
            EditorMessage::SelectLayer(index) => match self.select_layer(index) {
                Ok(_) => Command::SyncForm,
                Err(_) => Command::None,
            },
            EditorMessage::SetStat { axis, value } => {
                self.active_layer_mut().stats.set(axis, value);
                Command::Redraw
            }
            EditorMessage::SetStatField { axis, text } => {
                let value = Stats::parse_field(&text);
                self.active_layer_mut().stats.set(axis, value);
                Command::Redraw
            }
            EditorMessage::SetBaseColor(color) => {
                self.active_layer_mut().set_base_color(color);
                Command::Redraw
            }
            EditorMessage::SetAxisColor { axis, color } => {
                self.active_layer_mut().set_axis_color(axis, color);
                Command::Redraw
            }
            EditorMessage::ToggleMultiColor => {
                self.toggle_multi_color();
                Command::Redraw
            }
            EditorMessage::Update(update) => {
                self.update_active(update);
                Command::Redraw
            }
        }
    }

    /// Deterministic distinguishing color for the layer at `ordinal`,
    /// stepping the hue by the golden angle.
    fn distinguishing_color(ordinal: usize) -> Color {
        Color::from_hsl(ordinal as f32 * GOLDEN_ANGLE_DEG, 0.65, 0.6)
    }
}

impl Default for ChartEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// A layer index outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerIndexError {
    /// The rejected index.
    pub index: usize,
    /// Layer count at the time of the call.
    pub len: usize,
}

impl std::fmt::Display for LayerIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "layer index {} out of range (have {} layers)",
            self.index, self.len
        )
    }
}

impl std::error::Error for LayerIndexError {}
