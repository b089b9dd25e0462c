//! The five fixed stat axes and the stat vector.

use serde::{Deserialize, Serialize};

/// One of the five fixed stat categories.
///
/// Declaration order is significant: it drives angular position and label
/// assignment, with `Power` at the top of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Power (top of the pentagon)
    Power,
    /// Speed
    Speed,
    /// Trick
    Trick,
    /// Recovery
    Recovery,
    /// Defense
    Defense,
}

impl Axis {
    /// Number of axes.
    pub const COUNT: usize = 5;

    /// All axes in chart order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Power,
        Self::Speed,
        Self::Trick,
        Self::Recovery,
        Self::Defense,
    ];

    /// 0-based position around the pentagon.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Speed => "Speed",
            Self::Trick => "Trick",
            Self::Recovery => "Recovery",
            Self::Defense => "Defense",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A stat vector: one non-negative value per axis, in axis order.
///
/// Values are not bounded above; rendering caps them against the shared
/// scale without mutating the stored vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats([f64; Axis::COUNT]);

impl Stats {
    /// All-zero stats.
    pub const ZERO: Self = Self([0.0; Axis::COUNT]);

    /// Create from raw values, sanitizing each entry.
    #[must_use]
    pub fn new(values: [f64; Axis::COUNT]) -> Self {
        Self(values.map(Self::sanitize))
    }

    /// Map a raw value to a storable one: non-finite or negative input
    /// becomes 0.0.
    #[must_use]
    pub fn sanitize(value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }

    /// Parse a stat input field. Empty or malformed text is 0.0, never an
    /// error.
    #[must_use]
    pub fn parse_field(text: &str) -> f64 {
        text.trim().parse::<f64>().map_or(0.0, Self::sanitize)
    }

    /// Get the value for an axis.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    /// Set the value for an axis, sanitizing the input.
    pub fn set(&mut self, axis: Axis, value: f64) {
        self.0[axis.index()] = Self::sanitize(value);
    }

    /// Largest stored value (0.0 when all stats are zero).
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// Values in axis order.
    #[must_use]
    pub const fn values(&self) -> &[f64; Axis::COUNT] {
        &self.0
    }
}
