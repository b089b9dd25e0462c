//! Geometric primitives and the polar layout for pentagon charts.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            (other.x - self.x).mul_add(t, self.x),
            (other.y - self.y).mul_add(t, self.y),
        )
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Create a new rectangle inset by the given amount on all sides.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Maps axis indices and radial values to screen points around a shared
/// center.
///
/// Axis 0 points straight up; axes proceed clockwise in screen
/// coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLayout {
    /// Shared center of the chart.
    pub center: Point,
    /// Drawing radius: the distance from center to a full-scale value.
    pub radius: f32,
    /// Number of axes (5 for the stat pentagon).
    pub axes: usize,
}

impl PolarLayout {
    /// Create a layout. Axis count is at least 1.
    #[must_use]
    pub fn new(center: Point, radius: f32, axes: usize) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            axes: axes.max(1),
        }
    }

    /// Angle of axis `i` in radians: `-π/2 + i·(2π/N)`.
    #[must_use]
    pub fn axis_angle(&self, index: usize) -> f32 {
        let step = TAU / self.axes as f32;
        ((index % self.axes) as f32).mul_add(step, -PI / 2.0)
    }

    /// Point at the given angle and radius from the center.
    #[must_use]
    pub fn point_at(&self, angle: f32, radius: f32) -> Point {
        Point::new(
            radius.mul_add(angle.cos(), self.center.x),
            radius.mul_add(angle.sin(), self.center.y),
        )
    }

    /// Data point for a value on an axis, scaled against `[0, max]`.
    ///
    /// Non-finite or negative values and a non-positive max degrade to the
    /// center rather than erroring.
    #[must_use]
    pub fn axis_point(&self, index: usize, value: f64, max: f64) -> Point {
        let angle = self.axis_angle(index);
        if !value.is_finite() || value <= 0.0 || max <= 0.0 {
            return self.center;
        }
        let fraction = (value / max).min(1.0) as f32;
        self.point_at(angle, self.radius * fraction)
    }

    /// Anchor point for an axis label, pushed outward from the drawing
    /// radius by a multiplier plus a fixed pixel offset.
    #[must_use]
    pub fn label_anchor(&self, index: usize, radius_factor: f32, offset_px: f32) -> Point {
        let angle = self.axis_angle(index);
        self.point_at(angle, self.radius.mul_add(radius_factor, offset_px))
    }

    /// Vertices of the polygon ring at a radius fraction, one per axis.
    /// Used for grid rings.
    #[must_use]
    pub fn ring(&self, fraction: f32) -> Vec<Point> {
        let r = self.radius * fraction.clamp(0.0, 1.0);
        (0..self.axes)
            .map(|i| self.point_at(self.axis_angle(i), r))
            .collect()
    }

    /// Polygon vertices for a full stat vector against a shared scale.
    #[must_use]
    pub fn polygon(&self, values: &[f64], max: f64) -> Vec<Point> {
        (0..self.axes)
            .map(|i| self.axis_point(i, values.get(i).copied().unwrap_or(0.0), max))
            .collect()
    }
}
