//! # Config
//!
//! Per-canvas tunables. These are instance state rather than crate-level
//! constants so two canvases can disagree about pen feel, and so tests can
//! pin exact values.

use crate::color::Color;

pub const DEFAULT_RADIUS_SCALE: f32 = 4.0;
pub const DEFAULT_ERASE_HIT_HALF_WIDTH: f32 = 20.0;

/// Tunables owned by a [`crate::canvas::Canvas`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    radius_scale: f32,
    erase_hit_half_width: f32,
    ink: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius_scale: DEFAULT_RADIUS_SCALE,
            erase_hit_half_width: DEFAULT_ERASE_HIT_HALF_WIDTH,
            ink: Color::BLACK,
        }
    }
}

impl Settings {
    /// Build settings, rejecting values that would poison the geometry
    /// (non-finite or negative scales never make sense).
    pub fn new(
        radius_scale: f32,
        erase_hit_half_width: f32,
        ink: Color,
    ) -> Result<Self, SettingsError> {
        if !radius_scale.is_finite() || radius_scale < 0.0 {
            return Err(SettingsError::RadiusScale);
        }
        if !erase_hit_half_width.is_finite() || erase_hit_half_width < 0.0 {
            return Err(SettingsError::EraseHitHalfWidth);
        }
        Ok(Self {
            radius_scale,
            erase_hit_half_width,
            ink,
        })
    }
    /// Pressure-to-half-width mapping shared by outline construction and
    /// endpoint simplification. Pressure is deliberately not clamped - the
    /// host owns calibration, and out-of-range values pass straight through.
    #[must_use]
    pub fn radius_for(&self, pressure: f32) -> f32 {
        pressure * self.radius_scale
    }
    #[must_use]
    pub fn radius_scale(&self) -> f32 {
        self.radius_scale
    }
    #[must_use]
    pub fn erase_hit_half_width(&self) -> f32 {
        self.erase_hit_half_width
    }
    #[must_use]
    pub fn ink(&self) -> Color {
        self.ink
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsError {
    #[error("radius scale must be finite and non-negative")]
    RadiusScale,
    #[error("erase half-width must be finite and non-negative")]
    EraseHitHalfWidth,
}
