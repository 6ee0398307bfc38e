//! # Color
//!
//! Straight-alpha RGBA ink color handed to the host alongside each outline.
//! The engine itself never blends - one solid fill per stroke.

/// A straight-alpha RGBA color with finite `f32` components.
///
/// Construction rejects NaN and infinities so downstream paint code never has
/// to re-check.
#[derive(Copy, Clone, PartialEq, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Color([f32; 4]);

impl Color {
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Build a color from components, in the order `[r, g, b, a]`.
    pub fn new(components: [f32; 4]) -> Result<Self, ColorError> {
        if components.iter().all(|c| c.is_finite()) {
            Ok(Self(components))
        } else {
            Err(ColorError::NotFinite)
        }
    }
    #[must_use]
    pub fn components(self) -> [f32; 4] {
        self.0
    }
    #[must_use]
    pub fn alpha(self) -> f32 {
        self.0[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorError {
    #[error("color component is not finite")]
    NotFinite,
}
