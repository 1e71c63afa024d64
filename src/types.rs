//! Core data types for the ambient particle background.
//!
//! This module defines the plain data shared by the particle store, the
//! simulation step and the render loop: particles, the canvas extent they live
//! in, and their colours.

use serde::{Deserialize, Serialize};

/// A translucent colour: opaque RGB channels plus a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub alpha: f32,
}

impl ParticleColor {
    /// Creates a colour from RGB channels and an alpha in `0.0..=1.0`.
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Returns the same hue with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Extent of the drawing surface the particles live in.
///
/// Particle positions are always relative to the current bounds; a change of
/// bounds invalidates every particle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Surface width in points
    pub width: f32,
    /// Surface height in points
    pub height: f32,
}

impl CanvasBounds {
    /// Creates bounds from a width and height. Negative or non-finite values become zero.
    pub fn new(width: f32, height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// True when the surface covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when `(x, y)` lies inside `[0, width] × [0, height]`.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// One ambient dot of the hero background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Position as (x, y), relative to the canvas origin
    pub position: (f32, f32),
    /// Velocity as (dx, dy) in points per frame
    pub velocity: (f32, f32),
    /// Dot radius, fixed at creation
    pub radius: f32,
    /// Dot colour, fixed at creation
    pub color: ParticleColor,
}

impl Particle {
    /// Creates a new particle.
    pub fn new(position: (f32, f32), velocity: (f32, f32), radius: f32, color: ParticleColor) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Euclidean distance between the centres of two particles.
    pub fn distance_to(&self, other: &Particle) -> f32 {
        let dx = self.position.0 - other.position.0;
        let dy = self.position.1 - other.position.1;
        (dx * dx + dy * dy).sqrt()
    }
}
