//! Tunable settings for the particle background and reveal transitions.
//!
//! Both structs are persisted with the rest of the application state, so every
//! field has a default and unknown or missing keys are tolerated.

use crate::constants;
use serde::{Deserialize, Serialize};

/// Settings of the ambient particle background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Maximum number of particles
    pub cap: usize,
    /// Canvas area per particle
    pub density: f32,
    /// Distance under which two particles are linked
    pub link_threshold: f32,
    /// Opacity of a zero-length link
    pub link_base_opacity: f32,
    /// Stroke width of links
    pub link_width: f32,
    /// Radius range as (min, max)
    pub radius_range: (f32, f32),
    /// Largest absolute velocity component
    pub max_speed: f32,
    /// Alpha range of particle colours as (min, max)
    pub alpha_range: (f32, f32),
    /// RGB hue shared by particles and links
    pub rgb: (u8, u8, u8),
    /// Quiet period after the last size change before reseeding; 0 reseeds immediately
    pub resize_settle_secs: f64,
    /// Fixed seed for reproducible layouts; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            cap: constants::PARTICLE_CAP,
            density: constants::PARTICLE_DENSITY,
            link_threshold: constants::LINK_THRESHOLD,
            link_base_opacity: constants::LINK_BASE_OPACITY,
            link_width: constants::LINK_WIDTH,
            radius_range: (constants::PARTICLE_RADIUS_MIN, constants::PARTICLE_RADIUS_MAX),
            max_speed: constants::PARTICLE_MAX_SPEED,
            alpha_range: (constants::PARTICLE_ALPHA_MIN, constants::PARTICLE_ALPHA_MAX),
            rgb: constants::PARTICLE_RGB,
            resize_settle_secs: 0.0,
            seed: None,
        }
    }
}

impl AnimatorConfig {
    /// Returns the settings with every value pulled into a safe range.
    ///
    /// The link scan is quadratic in the particle count, so `cap` never exceeds
    /// [`constants::PARTICLE_CAP`] and `density` never drops below
    /// [`constants::PARTICLE_DENSITY_MIN`], whatever a saved state says.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.cap = self.cap.min(constants::PARTICLE_CAP);
        self.density = if self.density.is_finite() {
            self.density.max(constants::PARTICLE_DENSITY_MIN)
        } else {
            defaults.density
        };
        if !(self.link_threshold.is_finite() && self.link_threshold >= 0.0) {
            self.link_threshold = defaults.link_threshold;
        }
        if !self.link_base_opacity.is_finite() {
            self.link_base_opacity = defaults.link_base_opacity;
        }
        self.link_base_opacity = self.link_base_opacity.clamp(0.0, 1.0);
        if !(self.link_width.is_finite() && self.link_width >= 0.0) {
            self.link_width = defaults.link_width;
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            self.max_speed = defaults.max_speed;
        }
        self.radius_range = ordered_range(self.radius_range, defaults.radius_range, (0.0, f32::MAX));
        self.alpha_range = ordered_range(self.alpha_range, defaults.alpha_range, (0.0, 1.0));
        if !(self.resize_settle_secs.is_finite() && self.resize_settle_secs >= 0.0) {
            self.resize_settle_secs = defaults.resize_settle_secs;
        }
        self
    }
}

fn ordered_range(range: (f32, f32), fallback: (f32, f32), limits: (f32, f32)) -> (f32, f32) {
    let (lo, hi) = range;
    if !(lo.is_finite() && hi.is_finite()) {
        return fallback;
    }
    let lo = lo.clamp(limits.0, limits.1);
    let hi = hi.clamp(limits.0, limits.1);
    if lo <= hi {
        (lo, hi)
    } else {
        (hi, lo)
    }
}

/// Visibility policy of a reveal: how much must be visible, and whether it plays only once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportPolicy {
    /// Fraction of the element that must be visible, in `0.0..=1.0`
    pub threshold: f32,
    /// When set, a revealed element stays revealed after leaving the viewport
    pub once: bool,
}

impl Default for ViewportPolicy {
    fn default() -> Self {
        Self {
            threshold: constants::REVEAL_THRESHOLD,
            once: true,
        }
    }
}

/// Settings of the scroll-triggered reveal transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visibility policy applied to every registered element
    pub policy: ViewportPolicy,
    /// Transition duration in seconds
    pub duration: f32,
    /// Delay between consecutive siblings in a group, in seconds
    pub stagger: f32,
    /// Slide distance in points
    pub offset: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            policy: ViewportPolicy::default(),
            duration: constants::REVEAL_DURATION,
            stagger: constants::REVEAL_STAGGER,
            offset: constants::REVEAL_OFFSET,
        }
    }
}
