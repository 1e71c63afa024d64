//! Per-frame particle motion and link shading.
//!
//! The functions here are pure: they take a particle (or a distance) and the
//! read-only canvas bounds and compute the next state. All randomness happens
//! when the store is seeded, so motion is deterministic from then on.

use crate::types::*;

/// Advances one coordinate by its velocity, reflecting off `[0, extent]`.
///
/// An overshoot past a wall is mirrored back inside and the velocity is negated.
/// Velocities larger than the extent itself (tiny canvases) are kept inside by a
/// final clamp.
fn reflect_axis(position: f32, velocity: f32, extent: f32) -> (f32, f32) {
    let next = position + velocity;
    let (next, velocity) = if next < 0.0 {
        (-next, -velocity)
    } else if next > extent {
        (2.0 * extent - next, -velocity)
    } else {
        (next, velocity)
    };
    (next.clamp(0.0, extent), velocity)
}

/// Advances `particle` by its velocity within `bounds`.
///
/// Each axis is reflected independently: a particle hitting a corner flips both
/// velocity components in the same step.
pub fn step_particle(particle: &mut Particle, bounds: CanvasBounds) {
    let (x, dx) = reflect_axis(particle.position.0, particle.velocity.0, bounds.width);
    let (y, dy) = reflect_axis(particle.position.1, particle.velocity.1, bounds.height);
    particle.position = (x, y);
    particle.velocity = (dx, dy);
}

/// Opacity of the link between two particles `distance` apart.
///
/// Falls linearly from `base_opacity` at distance 0 to 0 at `threshold`, and is
/// 0 beyond it.
pub fn link_opacity(distance: f32, threshold: f32, base_opacity: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    base_opacity * (1.0 - distance.max(0.0) / threshold)
}
