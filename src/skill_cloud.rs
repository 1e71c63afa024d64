//! Rotating ring of skill names shown above the skill cards.
//!
//! Every skill sits on an ellipse at `index * 2π / count`. The whole ring turns
//! slowly and bobs up and down; labels on the far side of the ring are drawn
//! smaller and fainter so the ellipse reads as a ring seen at an angle.

use crate::constants::{SKILL_CLOUD_BOB_AMPLITUDE, SKILL_CLOUD_BOB_SPEED, SKILL_CLOUD_SPIN_SPEED};
use std::f32::consts::TAU;

/// Motion parameters of the cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudMotion {
    /// Ring rotation in radians per second
    pub spin_speed: f32,
    /// Bob frequency in radians per second
    pub bob_speed: f32,
    /// Bob height in points
    pub bob_amplitude: f32,
}

impl Default for CloudMotion {
    fn default() -> Self {
        Self {
            spin_speed: SKILL_CLOUD_SPIN_SPEED,
            bob_speed: SKILL_CLOUD_BOB_SPEED,
            bob_amplitude: SKILL_CLOUD_BOB_AMPLITUDE,
        }
    }
}

/// Where one label sits at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudLabel {
    /// Offset from the cloud centre in points
    pub offset: (f32, f32),
    /// `1.0` at the front of the ring, `0.0` at the back
    pub depth: f32,
}

/// Angle of label `index` out of `count` after the ring has turned by `rotation`.
pub fn ring_angle(index: usize, count: usize, rotation: f32) -> f32 {
    if count == 0 {
        return rotation.rem_euclid(TAU);
    }
    let step = TAU / count as f32;
    (step * index as f32 + rotation).rem_euclid(TAU)
}

/// Positions of `count` labels on an ellipse with radii `radii`, `elapsed` seconds in.
pub fn cloud_layout(count: usize, radii: (f32, f32), elapsed: f64, motion: CloudMotion) -> Vec<CloudLabel> {
    let elapsed = elapsed.max(0.0);
    let rotation = (elapsed * f64::from(motion.spin_speed)).rem_euclid(std::f64::consts::TAU) as f32;
    let bob = motion.bob_amplitude * (elapsed * f64::from(motion.bob_speed)).sin() as f32;
    (0..count)
        .map(|index| {
            let angle = ring_angle(index, count, rotation);
            CloudLabel {
                offset: (radii.0 * angle.cos(), radii.1 * angle.sin() + bob),
                depth: (angle.sin() + 1.0) / 2.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STILL: CloudMotion = CloudMotion {
        spin_speed: 0.0,
        bob_speed: 0.0,
        bob_amplitude: 0.0,
    };

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_labels_are_evenly_spaced() {
        assert!(close(ring_angle(0, 4, 0.0), 0.0));
        assert!(close(ring_angle(1, 4, 0.0), TAU / 4.0));
        assert!(close(ring_angle(3, 4, 0.0), 3.0 * TAU / 4.0));
        // Wraps into [0, 2π)
        assert!(close(ring_angle(3, 4, TAU / 2.0), TAU / 4.0));
    }

    #[test]
    fn test_layout_follows_ellipse() {
        let labels = cloud_layout(4, (200.0, 100.0), 0.0, STILL);
        assert_eq!(labels.len(), 4);
        assert!(close(labels[0].offset.0, 200.0) && close(labels[0].offset.1, 0.0));
        assert!(close(labels[1].offset.0, 0.0) && close(labels[1].offset.1, 100.0));
        assert!(close(labels[2].offset.0, -200.0));
        assert!(close(labels[3].offset.1, -100.0));
        assert!(close(labels[1].depth, 1.0));
        assert!(close(labels[3].depth, 0.0));
    }

    #[test]
    fn test_ring_turns_with_time() {
        let motion = CloudMotion {
            spin_speed: TAU / 4.0,
            ..STILL
        };
        // One second turns a four-label ring by one slot
        let later = cloud_layout(4, (200.0, 100.0), 1.0, motion);
        let start = cloud_layout(4, (200.0, 100.0), 0.0, motion);
        assert!(close(later[0].offset.0, start[1].offset.0));
        assert!(close(later[0].offset.1, start[1].offset.1));
    }

    #[test]
    fn test_bob_moves_every_label_together() {
        let motion = CloudMotion {
            bob_speed: 1.0,
            bob_amplitude: 10.0,
            ..STILL
        };
        let t = std::f64::consts::FRAC_PI_2;
        let still = cloud_layout(3, (50.0, 50.0), t, STILL);
        let bobbing = cloud_layout(3, (50.0, 50.0), t, motion);
        for (a, b) in still.iter().zip(&bobbing) {
            assert!(close(b.offset.1 - a.offset.1, 10.0));
            assert!(close(b.offset.0, a.offset.0));
        }
    }

    #[test]
    fn test_empty_cloud() {
        assert!(cloud_layout(0, (10.0, 10.0), 5.0, CloudMotion::default()).is_empty());
    }
}
