//! Frame driver for the particle background.
//!
//! A [`ParticleAnimator`] owns the particle store of one hero view. Each call to
//! [`ParticleAnimator::frame`] clears the surface, draws every particle and its
//! links to nearby particles, steps the particle, and finally asks the host
//! scheduler for another frame. The [`AnimationHandle`] returned by
//! [`ParticleAnimator::start`] stops the loop; once cancelled, no frame touches
//! the surface or the scheduler again.
//!
//! Drawing and scheduling go through the [`DrawSurface`] and [`FrameScheduler`]
//! traits so the loop can run against egui in the app and against recorders in
//! tests.

use crate::config::AnimatorConfig;
use crate::particles::ParticleStore;
use crate::simulation::{link_opacity, step_particle};
use crate::types::*;
use eframe::egui;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Failures of the particle background. None of them are fatal to the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimatorError {
    /// The host could not provide something to draw on
    #[error("drawing surface unavailable: {0}")]
    ContextUnavailable(String),
    /// A frame was requested after the loop was cancelled
    #[error("animation loop has been cancelled")]
    Cancelled,
}

/// Something the render loop can paint on. Coordinates are canvas-relative.
pub trait DrawSurface {
    /// Erases the previous frame.
    fn clear(&mut self);
    /// Paints a filled circle.
    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: ParticleColor);
    /// Paints a straight line segment.
    fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: ParticleColor);
}

/// The host's "run again before the next repaint" primitive.
pub trait FrameScheduler {
    /// Requests one more frame.
    fn request_frame(&self);
}

impl FrameScheduler for egui::Context {
    fn request_frame(&self) {
        self.request_repaint();
    }
}

#[derive(Debug, Default)]
struct HandleState {
    cancelled: Cell<bool>,
    frames: Cell<u64>,
    cancel_calls: Cell<u32>,
}

/// Cancellation handle of a running particle loop.
///
/// Clones share state, so the view that owns the loop can keep one copy and
/// cancel it while the animator holds another.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    state: Rc<HandleState>,
}

impl AnimationHandle {
    /// Stops the loop. Returns `true` only for the call that actually cancelled it.
    pub fn cancel(&self) -> bool {
        self.state.cancel_calls.set(self.state.cancel_calls.get() + 1);
        !self.state.cancelled.replace(true)
    }

    /// True once [`AnimationHandle::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }

    /// Frames painted so far.
    pub fn frames_rendered(&self) -> u64 {
        self.state.frames.get()
    }

    /// How many times `cancel` has been called, including no-op repeats.
    pub fn cancel_calls(&self) -> u32 {
        self.state.cancel_calls.get()
    }

    fn record_frame(&self) {
        self.state.frames.set(self.state.frames.get() + 1);
    }
}

/// Particle population plus the loop that animates it.
#[derive(Debug)]
pub struct ParticleAnimator {
    config: AnimatorConfig,
    store: ParticleStore,
    bounds: CanvasBounds,
    rng: fastrand::Rng,
    handle: AnimationHandle,
}

impl ParticleAnimator {
    /// Seeds a population for `bounds` and returns the animator with its cancellation handle.
    pub fn start(config: AnimatorConfig, bounds: CanvasBounds, seed: u64) -> (Self, AnimationHandle) {
        let handle = AnimationHandle::default();
        let mut animator = Self {
            config: config.sanitized(),
            store: ParticleStore::new(),
            bounds,
            rng: fastrand::Rng::with_seed(seed),
            handle: handle.clone(),
        };
        animator.reseed(bounds);
        (animator, handle)
    }

    /// Resizes the canvas and replaces every particle with a fresh draw.
    ///
    /// Returns the new particle count. Does nothing after cancellation.
    pub fn reseed(&mut self, bounds: CanvasBounds) -> usize {
        if self.handle.is_cancelled() {
            return 0;
        }
        self.bounds = bounds;
        let count = self.store.seed(bounds, &self.config, &mut self.rng);
        log::debug!(
            "Seeded {} particles for {}x{} canvas",
            count,
            bounds.width,
            bounds.height
        );
        count
    }

    /// Renders one frame and schedules the next.
    ///
    /// Particles are visited in store order. Each is drawn, linked to every other
    /// particle closer than the link threshold, then stepped, so particles earlier
    /// in the store are linked from their already-advanced positions.
    pub fn frame<S, F>(&mut self, surface: &mut S, scheduler: &F) -> Result<(), AnimatorError>
    where
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.handle.is_cancelled() {
            return Err(AnimatorError::Cancelled);
        }

        surface.clear();

        let bounds = self.bounds;
        let threshold = self.config.link_threshold;
        let base_opacity = self.config.link_base_opacity;
        let link_width = self.config.link_width;
        let (r, g, b) = self.config.rgb;
        let particles = self.store.particles_mut();

        for i in 0..particles.len() {
            let current = &particles[i];
            surface.fill_circle(current.position, current.radius, current.color);

            for (j, other) in particles.iter().enumerate() {
                if i == j {
                    continue;
                }
                let distance = current.distance_to(other);
                if distance < threshold {
                    let opacity = link_opacity(distance, threshold, base_opacity);
                    surface.line(
                        current.position,
                        other.position,
                        link_width,
                        ParticleColor::new(r, g, b, opacity),
                    );
                }
            }

            step_particle(&mut particles[i], bounds);
        }

        self.handle.record_frame();
        scheduler.request_frame();
        Ok(())
    }

    /// Paints the current positions without stepping or scheduling.
    ///
    /// Used when the host lays out the same frame more than once, so the
    /// population advances exactly once per displayed frame.
    pub fn redraw<S>(&self, surface: &mut S) -> Result<(), AnimatorError>
    where
        S: DrawSurface + ?Sized,
    {
        if self.handle.is_cancelled() {
            return Err(AnimatorError::Cancelled);
        }

        surface.clear();
        let threshold = self.config.link_threshold;
        let (r, g, b) = self.config.rgb;
        let particles = self.store.particles();
        for (i, current) in particles.iter().enumerate() {
            surface.fill_circle(current.position, current.radius, current.color);
            for (j, other) in particles.iter().enumerate() {
                if i == j {
                    continue;
                }
                let distance = current.distance_to(other);
                if distance < threshold {
                    let opacity = link_opacity(distance, threshold, self.config.link_base_opacity);
                    surface.line(
                        current.position,
                        other.position,
                        self.config.link_width,
                        ParticleColor::new(r, g, b, opacity),
                    );
                }
            }
        }
        Ok(())
    }

    /// The shared cancellation handle.
    pub fn handle(&self) -> &AnimationHandle {
        &self.handle
    }

    /// Current population.
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Canvas extent the population was seeded for.
    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Active configuration.
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded drawing call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Clear,
        Circle {
            center: (f32, f32),
            radius: f32,
            color: ParticleColor,
        },
        Line {
            from: (f32, f32),
            to: (f32, f32),
            width: f32,
            color: ParticleColor,
        },
    }

    /// Surface that records every call.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<DrawOp>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(DrawOp::Clear);
        }

        fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: ParticleColor) {
            self.ops.push(DrawOp::Circle { center, radius, color });
        }

        fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: ParticleColor) {
            self.ops.push(DrawOp::Line { from, to, width, color });
        }
    }

    /// Scheduler that counts frame requests.
    #[derive(Debug, Default)]
    pub struct CountingScheduler {
        pub requests: Cell<u32>,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn still_particle(position: (f32, f32)) -> Particle {
        Particle::new(position, (0.0, 0.0), 2.0, ParticleColor::new(65, 105, 225, 0.5))
    }

    fn animator_with(particles: Vec<Particle>) -> (ParticleAnimator, AnimationHandle) {
        let config = AnimatorConfig::default();
        let (mut animator, handle) = ParticleAnimator::start(config, CanvasBounds::new(400.0, 300.0), 1);
        animator.store.replace_all(particles);
        (animator, handle)
    }

    #[test]
    fn test_start_seeds_population() {
        let (animator, handle) =
            ParticleAnimator::start(AnimatorConfig::default(), CanvasBounds::new(800.0, 600.0), 5);
        assert_eq!(animator.store().len(), 24);
        assert!(!handle.is_cancelled());
        assert_eq!(handle.frames_rendered(), 0);
    }

    #[test]
    fn test_frame_draws_clears_links_and_reschedules() {
        let (mut animator, handle) =
            animator_with(vec![still_particle((0.0, 0.0)), still_particle((50.0, 0.0))]);
        let mut surface = RecordingSurface::default();
        let scheduler = CountingScheduler::default();

        animator.frame(&mut surface, &scheduler).unwrap();

        assert_eq!(surface.ops[0], DrawOp::Clear);
        let circles = surface.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count();
        let lines: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { color, width, .. } => Some((*color, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(circles, 2);
        // Each particle links to the other
        assert_eq!(lines.len(), 2);
        for (color, width) in lines {
            assert!((color.alpha - 0.1).abs() < 1e-6);
            assert_eq!(width, 0.5);
            assert_eq!((color.r, color.g, color.b), (65, 105, 225));
        }
        assert_eq!(scheduler.requests.get(), 1);
        assert_eq!(handle.frames_rendered(), 1);
    }

    #[test]
    fn test_no_link_at_or_beyond_threshold() {
        let (mut animator, _handle) =
            animator_with(vec![still_particle((0.0, 0.0)), still_particle((100.0, 0.0))]);
        let mut surface = RecordingSurface::default();
        animator.frame(&mut surface, &CountingScheduler::default()).unwrap();
        assert!(!surface.ops.iter().any(|op| matches!(op, DrawOp::Line { .. })));
    }

    #[test]
    fn test_draw_order_follows_store_order_and_steps_after_drawing() {
        let moving = Particle::new((10.0, 10.0), (1.0, 0.0), 2.0, ParticleColor::new(1, 2, 3, 0.5));
        let (mut animator, _handle) = animator_with(vec![moving, still_particle((200.0, 200.0))]);
        let mut surface = RecordingSurface::default();
        animator.frame(&mut surface, &CountingScheduler::default()).unwrap();

        let centers: Vec<_> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(centers, vec![(10.0, 10.0), (200.0, 200.0)]);
        assert_eq!(animator.store().particles()[0].position, (11.0, 10.0));
    }

    #[test]
    fn test_empty_store_draws_nothing_but_clear() {
        let (mut animator, _handle) =
            ParticleAnimator::start(AnimatorConfig::default(), CanvasBounds::new(0.0, 0.0), 2);
        let mut surface = RecordingSurface::default();
        animator.frame(&mut surface, &CountingScheduler::default()).unwrap();
        assert_eq!(surface.ops, vec![DrawOp::Clear]);
    }

    #[test]
    fn test_cancel_stops_all_further_frames() {
        let (mut animator, handle) =
            ParticleAnimator::start(AnimatorConfig::default(), CanvasBounds::new(800.0, 600.0), 3);
        let mut surface = RecordingSurface::default();
        let scheduler = CountingScheduler::default();

        animator.frame(&mut surface, &scheduler).unwrap();
        animator.frame(&mut surface, &scheduler).unwrap();
        assert_eq!(handle.frames_rendered(), 2);

        assert!(handle.cancel());
        let writes_before = surface.ops.len();
        for _ in 0..5 {
            assert_eq!(animator.frame(&mut surface, &scheduler), Err(AnimatorError::Cancelled));
        }

        assert_eq!(surface.ops.len(), writes_before);
        assert_eq!(scheduler.requests.get(), 2);
        assert_eq!(handle.frames_rendered(), 2);
        assert_eq!(animator.reseed(CanvasBounds::new(100.0, 100.0)), 0);
    }

    #[test]
    fn test_cancel_takes_effect_only_once() {
        let (animator, handle) =
            ParticleAnimator::start(AnimatorConfig::default(), CanvasBounds::new(800.0, 600.0), 3);
        assert!(animator.handle().cancel());
        assert!(!handle.cancel());
        assert!(!handle.cancel());
        assert_eq!(handle.cancel_calls(), 3);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_reseed_replaces_every_particle() {
        let (mut animator, _handle) =
            ParticleAnimator::start(AnimatorConfig::default(), CanvasBounds::new(800.0, 600.0), 11);
        let before: Vec<_> = animator.store().particles().to_vec();

        let count = animator.reseed(CanvasBounds::new(1000.0, 700.0));

        assert_eq!(count, 35);
        assert_eq!(animator.bounds(), CanvasBounds::new(1000.0, 700.0));
        for p in animator.store().particles() {
            assert!(!before.iter().any(|old| old.position == p.position));
        }
    }

    #[test]
    fn test_long_run_stays_in_bounds() {
        let bounds = CanvasBounds::new(640.0, 480.0);
        let (mut animator, _handle) = ParticleAnimator::start(AnimatorConfig::default(), bounds, 21);
        let scheduler = CountingScheduler::default();
        for _ in 0..2_000 {
            let mut surface = RecordingSurface::default();
            animator.frame(&mut surface, &scheduler).unwrap();
        }
        for p in animator.store().particles() {
            assert!(bounds.contains(p.position.0, p.position.1));
        }
    }

    #[test]
    fn test_redraw_paints_without_stepping_or_scheduling() {
        let moving = Particle::new((10.0, 10.0), (1.0, 0.0), 2.0, ParticleColor::new(1, 2, 3, 0.5));
        let (animator, handle) = animator_with(vec![moving, still_particle((40.0, 10.0))]);
        let mut surface = RecordingSurface::default();

        animator.redraw(&mut surface).unwrap();

        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(surface.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count(), 2);
        assert_eq!(animator.store().particles()[0].position, (10.0, 10.0));
        assert_eq!(handle.frames_rendered(), 0);

        handle.cancel();
        assert_eq!(animator.redraw(&mut surface), Err(AnimatorError::Cancelled));
    }

    #[test]
    fn test_start_keeps_cap_for_oversized_config() {
        let config = AnimatorConfig {
            cap: 100_000,
            density: 1.0,
            ..AnimatorConfig::default()
        };
        let (animator, _handle) = ParticleAnimator::start(config, CanvasBounds::new(1200.0, 800.0), 4);
        assert_eq!(animator.store().len(), crate::constants::PARTICLE_CAP);
        assert_eq!(animator.config().cap, crate::constants::PARTICLE_CAP);
    }
}
