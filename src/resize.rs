//! Viewport-size tracking for the hero canvas.
//!
//! The reactor is fed the hero viewport every frame and reports when the
//! particle population has to be regenerated for a new extent. With a non-zero
//! settle time it waits until the size has stopped changing, so a continuous
//! drag-resize produces one reseed instead of one per frame.

use crate::types::CanvasBounds;

/// Decides when a viewport change should reseed the particle store.
#[derive(Debug, Clone)]
pub struct ResizeReactor {
    current: CanvasBounds,
    pending: Option<(CanvasBounds, f64)>,
    settle_secs: f64,
    attached: bool,
    reseeds: u64,
}

impl ResizeReactor {
    /// Creates a reactor for a canvas already seeded at `initial`.
    pub fn new(initial: CanvasBounds, settle_secs: f64) -> Self {
        Self {
            current: initial,
            pending: None,
            settle_secs: settle_secs.max(0.0),
            attached: true,
            reseeds: 0,
        }
    }

    /// Feeds the viewport observed at time `now` (seconds).
    ///
    /// Returns the bounds to reseed with when a resize should be applied now.
    /// Always returns `None` once detached.
    pub fn observe(&mut self, viewport: CanvasBounds, now: f64) -> Option<CanvasBounds> {
        if !self.attached {
            return None;
        }

        if viewport == self.current {
            // Resized and came back before settling
            self.pending = None;
            return None;
        }

        if self.settle_secs <= 0.0 {
            return Some(self.apply(viewport));
        }

        match self.pending {
            Some((bounds, deadline)) if bounds == viewport => {
                if now >= deadline {
                    self.pending = None;
                    return Some(self.apply(viewport));
                }
            }
            _ => {
                self.pending = Some((viewport, now + self.settle_secs));
            }
        }
        None
    }

    /// Stops reacting. Later observations are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
        self.pending = None;
    }

    /// False after [`ResizeReactor::detach`].
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Bounds of the most recent reseed (or the initial bounds).
    pub fn current(&self) -> CanvasBounds {
        self.current
    }

    /// True while a change is waiting for the settle period to elapse.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of reseeds reported so far.
    pub fn reseed_count(&self) -> u64 {
        self.reseeds
    }

    fn apply(&mut self, viewport: CanvasBounds) -> CanvasBounds {
        log::debug!(
            "Viewport changed from {}x{} to {}x{}",
            self.current.width,
            self.current.height,
            viewport.width,
            viewport.height
        );
        self.current = viewport;
        self.reseeds += 1;
        viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_viewport_does_nothing() {
        let bounds = CanvasBounds::new(800.0, 600.0);
        let mut reactor = ResizeReactor::new(bounds, 0.0);
        for frame in 0..10 {
            assert_eq!(reactor.observe(bounds, frame as f64 / 60.0), None);
        }
        assert_eq!(reactor.reseed_count(), 0);
    }

    #[test]
    fn test_immediate_mode_reseeds_once_per_change() {
        let mut reactor = ResizeReactor::new(CanvasBounds::new(800.0, 600.0), 0.0);
        let larger = CanvasBounds::new(1024.0, 768.0);

        assert_eq!(reactor.observe(larger, 0.0), Some(larger));
        assert_eq!(reactor.observe(larger, 0.1), None);
        assert_eq!(reactor.current(), larger);
        assert_eq!(reactor.reseed_count(), 1);
    }

    #[test]
    fn test_settle_time_collapses_a_drag_resize() {
        let mut reactor = ResizeReactor::new(CanvasBounds::new(800.0, 600.0), 0.2);
        let mut reseeds = Vec::new();

        // Window dragged wider over ten frames
        for step in 1..=10 {
            let now = step as f64 * 0.016;
            let viewport = CanvasBounds::new(800.0 + step as f32 * 10.0, 600.0);
            if let Some(bounds) = reactor.observe(viewport, now) {
                reseeds.push(bounds);
            }
        }
        assert!(reseeds.is_empty());
        assert!(reactor.has_pending());

        let settled = CanvasBounds::new(900.0, 600.0);
        assert_eq!(reactor.observe(settled, 0.3), None);
        assert_eq!(reactor.observe(settled, 0.37), Some(settled));
        assert_eq!(reactor.reseed_count(), 1);
        assert!(!reactor.has_pending());
    }

    #[test]
    fn test_returning_to_original_size_cancels_pending() {
        let original = CanvasBounds::new(800.0, 600.0);
        let mut reactor = ResizeReactor::new(original, 0.5);
        assert_eq!(reactor.observe(CanvasBounds::new(700.0, 600.0), 0.0), None);
        assert!(reactor.has_pending());
        assert_eq!(reactor.observe(original, 0.1), None);
        assert!(!reactor.has_pending());
        assert_eq!(reactor.observe(original, 1.0), None);
        assert_eq!(reactor.reseed_count(), 0);
    }

    #[test]
    fn test_detached_reactor_ignores_changes() {
        let mut reactor = ResizeReactor::new(CanvasBounds::new(800.0, 600.0), 0.0);
        reactor.detach();
        assert!(!reactor.is_attached());
        assert_eq!(reactor.observe(CanvasBounds::new(10.0, 10.0), 0.0), None);
        assert_eq!(reactor.reseed_count(), 0);
    }
}
