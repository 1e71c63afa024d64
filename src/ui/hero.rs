//! Hero view: the landing section and its particle background.
//!
//! A [`HeroView`] is the lifecycle scope of one particle loop. Mounting seeds a
//! population for the current viewport and starts the loop; every frame the
//! view feeds the viewport to its resize reactor, reseeds on change and renders
//! through an egui painter; tearing down cancels the loop and detaches the
//! reactor synchronously.

use crate::config::AnimatorConfig;
use crate::render_loop::{AnimationHandle, AnimatorError, DrawSurface, FrameScheduler, ParticleAnimator};
use crate::resize::ResizeReactor;
use crate::types::*;
use eframe::egui;

/// Seed used when the OS cannot provide randomness.
const FALLBACK_SEED: u64 = 0x5EED_0F_DA7A;

fn entropy_seed() -> u64 {
    getrandom::u64().unwrap_or_else(|err| {
        log::warn!("OS randomness unavailable ({err}), using a fixed particle seed");
        FALLBACK_SEED
    })
}

fn to_color32(color: ParticleColor) -> egui::Color32 {
    let alpha = (color.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

/// [`DrawSurface`] backed by an egui painter clipped to the hero rect.
pub struct PainterSurface {
    painter: egui::Painter,
    origin: egui::Pos2,
}

impl PainterSurface {
    /// Wraps `painter` for drawing inside `rect`.
    ///
    /// Fails when the painter is hidden or the rect is not finite.
    pub fn acquire(painter: egui::Painter, rect: egui::Rect) -> Result<Self, AnimatorError> {
        if !rect.is_finite() {
            return Err(AnimatorError::ContextUnavailable(format!("hero rect is not finite: {rect:?}")));
        }
        if !painter.is_visible() {
            return Err(AnimatorError::ContextUnavailable("painter is hidden".into()));
        }
        Ok(Self {
            painter: painter.with_clip_rect(rect),
            origin: rect.min,
        })
    }

    fn at(&self, point: (f32, f32)) -> egui::Pos2 {
        self.origin + egui::vec2(point.0, point.1)
    }
}

impl DrawSurface for PainterSurface {
    // egui starts every frame from an empty canvas
    fn clear(&mut self) {}

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: ParticleColor) {
        self.painter.circle_filled(self.at(center), radius, to_color32(color));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: ParticleColor) {
        self.painter
            .line_segment([self.at(from), self.at(to)], egui::Stroke::new(width, to_color32(color)));
    }
}

/// Lifecycle owner of one particle background.
#[derive(Debug)]
pub struct HeroView {
    animator: Option<ParticleAnimator>,
    handle: Option<AnimationHandle>,
    reactor: Option<ResizeReactor>,
    surface_warned: bool,
    last_frame_nr: Option<u64>,
}

impl HeroView {
    /// Mounts a view for `bounds`: seeds the particles and starts the loop.
    pub fn mount(config: AnimatorConfig, bounds: CanvasBounds) -> Self {
        let seed = config.seed.unwrap_or_else(entropy_seed);
        let settle = config.resize_settle_secs;
        let (animator, handle) = ParticleAnimator::start(config, bounds, seed);
        log::info!(
            "Hero mounted with {} particles ({}x{})",
            animator.store().len(),
            bounds.width,
            bounds.height
        );
        Self {
            animator: Some(animator),
            handle: Some(handle),
            reactor: Some(ResizeReactor::new(bounds, settle)),
            surface_warned: false,
            last_frame_nr: None,
        }
    }

    /// True between [`HeroView::mount`] and [`HeroView::teardown`].
    pub fn is_mounted(&self) -> bool {
        self.animator.is_some()
    }

    /// Cancels the loop and detaches the resize reactor. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.cancel() {
                log::info!("Hero torn down after {} frames", handle.frames_rendered());
            }
        }
        if let Some(mut reactor) = self.reactor.take() {
            reactor.detach();
        }
        self.animator = None;
    }

    /// Cancellation handle of the running loop, if mounted.
    pub fn handle(&self) -> Option<&AnimationHandle> {
        self.handle.as_ref()
    }

    /// The running animator, if mounted.
    pub fn animator(&self) -> Option<&ParticleAnimator> {
        self.animator.as_ref()
    }

    /// Runs one frame: applies any pending resize, then renders and reschedules.
    ///
    /// Returns [`AnimatorError::Cancelled`] without touching `surface` after teardown.
    pub fn frame<S, F>(
        &mut self,
        viewport: CanvasBounds,
        now: f64,
        surface: &mut S,
        scheduler: &F,
    ) -> Result<(), AnimatorError>
    where
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let (Some(animator), Some(reactor)) = (self.animator.as_mut(), self.reactor.as_mut()) else {
            return Err(AnimatorError::Cancelled);
        };
        if let Some(bounds) = reactor.observe(viewport, now) {
            animator.reseed(bounds);
        }
        animator.frame(surface, scheduler)
    }

    /// Runs [`HeroView::frame`] at most once per host frame `frame_nr`.
    ///
    /// egui may lay out one frame in several passes. Later passes of the same
    /// frame repaint the current positions without stepping or rescheduling.
    pub fn frame_for<S, F>(
        &mut self,
        frame_nr: u64,
        viewport: CanvasBounds,
        now: f64,
        surface: &mut S,
        scheduler: &F,
    ) -> Result<(), AnimatorError>
    where
        S: DrawSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.last_frame_nr == Some(frame_nr) {
            return match &self.animator {
                Some(animator) => animator.redraw(surface),
                None => Err(AnimatorError::Cancelled),
            };
        }
        self.last_frame_nr = Some(frame_nr);
        self.frame(viewport, now, surface, scheduler)
    }

    /// Paints the background into `rect` of `ui`.
    ///
    /// A missing drawing surface degrades to a static background and is logged once.
    pub fn show(&mut self, ui: &egui::Ui, rect: egui::Rect) {
        let viewport = CanvasBounds::new(rect.width(), rect.height());
        let now = ui.input(|i| i.time);
        match PainterSurface::acquire(ui.painter().clone(), rect) {
            Ok(mut surface) => {
                let frame_nr = ui.ctx().cumulative_frame_nr();
                if let Err(err) = self.frame_for(frame_nr, viewport, now, &mut surface, ui.ctx()) {
                    log::debug!("Skipped hero frame: {err}");
                }
            }
            Err(err) => {
                if !self.surface_warned {
                    log::warn!("Particle background disabled: {err}");
                    self.surface_warned = true;
                }
            }
        }
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.teardown();
    }
}
