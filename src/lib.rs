//! # Portfolio Site
//!
//! A single-page personal portfolio with an animated particle background and
//! scroll-triggered reveal transitions.
//!
//! ## Features
//! - Particle field behind the hero: drifting dots that bounce off the canvas
//!   edges, joined by faint links when close together
//! - Reseeding of the particle field whenever the viewport changes size
//! - Cancellable render loop tied to the lifetime of the hero view
//! - Fade and slide reveals for content blocks as they scroll into view
//! - Project filter, rotating skill cloud, skill levels, blog reader and a
//!   validated contact form
//! - Light and dark themes with persisted user settings

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod particles;
pub mod render_loop;
pub mod resize;
pub mod reveal;
pub mod simulation;
pub mod skill_cloud;
pub mod typewriter;
mod types;
mod ui;

// Re-export public types and functions
pub use config::{AnimatorConfig, RevealConfig, ViewportPolicy};
pub use particles::{particle_count, ParticleStore};
pub use render_loop::{AnimationHandle, AnimatorError, DrawSurface, FrameScheduler, ParticleAnimator};
pub use resize::ResizeReactor;
pub use reveal::{RevealChoreographer, RevealState, Transition};
pub use simulation::{link_opacity, step_particle};
pub use types::*;
pub use ui::{HeroView, PortfolioApp, Section};

/// Runs the portfolio in a native window.
///
/// This function initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use portfolio_site::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Portfolio",
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_default() {
        let app = PortfolioApp::default();
        assert!(!app.dark_mode);
        assert!(app.animated_background);
        assert!(app.hero.is_none());
        assert!(app.content.is_some());
    }

    #[test]
    fn test_default_population_for_common_viewport() {
        let config = AnimatorConfig::default();
        let count = particle_count(CanvasBounds::new(1920.0, 1080.0), config.cap, config.density);
        assert_eq!(count, 50);
    }
}
