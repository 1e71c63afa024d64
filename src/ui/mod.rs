//! User interface of the portfolio page.
//!
//! This module contains the main application struct, the eframe integration,
//! the navigation bar and the page sections.
//!
//! # Module Organization
//!
//! - `state` - Persisted settings and session state of the PortfolioApp
//! - `hero` - Landing section with the particle background
//! - `sections` - Content sections and the reveal wrapper

mod hero;
mod sections;
mod state;

pub use hero::HeroView;
pub use state::{PortfolioApp, Section, STORAGE_KEY};

use eframe::egui;

/// Whether the host prefers a dark colour scheme.
///
/// Only the browser exposes this; native builds start in light mode.
pub(crate) fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

impl eframe::App for PortfolioApp {
    /// Persist user settings between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(STORAGE_KEY, json);
            }
            Err(err) => {
                log::warn!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// Draws the navigation bar and the scrolling page, advances the contact
    /// form and keeps repainting while reveals are still in motion.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.visuals());

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            self.draw_nav_bar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::ZERO))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_page(ui);
                    });
            });

        let now = ctx.input(|i| i.time);
        self.contact.tick(now);
        if self.reveals.is_animating(now) || self.contact.is_busy() {
            ctx.request_repaint();
        }

        self.frame_counter += 1;
    }
}

impl PortfolioApp {
    fn draw_nav_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let name = self
                .content
                .as_ref()
                .map_or("Portfolio", |content| content.profile.name.as_str());
            if ui.add(egui::Button::new(egui::RichText::new(name).strong()).frame(false)).clicked() {
                self.scroll_target = Some(Section::Hero);
            }
            ui.separator();

            for section in Section::ALL.into_iter().skip(1) {
                if ui.add(egui::Button::new(section.label()).frame(false)).clicked() {
                    self.scroll_target = Some(section);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = if self.dark_mode { "Light mode" } else { "Dark mode" };
                if ui.button(theme).clicked() {
                    self.dark_mode = !self.dark_mode;
                    log::debug!("Theme switched, dark mode: {}", self.dark_mode);
                }

                let mut animated = self.animated_background;
                if ui.checkbox(&mut animated, "Animated background").changed() {
                    self.set_animated_background(animated);
                }
            });
        });
    }
}
