//! Application state management structures.
//!
//! This module contains the persisted settings and the per-session view state
//! of the portfolio page: theme, background animation, reveal bookkeeping,
//! section filters and the contact form.

use super::hero::HeroView;
use crate::config::{AnimatorConfig, RevealConfig};
use crate::contact::ContactState;
use crate::content::{PortfolioContent, ProjectFilter, ALL_CATEGORIES};
use crate::reveal::RevealChoreographer;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Storage key of the persisted application state.
pub const STORAGE_KEY: &str = "app_state";

/// Page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Landing view with the particle background
    Hero,
    /// Biography and quick facts
    About,
    /// Project cards
    Projects,
    /// Skill categories
    Skills,
    /// Degree and coursework
    Education,
    /// Work history
    Experience,
    /// Career goals
    Goals,
    /// Articles
    Blog,
    /// Contact form and channels
    Contact,
}

impl Section {
    /// Every section in scroll order.
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Experience,
        Section::Goals,
        Section::Blog,
        Section::Contact,
    ];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Goals => "Goals",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }
}

/// The main application structure: persisted settings plus session state.
///
/// This struct implements the `eframe::App` trait (see the parent module).
/// Only user settings are serialized; content, animation and form state are
/// rebuilt on every start.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioApp {
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Whether the hero shows the animated particle background
    pub animated_background: bool,
    /// Particle background settings
    pub animator: AnimatorConfig,
    /// Reveal transition settings
    pub reveal: RevealConfig,
    /// Last chosen project filter
    pub project_filter: ProjectFilter,
    /// Last chosen blog tab
    pub blog_category: String,
    /// Page content
    #[serde(skip)]
    pub content: Option<PortfolioContent>,
    /// Hero view owning the particle loop
    #[serde(skip)]
    pub hero: Option<HeroView>,
    /// Reveal bookkeeping for every animated element
    #[serde(skip)]
    pub reveals: RevealChoreographer,
    /// Contact form state
    #[serde(skip)]
    pub contact: ContactState,
    /// Section the navigation bar asked to scroll to
    #[serde(skip)]
    pub scroll_target: Option<Section>,
    /// Title of the blog post open in the reader
    #[serde(skip)]
    pub open_post: Option<String>,
    /// Frame counter, mostly useful for tests and debugging
    #[serde(skip)]
    pub frame_counter: u64,
}

impl Default for PortfolioApp {
    fn default() -> Self {
        let reveal = RevealConfig::default();
        Self {
            dark_mode: false,
            animated_background: true,
            animator: AnimatorConfig::default(),
            reveals: RevealChoreographer::new(reveal.policy),
            reveal,
            project_filter: ProjectFilter::All,
            blog_category: ALL_CATEGORIES.to_string(),
            content: load_content(),
            hero: None,
            contact: ContactState::default(),
            scroll_target: None,
            open_post: None,
            frame_counter: 0,
        }
    }
}

fn load_content() -> Option<PortfolioContent> {
    match PortfolioContent::embedded() {
        Ok(content) => Some(content),
        Err(err) => {
            log::error!("Failed to load portfolio content: {err}");
            None
        }
    }
}

impl PortfolioApp {
    /// Creates the app, restoring persisted settings when storage is available.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = match cc.storage.and_then(|storage| storage.get_string(STORAGE_KEY)) {
            Some(json) => Self::from_json(&json).unwrap_or_else(|err| {
                log::warn!("Ignoring unreadable saved state: {err}");
                Self::default()
            }),
            None => Self {
                dark_mode: super::prefers_dark_scheme(),
                ..Self::default()
            },
        };
        app.reset_session_fields();
        app
    }

    /// Serializes the persisted settings to JSON.
    ///
    /// # Returns
    ///
    /// A JSON string representation of the settings, or an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes persisted settings from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON string produced by [`PortfolioApp::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rebuilds session-only state from the persisted settings, so a restored
    /// reveal policy takes effect and stale blog tabs fall back to "all".
    /// Restored particle settings are pulled back into their safe range.
    pub fn reset_session_fields(&mut self) {
        let sanitized = self.animator.clone().sanitized();
        if sanitized != self.animator {
            log::warn!("Saved particle settings were out of range and have been adjusted");
            self.animator = sanitized;
        }
        self.reveals = RevealChoreographer::new(self.reveal.policy);
        if let Some(content) = &self.content {
            if !content.blog_categories().contains(&self.blog_category) {
                self.blog_category = ALL_CATEGORIES.to_string();
            }
        }
    }

    /// Switches the animated background on or off, mounting or tearing down the hero view.
    pub fn set_animated_background(&mut self, enabled: bool) {
        self.animated_background = enabled;
        if !enabled {
            self.teardown_hero();
        }
    }

    /// Stops the particle loop and drops the hero view.
    pub fn teardown_hero(&mut self) {
        if let Some(mut hero) = self.hero.take() {
            hero.teardown();
        }
    }

    /// Current egui visuals for the chosen theme.
    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }
}
