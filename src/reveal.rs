//! Scroll-triggered reveal transitions.
//!
//! Every animated element registers a [`Transition`] with the
//! [`RevealChoreographer`] when it is first laid out. The UI then reports how
//! much of the element is inside the scroll viewport each frame; the first time
//! that fraction reaches the policy threshold the element starts moving from its
//! initial style to its final style.
//!
//! The lifecycle of an element is `NotObserved -> Pending -> Revealed`. With the
//! default `once` policy a revealed element stays revealed when it scrolls out
//! of view again, so sections animate a single time per page load.

use crate::config::{RevealConfig, ViewportPolicy};
use eframe::egui;
use std::collections::HashMap;

/// Visual state of an element at one instant of its reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Opacity multiplier in `0.0..=1.0`
    pub opacity: f32,
    /// Translation from the resting layout position
    pub offset: egui::Vec2,
}

impl RevealStyle {
    /// Fully visible, at rest.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: egui::Vec2::ZERO,
    };

    /// Hidden, shifted by `offset`.
    pub fn hidden(offset: egui::Vec2) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }

    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            offset: self.offset + (other.offset - self.offset) * t,
        }
    }
}

/// Declarative enter-transition of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Style before the reveal
    pub from: RevealStyle,
    /// Style once the reveal has finished
    pub to: RevealStyle,
    /// Seconds from start to finish
    pub duration: f32,
    /// Seconds to wait after the trigger before starting
    pub delay: f32,
}

impl Transition {
    /// Fade in while sliding up from below.
    pub fn fade_up(config: &RevealConfig) -> Self {
        Self {
            from: RevealStyle::hidden(egui::vec2(0.0, config.offset)),
            to: RevealStyle::VISIBLE,
            duration: config.duration,
            delay: 0.0,
        }
    }

    /// Fade in while sliding in from the left, slower than [`Transition::fade_up`].
    pub fn slide_from_left(config: &RevealConfig) -> Self {
        Self {
            from: RevealStyle::hidden(egui::vec2(-config.offset * 2.5, 0.0)),
            to: RevealStyle::VISIBLE,
            duration: config.duration * 1.4,
            delay: 0.0,
        }
    }

    /// Fade in without moving.
    pub fn fade_in(duration: f32) -> Self {
        Self {
            from: RevealStyle::hidden(egui::Vec2::ZERO),
            to: RevealStyle::VISIBLE,
            duration,
            delay: 0.0,
        }
    }

    /// Adds a fixed delay before the transition starts.
    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay += delay;
        self
    }

    /// Delays the transition by `index * step` seconds.
    pub fn staggered(mut self, index: usize, step: f32) -> Self {
        self.delay += index as f32 * step;
        self
    }

    /// Style `elapsed` seconds after the trigger.
    pub fn style_at(&self, elapsed: f32) -> RevealStyle {
        let active = elapsed - self.delay;
        if active <= 0.0 {
            return self.from;
        }
        if self.duration <= 0.0 || active >= self.duration {
            return self.to;
        }
        self.from.lerp(&self.to, ease_out_cubic(active / self.duration))
    }

    /// True once `elapsed` covers the delay and the duration.
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration.max(0.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Where an element is in its reveal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    /// Not registered
    NotObserved,
    /// Registered, waiting to become visible
    Pending,
    /// Triggered at `started_at` (seconds)
    Revealed {
        /// Trigger time
        started_at: f64,
    },
}

#[derive(Debug, Clone)]
struct RevealEntry {
    state: RevealState,
    transition: Transition,
}

/// Fraction of `element` inside `viewport`, in `0.0..=1.0`.
///
/// A zero-area element counts as fully visible when it lies inside the viewport.
pub fn visible_fraction(element: egui::Rect, viewport: egui::Rect) -> f32 {
    let overlap = element.intersect(viewport);
    if !overlap.is_positive() {
        if element.area() <= 0.0 && viewport.contains(element.center()) {
            return 1.0;
        }
        return 0.0;
    }
    let area = element.area();
    if area <= 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Tracks the reveal lifecycle of every registered element.
#[derive(Debug, Clone, Default)]
pub struct RevealChoreographer {
    policy: ViewportPolicy,
    entries: HashMap<egui::Id, RevealEntry>,
}

impl RevealChoreographer {
    /// Creates a choreographer applying `policy` to every element.
    pub fn new(policy: ViewportPolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
        }
    }

    /// Registers an element. Returns `true` if it moved from not-observed to pending.
    ///
    /// Registering an element that is already known keeps its state and transition.
    pub fn register(&mut self, id: egui::Id, transition: Transition) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(
            id,
            RevealEntry {
                state: RevealState::Pending,
                transition,
            },
        );
        true
    }

    /// Reports the visible fraction of an element at time `now` and returns its new state.
    pub fn observe(&mut self, id: egui::Id, visible: f32, now: f64) -> RevealState {
        let policy = self.policy;
        let Some(entry) = self.entries.get_mut(&id) else {
            return RevealState::NotObserved;
        };
        let crossed = visible > 0.0 && visible >= policy.threshold;
        match entry.state {
            RevealState::Pending if crossed => {
                log::trace!("Revealing {:?} at {:.3}s", id, now);
                entry.state = RevealState::Revealed { started_at: now };
            }
            RevealState::Revealed { .. } if !policy.once && visible <= 0.0 => {
                entry.state = RevealState::Pending;
            }
            _ => {}
        }
        entry.state
    }

    /// Current state of an element.
    pub fn state(&self, id: egui::Id) -> RevealState {
        self.entries
            .get(&id)
            .map_or(RevealState::NotObserved, |entry| entry.state)
    }

    /// Style to paint an element with at time `now`.
    ///
    /// Unregistered elements are painted at rest.
    pub fn style(&self, id: egui::Id, now: f64) -> RevealStyle {
        match self.entries.get(&id) {
            None => RevealStyle::VISIBLE,
            Some(entry) => match entry.state {
                RevealState::NotObserved => RevealStyle::VISIBLE,
                RevealState::Pending => entry.transition.from,
                RevealState::Revealed { started_at } => {
                    entry.transition.style_at((now - started_at) as f32)
                }
            },
        }
    }

    /// True while any revealed element is still mid-transition.
    pub fn is_animating(&self, now: f64) -> bool {
        self.entries.values().any(|entry| match entry.state {
            RevealState::Revealed { started_at } => !entry.transition.is_finished((now - started_at) as f32),
            _ => false,
        })
    }

    /// Forgets an element, e.g. when its section is no longer laid out.
    pub fn unmount(&mut self, id: egui::Id) {
        self.entries.remove(&id);
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The active visibility policy.
    pub fn policy(&self) -> ViewportPolicy {
        self.policy
    }
}
