//! Typewriter effect for the hero subtitle.
//!
//! Each role is typed one character at a time, held, then erased before the
//! next role starts. The whole sequence repeats forever, so the visible text is
//! a pure function of the elapsed time.

use crate::constants::{TYPE_CHAR_SECS, TYPE_HOLD_SECS};

/// Timing of the typewriter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterTiming {
    /// Seconds per typed or erased character
    pub char_secs: f64,
    /// Seconds a full role stays on screen
    pub hold_secs: f64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            char_secs: TYPE_CHAR_SECS,
            hold_secs: TYPE_HOLD_SECS,
        }
    }
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Text visible `elapsed` seconds after the typewriter started.
pub fn typed_text<'a, S: AsRef<str>>(roles: &'a [S], elapsed: f64, timing: TypewriterTiming) -> &'a str {
    let cycle = |role: &str| 2.0 * role.chars().count() as f64 * timing.char_secs + timing.hold_secs;
    let total: f64 = roles.iter().map(|role| cycle(role.as_ref())).sum();
    if roles.is_empty() || !(total > 0.0) || timing.char_secs <= 0.0 {
        return roles.first().map_or("", |role| role.as_ref());
    }

    let mut t = elapsed.max(0.0) % total;
    for role in roles {
        let role = role.as_ref();
        let len = role.chars().count();
        let typing = len as f64 * timing.char_secs;
        let span = cycle(role);
        if t < span {
            let visible = if t < typing {
                (t / timing.char_secs).floor() as usize
            } else if t < typing + timing.hold_secs {
                len
            } else {
                let erased = ((t - typing - timing.hold_secs) / timing.char_secs).floor() as usize;
                len.saturating_sub(erased)
            };
            return prefix(role, visible.min(len));
        }
        t -= span;
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            char_secs: 0.5,
            hold_secs: 1.0,
        }
    }

    #[test]
    fn test_types_holds_and_erases() {
        let roles = ["abcd", "xy"];
        assert_eq!(typed_text(&roles, 0.0, timing()), "");
        assert_eq!(typed_text(&roles, 0.6, timing()), "a");
        assert_eq!(typed_text(&roles, 1.9, timing()), "abc");
        assert_eq!(typed_text(&roles, 2.5, timing()), "abcd");
        assert_eq!(typed_text(&roles, 3.1, timing()), "abcd");
        assert_eq!(typed_text(&roles, 3.6, timing()), "abc");
        assert_eq!(typed_text(&roles, 4.9, timing()), "a");
        // Second role starts after 2*4*0.5 + 1 = 5 seconds
        assert_eq!(typed_text(&roles, 5.6, timing()), "x");
        assert_eq!(typed_text(&roles, 6.5, timing()), "xy");
    }

    #[test]
    fn test_sequence_repeats() {
        let roles = ["abcd", "xy"];
        // Full cycle is 5 + 3 = 8 seconds
        assert_eq!(typed_text(&roles, 8.6, timing()), typed_text(&roles, 0.6, timing()));
    }

    #[test]
    fn test_multibyte_prefixes() {
        let roles = ["Café"];
        assert_eq!(typed_text(&roles, 2.0, timing()), "Café");
        assert_eq!(typed_text(&roles, 1.6, timing()), "Caf");
    }

    #[test]
    fn test_empty_roles() {
        let roles: [&str; 0] = [];
        assert_eq!(typed_text(&roles, 3.0, timing()), "");
    }
}
