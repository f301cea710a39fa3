#![forbid(unsafe_code)]

//! Style values with cascading patch semantics.
//!
//! A [`Style`] is a sparse overlay: unset properties inherit from
//! whatever the style is patched onto. This mirrors how the interaction
//! overlays in [`crate::interactive`] compose state-specific styling on
//! top of a base.

use crate::color::Rgb;

/// A sparse foreground/background style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Foreground (text) color, if set.
    pub fg: Option<Rgb>,
    /// Background color, if set.
    pub bg: Option<Rgb>,
}

impl Style {
    /// An empty style that inherits everything.
    #[must_use]
    pub const fn new() -> Self {
        Self { fg: None, bg: None }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Overlay `other` on top of `self`: properties set in `other` win,
    /// unset ones keep `self`'s value.
    #[must_use]
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
        }
    }
}
