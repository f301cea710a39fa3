#![forbid(unsafe_code)]

//! Theme tokens: semantic color slots with light/dark adaptive resolution.
//!
//! Widgets never name concrete colors; they reference a [`ThemeSlot`] and
//! the host resolves it through the active [`Theme`]. A theme maps every
//! slot to an [`AdaptiveColor`] carrying one value per color scheme.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use tracing::info;

use crate::color::Rgb;

/// A color with light- and dark-mode variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveColor {
    pub light: Rgb,
    pub dark: Rgb,
}

impl AdaptiveColor {
    /// A color that differs between schemes.
    #[must_use]
    pub const fn adaptive(light: Rgb, dark: Rgb) -> Self {
        Self { light, dark }
    }

    /// The same color in both schemes.
    #[must_use]
    pub const fn uniform(color: Rgb) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    /// Resolve for the given scheme.
    #[must_use]
    pub fn resolve(self, dark: bool) -> Rgb {
        if dark { self.dark } else { self.light }
    }
}

impl From<Rgb> for AdaptiveColor {
    fn from(color: Rgb) -> Self {
        Self::uniform(color)
    }
}

/// The semantic slots a theme must fill.
///
/// This enum is the injected "theme token" capability: components refer
/// to slots, hosts decide colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeSlot {
    /// Page background.
    Background,
    /// Card/input surface.
    Surface,
    /// Primary text.
    Text,
    /// De-emphasized text.
    Muted,
    /// Interactive accent (buttons, focus rings).
    Accent,
    /// Positive acknowledgment.
    Success,
    /// Cautionary highlight.
    Warning,
    /// Failure highlight.
    Error,
}

impl ThemeSlot {
    /// All slots, for coverage-style iteration in hosts and tests.
    pub const ALL: [ThemeSlot; 8] = [
        ThemeSlot::Background,
        ThemeSlot::Surface,
        ThemeSlot::Text,
        ThemeSlot::Muted,
        ThemeSlot::Accent,
        ThemeSlot::Success,
        ThemeSlot::Warning,
        ThemeSlot::Error,
    ];
}

/// A complete token set: one adaptive color per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub background: AdaptiveColor,
    pub surface: AdaptiveColor,
    pub text: AdaptiveColor,
    pub muted: AdaptiveColor,
    pub accent: AdaptiveColor,
    pub success: AdaptiveColor,
    pub warning: AdaptiveColor,
    pub error: AdaptiveColor,
}

impl Theme {
    /// Start building from the default palette.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    /// Resolve a slot for the given scheme.
    #[must_use]
    pub fn resolve(&self, slot: ThemeSlot, dark: bool) -> Rgb {
        let adaptive = match slot {
            ThemeSlot::Background => self.background,
            ThemeSlot::Surface => self.surface,
            ThemeSlot::Text => self.text,
            ThemeSlot::Muted => self.muted,
            ThemeSlot::Accent => self.accent,
            ThemeSlot::Success => self.success,
            ThemeSlot::Warning => self.warning,
            ThemeSlot::Error => self.error,
        };
        adaptive.resolve(dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeBuilder::default().build()
    }
}

/// Builder for [`Theme`], starting from the default rink palette.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self {
            theme: Theme {
                background: AdaptiveColor::adaptive(
                    Rgb::new(240, 246, 252),
                    Rgb::new(15, 20, 34),
                ),
                surface: AdaptiveColor::adaptive(Rgb::new(255, 255, 255), Rgb::new(28, 36, 56)),
                text: AdaptiveColor::adaptive(Rgb::new(20, 36, 60), Rgb::new(220, 228, 240)),
                muted: AdaptiveColor::adaptive(Rgb::new(110, 124, 148), Rgb::new(130, 142, 164)),
                accent: AdaptiveColor::adaptive(Rgb::new(36, 104, 196), Rgb::new(120, 170, 255)),
                success: AdaptiveColor::adaptive(Rgb::new(22, 128, 72), Rgb::new(80, 220, 140)),
                warning: AdaptiveColor::adaptive(Rgb::new(176, 122, 10), Rgb::new(255, 200, 80)),
                error: AdaptiveColor::adaptive(Rgb::new(180, 40, 40), Rgb::new(255, 110, 110)),
            },
        }
    }
}

impl ThemeBuilder {
    /// Continue from an existing theme.
    #[must_use]
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Set a slot to a fixed or adaptive color.
    #[must_use]
    pub fn slot(mut self, slot: ThemeSlot, color: impl Into<AdaptiveColor>) -> Self {
        let color = color.into();
        match slot {
            ThemeSlot::Background => self.theme.background = color,
            ThemeSlot::Surface => self.theme.surface = color,
            ThemeSlot::Text => self.theme.text = color,
            ThemeSlot::Muted => self.theme.muted = color,
            ThemeSlot::Accent => self.theme.accent = color,
            ThemeSlot::Success => self.theme.success = color,
            ThemeSlot::Warning => self.theme.warning = color,
            ThemeSlot::Error => self.theme.error = color,
        }
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

// ---------------------------------------------------------------------------
// Active theme
// ---------------------------------------------------------------------------

static ACTIVE: LazyLock<ArcSwap<Theme>> =
    LazyLock::new(|| ArcSwap::from_pointee(Theme::default()));

/// Swap the process-wide active theme.
pub fn set_active(theme: Theme) {
    ACTIVE.store(Arc::new(theme));
    info!("theme activated");
}

/// The current process-wide theme.
#[must_use]
pub fn active() -> Arc<Theme> {
    ACTIVE.load_full()
}
