#![forbid(unsafe_code)]

//! Style and theme tokens for rinkplan.
//!
//! # Role in rinkplan
//! `rinkplan-style` is the shared vocabulary for colors and interaction
//! styling. Components reference semantic slots; hosts map slots to
//! concrete colors per color scheme. Nothing here renders — the crate
//! only resolves tokens.
//!
//! # This crate provides
//! - [`Rgb`] and [`AdaptiveColor`] color values.
//! - [`Style`] sparse overlays with patch semantics.
//! - [`Theme`], [`ThemeBuilder`], and [`ThemeSlot`] semantic tokens with
//!   light/dark resolution and a process-wide active handle.
//! - [`InteractionState`] and [`InteractiveStyle`] per-state overlays.
//!
//! # How it fits in the system
//! `rinkplan-widgets` computes resolved styles for its components from
//! these tokens; the host rendering layer reads the resolved values. The
//! crate keeps the styling layer deterministic and reusable.

/// Color value types.
pub mod color;
/// Interactive style variants for stateful components.
pub mod interactive;
/// Sparse style overlays with patch semantics.
pub mod style;
/// Theme tokens with light/dark adaptive resolution.
pub mod theme;

pub use color::Rgb;
pub use interactive::{InteractionState, InteractiveStyle};
pub use style::Style;
pub use theme::{AdaptiveColor, Theme, ThemeBuilder, ThemeSlot, active, set_active};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_builder_from_theme_preserves_base_fields() {
        let base = Theme::builder()
            .slot(ThemeSlot::Accent, Rgb::new(10, 20, 30))
            .slot(ThemeSlot::Text, Rgb::new(40, 50, 60))
            .build();

        let updated = ThemeBuilder::from_theme(base.clone())
            .slot(ThemeSlot::Text, Rgb::new(70, 80, 90))
            .build();

        assert_eq!(updated.accent, base.accent);
        assert_eq!(updated.background, base.background);
        assert_eq!(updated.text, AdaptiveColor::uniform(Rgb::new(70, 80, 90)));
    }

    #[test]
    fn resolved_interactive_style_combines_theme_tokens() {
        let theme = Theme::default();
        let base = Style::new()
            .fg(theme.resolve(ThemeSlot::Text, false))
            .bg(theme.resolve(ThemeSlot::Surface, false));
        let interactive =
            InteractiveStyle::new(base).focused(Style::new().bg(theme.resolve(ThemeSlot::Accent, false)));

        let focused = interactive.resolve(InteractionState::Focused);
        assert_eq!(focused.bg, Some(theme.resolve(ThemeSlot::Accent, false)));
        assert_eq!(focused.fg, base.fg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn theme_round_trips_through_serde() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
