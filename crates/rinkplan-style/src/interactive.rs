#![forbid(unsafe_code)]

//! Interactive style variants for stateful components.
//!
//! [`InteractiveStyle`] holds style overlays for the interaction states a
//! component moves through: normal, hovered, focused, active (pressed),
//! and disabled. Resolution merges the state-specific overlay on top of
//! the base style with [`Style::patch`], so the more specific state wins
//! for any property it sets.

use crate::style::Style;

/// The interaction state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionState {
    /// Default state, no user interaction.
    #[default]
    Normal,
    /// Pointer is over the component.
    Hovered,
    /// Component has keyboard focus.
    Focused,
    /// Component is being pressed/activated.
    Active,
    /// Component is non-interactive.
    Disabled,
}

/// Style overlays per interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    /// Overlay applied when hovered.
    pub hover: Option<Style>,
    /// Overlay applied when focused.
    pub focus: Option<Style>,
    /// Overlay applied when active (pressed).
    pub active: Option<Style>,
    /// Overlay applied when disabled.
    pub disabled: Option<Style>,
}

impl InteractiveStyle {
    /// Create an interactive style with the given base.
    #[must_use]
    pub fn new(normal: Style) -> Self {
        Self {
            normal,
            ..Self::default()
        }
    }

    /// Set the hover overlay.
    #[must_use]
    pub fn hover(mut self, style: Style) -> Self {
        self.hover = Some(style);
        self
    }

    /// Set the focus overlay.
    #[must_use]
    pub fn focused(mut self, style: Style) -> Self {
        self.focus = Some(style);
        self
    }

    /// Set the active (pressed) overlay.
    #[must_use]
    pub fn active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    /// Set the disabled overlay.
    #[must_use]
    pub fn disabled(mut self, style: Style) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Resolve the style for the given interaction state.
    #[must_use]
    pub fn resolve(&self, state: InteractionState) -> Style {
        let overlay = match state {
            InteractionState::Normal => None,
            InteractionState::Hovered => self.hover,
            InteractionState::Focused => self.focus,
            InteractionState::Active => self.active,
            InteractionState::Disabled => self.disabled,
        };
        match overlay {
            Some(overlay) => self.normal.patch(overlay),
            None => self.normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn normal_state_returns_base() {
        let style = InteractiveStyle::new(Style::new().fg(Rgb::WHITE));
        assert_eq!(style.resolve(InteractionState::Normal), style.normal);
    }

    #[test]
    fn overlay_patches_base() {
        let style = InteractiveStyle::new(Style::new().fg(Rgb::WHITE).bg(Rgb::BLACK))
            .focused(Style::new().bg(Rgb::new(0, 0, 200)));

        let resolved = style.resolve(InteractionState::Focused);
        assert_eq!(resolved.fg, Some(Rgb::WHITE));
        assert_eq!(resolved.bg, Some(Rgb::new(0, 0, 200)));
    }

    #[test]
    fn missing_overlay_falls_back_to_base() {
        let style = InteractiveStyle::new(Style::new().fg(Rgb::WHITE));
        assert_eq!(style.resolve(InteractionState::Hovered), style.normal);
        assert_eq!(style.resolve(InteractionState::Disabled), style.normal);
    }

    #[test]
    fn each_state_uses_its_own_overlay() {
        let style = InteractiveStyle::new(Style::new().fg(Rgb::WHITE))
            .hover(Style::new().fg(Rgb::new(1, 0, 0)))
            .active(Style::new().fg(Rgb::new(2, 0, 0)))
            .disabled(Style::new().fg(Rgb::new(3, 0, 0)));

        assert_eq!(
            style.resolve(InteractionState::Hovered).fg,
            Some(Rgb::new(1, 0, 0))
        );
        assert_eq!(
            style.resolve(InteractionState::Active).fg,
            Some(Rgb::new(2, 0, 0))
        );
        assert_eq!(
            style.resolve(InteractionState::Disabled).fg,
            Some(Rgb::new(3, 0, 0))
        );
    }
}
