#![forbid(unsafe_code)]

//! Planner components for rinkplan.
//!
//! # Role in rinkplan
//! `rinkplan-widgets` holds the two interactive components: the
//! [`NumberStepper`] leaf input and the [`PlanPanel`] that composes five
//! inputs into the cost planner. Components are headless: they own state,
//! clamp supply, and signal commits; a host rendering layer reads the
//! exposed state and derived values and draws them however it likes.
//!
//! # This crate provides
//! - [`NumberStepper`]: bounded numeric input with per-commit signals.
//! - [`PlanPanel`] and [`StepperOp`]/[`PlanChange`]: the planner itself.
//! - [`LabelProvider`] and [`CatalogLabels`]: the injected label/text
//!   capability, backed by `rinkplan-i18n`.
//!
//! # How it fits in the system
//! Hosts construct a panel, hand it a navigation context once, feed user
//! edits in as operations, and re-render whenever the panel signals.

use rinkplan_i18n::StringCatalog;

/// The plan panel component.
pub mod panel;
/// The bounded numeric stepper component.
pub mod stepper;

pub use panel::{PlanChange, PlanPanel, StepperOp};
pub use stepper::NumberStepper;

/// Injected label/text capability.
///
/// Components hold label *keys*; resolution to display text is the
/// host's concern. A provider returning `None` makes the component fall
/// back to the key itself, which keeps missing translations visible
/// instead of blank.
pub trait LabelProvider {
    /// Resolve a label key to display text.
    fn resolve(&self, key: &str) -> Option<String>;
}

/// A [`LabelProvider`] backed by a [`StringCatalog`] bound to one locale.
#[derive(Debug, Clone, Default)]
pub struct CatalogLabels {
    catalog: StringCatalog,
    locale: String,
}

impl CatalogLabels {
    /// Bind a catalog to a locale.
    #[must_use]
    pub fn new(catalog: StringCatalog, locale: impl Into<String>) -> Self {
        Self {
            catalog,
            locale: locale.into(),
        }
    }

    /// The bound locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Rebind to another locale without rebuilding the catalog.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }
}

impl LabelProvider for CatalogLabels {
    fn resolve(&self, key: &str) -> Option<String> {
        self.catalog.get(&self.locale, key).map(str::to_string)
    }
}
