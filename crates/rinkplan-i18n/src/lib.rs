#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for rinkplan.
//!
//! Provides externalized string storage with key-based lookup, locale
//! fallback chains, and variable interpolation.
//!
//! # Role in rinkplan
//! `rinkplan-i18n` isolates localization concerns so components stay
//! deterministic while still supporting multiple languages: widgets hold
//! label *keys*, and hosts resolve them through a catalog.
//!
//! # How it fits in the system
//! `rinkplan-widgets` consumes this crate through its label-provider
//! seam to resolve keys into display text. It has no dependencies, so
//! the localization layer stays reusable and testable.

pub mod catalog;

pub use catalog::{LocaleStrings, StringCatalog};
