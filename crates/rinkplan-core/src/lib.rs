#![forbid(unsafe_code)]

//! Domain core for the rinkplan cost planner.
//!
//! # Role in rinkplan
//! `rinkplan-core` owns everything that is not presentation: the plan
//! state and its derived cost breakdown, the share-link wire format, the
//! change-notification hub, and the capability traits the host
//! environment injects (clipboard, navigation). It has no rendering
//! dependencies, so the whole planner logic is testable headlessly.
//!
//! # This crate provides
//! - [`PlanState`] and [`CostBreakdown`] for plan fields and derived totals.
//! - [`PlanField`] as the typed handle for the four numeric fields.
//! - [`share_link`] for building and hydrating shareable URLs.
//! - [`ChangeNotifier`] and [`Subscription`] for commit signals.
//! - [`ClipboardService`] and [`NavigationContext`] capability seams.
//!
//! # How it fits in the system
//! `rinkplan-widgets` composes this state into interactive components;
//! a host rendering layer reads exposed state and derived values and
//! never reaches back into this crate mutably except through the
//! documented operations.

/// Injected clipboard capability and copy acknowledgments.
pub mod clipboard;
/// Injected read-only location capability.
pub mod navigation;
/// Commit-signal hub with RAII subscriptions.
pub mod notify;
/// Plan state, field handles, and derived cost breakdown.
pub mod plan;
/// Shareable-URL query codec.
pub mod share_link;

pub use clipboard::{ClipboardService, CopyAck, MemoryClipboard, NoopClipboard};
pub use navigation::{NavigationContext, StaticLocation};
pub use notify::{ChangeNotifier, Subscription};
pub use plan::{CostBreakdown, PlanField, PlanState, TRANSACTION_FEE_RATE};
pub use share_link::ShareLinkError;
