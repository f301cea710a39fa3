#![forbid(unsafe_code)]

//! Plan panel component.
//!
//! Composes four [`NumberStepper`]s (one per numeric plan field) and the
//! team-name text input around an owned [`PlanState`]. Steppers are the
//! source of truth for numeric supply: the panel subscribes to each
//! stepper and copies reported values into its own fields on change
//! notification; there is no shared mutable reference between stepper
//! and panel.
//!
//! Control flow for an edit: the host feeds a [`StepperOp`] in, the
//! stepper commits and signals, the panel copies the clamped value into
//! its state, rebuilds the share URL, and emits a [`PlanChange`]. All of
//! that happens synchronously, before the call returns, so derived state
//! is always consistent by the time the host processes the next event.

use std::cell::RefCell;
use std::rc::Rc;

use rinkplan_core::clipboard::{ClipboardService, CopyAck};
use rinkplan_core::navigation::NavigationContext;
use rinkplan_core::notify::{ChangeNotifier, Subscription};
use rinkplan_core::plan::{CostBreakdown, PlanField, PlanState};
use rinkplan_core::share_link;
use rinkplan_i18n::{LocaleStrings, StringCatalog};
use rinkplan_style::{InteractiveStyle, Style, Theme, ThemeSlot};

use crate::{CatalogLabels, LabelProvider, NumberStepper};

/// An edit operation routed to one field's stepper.
#[derive(Debug, Clone, PartialEq)]
pub enum StepperOp {
    /// Step the field up.
    Increment,
    /// Step the field down.
    Decrement,
    /// Commit direct text entry.
    Commit(String),
    /// Commit a raw numeric value.
    Set(f64),
}

/// What changed, carried on the panel's commit signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChange {
    /// A numeric field changed.
    Field(PlanField),
    /// The team name changed.
    TeamName,
    /// Startup hydration completed.
    Hydrated,
}

/// The cost planner panel.
///
/// # Lifecycle
///
/// Uninitialized → ready, transitioned once by [`PlanPanel::initialize`]
/// when the host attaches the component and supplies its location. All
/// later edits are self-loops in ready; a second `initialize` is a no-op.
pub struct PlanPanel {
    state: PlanState,
    origin: String,
    steppers: [NumberStepper; 4],
    /// Values reported by stepper notifications, waiting to be copied in.
    pending: Rc<RefCell<Vec<(PlanField, f64)>>>,
    /// Keeps the stepper subscriptions alive for the panel's lifetime.
    _stepper_subs: [Subscription; 4],
    signal: ChangeNotifier<PlanChange>,
    ready: bool,
}

impl Default for PlanPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanPanel {
    /// A panel with default fields, not yet hydrated.
    #[must_use]
    pub fn new() -> Self {
        let pending: Rc<RefCell<Vec<(PlanField, f64)>>> = Rc::default();
        let steppers = PlanField::ALL.map(Self::make_stepper);
        let stepper_subs = std::array::from_fn(|i| {
            let field = PlanField::ALL[i];
            let queue = Rc::clone(&pending);
            steppers[i].on_change(move |value: &f64| queue.borrow_mut().push((field, *value)))
        });

        Self {
            state: PlanState::new(),
            origin: String::new(),
            steppers,
            pending,
            _stepper_subs: stepper_subs,
            signal: ChangeNotifier::new(),
            ready: false,
        }
    }

    /// Set the share-URL origin up front (builder), for hosts that know
    /// it before attachment. [`PlanPanel::initialize`] overwrites it.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    fn make_stepper(field: PlanField) -> NumberStepper {
        let stepper = NumberStepper::new().with_label_key(Self::label_key(field));
        match field {
            // The divisor floor: interactive edits can never reach 0.
            PlanField::NumOfPlayers => stepper.with_min(1.0).with_value(1.0),
            _ => stepper,
        }
    }

    fn index(field: PlanField) -> usize {
        match field {
            PlanField::IceCost => 0,
            PlanField::IceHours => 1,
            PlanField::NumOfPlayers => 2,
            PlanField::CoachCost => 3,
        }
    }

    // --- Lifecycle ---

    /// One-shot startup transition: read the host location, hydrate
    /// fields from its query string, and resynchronize the share URL.
    ///
    /// Hydrated values pass through the stepper clamps, so a shared link
    /// carrying `numOfPlayers=0` lands on 1 and per-player cost stays
    /// defined.
    pub fn initialize(&mut self, nav: &dyn NavigationContext) {
        if self.ready {
            #[cfg(feature = "tracing")]
            tracing::debug!("panel already initialized");
            return;
        }
        self.origin = nav.origin().to_string();
        let applied = share_link::hydrate(&mut self.state, nav.query());

        // Push hydrated values through the stepper clamps and copy the
        // clamped results back; the steppers are the numeric supply.
        for field in PlanField::ALL {
            let value = field.get(&self.state);
            self.steppers[Self::index(field)].set_value(value);
        }
        let drained: Vec<(PlanField, f64)> = self.pending.borrow_mut().drain(..).collect();
        for (field, value) in drained {
            field.set(&mut self.state, value);
        }

        self.rebuild_share_url();
        self.ready = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(applied, "panel hydrated");
        #[cfg(not(feature = "tracing"))]
        let _ = applied;
        self.signal.emit(&PlanChange::Hydrated);
    }

    /// Whether startup hydration has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    // --- Edits ---

    /// Route an edit operation to one field's stepper, then absorb the
    /// resulting change notification.
    pub fn edit_field(&mut self, field: PlanField, op: StepperOp) {
        {
            let stepper = &mut self.steppers[Self::index(field)];
            match op {
                StepperOp::Increment => stepper.increment(),
                StepperOp::Decrement => stepper.decrement(),
                StepperOp::Commit(text) => stepper.commit_input(&text),
                StepperOp::Set(value) => stepper.set_value(value),
            }
        }
        self.drain_stepper_changes();
    }

    /// Set a numeric field directly. Routed through the field's stepper
    /// so its clamps stay authoritative.
    pub fn set_field(&mut self, field: PlanField, value: f64) {
        self.edit_field(field, StepperOp::Set(value));
    }

    /// Update the team name. Rebuilds the share URL (the name is part of
    /// the link) but touches no numeric state.
    pub fn set_team_name(&mut self, text: impl Into<String>) {
        self.state.set_team_name(text);
        self.rebuild_share_url();
        self.signal.emit(&PlanChange::TeamName);
    }

    /// Copy stepper-reported values into plan state, rebuilding derived
    /// state per copied field.
    fn drain_stepper_changes(&mut self) {
        let drained: Vec<(PlanField, f64)> = self.pending.borrow_mut().drain(..).collect();
        for (field, value) in drained {
            field.set(&mut self.state, value);
            self.rebuild_share_url();
            self.signal.emit(&PlanChange::Field(field));
        }
    }

    fn rebuild_share_url(&mut self) {
        if self.origin.is_empty() {
            return;
        }
        if let Err(_err) = self.state.refresh_share_url(&self.origin) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "share link rebuild failed");
        }
    }

    // --- Reads ---

    /// The owned plan state, for the rendering layer.
    #[must_use]
    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// Current team name.
    #[must_use]
    pub fn team_name(&self) -> &str {
        self.state.team_name()
    }

    /// The current shareable URL (empty until hydration or first edit
    /// with a known origin).
    #[must_use]
    pub fn share_url(&self) -> &str {
        self.state.share_url()
    }

    /// Derive the cost receipt from current fields. Pure; recomputed on
    /// every call.
    #[must_use]
    pub fn receipt(&self) -> CostBreakdown {
        self.state.receipt()
    }

    /// One field's stepper, for the rendering layer.
    #[must_use]
    pub fn stepper(&self, field: PlanField) -> &NumberStepper {
        &self.steppers[Self::index(field)]
    }

    /// Subscribe to panel-level commits. The rendering layer re-renders
    /// on each signal.
    pub fn on_change(&self, callback: impl Fn(&PlanChange) + 'static) -> Subscription {
        self.signal.subscribe(callback)
    }

    // --- Side effects ---

    /// Copy the current share URL to the injected clipboard. Side effect
    /// only: no state mutation, no retry; the acknowledgment is returned
    /// for the host to surface.
    pub fn copy_share_link(&self, clipboard: &mut dyn ClipboardService) -> CopyAck {
        let ack = clipboard.copy(self.state.share_url());
        match &ack {
            CopyAck::Copied => {
                #[cfg(feature = "tracing")]
                tracing::debug!("share link copied");
            }
            CopyAck::Failed(_reason) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(reason = %_reason, "share link copy failed");
            }
        }
        ack
    }

    // --- Labels and theme ---

    /// Label key for a numeric field.
    #[must_use]
    pub fn label_key(field: PlanField) -> &'static str {
        match field {
            PlanField::IceCost => "planner.ice-cost",
            PlanField::IceHours => "planner.ice-hours",
            PlanField::NumOfPlayers => "planner.players",
            PlanField::CoachCost => "planner.coach-cost",
        }
    }

    /// Resolve a numeric field's label through the injected provider.
    #[must_use]
    pub fn field_label(&self, field: PlanField, labels: &dyn LabelProvider) -> String {
        self.steppers[Self::index(field)].label(labels)
    }

    /// Resolve the team-name label.
    #[must_use]
    pub fn team_name_label(&self, labels: &dyn LabelProvider) -> String {
        labels
            .resolve("planner.team-name")
            .unwrap_or_else(|| "planner.team-name".to_string())
    }

    /// English label catalog for hosts without their own translations.
    #[must_use]
    pub fn default_labels() -> CatalogLabels {
        let mut en = LocaleStrings::new();
        en.insert("planner.team-name", "Team Name");
        en.insert("planner.ice-cost", "Ice Cost");
        en.insert("planner.ice-hours", "Ice Hours");
        en.insert("planner.players", "Number of Players");
        en.insert("planner.coach-cost", "Coach Cost");
        en.insert("planner.receipt", "{team} Receipt:");
        en.insert("planner.go-team", "Go {team}!");
        en.insert("planner.copy-link", "Copy share link");

        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        CatalogLabels::new(catalog, "en")
    }

    /// Skin every stepper from theme tokens for the given color scheme.
    pub fn apply_theme(&mut self, theme: &Theme, dark: bool) {
        let base = Style::new()
            .fg(theme.resolve(ThemeSlot::Text, dark))
            .bg(theme.resolve(ThemeSlot::Surface, dark));
        let style = InteractiveStyle::new(base)
            .focused(Style::new().bg(theme.resolve(ThemeSlot::Accent, dark)))
            .disabled(Style::new().fg(theme.resolve(ThemeSlot::Muted, dark)));
        for stepper in &mut self.steppers {
            stepper.set_style(style);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rinkplan_core::clipboard::MemoryClipboard;
    use rinkplan_core::navigation::StaticLocation;
    use std::cell::Cell;

    const ORIGIN: &str = "https://rink.example";

    fn ready_panel() -> PlanPanel {
        let mut panel = PlanPanel::new();
        panel.initialize(&StaticLocation::origin_only(ORIGIN));
        panel
    }

    fn sharks_panel() -> PlanPanel {
        let mut panel = ready_panel();
        panel.set_team_name("Sharks");
        panel.set_field(PlanField::IceCost, 100.0);
        panel.set_field(PlanField::IceHours, 2.0);
        panel.set_field(PlanField::NumOfPlayers, 4.0);
        panel.set_field(PlanField::CoachCost, 50.0);
        panel
    }

    #[test]
    fn fresh_panel_defaults() {
        let panel = PlanPanel::new();
        assert!(!panel.is_ready());
        assert_eq!(panel.team_name(), "");
        assert_eq!(panel.stepper(PlanField::NumOfPlayers).value(), 1.0);
        assert_eq!(panel.stepper(PlanField::NumOfPlayers).min(), 1.0);
        assert_eq!(panel.share_url(), "");
    }

    #[test]
    fn sharks_scenario_receipt() {
        let receipt = sharks_panel().receipt();
        assert_eq!(receipt.total_ice_cost, 200.0);
        assert_eq!(receipt.total_coach_cost, 50.0);
        assert_eq!(receipt.transaction_fee, 5.0);
        assert_eq!(receipt.total_cost, 255.0);
        assert_eq!(receipt.cost_per_player, 63.75);
    }

    #[test]
    fn edits_route_through_stepper_clamps() {
        let mut panel = ready_panel();
        panel.set_field(PlanField::IceCost, -25.0);
        // The ice-cost stepper floors at 0, and the stepper is the
        // source of truth for the panel's field.
        assert_eq!(panel.state().ice_cost(), 0.0);

        panel.set_field(PlanField::NumOfPlayers, 0.0);
        assert_eq!(panel.state().num_of_players(), 1.0);
    }

    #[test]
    fn increment_and_decrement_ops() {
        let mut panel = ready_panel();
        panel.edit_field(PlanField::IceHours, StepperOp::Increment);
        panel.edit_field(PlanField::IceHours, StepperOp::Increment);
        assert_eq!(panel.state().ice_hours(), 2.0);

        panel.edit_field(PlanField::IceHours, StepperOp::Decrement);
        assert_eq!(panel.state().ice_hours(), 1.0);
    }

    #[test]
    fn text_commit_op() {
        let mut panel = ready_panel();
        panel.edit_field(PlanField::CoachCost, StepperOp::Commit("75.5".into()));
        assert_eq!(panel.state().coach_cost(), 75.5);

        panel.edit_field(PlanField::CoachCost, StepperOp::Commit("garbage".into()));
        assert_eq!(panel.state().coach_cost(), 0.0);
    }

    #[test]
    fn share_url_tracks_every_numeric_edit() {
        let mut panel = ready_panel();
        panel.set_field(PlanField::IceCost, 10.0);
        assert!(panel.share_url().contains("iceCost=10"));

        panel.set_field(PlanField::IceCost, 0.0);
        assert!(!panel.share_url().contains("iceCost"));
    }

    #[test]
    fn team_name_rebuilds_url_without_touching_totals() {
        let mut panel = sharks_panel();
        let before = panel.receipt();
        panel.set_team_name("Ice Wolves");
        assert_eq!(panel.receipt(), before);
        assert!(panel.share_url().contains("teamName=Ice+Wolves"));
    }

    #[test]
    fn initialize_hydrates_from_query() {
        let mut panel = PlanPanel::new();
        panel.initialize(&StaticLocation::new(
            ORIGIN,
            "?teamName=Sharks&iceCost=100&iceHours=2&numOfPlayers=4&coachCost=50",
        ));

        assert!(panel.is_ready());
        assert_eq!(panel.team_name(), "Sharks");
        assert_eq!(panel.receipt().total_cost, 255.0);
        // Steppers mirror the hydrated fields.
        assert_eq!(panel.stepper(PlanField::IceCost).value(), 100.0);
        // The share URL is resynchronized once after hydration.
        assert!(panel.share_url().contains("teamName=Sharks"));
    }

    #[test]
    fn initialize_is_one_shot() {
        let mut panel = PlanPanel::new();
        panel.initialize(&StaticLocation::new(ORIGIN, "iceCost=5"));
        assert_eq!(panel.state().ice_cost(), 5.0);

        // A second attach must not re-hydrate or reset anything.
        panel.set_field(PlanField::IceCost, 9.0);
        panel.initialize(&StaticLocation::new(ORIGIN, "iceCost=1"));
        assert_eq!(panel.state().ice_cost(), 9.0);
    }

    #[test]
    fn hydrating_zero_players_lands_on_the_floor() {
        let mut panel = PlanPanel::new();
        panel.initialize(&StaticLocation::new(
            ORIGIN,
            "numOfPlayers=0&iceCost=10&iceHours=25",
        ));
        assert_eq!(panel.state().num_of_players(), 1.0);
        assert!(panel.receipt().cost_per_player.is_finite());
        assert_eq!(panel.receipt().cost_per_player, 255.0);
    }

    #[test]
    fn hydration_round_trip_through_share_url() {
        let source = sharks_panel();
        let url = url_query(source.share_url());

        let mut back = PlanPanel::new();
        back.initialize(&StaticLocation::new(ORIGIN, url));

        assert_eq!(back.team_name(), source.team_name());
        for field in PlanField::ALL {
            assert_eq!(
                field.get(back.state()),
                field.get(source.state()),
                "{field:?} did not survive the round trip"
            );
        }
    }

    fn url_query(url: &str) -> String {
        url.split_once('?').map(|(_, q)| q.to_string()).unwrap_or_default()
    }

    #[test]
    fn copy_share_link_reports_and_records() {
        let panel = sharks_panel();
        let mut clipboard = MemoryClipboard::new();
        let ack = panel.copy_share_link(&mut clipboard);
        assert!(ack.is_copied());
        assert_eq!(clipboard.last_copied(), Some(panel.share_url()));
    }

    #[test]
    fn copy_share_link_failure_is_nonfatal() {
        let panel = sharks_panel();
        let url_before = panel.share_url().to_string();
        let mut clipboard = MemoryClipboard::failing();
        let ack = panel.copy_share_link(&mut clipboard);
        assert!(!ack.is_copied());
        // No state mutation on failure.
        assert_eq!(panel.share_url(), url_before);
    }

    #[test]
    fn panel_signals_on_every_commit() {
        let mut panel = ready_panel();
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);
        let _sub = panel.on_change(move |_| count_clone.set(count_clone.get() + 1));

        panel.set_field(PlanField::IceCost, 5.0);
        panel.set_team_name("Sharks");
        // Value-preserving commit still signals.
        panel.set_field(PlanField::IceCost, 5.0);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn signal_carries_what_changed() {
        let mut panel = ready_panel();
        let last = Rc::new(RefCell::new(None));
        let last_clone = Rc::clone(&last);
        let _sub = panel.on_change(move |change| *last_clone.borrow_mut() = Some(*change));

        panel.set_field(PlanField::CoachCost, 1.0);
        assert_eq!(*last.borrow(), Some(PlanChange::Field(PlanField::CoachCost)));

        panel.set_team_name("x");
        assert_eq!(*last.borrow(), Some(PlanChange::TeamName));
    }

    #[test]
    fn default_labels_resolve_field_names() {
        let panel = PlanPanel::new();
        let labels = PlanPanel::default_labels();
        assert_eq!(panel.field_label(PlanField::IceCost, &labels), "Ice Cost");
        assert_eq!(
            panel.field_label(PlanField::NumOfPlayers, &labels),
            "Number of Players"
        );
        assert_eq!(panel.team_name_label(&labels), "Team Name");
    }

    #[test]
    fn theme_application_reskins_steppers() {
        use rinkplan_style::Rgb;

        let theme = Theme::builder()
            .slot(ThemeSlot::Text, Rgb::new(1, 2, 3))
            .build();
        let mut panel = PlanPanel::new();
        panel.apply_theme(&theme, false);
        assert_eq!(
            panel.stepper(PlanField::IceCost).resolved_style().fg,
            Some(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn edits_before_initialization_keep_working() {
        // No origin yet: state updates, the share URL just stays empty.
        let mut panel = PlanPanel::new();
        panel.set_field(PlanField::IceCost, 3.0);
        assert_eq!(panel.state().ice_cost(), 3.0);
        assert_eq!(panel.share_url(), "");
    }
}
