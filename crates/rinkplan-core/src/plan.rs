#![forbid(unsafe_code)]

//! Plan state and derived cost breakdown.
//!
//! [`PlanState`] holds the five editable fields of a plan; the cost
//! receipt is never stored, only derived. [`CostBreakdown::compute`]
//! reruns the full arithmetic from current state on every call, so a
//! reader always sees totals consistent with the fields.

use tracing::debug;

/// Fixed transaction fee applied on top of ice and coach costs.
pub const TRANSACTION_FEE_RATE: f64 = 0.02;

/// Typed handle for the four numeric plan fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum PlanField {
    IceCost,
    IceHours,
    NumOfPlayers,
    CoachCost,
}

impl PlanField {
    /// All numeric fields, in wire declaration order.
    pub const ALL: [PlanField; 4] = [
        PlanField::IceCost,
        PlanField::IceHours,
        PlanField::NumOfPlayers,
        PlanField::CoachCost,
    ];

    /// Query-parameter key for this field.
    #[must_use]
    pub fn wire_key(self) -> &'static str {
        match self {
            PlanField::IceCost => "iceCost",
            PlanField::IceHours => "iceHours",
            PlanField::NumOfPlayers => "numOfPlayers",
            PlanField::CoachCost => "coachCost",
        }
    }

    /// Value a fresh plan starts with, and the value unparseable input
    /// coerces to.
    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            PlanField::NumOfPlayers => 1.0,
            _ => 0.0,
        }
    }

    /// Read this field from a plan.
    #[must_use]
    pub fn get(self, state: &PlanState) -> f64 {
        match self {
            PlanField::IceCost => state.ice_cost,
            PlanField::IceHours => state.ice_hours,
            PlanField::NumOfPlayers => state.num_of_players,
            PlanField::CoachCost => state.coach_cost,
        }
    }

    /// Write this field, sanitizing the raw value first.
    ///
    /// Non-finite input (NaN, ±∞) coerces to [`Self::default_value`];
    /// the player count is additionally clamped to at least 1 so the
    /// per-player division is always defined.
    pub fn set(self, state: &mut PlanState, raw: f64) {
        let value = self.sanitize(raw);
        if value != raw {
            debug!(field = self.wire_key(), raw, value, "field value sanitized");
        }
        match self {
            PlanField::IceCost => state.ice_cost = value,
            PlanField::IceHours => state.ice_hours = value,
            PlanField::NumOfPlayers => state.num_of_players = value,
            PlanField::CoachCost => state.coach_cost = value,
        }
    }

    fn sanitize(self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return self.default_value();
        }
        match self {
            PlanField::NumOfPlayers => raw.max(1.0),
            _ => raw,
        }
    }
}

/// The five editable plan fields plus the derived share URL.
///
/// # Invariants
///
/// 1. `num_of_players >= 1.0` after any mutation.
/// 2. All numeric fields are finite after any mutation.
/// 3. `share_url` is derived: it only changes through
///    [`PlanState::refresh_share_url`], which the owning component calls
///    after every other field change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PlanState {
    team_name: String,
    ice_cost: f64,
    ice_hours: f64,
    num_of_players: f64,
    coach_cost: f64,
    share_url: String,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            ice_cost: PlanField::IceCost.default_value(),
            ice_hours: PlanField::IceHours.default_value(),
            num_of_players: PlanField::NumOfPlayers.default_value(),
            coach_cost: PlanField::CoachCost.default_value(),
            share_url: String::new(),
        }
    }
}

impl PlanState {
    /// Create a plan with default fields and an empty share URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current team name.
    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Set the team name. Does not touch numeric fields.
    pub fn set_team_name(&mut self, text: impl Into<String>) {
        self.team_name = text.into();
    }

    /// Hourly ice rental cost.
    #[inline]
    #[must_use]
    pub fn ice_cost(&self) -> f64 {
        self.ice_cost
    }

    /// Booked ice hours.
    #[inline]
    #[must_use]
    pub fn ice_hours(&self) -> f64 {
        self.ice_hours
    }

    /// Number of players splitting the total (always at least 1).
    #[inline]
    #[must_use]
    pub fn num_of_players(&self) -> f64 {
        self.num_of_players
    }

    /// Flat coach cost.
    #[inline]
    #[must_use]
    pub fn coach_cost(&self) -> f64 {
        self.coach_cost
    }

    /// The current shareable URL (empty until first refreshed).
    #[must_use]
    pub fn share_url(&self) -> &str {
        &self.share_url
    }

    /// Rebuild the share URL from the current fields against `origin`.
    ///
    /// This is the only way `share_url` changes.
    pub fn refresh_share_url(&mut self, origin: &str) -> Result<(), crate::ShareLinkError> {
        let url = crate::share_link::build(origin, self)?;
        self.share_url = url.to_string();
        Ok(())
    }

    /// Derive the cost receipt from the current fields.
    ///
    /// Pure recomputation on every call; nothing is cached.
    #[must_use]
    pub fn receipt(&self) -> CostBreakdown {
        CostBreakdown::compute(self)
    }
}

/// Derived totals for the plan receipt.
///
/// Raw IEEE-754 double arithmetic; no rounding is applied. Values are
/// displayed as-is by the host rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize))]
pub struct CostBreakdown {
    /// `ice_cost * ice_hours`.
    pub total_ice_cost: f64,
    /// Flat coach cost carried through unchanged.
    pub total_coach_cost: f64,
    /// 2% of the pre-fee subtotal.
    pub transaction_fee: f64,
    /// Pre-fee subtotal times 1.02.
    pub total_cost: f64,
    /// `total_cost / num_of_players`.
    pub cost_per_player: f64,
}

impl CostBreakdown {
    /// Compute the receipt from current plan fields.
    #[must_use]
    pub fn compute(state: &PlanState) -> Self {
        let total_ice_cost = state.ice_cost * state.ice_hours;
        let total_coach_cost = state.coach_cost;
        let base = total_ice_cost + total_coach_cost;
        Self {
            total_ice_cost,
            total_coach_cost,
            transaction_fee: base * TRANSACTION_FEE_RATE,
            total_cost: base * (1.0 + TRANSACTION_FEE_RATE),
            cost_per_player: base * (1.0 + TRANSACTION_FEE_RATE) / state.num_of_players,
        }
    }

    /// Ice plus coach cost before the transaction fee.
    #[must_use]
    pub fn base_cost(&self) -> f64 {
        self.total_ice_cost + self.total_coach_cost
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
