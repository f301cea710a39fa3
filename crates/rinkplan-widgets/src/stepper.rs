#![forbid(unsafe_code)]

//! Bounded numeric stepper component.
//!
//! A single numeric value with configurable bounds and step, edited by
//! increment/decrement affordances or direct entry. All mutation routes
//! through one normalization path, so `min <= value <= max` holds after
//! every operation, and every committed mutation signals subscribers —
//! including commits that leave the value unchanged (an increment that
//! is already clamped at the maximum still notifies).

use rinkplan_core::notify::{ChangeNotifier, Subscription};
use rinkplan_style::{InteractionState, InteractiveStyle, Style};

use crate::LabelProvider;

/// A bounded numeric input.
///
/// # Invariants
///
/// 1. `min <= value <= max` after any mutation.
/// 2. `step` is finite and strictly positive.
/// 3. Every commit emits the committed value, with no de-duplication.
#[derive(Debug)]
pub struct NumberStepper {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    /// Label key resolved through the injected [`LabelProvider`].
    label_key: String,
    interaction: InteractionState,
    style: InteractiveStyle,
    notifier: ChangeNotifier<f64>,
}

impl Default for NumberStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberStepper {
    /// A stepper at 0 with bounds `[0, +∞)` and step 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: f64::INFINITY,
            step: 1.0,
            label_key: String::new(),
            interaction: InteractionState::Normal,
            style: InteractiveStyle::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    // --- Builder methods ---

    /// Set the initial value (builder). Clamped like any other supply.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.normalize(value);
        self
    }

    /// Set the lower bound (builder). The current value re-clamps.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self.value = self.normalize(self.value);
        self
    }

    /// Set the upper bound (builder). The current value re-clamps.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self.value = self.normalize(self.value);
        self
    }

    /// Set the step size (builder).
    ///
    /// The step must be finite and strictly positive; anything else
    /// falls back to the default step of 1.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = if step.is_finite() && step > 0.0 {
            step
        } else {
            1.0
        };
        self
    }

    /// Set the label key (builder).
    #[must_use]
    pub fn with_label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    /// Set the interactive style (builder).
    #[must_use]
    pub fn with_style(mut self, style: InteractiveStyle) -> Self {
        self.style = style;
        self
    }

    // --- Value access ---

    /// The current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The lower bound.
    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound.
    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The step size.
    #[inline]
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The label key.
    #[must_use]
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    /// Resolve the label through the injected provider, falling back to
    /// the key itself so missing translations stay visible.
    #[must_use]
    pub fn label(&self, labels: &dyn LabelProvider) -> String {
        labels
            .resolve(&self.label_key)
            .unwrap_or_else(|| self.label_key.clone())
    }

    // --- Interaction and style ---

    /// Current interaction state.
    #[inline]
    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Move to another interaction state (focus, hover, disable…).
    pub fn set_interaction(&mut self, state: InteractionState) {
        self.interaction = state;
    }

    /// Replace the interactive style.
    pub fn set_style(&mut self, style: InteractiveStyle) {
        self.style = style;
    }

    /// The style resolved for the current interaction state, for the
    /// host rendering layer to read.
    #[must_use]
    pub fn resolved_style(&self) -> Style {
        self.style.resolve(self.interaction)
    }

    // --- Mutation ---

    /// Step the value up, clamping at the upper bound.
    ///
    /// Idempotent once the value sits at `max`; a partial step that
    /// would overshoot lands exactly on `max`.
    pub fn increment(&mut self) {
        self.set_value(self.value + self.step);
    }

    /// Step the value down, clamping at the lower bound.
    pub fn decrement(&mut self) {
        self.set_value(self.value - self.step);
    }

    /// Commit a raw numeric supply.
    ///
    /// The single normalization path: NaN coerces to `min`, everything
    /// else clamps into `[min, max]`. Always succeeds, always signals.
    pub fn set_value(&mut self, raw: f64) {
        let next = self.normalize(raw);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            widget = "NumberStepper",
            label_key = %self.label_key,
            old = self.value,
            new = next,
            "value committed"
        );
        self.value = next;
        self.notifier.emit(&next);
    }

    /// Commit direct text entry, best-effort.
    ///
    /// Unparseable text behaves like NaN and therefore coerces to `min`.
    pub fn commit_input(&mut self, text: &str) {
        let raw = text.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.set_value(raw);
    }

    /// Subscribe to committed values.
    ///
    /// Fires synchronously on every commit, in registration order,
    /// before the mutating call returns.
    pub fn on_change(&self, callback: impl Fn(&f64) + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    /// Total commits so far (diagnostic).
    #[must_use]
    pub fn commit_count(&self) -> u64 {
        self.notifier.emit_count()
    }

    /// NaN → `min`; otherwise clamp. The lower bound is applied first,
    /// the upper bound last, so `max` wins if the bounds ever cross.
    fn normalize(&self, raw: f64) -> f64 {
        let mut next = if raw.is_nan() { self.min } else { raw };
        if next < self.min {
            next = self.min;
        }
        if next > self.max {
            next = self.max;
        }
        next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
