#![forbid(unsafe_code)]

//! Shareable-URL query codec.
//!
//! The only persisted format in the planner: plan fields encoded as query
//! parameters on the page origin. Encoding is compacting, not validating —
//! a zero cost or empty team name is simply omitted, never written as
//! `0` or an empty string. Decoding is best-effort: present keys overwrite
//! fields, absent keys leave current values untouched, and garbage values
//! fall back to field defaults through the same sanitizing write path the
//! rest of the crate uses.
//!
//! Parameter order is fixed: `teamName`, then the numeric fields in
//! [`PlanField::ALL`] order.

use crate::plan::{PlanField, PlanState};
use tracing::debug;
use url::Url;
use url::form_urlencoded;

/// Query key for the team name (the numeric keys live on [`PlanField`]).
pub const TEAM_NAME_KEY: &str = "teamName";

/// Errors from building a share URL.
#[derive(Debug)]
pub enum ShareLinkError {
    /// The supplied origin is not a parseable absolute URL.
    InvalidOrigin {
        origin: String,
        reason: url::ParseError,
    },
}

impl std::fmt::Display for ShareLinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrigin { origin, reason } => {
                write!(f, "invalid share-link origin {origin:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ShareLinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOrigin { reason, .. } => Some(reason),
        }
    }
}

/// Build a shareable URL for `state` against the page `origin`.
///
/// Only non-falsy fields are encoded: a non-empty team name and non-zero
/// numbers. With every field at its falsy default the result carries no
/// query at all. Numbers render via `f64` `Display` (integral values
/// print without a fractional part).
pub fn build(origin: &str, state: &PlanState) -> Result<Url, ShareLinkError> {
    let mut url = Url::parse(origin).map_err(|reason| ShareLinkError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    })?;

    let mut pairs: Vec<(&str, String)> = Vec::new();
    if !state.team_name().is_empty() {
        pairs.push((TEAM_NAME_KEY, state.team_name().to_string()));
    }
    for field in PlanField::ALL {
        let value = field.get(state);
        if value != 0.0 {
            pairs.push((field.wire_key(), value.to_string()));
        }
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    }

    debug!(url = %url, "share link rebuilt");
    Ok(url)
}

/// Overwrite plan fields from a query string.
///
/// Accepts the query with or without a leading `?`. Each recognized key
/// overwrites its field; numeric values parse best-effort, with
/// unparseable or non-finite input coercing to the field default via
/// [`PlanField::set`]. Unknown keys are ignored. Returns how many fields
/// were applied.
///
/// Hydration does not touch the stored share URL; the owner is expected
/// to call [`PlanState::refresh_share_url`] once afterwards to
/// resynchronize it.
pub fn hydrate(state: &mut PlanState, query: &str) -> usize {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut applied = 0;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key == TEAM_NAME_KEY {
            state.set_team_name(value.into_owned());
            applied += 1;
            continue;
        }
        match PlanField::ALL.iter().find(|f| f.wire_key() == key) {
            Some(field) => {
                // A failed parse becomes NaN so the sanitizing write path
                // coerces it to the field default.
                let raw = value.parse::<f64>().unwrap_or(f64::NAN);
                field.set(state, raw);
                applied += 1;
            }
            None => debug!(key = %key, "ignoring unknown share-link parameter"),
        }
    }

    debug!(applied, "plan hydrated from query");
    applied
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
