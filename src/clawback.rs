//! Clawback-risk recomputation for the post-sale guarantee window.
//!
//! Risk decays linearly from 100% at activation to 0% once the window has
//! fully elapsed. Everything here is a pure function of explicit inputs;
//! "now" is always a parameter and no transition history is kept, since the
//! persistence collaborator owns any audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Cents;
use crate::error::EngineError;

/// Lifecycle of the reversal risk on one activated sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClawbackStatus {
    /// Sale just activated; the full commission is still at stake.
    Pending,
    /// Inside the guarantee window; risk is decaying.
    AtRisk,
    /// Window elapsed; the commission can no longer be reversed.
    Safe,
    /// Window elapsed and the payout confirmed by the back office. Terminal.
    Cleared,
    /// The sale was cancelled inside the window. Terminal.
    Reversed,
}

impl ClawbackStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ClawbackStatus::Pending => "PENDING",
            ClawbackStatus::AtRisk => "AT_RISK",
            ClawbackStatus::Safe => "SAFE",
            ClawbackStatus::Cleared => "CLEARED",
            ClawbackStatus::Reversed => "REVERSED",
        }
    }
}

/// Caller-supplied facts needed to recompute the risk of one sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClawbackContext {
    pub activation_date: DateTime<Utc>,
    pub guarantee_window_days: i64,
    /// External cancellation signal; forces the risk to 100%.
    #[serde(default)]
    pub reversed: bool,
    /// Back-office confirmation that a window-complete sale was paid out.
    /// Only honored once the window has elapsed.
    #[serde(default)]
    pub cleared: bool,
    /// Overridable clock for reproducible evaluation; defaults to wall time
    /// at the orchestrator boundary.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Snapshot of the current reversal exposure. Recomputed on demand, never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClawbackState {
    pub activation_date: DateTime<Utc>,
    pub guarantee_window_days: i64,
    pub elapsed_days: i64,
    pub risk_percentage: f64,
    pub potential_loss: Cents,
    pub status: ClawbackStatus,
}

/// Recompute the reversal risk for a sale worth `total_commission` cents.
pub fn compute_risk(
    context: &ClawbackContext,
    now: DateTime<Utc>,
    total_commission: Cents,
) -> Result<ClawbackState, EngineError> {
    let window = context.guarantee_window_days;
    if window <= 0 {
        return Err(EngineError::InvalidClawbackWindow { days: window });
    }

    let elapsed_days = (now - context.activation_date).num_days().max(0);

    let (status, risk_percentage) = if context.reversed {
        (ClawbackStatus::Reversed, 100.0)
    } else if elapsed_days == 0 {
        (ClawbackStatus::Pending, 100.0)
    } else if elapsed_days < window {
        let risk = 100.0 * (1.0 - elapsed_days as f64 / window as f64);
        (ClawbackStatus::AtRisk, risk.clamp(0.0, 100.0))
    } else if context.cleared {
        (ClawbackStatus::Cleared, 0.0)
    } else {
        (ClawbackStatus::Safe, 0.0)
    };

    let potential_loss = if context.reversed {
        total_commission
    } else {
        (total_commission as f64 * risk_percentage / 100.0).round() as Cents
    };

    Ok(ClawbackState {
        activation_date: context.activation_date,
        guarantee_window_days: window,
        elapsed_days,
        risk_percentage,
        potential_loss,
        status,
    })
}
