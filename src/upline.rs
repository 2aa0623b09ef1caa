//! Override payout distribution over a caller-resolved sponsor chain.
//!
//! The chain arrives ordered and depth-bounded from the hierarchy
//! collaborator; this module only computes the money. Each override is taken
//! flat against the original commission, never cascaded against a remainder.

use serde::{Deserialize, Serialize};

use crate::domain::{Cents, UplineNode};
use crate::error::EngineError;

// Tolerance for f64 summation noise when checking the 100% aggregate cap.
const AGGREGATE_EPSILON: f64 = 1e-9;

/// Override payout owed to one sponsor in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplinePayout {
    pub consultant_id: String,
    pub level: u8,
    pub percentage: f64,
    pub amount: Cents,
}

/// Result of distributing one deal's commission across the upline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplineDistribution {
    pub payouts: Vec<UplinePayout>,
    pub total_upline_cost: Cents,
    pub net_commission: Cents,
    /// Set when per-payout rounding pushed the net below zero and it was
    /// clamped. The caller is expected to alert an operator.
    pub negative_net_clamped: bool,
}

/// Distribute one deal's commission across the chain. Misconfigured
/// percentages surface as errors rather than being silently clamped.
pub fn distribute(
    total_commission: Cents,
    chain: &[UplineNode],
) -> Result<UplineDistribution, EngineError> {
    let mut aggregate = 0.0_f64;
    for node in chain {
        if !node.override_percentage.is_finite()
            || node.override_percentage < 0.0
            || node.override_percentage > 1.0
        {
            return Err(EngineError::InvalidUplinePercentage {
                detail: format!(
                    "override for {} at level {} is {} (expected a fraction in [0, 1])",
                    node.consultant_id, node.level, node.override_percentage
                ),
            });
        }
        aggregate += node.override_percentage;
    }
    if aggregate > 1.0 + AGGREGATE_EPSILON {
        return Err(EngineError::InvalidUplinePercentage {
            detail: format!(
                "aggregate override {:.4} exceeds 100% of the commission",
                aggregate
            ),
        });
    }

    // Largest-remainder allocation: floor every payout, then hand the
    // leftover cents to the largest fractional parts so the sum stays within
    // one minor unit of the exact aggregate share.
    let mut payouts = Vec::with_capacity(chain.len());
    let mut fractions = Vec::with_capacity(chain.len());
    let mut total_upline_cost: Cents = 0;
    for (index, node) in chain.iter().enumerate() {
        let exact = total_commission as f64 * node.override_percentage;
        let amount = exact.floor() as Cents;
        fractions.push((index, exact - exact.floor()));
        total_upline_cost += amount;
        payouts.push(UplinePayout {
            consultant_id: node.consultant_id.clone(),
            level: node.level,
            percentage: node.override_percentage,
            amount,
        });
    }

    let target = (total_commission as f64 * aggregate).round() as Cents;
    let leftover = (target - total_upline_cost)
        .max(0)
        .min(payouts.len() as Cents);
    fractions.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    for &(index, _) in fractions.iter().take(leftover as usize) {
        payouts[index].amount += 1;
        total_upline_cost += 1;
    }

    let mut net_commission = total_commission - total_upline_cost;
    let mut negative_net_clamped = false;
    if net_commission < 0 {
        tracing::warn!(
            total_commission,
            total_upline_cost,
            "upline rounding drove net commission negative; clamping to zero"
        );
        net_commission = 0;
        negative_net_clamped = true;
    }

    Ok(UplineDistribution {
        payouts,
        total_upline_cost,
        net_commission,
        negative_net_clamped,
    })
}
