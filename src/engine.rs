//! Orchestrator façade composing catalog lookup, line calculation, upline
//! distribution, and clawback recomputation into one deal-level result.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::calc::{self, AspTotals, FidelityProjection, LineBreakdown, SelfBrandPolicy};
use crate::catalog::ProductCatalog;
use crate::clawback::{self, ClawbackContext, ClawbackState};
use crate::domain::{Cents, SaleLineItem, UplineNode};
use crate::error::EngineError;
use crate::ranks::RankBonusTable;
use crate::upline::{self, UplinePayout};

/// Everything the engine needs to settle one deal. Line items and the upline
/// chain arrive validated and resolved by external collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRequest {
    pub line_items: Vec<SaleLineItem>,
    #[serde(default)]
    pub upline_chain: Vec<UplineNode>,
    #[serde(default)]
    pub clawback: Option<ClawbackContext>,
}

/// Deal-level aggregates across all lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealTotals {
    pub total_retail: Cents,
    pub total_commission: Cents,
    pub asp: AspTotals,
    pub fidelity: FidelityProjection,
    pub total_upline_cost: Cents,
    pub net_commission: Cents,
    pub negative_net_clamped: bool,
}

/// Aggregated calculation result for one deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionStatement {
    pub lines: Vec<LineBreakdown>,
    pub payouts: Vec<UplinePayout>,
    pub totals: DealTotals,
    pub clawback: Option<ClawbackState>,
}

/// Stateless calculation engine over immutable reference data. Construct one
/// per compensation plan and share it freely across threads.
pub struct CommissionEngine {
    catalog: ProductCatalog,
    ranks: RankBonusTable,
    self_brand: SelfBrandPolicy,
}

impl CommissionEngine {
    pub fn new(catalog: ProductCatalog, ranks: RankBonusTable, self_brand: SelfBrandPolicy) -> Self {
        Self {
            catalog,
            ranks,
            self_brand,
        }
    }

    /// Engine with the standard rank table and self-brand exclusions.
    pub fn with_defaults(catalog: ProductCatalog) -> Self {
        Self::new(catalog, RankBonusTable::default(), SelfBrandPolicy::default())
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn ranks(&self) -> &RankBonusTable {
        &self.ranks
    }

    /// Resolve and price a single line.
    pub fn calculate_line(&self, item: &SaleLineItem) -> Result<LineBreakdown, EngineError> {
        let entry = self.catalog.lookup(item.product_type, &item.plan_id)?;
        Ok(calc::calculate_line(entry, item, &self.ranks, &self.self_brand))
    }

    /// Settle a whole deal: price every line, distribute upline overrides,
    /// and recompute clawback exposure when context is supplied. Fails fast
    /// on the first unresolvable line with no partial output.
    pub fn calculate(&self, request: &CommissionRequest) -> Result<CommissionStatement, EngineError> {
        let mut lines = Vec::with_capacity(request.line_items.len());
        for item in &request.line_items {
            lines.push(self.calculate_line(item)?);
        }

        let total_retail: Cents = lines.iter().map(|line| line.total_retail).sum();
        let total_commission: Cents = lines.iter().map(|line| line.total_commission).sum();
        let asp = calc::accumulate(&lines);
        let fidelity_monthly: Cents = lines.iter().map(|line| line.fidelity.monthly).sum();
        let fidelity = calc::project(fidelity_monthly);

        let distribution = upline::distribute(total_commission, &request.upline_chain)?;

        let clawback = match &request.clawback {
            Some(context) => {
                let now = context.now.unwrap_or_else(Utc::now);
                Some(clawback::compute_risk(context, now, total_commission)?)
            }
            None => None,
        };

        Ok(CommissionStatement {
            lines,
            payouts: distribution.payouts,
            totals: DealTotals {
                total_retail,
                total_commission,
                asp,
                fidelity,
                total_upline_cost: distribution.total_upline_cost,
                net_commission: distribution.net_commission,
                negative_net_clamped: distribution.negative_net_clamped,
            },
            clawback,
        })
    }
}
