//! Per-line retail and commission calculation.
//!
//! Composes the catalog entry, modifier resolution, rank bonus, and fidelity
//! projection into one immutable breakdown per sold line.

mod asp;
mod fidelity;
mod modifiers;

pub use asp::{accumulate, AspTotals};
pub use fidelity::FidelityProjection;
pub use modifiers::SelfBrandPolicy;

pub(crate) use fidelity::project;

use serde::{Deserialize, Serialize};

use crate::catalog::ProductCatalogEntry;
use crate::domain::{Cents, PricingTier, ProductType, SaleLineItem};
use crate::ranks::{ConsultantRank, RankBonusTable};

/// Full monetary and point breakdown for one sold line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineBreakdown {
    pub product_type: ProductType,
    pub plan_id: String,
    pub pricing_tier: PricingTier,
    pub bonus_rank: ConsultantRank,
    pub base_retail: Cents,
    pub convergence_bonus: Cents,
    pub portability_bonus: Cents,
    pub soho_bonus: Cents,
    pub total_retail: Cents,
    pub asp_base: u32,
    pub asp_extra: u32,
    pub asp_total: u32,
    pub rank_bonus: Cents,
    pub total_commission: Cents,
    pub fidelity: FidelityProjection,
}

pub(crate) fn calculate_line(
    entry: &ProductCatalogEntry,
    item: &SaleLineItem,
    ranks: &RankBonusTable,
    self_brand: &SelfBrandPolicy,
) -> LineBreakdown {
    let resolved = modifiers::resolve(
        entry,
        item.pricing_tier,
        &item.modifiers,
        item.source_provider.as_deref(),
        self_brand,
    );

    let total_retail = resolved.base_retail
        + resolved.convergence_bonus
        + resolved.portability_bonus
        + resolved.soho_bonus;
    let rank_bonus = ranks.bonus_for(item.bonus_rank);

    LineBreakdown {
        product_type: item.product_type,
        plan_id: entry.plan_id.clone(),
        pricing_tier: item.pricing_tier,
        bonus_rank: item.bonus_rank,
        base_retail: resolved.base_retail,
        convergence_bonus: resolved.convergence_bonus,
        portability_bonus: resolved.portability_bonus,
        soho_bonus: resolved.soho_bonus,
        total_retail,
        asp_base: resolved.asp_base,
        asp_extra: resolved.asp_extra,
        asp_total: resolved.asp_base + resolved.asp_extra,
        rank_bonus,
        total_commission: total_retail + rank_bonus,
        fidelity: fidelity::project(entry.fidelity_monthly),
    }
}
