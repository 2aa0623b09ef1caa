use crate::catalog::{BonusAmounts, BonusEligibility, ProductCatalog, ProductCatalogEntry};
use crate::domain::{PricingTier, ProductType, SaleLineItem, SaleModifiers};
use crate::engine::CommissionEngine;
use crate::ranks::ConsultantRank;

/// Fully bonus-eligible mid-range mobile plan from the compensation plan's
/// worked examples: BC base 35, convergence 12, portability 20, SoHo 15.
pub(super) fn medium_plan() -> ProductCatalogEntry {
    ProductCatalogEntry {
        product_type: ProductType::Mobile,
        plan_id: "Medium".to_string(),
        base_price_bc: 35,
        base_price_sc: 45,
        asp_base: 4,
        eligibility: BonusEligibility {
            portability: true,
            convergence: true,
            soho: true,
        },
        bonus_amounts: BonusAmounts {
            portability: 20,
            convergence: 12,
            soho: 15,
        },
        asp_extra_on_soho: 2,
        fidelity_monthly: 150,
    }
}

/// Minimal child plan with no bonus eligibility at all.
pub(super) fn child_plan() -> ProductCatalogEntry {
    ProductCatalogEntry {
        product_type: ProductType::Mobile,
        plan_id: "Child".to_string(),
        base_price_bc: 1,
        base_price_sc: 1,
        asp_base: 1,
        eligibility: BonusEligibility::default(),
        bonus_amounts: BonusAmounts {
            portability: 20,
            convergence: 12,
            soho: 15,
        },
        asp_extra_on_soho: 2,
        fidelity_monthly: 0,
    }
}

pub(super) fn internet_plan() -> ProductCatalogEntry {
    ProductCatalogEntry {
        product_type: ProductType::Internet,
        plan_id: "Giga Max".to_string(),
        base_price_bc: 50,
        base_price_sc: 60,
        asp_base: 6,
        eligibility: BonusEligibility {
            portability: false,
            convergence: true,
            soho: true,
        },
        bonus_amounts: BonusAmounts {
            portability: 25,
            convergence: 18,
            soho: 20,
        },
        asp_extra_on_soho: 3,
        fidelity_monthly: 200,
    }
}

pub(super) fn catalog() -> ProductCatalog {
    ProductCatalog::new(vec![medium_plan(), child_plan(), internet_plan()])
}

pub(super) fn engine() -> CommissionEngine {
    CommissionEngine::with_defaults(catalog())
}

pub(super) fn medium_line(rank: ConsultantRank) -> SaleLineItem {
    SaleLineItem {
        product_type: ProductType::Mobile,
        plan_id: "Medium".to_string(),
        pricing_tier: PricingTier::Bc,
        bonus_rank: rank,
        modifiers: SaleModifiers {
            is_convergence: true,
            is_portability: true,
            is_soho: true,
        },
        source_provider: Some("telenet".to_string()),
    }
}
