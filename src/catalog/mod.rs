//! Immutable product reference data and the (product type, plan) resolver.
//!
//! The catalog is constructed once and injected into the engine; lookups are
//! case- and whitespace-insensitive over the plan name.

mod aliases;
pub(crate) mod normalizer;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Cents, PricingTier, ProductType};
use crate::error::EngineError;
use normalizer::normalize_key;

/// The three per-sale bonus kinds a plan can be structurally eligible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusKind {
    Portability,
    Convergence,
    Soho,
}

/// Structural eligibility flags for a plan. A modifier flag on the sale never
/// grants a bonus the catalog does not mark eligible here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEligibility {
    pub portability: bool,
    pub convergence: bool,
    pub soho: bool,
}

/// Flat bonus amounts per kind, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAmounts {
    pub portability: Cents,
    pub convergence: Cents,
    pub soho: Cents,
}

/// Pricing and eligibility attributes for one sellable plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalogEntry {
    pub product_type: ProductType,
    pub plan_id: String,
    pub base_price_bc: Cents,
    pub base_price_sc: Cents,
    pub asp_base: u32,
    pub eligibility: BonusEligibility,
    pub bonus_amounts: BonusAmounts,
    pub asp_extra_on_soho: u32,
    pub fidelity_monthly: Cents,
}

impl ProductCatalogEntry {
    pub fn base_price(&self, tier: PricingTier) -> Cents {
        match tier {
            PricingTier::Bc => self.base_price_bc,
            PricingTier::Sc => self.base_price_sc,
        }
    }

    pub fn is_bonus_eligible(&self, kind: BonusKind) -> bool {
        match kind {
            BonusKind::Portability => self.eligibility.portability,
            BonusKind::Convergence => self.eligibility.convergence,
            BonusKind::Soho => self.eligibility.soho,
        }
    }

    pub fn bonus_amount(&self, kind: BonusKind) -> Cents {
        match kind {
            BonusKind::Portability => self.bonus_amounts.portability,
            BonusKind::Convergence => self.bonus_amounts.convergence,
            BonusKind::Soho => self.bonus_amounts.soho,
        }
    }
}

/// Raw catalog row as exported by upstream plan administration, with the
/// product family still in free text. Resolved through the synonym table
/// during ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub product: String,
    pub plan_id: String,
    pub base_price_bc: Cents,
    pub base_price_sc: Cents,
    #[serde(default)]
    pub asp_base: u32,
    #[serde(default)]
    pub eligibility: BonusEligibility,
    #[serde(default)]
    pub bonus_amounts: BonusAmounts,
    #[serde(default)]
    pub asp_extra_on_soho: u32,
    #[serde(default)]
    pub fidelity_monthly: Cents,
}

/// Immutable plan reference data keyed by (product type, normalized plan name).
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    entries: HashMap<(ProductType, String), ProductCatalogEntry>,
}

impl ProductCatalog {
    pub fn new(entries: Vec<ProductCatalogEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = (entry.product_type, normalize_key(&entry.plan_id));
            map.insert(key, entry);
        }
        tracing::debug!(plans = map.len(), "product catalog constructed");
        Self { entries: map }
    }

    /// Build a catalog from upstream rows, resolving free-text product names
    /// through the synonym table. Unrecognized product names abort ingestion.
    pub fn from_rows(rows: Vec<CatalogRow>) -> Result<Self, EngineError> {
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let product_type = aliases::product_type_for(&row.product).ok_or_else(|| {
                EngineError::UnknownProduct {
                    product: row.product.clone(),
                    plan_id: row.plan_id.clone(),
                }
            })?;
            entries.push(ProductCatalogEntry {
                product_type,
                plan_id: row.plan_id,
                base_price_bc: row.base_price_bc,
                base_price_sc: row.base_price_sc,
                asp_base: row.asp_base,
                eligibility: row.eligibility,
                bonus_amounts: row.bonus_amounts,
                asp_extra_on_soho: row.asp_extra_on_soho,
                fidelity_monthly: row.fidelity_monthly,
            });
        }
        Ok(Self::new(entries))
    }

    pub fn lookup(
        &self,
        product_type: ProductType,
        plan_id: &str,
    ) -> Result<&ProductCatalogEntry, EngineError> {
        self.entries
            .get(&(product_type, normalize_key(plan_id)))
            .ok_or_else(|| EngineError::UnknownProduct {
                product: product_type.label().to_string(),
                plan_id: plan_id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
