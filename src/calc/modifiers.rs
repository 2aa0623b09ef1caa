use std::collections::HashSet;

use crate::catalog::normalizer::normalize_key;
use crate::catalog::{BonusKind, ProductCatalogEntry};
use crate::domain::{Cents, PricingTier, SaleModifiers};

const DEFAULT_SELF_BRAND_PROVIDERS: &[&str] = &["orange", "orange belgium"];

/// Providers that count as the house brand. Porting a number in from one of
/// these never pays the portability bonus, whatever the flags say.
#[derive(Debug, Clone)]
pub struct SelfBrandPolicy {
    providers: HashSet<String>,
}

impl SelfBrandPolicy {
    pub fn new(providers: Vec<String>) -> Self {
        let providers = providers
            .iter()
            .map(|provider| normalize_key(provider))
            .filter(|provider| !provider.is_empty())
            .collect();
        Self { providers }
    }

    pub fn is_self_brand(&self, provider: &str) -> bool {
        self.providers.contains(&normalize_key(provider))
    }
}

impl Default for SelfBrandPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_SELF_BRAND_PROVIDERS
                .iter()
                .map(|provider| provider.to_string())
                .collect(),
        )
    }
}

/// Base retail plus the independently evaluated modifier bonuses for a line,
/// with the ASP split the accumulator reports on.
pub(crate) struct ResolvedModifiers {
    pub base_retail: Cents,
    pub convergence_bonus: Cents,
    pub portability_bonus: Cents,
    pub soho_bonus: Cents,
    pub asp_base: u32,
    pub asp_extra: u32,
}

/// Evaluate the three modifier bonuses against catalog eligibility and the
/// self-brand exclusion. Zero to three bonuses may apply at once; none of
/// them interact.
pub(crate) fn resolve(
    entry: &ProductCatalogEntry,
    tier: PricingTier,
    modifiers: &SaleModifiers,
    source_provider: Option<&str>,
    self_brand: &SelfBrandPolicy,
) -> ResolvedModifiers {
    let convergence_bonus = if modifiers.is_convergence
        && entry.is_bonus_eligible(BonusKind::Convergence)
    {
        entry.bonus_amount(BonusKind::Convergence)
    } else {
        0
    };

    let external_port = source_provider
        .map(|provider| !self_brand.is_self_brand(provider))
        .unwrap_or(false);
    let portability_bonus = if modifiers.is_portability
        && entry.is_bonus_eligible(BonusKind::Portability)
        && external_port
    {
        entry.bonus_amount(BonusKind::Portability)
    } else {
        0
    };

    let soho_bonus = if modifiers.is_soho && entry.is_bonus_eligible(BonusKind::Soho) {
        entry.bonus_amount(BonusKind::Soho)
    } else {
        0
    };

    // Extra ASP rides on the SoHo bonus actually applying, not on the flag.
    let asp_extra = if soho_bonus > 0 {
        entry.asp_extra_on_soho
    } else {
        0
    };

    ResolvedModifiers {
        base_retail: entry.base_price(tier),
        convergence_bonus,
        portability_bonus,
        soho_bonus,
        asp_base: entry.asp_base,
        asp_extra,
    }
}
