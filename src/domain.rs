use serde::{Deserialize, Serialize};

use crate::ranks::ConsultantRank;

/// Monetary amount in minor units (cents). Integral end-to-end so boundary
/// payloads carrying fractional amounts are rejected during deserialization.
pub type Cents = i64;

/// Product families the catalog can price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductType {
    Mobile,
    Internet,
    Energy,
    Tv,
    Boiler,
}

impl ProductType {
    pub const fn label(self) -> &'static str {
        match self {
            ProductType::Mobile => "MOBILE",
            ProductType::Internet => "INTERNET",
            ProductType::Energy => "ENERGY",
            ProductType::Tv => "TV",
            ProductType::Boiler => "BOILER",
        }
    }
}

/// Two-tier base-pricing axis. Independent from the seven-level bonus-rank
/// ladder: every bonus rank above SC still buys at BC/SC pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PricingTier {
    Bc,
    Sc,
}

/// Per-sale modifier flags declared by the caller. Flags alone never grant a
/// bonus; the catalog entry must also mark the bonus kind eligible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleModifiers {
    pub is_convergence: bool,
    pub is_portability: bool,
    pub is_soho: bool,
}

/// One sold product line inside a deal. Caller-supplied and ephemeral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLineItem {
    pub product_type: ProductType,
    pub plan_id: String,
    pub pricing_tier: PricingTier,
    pub bonus_rank: ConsultantRank,
    #[serde(default)]
    pub modifiers: SaleModifiers,
    /// Provider the customer is porting a number from, when known.
    #[serde(default)]
    pub source_provider: Option<String>,
}

/// One sponsor in the caller-resolved upline chain. The chain arrives ordered
/// and depth-bounded; the engine never walks sponsor relationships itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplineNode {
    pub consultant_id: String,
    pub level: u8,
    /// Override share of the downline commission, as a fraction in [0, 1].
    pub override_percentage: f64,
}
