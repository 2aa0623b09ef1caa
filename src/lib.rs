//! Commission and compensation calculation engine for telecom and energy
//! product bundles sold by a ranked consultant network.
//!
//! The crate is a pure, synchronous library: every calculation is a
//! deterministic function of explicit inputs over immutable reference data
//! (catalog, rank table, self-brand policy) injected at construction. There
//! is no I/O, no clock read inside the calculators, and no state carried
//! between calls, so engines can be shared across threads without
//! coordination. Sponsor resolution, rank entitlement, and persistence are
//! consumed through the trait seams in [`collaborators`].

pub mod calc;
pub mod catalog;
pub mod clawback;
pub mod collaborators;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ranks;
pub mod upline;

pub use calc::{AspTotals, FidelityProjection, LineBreakdown, SelfBrandPolicy};
pub use catalog::{
    BonusAmounts, BonusEligibility, BonusKind, CatalogRow, ProductCatalog, ProductCatalogEntry,
};
pub use clawback::{compute_risk, ClawbackContext, ClawbackState, ClawbackStatus};
pub use collaborators::{
    ClawbackSnapshotStore, CollaboratorError, CommissionService, RankQualificationService,
    SettlementError, SponsorHierarchyResolver,
};
pub use domain::{Cents, PricingTier, ProductType, SaleLineItem, SaleModifiers, UplineNode};
pub use engine::{CommissionEngine, CommissionRequest, CommissionStatement, DealTotals};
pub use error::EngineError;
pub use ranks::{ConsultantRank, RankBonusTable};
pub use upline::{distribute, UplineDistribution, UplinePayout};

#[cfg(test)]
mod tests;
