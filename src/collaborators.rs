//! Trait seams for the external services the engine is composed with. The
//! engine consumes these interfaces only; resolving sponsor relationships,
//! deciding rank entitlement, and persisting snapshots all live elsewhere.

use std::sync::Arc;

use crate::clawback::ClawbackState;
use crate::domain::UplineNode;
use crate::engine::{CommissionEngine, CommissionRequest, CommissionStatement};
use crate::error::EngineError;
use crate::ranks::ConsultantRank;

/// Failures surfaced by external collaborators.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("consultant not found: {0}")]
    ConsultantNotFound(String),
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the ordered, depth-bounded, cycle-free upline chain for a
/// selling consultant.
pub trait SponsorHierarchyResolver: Send + Sync {
    fn upline_chain(&self, consultant_id: &str) -> Result<Vec<UplineNode>, CollaboratorError>;
}

/// Decides which rank a consultant may actually use on a sale. The engine
/// never reasons about entitlement itself.
pub trait RankQualificationService: Send + Sync {
    fn qualified_rank(
        &self,
        consultant_id: &str,
        requested: ConsultantRank,
    ) -> Result<ConsultantRank, CollaboratorError>;
}

/// Persists recomputed clawback snapshots so reporting can track exposure
/// over time. The engine itself keeps no history.
pub trait ClawbackSnapshotStore: Send + Sync {
    fn record(
        &self,
        consultant_id: &str,
        state: &ClawbackState,
    ) -> Result<(), CollaboratorError>;
}

/// Error raised by the deal-settlement service.
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Service composing the pure engine with the hierarchy, qualification, and
/// snapshot collaborators for callers that settle by consultant id.
pub struct CommissionService<H, Q, S> {
    engine: Arc<CommissionEngine>,
    hierarchy: Arc<H>,
    qualification: Arc<Q>,
    snapshots: Arc<S>,
}

impl<H, Q, S> CommissionService<H, Q, S>
where
    H: SponsorHierarchyResolver + 'static,
    Q: RankQualificationService + 'static,
    S: ClawbackSnapshotStore + 'static,
{
    pub fn new(
        engine: Arc<CommissionEngine>,
        hierarchy: Arc<H>,
        qualification: Arc<Q>,
        snapshots: Arc<S>,
    ) -> Self {
        Self {
            engine,
            hierarchy,
            qualification,
            snapshots,
        }
    }

    /// Settle a deal for a consultant: resolve the upline through the
    /// hierarchy collaborator, cap every line's bonus rank at what the
    /// qualification service allows, run the engine, and hand any clawback
    /// snapshot to the store.
    pub fn settle_deal(
        &self,
        consultant_id: &str,
        mut request: CommissionRequest,
    ) -> Result<CommissionStatement, SettlementError> {
        request.upline_chain = self.hierarchy.upline_chain(consultant_id)?;
        for item in &mut request.line_items {
            item.bonus_rank = self
                .qualification
                .qualified_rank(consultant_id, item.bonus_rank)?;
        }

        let statement = self.engine.calculate(&request)?;

        if let Some(state) = &statement.clawback {
            self.snapshots.record(consultant_id, state)?;
        }

        Ok(statement)
    }
}
