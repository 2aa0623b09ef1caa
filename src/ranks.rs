//! Consultant rank ladder and the flat rank-bonus reference table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Cents;

/// Seven-level compensation ladder, ordered by seniority. Distinct from the
/// two-tier BC/SC base-pricing axis even though the two lowest names overlap.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConsultantRank {
    Bc,
    Sc,
    Ec,
    Pc,
    Mc,
    Nmc,
    Pmc,
}

impl ConsultantRank {
    pub const LADDER: [ConsultantRank; 7] = [
        ConsultantRank::Bc,
        ConsultantRank::Sc,
        ConsultantRank::Ec,
        ConsultantRank::Pc,
        ConsultantRank::Mc,
        ConsultantRank::Nmc,
        ConsultantRank::Pmc,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ConsultantRank::Bc => "BC",
            ConsultantRank::Sc => "SC",
            ConsultantRank::Ec => "EC",
            ConsultantRank::Pc => "PC",
            ConsultantRank::Mc => "MC",
            ConsultantRank::Nmc => "NMC",
            ConsultantRank::Pmc => "PMC",
        }
    }
}

/// Immutable reference table mapping each rank to its flat per-sale bonus and
/// the ASP threshold the rank is expected to maintain. The ASP thresholds are
/// reporting-only: rank qualification is decided by an external service, so
/// the engine never gates a calculation on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankBonusTable {
    bonuses: BTreeMap<ConsultantRank, Cents>,
    minimum_asp: BTreeMap<ConsultantRank, u32>,
}

impl RankBonusTable {
    pub fn new(
        bonuses: BTreeMap<ConsultantRank, Cents>,
        minimum_asp: BTreeMap<ConsultantRank, u32>,
    ) -> Self {
        Self {
            bonuses,
            minimum_asp,
        }
    }

    /// Flat bonus in cents for a sale credited at the given rank.
    pub fn bonus_for(&self, rank: ConsultantRank) -> Cents {
        self.bonuses.get(&rank).copied().unwrap_or(0)
    }

    /// ASP threshold associated with a rank, for reporting surfaces.
    pub fn minimum_asp_for(&self, rank: ConsultantRank) -> u32 {
        self.minimum_asp.get(&rank).copied().unwrap_or(0)
    }
}

impl Default for RankBonusTable {
    fn default() -> Self {
        let bonuses = ConsultantRank::LADDER
            .into_iter()
            .zip([0, 10, 20, 35, 50, 65, 80])
            .collect();
        let minimum_asp = ConsultantRank::LADDER
            .into_iter()
            .zip([0, 25, 50, 100, 200, 350, 500])
            .collect();
        Self::new(bonuses, minimum_asp)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsultantRank, RankBonusTable};

    #[test]
    fn default_bonuses_increase_with_seniority() {
        let table = RankBonusTable::default();
        for pair in ConsultantRank::LADDER.windows(2) {
            assert!(
                table.bonus_for(pair[0]) < table.bonus_for(pair[1]),
                "bonus for {} should be below {}",
                pair[0].label(),
                pair[1].label()
            );
        }
    }

    #[test]
    fn default_asp_thresholds_increase_with_seniority() {
        let table = RankBonusTable::default();
        for pair in ConsultantRank::LADDER.windows(2) {
            assert!(table.minimum_asp_for(pair[0]) < table.minimum_asp_for(pair[1]));
        }
    }

    #[test]
    fn ladder_endpoints_match_compensation_plan() {
        let table = RankBonusTable::default();
        assert_eq!(table.bonus_for(ConsultantRank::Bc), 0);
        assert_eq!(table.bonus_for(ConsultantRank::Pmc), 80);
    }
}
