use serde::{Deserialize, Serialize};

use super::LineBreakdown;

/// Deal-level ASP aggregation, split so reporting can distinguish the base
/// accrual from SoHo extras.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspTotals {
    pub total: u32,
    pub base: u32,
    pub extra: u32,
}

/// Sum point metrics across a deal's line breakdowns.
pub fn accumulate(lines: &[LineBreakdown]) -> AspTotals {
    let mut totals = AspTotals::default();
    for line in lines {
        totals.base += line.asp_base;
        totals.extra += line.asp_extra;
    }
    totals.total = totals.base + totals.extra;
    totals
}
