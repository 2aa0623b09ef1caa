use serde::{Deserialize, Serialize};

use crate::domain::Cents;

/// Recurring commission projection at the standard 6- and 24-month horizons.
/// Straight multiplication; no compounding or proration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FidelityProjection {
    pub monthly: Cents,
    pub six_months: Cents,
    pub twenty_four_months: Cents,
}

pub(crate) fn project(monthly: Cents) -> FidelityProjection {
    FidelityProjection {
        monthly,
        six_months: monthly * 6,
        twenty_four_months: monthly * 24,
    }
}

#[cfg(test)]
mod tests {
    use super::project;

    #[test]
    fn horizons_are_exact_multiples() {
        let projection = project(250);
        assert_eq!(projection.monthly, 250);
        assert_eq!(projection.six_months, 1500);
        assert_eq!(projection.twenty_four_months, 6000);
    }

    #[test]
    fn zero_monthly_projects_to_zero() {
        let projection = project(0);
        assert_eq!(projection.six_months, 0);
        assert_eq!(projection.twenty_four_months, 0);
    }
}
