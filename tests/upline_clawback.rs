//! Scenarios for upline override distribution and clawback-risk tracking.

use chrono::{Duration, TimeZone, Utc};
use commission_engine::{
    compute_risk, distribute, ClawbackContext, ClawbackStatus, EngineError, UplineNode,
};

fn node(id: &str, level: u8, pct: f64) -> UplineNode {
    UplineNode {
        consultant_id: id.to_string(),
        level,
        override_percentage: pct,
    }
}

#[test]
fn two_level_chain_pays_flat_overrides_of_the_original_total() {
    let chain = vec![node("sponsor-1", 1, 0.10), node("sponsor-2", 2, 0.05)];
    let distribution = distribute(10_000, &chain).expect("valid chain");

    let amounts: Vec<i64> = distribution.payouts.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![1_000, 500]);
    assert_eq!(distribution.total_upline_cost, 1_500);
    assert_eq!(distribution.net_commission, 8_500);
    assert!(!distribution.negative_net_clamped);

    let levels: Vec<u8> = distribution.payouts.iter().map(|p| p.level).collect();
    assert_eq!(levels, vec![1, 2]);
}

#[test]
fn payout_sum_tracks_the_aggregate_percentage_within_rounding() {
    let chain = vec![
        node("a", 1, 0.07),
        node("b", 2, 0.031),
        node("c", 3, 0.013),
        node("d", 4, 0.009),
    ];
    for total in [1, 10, 99, 1_234, 10_000, 999_999] {
        let distribution = distribute(total, &chain).expect("valid chain");
        let aggregate: f64 = chain.iter().map(|n| n.override_percentage).sum();
        let expected = total as f64 * aggregate;
        let diff = (distribution.total_upline_cost as f64 - expected).abs();
        assert!(
            diff <= 1.0,
            "total {total}: cost {} deviates {diff} cents from expected {expected}",
            distribution.total_upline_cost
        );
    }
}

#[test]
fn misconfigured_chains_error_instead_of_paying() {
    let over_aggregate = vec![node("a", 1, 0.7), node("b", 2, 0.5)];
    assert!(matches!(
        distribute(10_000, &over_aggregate),
        Err(EngineError::InvalidUplinePercentage { .. })
    ));

    // Percent-style inputs (10 for 10%) are a configuration bug, not a
    // different convention; they must be rejected loudly.
    let percent_style = vec![node("a", 1, 10.0)];
    assert!(matches!(
        distribute(10_000, &percent_style),
        Err(EngineError::InvalidUplinePercentage { .. })
    ));
}

#[test]
fn fifteen_days_into_a_thirty_day_window_is_half_risk() {
    let now = Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap();
    let context = ClawbackContext {
        activation_date: now - Duration::days(15),
        guarantee_window_days: 30,
        reversed: false,
        cleared: false,
        now: None,
    };

    let state = compute_risk(&context, now, 10_000).expect("valid window");
    assert_eq!(state.elapsed_days, 15);
    assert_eq!(state.risk_percentage, 50.0);
    assert_eq!(state.status, ClawbackStatus::AtRisk);
    assert_eq!(state.potential_loss, 5_000);
}

#[test]
fn window_completion_ends_the_exposure() {
    let now = Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap();
    for elapsed in [30, 45, 400] {
        let context = ClawbackContext {
            activation_date: now - Duration::days(elapsed),
            guarantee_window_days: 30,
            reversed: false,
            cleared: false,
            now: None,
        };
        let state = compute_risk(&context, now, 10_000).expect("valid window");
        assert_eq!(state.risk_percentage, 0.0);
        assert_eq!(state.status, ClawbackStatus::Safe);
        assert_eq!(state.potential_loss, 0);
    }
}

#[test]
fn reversal_recovers_the_full_commission() {
    let now = Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap();
    let context = ClawbackContext {
        activation_date: now - Duration::days(28),
        guarantee_window_days: 30,
        reversed: true,
        cleared: false,
        now: None,
    };

    let state = compute_risk(&context, now, 16_200).expect("valid window");
    assert_eq!(state.status, ClawbackStatus::Reversed);
    assert_eq!(state.risk_percentage, 100.0);
    assert_eq!(state.potential_loss, 16_200);
}

#[test]
fn clawback_states_serialize_with_screaming_snake_statuses() {
    let now = Utc.with_ymd_and_hms(2025, 7, 15, 10, 0, 0).unwrap();
    let context = ClawbackContext {
        activation_date: now - Duration::days(15),
        guarantee_window_days: 30,
        reversed: false,
        cleared: false,
        now: None,
    };
    let state = compute_risk(&context, now, 10_000).expect("valid window");
    let value = serde_json::to_value(&state).expect("serialize");
    assert_eq!(value["status"], "AT_RISK");
    assert_eq!(value["risk_percentage"], 50.0);
}
