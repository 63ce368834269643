use serde_json::json;
use std::collections::HashMap;

use super::row;
use crate::report::columns;
use crate::report::sla::{
    active_rules, apply, classify, parse_elapsed_minutes, SlaStatus, AGENT_PICKUP_THRESHOLD,
    DEALER_PAYMENT_THRESHOLD, SLA_RULES,
};

/// Tests the three-way classification around an exact 60-minute allowance.
///
/// Expected: 59 -> Before, 60 -> Ontime, 61 -> Delayed
#[test]
fn classifies_against_allowed_minutes() {
    assert_eq!(classify(59, 60), SlaStatus::Before);
    assert_eq!(classify(60, 60), SlaStatus::Ontime);
    assert_eq!(classify(61, 60), SlaStatus::Delayed);
}

/// Tests HH:MM:SS parsing: seconds are truncated, malformed input is None.
#[test]
fn parses_elapsed_minutes() {
    assert_eq!(parse_elapsed_minutes("01:30:00"), Some(90));
    assert_eq!(parse_elapsed_minutes("00:59:59"), Some(59));
    assert_eq!(parse_elapsed_minutes("10:00:30"), Some(600));
    assert_eq!(parse_elapsed_minutes("xx:10:00"), None);
    assert_eq!(parse_elapsed_minutes("10:00"), None);
    assert_eq!(parse_elapsed_minutes("1:2:3:4"), None);
    assert_eq!(parse_elapsed_minutes(""), None);
}

/// Tests that rules activate only when one of their column ids is
/// requested.
#[test]
fn activates_rules_on_requested_columns() {
    assert!(active_rules(&[columns::CASE_NUMBER]).is_empty());

    let agent_only = active_rules(&[columns::AGENT_PICKUP_DELAY, columns::CASE_NUMBER]);
    assert_eq!(agent_only.len(), 1);
    assert_eq!(agent_only[0].threshold_type, AGENT_PICKUP_THRESHOLD);

    let both = active_rules(&[columns::AGENT_PICKUP_DELAY, columns::DEALER_PAYMENT_DELAY]);
    assert_eq!(both.len(), SLA_RULES.len());
}

/// Tests that requesting a status column without its elapsed-time column
/// still activates the rule; the status column is what consumes the
/// classification.
#[test]
fn activates_rules_on_status_columns_alone() {
    let agent = active_rules(&[columns::AGENT_SLA_STATUS]);
    assert_eq!(agent.len(), 1);
    assert_eq!(agent[0].threshold_type, AGENT_PICKUP_THRESHOLD);

    let dealer = active_rules(&[columns::DEALER_SLA_STATUS, columns::CASE_NUMBER]);
    assert_eq!(dealer.len(), 1);
    assert_eq!(dealer[0].threshold_type, DEALER_PAYMENT_THRESHOLD);

    // Requesting both ids of one rule activates it once, not twice.
    let deduped = active_rules(&[columns::AGENT_PICKUP_DELAY, columns::AGENT_SLA_STATUS]);
    assert_eq!(deduped.len(), 1);
}

/// Tests that a status-only request classifies end to end: the rule reads
/// the elapsed field from the raw row even though the elapsed column was
/// not requested.
#[test]
fn classifies_when_only_status_column_requested() {
    let mut rows = vec![row(json!({"agentPickupDelay": "00:30:00"}))];
    let rules = active_rules(&[columns::AGENT_SLA_STATUS]);
    let thresholds = HashMap::from([(AGENT_PICKUP_THRESHOLD, 3600)]);

    apply(&mut rows, &rules, &thresholds);

    assert_eq!(rows[0]["Agent SLA Status"], json!("Before"));
}

/// Tests that a non-whole-minute allowance is truncated to whole minutes,
/// matching the precision of the elapsed value.
///
/// Expected: 3630 seconds classifies exactly like 3600 seconds
#[test]
fn truncates_allowance_to_whole_minutes() {
    let mut rows = vec![
        row(json!({"agentPickupDelay": "01:00:00"})),
        row(json!({"agentPickupDelay": "01:01:00"})),
    ];
    let rules = active_rules(&[columns::AGENT_PICKUP_DELAY]);
    let thresholds = HashMap::from([(AGENT_PICKUP_THRESHOLD, 3630)]);

    apply(&mut rows, &rules, &thresholds);

    assert_eq!(rows[0]["Agent SLA Status"], json!("Ontime"));
    assert_eq!(rows[1]["Agent SLA Status"], json!("Delayed"));
}

/// Tests classification applied across rows with a 3600-second allowance.
///
/// Expected: 00:59:59 -> Before, 01:00:59 -> Ontime, 01:01:00 -> Delayed
#[test]
fn writes_status_fields_into_rows() {
    let mut rows = vec![
        row(json!({"agentPickupDelay": "00:59:59"})),
        row(json!({"agentPickupDelay": "01:00:59"})),
        row(json!({"agentPickupDelay": "01:01:00"})),
    ];
    let rules = active_rules(&[columns::AGENT_PICKUP_DELAY]);
    let thresholds = HashMap::from([(AGENT_PICKUP_THRESHOLD, 3600)]);

    apply(&mut rows, &rules, &thresholds);

    assert_eq!(rows[0]["Agent SLA Status"], json!("Before"));
    assert_eq!(rows[1]["Agent SLA Status"], json!("Ontime"));
    assert_eq!(rows[2]["Agent SLA Status"], json!("Delayed"));
}

/// Tests that rows with a missing, empty, or malformed duration get no
/// status field at all, while the rest of the batch still classifies.
#[test]
fn skips_unclassifiable_rows() {
    let mut rows = vec![
        row(json!({"caseNumber": 1})),
        row(json!({"agentPickupDelay": ""})),
        row(json!({"agentPickupDelay": "bogus"})),
        row(json!({"agentPickupDelay": "02:00:00"})),
    ];
    let rules = active_rules(&[columns::AGENT_PICKUP_DELAY]);
    let thresholds = HashMap::from([(AGENT_PICKUP_THRESHOLD, 3600)]);

    apply(&mut rows, &rules, &thresholds);

    assert!(!rows[0].contains_key("Agent SLA Status"));
    assert!(!rows[1].contains_key("Agent SLA Status"));
    assert!(!rows[2].contains_key("Agent SLA Status"));
    assert_eq!(rows[3]["Agent SLA Status"], json!("Delayed"));
}

/// Tests that an unconfigured threshold type classifies nothing.
#[test]
fn unconfigured_threshold_classifies_nothing() {
    let mut rows = vec![row(json!({"dealerPaymentDelay": "02:00:00"}))];
    let rules = active_rules(&[columns::DEALER_PAYMENT_DELAY]);
    // Only the agent threshold is configured.
    let thresholds = HashMap::from([(AGENT_PICKUP_THRESHOLD, 3600)]);

    apply(&mut rows, &rules, &thresholds);

    assert!(!rows[0].contains_key("Dealer SLA Status"));
}

/// Tests that both rules run independently over the same rows.
#[test]
fn applies_both_rules() {
    let mut rows = vec![row(json!({
        "agentPickupDelay": "00:30:00",
        "dealerPaymentDelay": "03:00:00"
    }))];
    let rules = active_rules(&[columns::AGENT_PICKUP_DELAY, columns::DEALER_PAYMENT_DELAY]);
    let thresholds = HashMap::from([
        (AGENT_PICKUP_THRESHOLD, 3600),
        (DEALER_PAYMENT_THRESHOLD, 7200),
    ]);

    apply(&mut rows, &rules, &thresholds);

    assert_eq!(rows[0]["Agent SLA Status"], json!("Before"));
    assert_eq!(rows[0]["Dealer SLA Status"], json!("Delayed"));
}
