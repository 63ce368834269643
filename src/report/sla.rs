//! SLA classification of elapsed-time columns.
//!
//! Runs before materialization, only when the requested column ids intersect
//! the fixed elapsed-time columns. Each rule reads an `HH:MM:SS` duration
//! from the raw row, truncates to whole minutes, compares against the
//! configured allowance and writes a three-way status into a new row field.
//! Rows with a missing or unparsable duration are left unclassified; the
//! rest of the row still materializes.
//!
//! "Ontime" fires only on exact-minute equality with the allowance. That is
//! deliberate, matching the deployed behavior, even though sub-minute
//! precision is truncated before the comparison.

use std::collections::HashMap;

use serde_json::Value;

use crate::{model::report::RawReportRow, report::columns};

/// Threshold type ids as stored in `sla_threshold`.
pub const AGENT_PICKUP_THRESHOLD: i32 = 1;
pub const DEALER_PAYMENT_THRESHOLD: i32 = 2;

/// One elapsed-time column and where its classification goes.
pub struct SlaRule {
    /// Catalog id of the elapsed-time column that triggers this rule.
    pub column_id: i32,
    /// Catalog id of the pass-through status column that consumes the
    /// classification. Requesting it alone must still trigger the rule.
    pub status_column_id: i32,
    /// Raw-row field holding the `HH:MM:SS` duration.
    pub elapsed_field: &'static str,
    /// Row field the classification is written to.
    pub status_field: &'static str,
    /// Threshold type whose allowance applies.
    pub threshold_type: i32,
}

pub static SLA_RULES: &[SlaRule] = &[
    SlaRule {
        column_id: columns::AGENT_PICKUP_DELAY,
        status_column_id: columns::AGENT_SLA_STATUS,
        elapsed_field: "agentPickupDelay",
        status_field: "Agent SLA Status",
        threshold_type: AGENT_PICKUP_THRESHOLD,
    },
    SlaRule {
        column_id: columns::DEALER_PAYMENT_DELAY,
        status_column_id: columns::DEALER_SLA_STATUS,
        elapsed_field: "dealerPaymentDelay",
        status_field: "Dealer SLA Status",
        threshold_type: DEALER_PAYMENT_THRESHOLD,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlaStatus {
    Before,
    Ontime,
    Delayed,
}

impl SlaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "Before",
            Self::Ontime => "Ontime",
            Self::Delayed => "Delayed",
        }
    }
}

/// The rules triggered by the requested column ids. A rule activates when
/// either its elapsed-time column or its status column is requested; the
/// status column is useless without the classification behind it.
pub fn active_rules(requested: &[i32]) -> Vec<&'static SlaRule> {
    SLA_RULES
        .iter()
        .filter(|rule| {
            requested.contains(&rule.column_id) || requested.contains(&rule.status_column_id)
        })
        .collect()
}

/// Parses an `HH:MM:SS` duration into whole elapsed minutes. Seconds are
/// truncated. Anything not shaped `HH:MM:SS` parses to `None`.
pub fn parse_elapsed_minutes(value: &str) -> Option<i64> {
    let mut parts = value.trim().split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let _seconds = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    Some(hours * 60 + minutes)
}

/// Classifies elapsed minutes against the allowed minutes.
pub fn classify(elapsed_minutes: i64, allowed_minutes: i64) -> SlaStatus {
    if elapsed_minutes > allowed_minutes {
        SlaStatus::Delayed
    } else if elapsed_minutes == allowed_minutes {
        SlaStatus::Ontime
    } else {
        SlaStatus::Before
    }
}

/// Applies the active rules to every row, writing status fields in place.
///
/// `allowed_seconds` is the per-type threshold snapshot fetched once for the
/// run. The allowance is truncated to whole minutes, the same precision the
/// elapsed value is compared at, so a 3630s threshold classifies exactly
/// like 3600s. Rules whose threshold type is unconfigured classify nothing,
/// and rows whose duration is missing, empty, or malformed get no status
/// field.
pub fn apply(
    rows: &mut [RawReportRow],
    rules: &[&SlaRule],
    allowed_seconds: &HashMap<i32, i32>,
) {
    for rule in rules {
        let Some(seconds) = allowed_seconds.get(&rule.threshold_type) else {
            continue;
        };
        let allowed_minutes = i64::from(*seconds) / 60;

        for row in rows.iter_mut() {
            let Some(Value::String(elapsed)) = row.get(rule.elapsed_field) else {
                continue;
            };
            if elapsed.is_empty() {
                continue;
            }
            let Some(elapsed_minutes) = parse_elapsed_minutes(elapsed) else {
                continue;
            };

            let status = classify(elapsed_minutes, allowed_minutes);
            row.insert(
                rule.status_field.to_string(),
                Value::String(status.as_str().to_string()),
            );
        }
    }
}
