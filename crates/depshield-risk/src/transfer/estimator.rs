//! Base risk estimation for file transfers.
//!
//! Pure, total functions of record fields and fixed thresholds. Unknown
//! activity types rank Low rather than failing.

use chrono::NaiveDate;

use crate::transfer::vocabulary::RiskLevel;
use crate::types::FileTransfer;

/// Activity within this many days is considered recent.
pub const DAYS_SINCE_HIGH_TRANSFER_RISK: i64 = 5;
/// Activity within this many days is considered somewhat recent.
pub const DAYS_SINCE_MEDIUM_TRANSFER_RISK: i64 = 7;
/// Transfers at or above this size are considered large.
pub const HIGH_RISK_FILE_SIZE_MB: f64 = 100.0;
/// Transfers at or above this size are considered moderate.
pub const MEDIUM_RISK_FILE_SIZE_MB: f64 = 10.0;

/// Activity types that rank High on their own.
pub const HIGH_RISK_ACTIVITIES: [&str; 2] = ["Bulk Transfer", "Data Export"];
/// Activity types that rank Medium on their own.
pub const MEDIUM_RISK_ACTIVITIES: [&str; 1] = ["File Sharing"];

/// Days since the transfer happened, relative to `today`.
#[must_use]
pub fn days_since_activity(transfer: &FileTransfer, today: NaiveDate) -> i64 {
    (today - transfer.timestamp.date_naive()).num_days()
}

/// Base data-exfiltration risk.
///
/// The grouping is `((recent or large) and personal-destination) or
/// external-sharing`: the external-sharing clause triggers High on its own,
/// independent of recency and size.
#[must_use]
pub fn base_data_exfiltration_risk(
    days_since_activity: i64,
    transfer: &FileTransfer,
) -> RiskLevel {
    let recent_or_large = days_since_activity <= DAYS_SINCE_HIGH_TRANSFER_RISK
        || transfer.size_mb >= HIGH_RISK_FILE_SIZE_MB;
    let personal_destination = transfer
        .location
        .destination
        .to_lowercase()
        .contains("personal");
    let external_sharing = transfer.sharing_status.to_lowercase().contains("external");

    if recent_or_large && personal_destination || external_sharing {
        RiskLevel::High
    } else if (days_since_activity <= DAYS_SINCE_MEDIUM_TRANSFER_RISK
        || transfer.size_mb >= MEDIUM_RISK_FILE_SIZE_MB)
        && transfer.sharing_status.to_lowercase().contains("restricted")
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Risk ranking of an activity type.
#[must_use]
pub fn activity_type_risk(activity_type: &str) -> RiskLevel {
    if HIGH_RISK_ACTIVITIES.contains(&activity_type) {
        RiskLevel::High
    } else if MEDIUM_RISK_ACTIVITIES.contains(&activity_type) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
