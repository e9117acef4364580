//! Base risk estimation for secrets.
//!
//! Pure, total functions of record fields and fixed thresholds. Data-quality
//! issues (no scheduled rotation) degrade to conservative defaults instead of
//! failing.

use chrono::NaiveDate;

use crate::secret::vocabulary::RiskLevel;
use crate::types::Secret;

/// Rotation more than this many days out is considered distant.
pub const HIGH_ROTATION_THRESHOLD_DAYS: i64 = 90;
/// Rotation more than this many days out is considered somewhat distant.
pub const MID_ROTATION_THRESHOLD_DAYS: i64 = 30;
/// Access within this many days is considered recent.
pub const DAYS_SINCE_HIGH_ACCESS_RISK: i64 = 7;
/// Access within this many days is considered somewhat recent.
pub const DAYS_SINCE_MEDIUM_ACCESS_RISK: i64 = 30;
/// Sentinel used when no rotation is scheduled (5 years out).
pub const NO_ROTATION_SENTINEL_DAYS: i64 = 1825;

/// Days until the secret's next rotation, relative to `today`.
///
/// An unscheduled rotation counts as [`NO_ROTATION_SENTINEL_DAYS`] out.
#[must_use]
pub fn days_until_rotation(secret: &Secret, today: NaiveDate) -> i64 {
    match secret.next_rotation_date {
        Some(date) => (date - today).num_days(),
        None => NO_ROTATION_SENTINEL_DAYS,
    }
}

/// Days since the secret was last used, relative to `today`.
#[must_use]
pub fn days_since_last_access(secret: &Secret, today: NaiveDate) -> i64 {
    (today - secret.last_accessed).num_days()
}

/// Base persistent-access risk.
///
/// A secret that is both long-lived (distant rotation) and recently used is
/// the worst combination: a wide exposure window that is actively exercised.
#[must_use]
pub fn base_persistent_access_risk(
    days_until_rotation: i64,
    days_since_last_access: i64,
) -> RiskLevel {
    if days_until_rotation > HIGH_ROTATION_THRESHOLD_DAYS
        && days_since_last_access < DAYS_SINCE_HIGH_ACCESS_RISK
    {
        RiskLevel::High
    } else if days_until_rotation > MID_ROTATION_THRESHOLD_DAYS
        || days_since_last_access < DAYS_SINCE_MEDIUM_ACCESS_RISK
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Criticality of the service a secret grants access to.
///
/// Only services whose name contains "production" rank High; everything else
/// is Medium, so the Low branch of the criticality adjustment rule never
/// fires with this lookup.
#[must_use]
pub fn service_criticality(service: &str) -> RiskLevel {
    if service.to_lowercase().contains("production") {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SecretId;

    fn secret_with_dates(last_accessed: &str, next_rotation: Option<&str>) -> Secret {
        Secret {
            secret_id: SecretId::new("sec-001"),
            name: "db-key".to_string(),
            service: "billing-db".to_string(),
            description: "Database credentials".to_string(),
            last_accessed: last_accessed.parse().unwrap(),
            next_rotation_date: next_rotation.map(|d| d.parse().unwrap()),
        }
    }

    #[test]
    fn test_days_until_rotation_uses_sentinel_when_unscheduled() {
        let secret = secret_with_dates("2026-01-01", None);
        let today = "2026-02-01".parse().unwrap();
        assert_eq!(days_until_rotation(&secret, today), NO_ROTATION_SENTINEL_DAYS);
    }

    #[test]
    fn test_days_until_rotation_from_scheduled_date() {
        let secret = secret_with_dates("2026-01-01", Some("2026-02-11"));
        let today = "2026-02-01".parse().unwrap();
        assert_eq!(days_until_rotation(&secret, today), 10);
    }

    #[test]
    fn test_base_risk_high_needs_distant_rotation_and_recent_access() {
        assert_eq!(base_persistent_access_risk(120, 3), RiskLevel::High);
        // Recent access alone is not enough for High.
        assert_eq!(base_persistent_access_risk(60, 3), RiskLevel::Medium);
        // Distant rotation alone is not enough for High.
        assert_eq!(base_persistent_access_risk(120, 10), RiskLevel::Medium);
    }

    #[test]
    fn test_base_risk_medium_on_either_condition() {
        assert_eq!(base_persistent_access_risk(40, 200), RiskLevel::Medium);
        assert_eq!(base_persistent_access_risk(10, 20), RiskLevel::Medium);
    }

    #[test]
    fn test_base_risk_low_when_short_lived_and_stale() {
        // Sentinel rotation but access 200 days ago: fails the High recency
        // test and both Medium conditions except rotation distance.
        assert_eq!(base_persistent_access_risk(10, 200), RiskLevel::Low);
    }

    #[test]
    fn test_base_risk_unscheduled_rotation_stale_access_is_medium() {
        // days_until_rotation = sentinel (> 30) keeps the Medium branch alive
        // even for long-stale secrets.
        assert_eq!(
            base_persistent_access_risk(NO_ROTATION_SENTINEL_DAYS, 200),
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_service_criticality_production_substring() {
        assert_eq!(service_criticality("production-db"), RiskLevel::High);
        assert_eq!(service_criticality("EU-Production-API"), RiskLevel::High);
        // "prod" without the full word stays Medium.
        assert_eq!(service_criticality("prod-db"), RiskLevel::Medium);
        assert_eq!(service_criticality("staging"), RiskLevel::Medium);
    }
}
