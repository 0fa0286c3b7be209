//! Rule-based theft-risk lookup.
//!
//! The heuristic compares a query hour against the historically most
//! frequent theft hour for one district/bike-type slice. An empty slice
//! is "no signal" and maps to low risk by policy, not by inference.

use serde::Serialize;
use std::fmt;

use crate::data::thefts::TheftRecord;

/// Binary risk label returned by the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::High => write!(f, "High Risk"),
        }
    }
}

/// Outcome of one risk lookup, including the supporting evidence.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Most frequent theft hour in the filtered slice, when non-empty
    pub mode_hour: Option<u8>,
    /// Number of historical records in the filtered slice
    pub sample_size: usize,
    /// Half-width of the high-risk window used
    pub window: u8,
}

/// Select the records for one district/bike-type slice.
///
/// The location code is compared exactly (both sides are zero-padded at
/// load time); the bike type matches case-insensitively.
pub fn filter_slice<'a>(
    records: &'a [TheftRecord],
    location_code: &str,
    bike_type: &str,
) -> Vec<&'a TheftRecord> {
    let wanted_type = bike_type.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.location_code == location_code && r.bike_type.to_lowercase() == wanted_type)
        .collect()
}

/// Most frequent hour in a slice; ties go to the hour seen first.
pub fn mode_hour(records: &[&TheftRecord]) -> Option<u8> {
    let mut counts = [0u32; 24];
    let mut first_seen = [usize::MAX; 24];
    for (index, record) in records.iter().enumerate() {
        let hour = record.hour as usize;
        counts[hour] += 1;
        if first_seen[hour] == usize::MAX {
            first_seen[hour] = index;
        }
    }

    let mut best: Option<usize> = None;
    for hour in 0..24 {
        if counts[hour] == 0 {
            continue;
        }
        best = match best {
            None => Some(hour),
            Some(current)
                if counts[hour] > counts[current]
                    || (counts[hour] == counts[current]
                        && first_seen[hour] < first_seen[current]) =>
            {
                Some(hour)
            }
            Some(current) => Some(current),
        };
    }
    best.map(|h| h as u8)
}

/// Assess theft risk for a query hour against one historical slice.
///
/// High risk iff the query hour lies within the closed window
/// `[mode - window, mode + window]`. The window never wraps across
/// midnight: hour 0 and hour 23 are not adjacent.
pub fn assess_risk(
    records: &[TheftRecord],
    location_code: &str,
    bike_type: &str,
    hour: u8,
    window: u8,
) -> RiskAssessment {
    let slice = filter_slice(records, location_code, bike_type);
    let mode = mode_hour(&slice);

    let level = match mode {
        Some(mode) => {
            let distance = (i16::from(hour) - i16::from(mode)).abs();
            if distance <= i16::from(window) {
                RiskLevel::High
            } else {
                RiskLevel::Low
            }
        }
        None => RiskLevel::Low,
    };

    RiskAssessment {
        level,
        mode_hour: mode,
        sample_size: slice.len(),
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(location_code: &str, bike_type: &str, hour: u8) -> TheftRecord {
        TheftRecord {
            location_code: location_code.to_string(),
            bike_type: bike_type.to_string(),
            hour,
            reported_on: None,
            offense_date: None,
            damage_eur: None,
        }
    }

    /// The worked example: hours [14,15,14,16,14] for one slice.
    fn example_records() -> Vec<TheftRecord> {
        [14, 15, 14, 16, 14]
            .iter()
            .map(|&h| record("01011101", "Fahrrad", h))
            .chain(std::iter::once(record("02022202", "Fahrrad", 3)))
            .chain(std::iter::once(record("01011101", "Mountainbike", 3)))
            .collect()
    }

    #[test]
    fn test_filter_slice_matches_both_fields() {
        let records = example_records();
        let slice = filter_slice(&records, "01011101", "Fahrrad");
        assert_eq!(slice.len(), 5);
    }

    #[test]
    fn test_filter_slice_bike_type_case_insensitive() {
        let records = example_records();
        assert_eq!(filter_slice(&records, "01011101", "fahrrad").len(), 5);
        assert_eq!(filter_slice(&records, "01011101", "FAHRRAD").len(), 5);
    }

    #[test]
    fn test_filter_slice_location_code_is_exact() {
        let records = example_records();
        // unpadded code must not match - padding happens at load time
        assert!(filter_slice(&records, "1011101", "Fahrrad").is_empty());
    }

    #[test]
    fn test_mode_hour_worked_example() {
        let records = example_records();
        let slice = filter_slice(&records, "01011101", "Fahrrad");
        assert_eq!(mode_hour(&slice), Some(14));
    }

    #[test]
    fn test_mode_hour_tie_goes_to_first_seen() {
        let records: Vec<TheftRecord> = [22, 9, 22, 9]
            .iter()
            .map(|&h| record("01011101", "Fahrrad", h))
            .collect();
        let slice: Vec<&TheftRecord> = records.iter().collect();
        assert_eq!(mode_hour(&slice), Some(22));
    }

    #[test]
    fn test_mode_hour_empty() {
        assert_eq!(mode_hour(&[]), None);
    }

    #[test]
    fn test_empty_slice_is_low_risk_for_every_hour() {
        let records = example_records();
        for hour in 0..=23 {
            let assessment = assess_risk(&records, "09099909", "Fahrrad", hour, 1);
            assert_eq!(assessment.level, RiskLevel::Low);
            assert_eq!(assessment.sample_size, 0);
            assert_eq!(assessment.mode_hour, None);
        }
    }

    #[test]
    fn test_window_boundaries() {
        let records = example_records();
        // mode is 14; the closed window [13, 15] is high risk
        for hour in [13, 14, 15] {
            let assessment = assess_risk(&records, "01011101", "Fahrrad", hour, 1);
            assert_eq!(assessment.level, RiskLevel::High, "hour {hour}");
        }
        for hour in [12, 16] {
            let assessment = assess_risk(&records, "01011101", "Fahrrad", hour, 1);
            assert_eq!(assessment.level, RiskLevel::Low, "hour {hour}");
        }
    }

    #[test]
    fn test_worked_example_queries() {
        let records = example_records();
        assert_eq!(
            assess_risk(&records, "01011101", "Fahrrad", 15, 1).level,
            RiskLevel::High
        );
        assert_eq!(
            assess_risk(&records, "01011101", "Fahrrad", 18, 1).level,
            RiskLevel::Low
        );
    }

    #[test]
    fn test_no_wraparound_at_midnight() {
        let late: Vec<TheftRecord> = (0..3).map(|_| record("01011101", "Fahrrad", 23)).collect();
        let assessment = assess_risk(&late, "01011101", "Fahrrad", 0, 1);
        assert_eq!(assessment.level, RiskLevel::Low);

        let early: Vec<TheftRecord> = (0..3).map(|_| record("01011101", "Fahrrad", 0)).collect();
        let assessment = assess_risk(&early, "01011101", "Fahrrad", 23, 1);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_wider_window() {
        let records = example_records();
        let assessment = assess_risk(&records, "01011101", "Fahrrad", 18, 4);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.window, 4);
    }

    #[test]
    fn test_assessment_reports_evidence() {
        let records = example_records();
        let assessment = assess_risk(&records, "01011101", "Fahrrad", 15, 1);
        assert_eq!(assessment.mode_hour, Some(14));
        assert_eq!(assessment.sample_size, 5);
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::High.to_string(), "High Risk");
        assert_eq!(RiskLevel::Low.to_string(), "Low Risk");
    }
}
