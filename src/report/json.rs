//! JSON output of an `EmissionReport`
//!
//! The object has three keys. `calculation` holds the component totals
//! (`transportCO2`, `accommodationCO2`, `foodCO2`, `projectActivitiesCO2`,
//! `totalCO2`) and `treesNeeded`. `transport` lists the contributing legs
//! with their one-way distance and `oneWayCO2`, plus the one-way and
//! round-trip sums. `projectActivityCount` counts the shared activities that
//! had a usable distance.

use crate::report::EmissionReport;

/// JSON formatter for emission reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &EmissionReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &EmissionReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::ParticipantAnswers;

    fn train_report() -> EmissionReport {
        let answers = ParticipantAnswers {
            train_km: Some(1000.0),
            ..Default::default()
        };
        EmissionReport::build(&answers, &[])
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&train_report()).unwrap();

        assert!(json.contains("\"transportCO2\": 82.0"));
        assert!(json.contains("\"treesNeeded\": 4"));
        assert!(json.contains("\"mode\": \"train\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&train_report()).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"projectActivityCount\":0"));
    }
}
