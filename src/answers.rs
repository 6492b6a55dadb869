//! Participant answers and project activities.
//!
//! Answers arrive incrementally from the questionnaire, so every field is
//! optional. Distances are kept as submitted; the calculator decides what
//! contributes.

use crate::factors::{
    AccommodationCategory, ActivityType, CarType, Electricity, MeatFrequency, RoomOccupancy,
    TransportMode,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Answers of one participant (partial while the questionnaire is in progress)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantAnswers {
    /// Trip length in days (nights-equivalent)
    pub days: Option<f64>,
    pub accommodation_category: Option<AccommodationCategory>,
    pub room_occupancy: Option<RoomOccupancy>,
    pub electricity: Option<Electricity>,
    /// Meat-eating frequency
    pub food: Option<MeatFrequency>,

    // One-way distances (km) on the way TO the project
    pub flight_km: Option<f64>,
    pub boat_km: Option<f64>,
    pub train_km: Option<f64>,
    pub bus_km: Option<f64>,
    pub car_km: Option<f64>,

    /// Only meaningful when `car_km` is set
    pub car_type: Option<CarType>,
    /// Occupants sharing the car, including the participant
    pub car_passengers: Option<f64>,
}

impl ParticipantAnswers {
    /// One-way distance answered for a mode
    pub fn distance_km(&self, mode: TransportMode) -> Option<f64> {
        match mode {
            TransportMode::Flight => self.flight_km,
            TransportMode::Boat => self.boat_km,
            TransportMode::Train => self.train_km,
            TransportMode::Bus => self.bus_km,
            TransportMode::Car => self.car_km,
        }
    }

    pub fn set_distance_km(&mut self, mode: TransportMode, km: Option<f64>) {
        match mode {
            TransportMode::Flight => self.flight_km = km,
            TransportMode::Boat => self.boat_km = km,
            TransportMode::Train => self.train_km = km,
            TransportMode::Bus => self.bus_km = km,
            TransportMode::Car => self.car_km = km,
        }
    }

    /// Distance that actually contributes: present, finite and positive
    pub fn contributing_km(&self, mode: TransportMode) -> Option<f64> {
        self.distance_km(mode).filter(|km| contributes(*km))
    }

    /// Days that actually contribute: present, finite and positive
    pub fn contributing_days(&self) -> Option<f64> {
        self.days.filter(|d| contributes(*d))
    }

    /// Passengers sharing the car, at least 1; non-finite counts as 1
    pub fn car_occupants(&self) -> f64 {
        self.car_passengers
            .filter(|p| p.is_finite())
            .map_or(1.0, |p| p.max(1.0))
    }
}

/// Absent, zero, negative and non-finite values carry no contribution
pub(crate) fn contributes(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Shared travel attributed to a whole project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectActivity {
    pub activity_type: ActivityType,
    /// Aggregate distance in km; `NaN` when the stored value is not numeric
    #[serde(default = "missing_km", deserialize_with = "deserialize_lenient_km")]
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectActivity {
    pub fn new(activity_type: ActivityType, distance_km: f64) -> Self {
        Self {
            activity_type,
            distance_km,
            description: None,
        }
    }

    /// Distance if it can contribute to the baseline
    pub fn contributing_km(&self) -> Option<f64> {
        Some(self.distance_km).filter(|km| contributes(*km))
    }
}

fn missing_km() -> f64 {
    f64::NAN
}

/// Accepts a JSON number or a numeric string; anything else becomes `NaN`.
fn deserialize_lenient_km<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}
