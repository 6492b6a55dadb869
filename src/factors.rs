//! Emission Factor Lookup Tables
//!
//! Fixed factors used by the Greendex calculator. The tables are part of the
//! public contract: changing a value changes every published footprint.
//!
//! Units:
//! - Transport: kg CO₂ per person per km (one-way leg)
//! - Accommodation: kg CO₂ per night (single occupancy, conventional energy)
//! - Food: kg CO₂ per day, by meat-eating frequency
//!
//! Every enumerated answer is a closed enum carrying the exact label the
//! questionnaire submits (`label()` / `FromStr`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// kg CO₂ absorbed by one tree per year
pub const CO2_PER_TREE_KG: f64 = 22.0;

/// Round trip multiplier applied to per-participant transport
pub const ROUND_TRIP_FACTOR: f64 = 2.0;

/// Multiplier for green electricity; any other answer uses 1.0
pub const GREEN_ENERGY_FACTOR: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorError {
    #[error("unknown {kind} label: '{label}'")]
    UnknownLabel { kind: &'static str, label: String },
}

/// Implements label/FromStr/Display for a closed answer enum.
macro_rules! labelled_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Label as submitted by the questionnaire
            pub fn label(self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = FactorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($ty::$variant),)+
                    other => Err(FactorError::UnknownLabel {
                        kind: $kind,
                        label: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport mode for per-participant legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Flight,
    Boat,
    Train,
    Bus,
    Car,
}

labelled_enum!(TransportMode, "transport mode", {
    Flight => "flight",
    Boat => "boat",
    Train => "train",
    Bus => "bus",
    Car => "car",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    #[default]
    Conventional,
    Electric,
}

labelled_enum!(CarType, "car type", {
    Conventional => "conventional",
    Electric => "electric",
});

pub const FLIGHT_FACTOR: f64 = 0.255;
pub const CAR_CONVENTIONAL_FACTOR: f64 = 0.192;
pub const BOAT_FACTOR: f64 = 0.115;
pub const BUS_FACTOR: f64 = 0.089;
pub const CAR_ELECTRIC_FACTOR: f64 = 0.053;
pub const TRAIN_FACTOR: f64 = 0.041;

/// kg CO₂ per person per km for a transport mode.
///
/// `Car` resolves by car type; `None` means conventional.
pub fn transport_factor(mode: TransportMode, car_type: Option<CarType>) -> f64 {
    match mode {
        TransportMode::Flight => FLIGHT_FACTOR,
        TransportMode::Boat => BOAT_FACTOR,
        TransportMode::Train => TRAIN_FACTOR,
        TransportMode::Bus => BUS_FACTOR,
        TransportMode::Car => match car_type.unwrap_or_default() {
            CarType::Conventional => CAR_CONVENTIONAL_FACTOR,
            CarType::Electric => CAR_ELECTRIC_FACTOR,
        },
    }
}

/// Activity type for shared project-level travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Boat,
    Bus,
    Train,
    Car,
}

labelled_enum!(ActivityType, "activity type", {
    Boat => "boat",
    Bus => "bus",
    Train => "train",
    Car => "car",
});

impl ActivityType {
    /// Project activities have no electric variant
    pub fn transport_mode(self) -> TransportMode {
        match self {
            ActivityType::Boat => TransportMode::Boat,
            ActivityType::Bus => TransportMode::Bus,
            ActivityType::Train => TransportMode::Train,
            ActivityType::Car => TransportMode::Car,
        }
    }

    pub fn factor(self) -> f64 {
        transport_factor(self.transport_mode(), Some(CarType::Conventional))
    }
}

// ============================================================================
// ACCOMMODATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccommodationCategory {
    Camping,
    Hostel,
    #[serde(rename = "3★ Hotel")]
    ThreeStarHotel,
    #[serde(rename = "4★ Hotel")]
    FourStarHotel,
    #[serde(rename = "5★ Hotel")]
    FiveStarHotel,
    Apartment,
    #[serde(rename = "Friends/Family")]
    FriendsFamily,
}

labelled_enum!(AccommodationCategory, "accommodation category", {
    Camping => "Camping",
    Hostel => "Hostel",
    ThreeStarHotel => "3★ Hotel",
    FourStarHotel => "4★ Hotel",
    FiveStarHotel => "5★ Hotel",
    Apartment => "Apartment",
    FriendsFamily => "Friends/Family",
});

impl AccommodationCategory {
    /// kg CO₂ per night, baseline single occupancy with conventional energy
    pub fn factor(self) -> f64 {
        match self {
            AccommodationCategory::Camping => 1.5,
            AccommodationCategory::Hostel => 3.0,
            AccommodationCategory::ThreeStarHotel => 5.0,
            AccommodationCategory::FourStarHotel => 7.5,
            AccommodationCategory::FiveStarHotel => 10.0,
            AccommodationCategory::Apartment => 4.0,
            AccommodationCategory::FriendsFamily => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomOccupancy {
    #[serde(rename = "alone")]
    Alone,
    #[serde(rename = "2 people")]
    TwoPeople,
    #[serde(rename = "3 people")]
    ThreePeople,
    #[serde(rename = "4+ people")]
    FourOrMore,
}

labelled_enum!(RoomOccupancy, "room occupancy", {
    Alone => "alone",
    TwoPeople => "2 people",
    ThreePeople => "3 people",
    FourOrMore => "4+ people",
});

impl RoomOccupancy {
    /// Share of the room footprint attributed to one occupant
    pub fn factor(self) -> f64 {
        match self {
            RoomOccupancy::Alone => 1.0,
            RoomOccupancy::TwoPeople => 0.6,
            RoomOccupancy::ThreePeople => 0.4,
            RoomOccupancy::FourOrMore => 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Electricity {
    #[serde(rename = "green energy")]
    Green,
    #[serde(rename = "conventional energy")]
    Conventional,
    #[serde(rename = "could not find out")]
    Unknown,
}

labelled_enum!(Electricity, "electricity", {
    Green => "green energy",
    Conventional => "conventional energy",
    Unknown => "could not find out",
});

impl Electricity {
    pub fn factor(self) -> f64 {
        match self {
            Electricity::Green => GREEN_ENERGY_FACTOR,
            Electricity::Conventional | Electricity::Unknown => 1.0,
        }
    }
}

// ============================================================================
// FOOD
// ============================================================================

/// How often the participant eats meat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeatFrequency {
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "rarely")]
    Rarely,
    #[serde(rename = "sometimes")]
    Sometimes,
    #[serde(rename = "almost every day")]
    AlmostEveryDay,
    #[serde(rename = "every day")]
    EveryDay,
}

labelled_enum!(MeatFrequency, "food", {
    Never => "never",
    Rarely => "rarely",
    Sometimes => "sometimes",
    AlmostEveryDay => "almost every day",
    EveryDay => "every day",
});

impl MeatFrequency {
    /// kg CO₂ per day
    pub fn factor(self) -> f64 {
        match self {
            MeatFrequency::Never => 1.5,
            MeatFrequency::Rarely => 2.5,
            MeatFrequency::Sometimes => 4.0,
            MeatFrequency::AlmostEveryDay => 5.5,
            MeatFrequency::EveryDay => 7.0,
        }
    }
}

// ============================================================================
// TABLE EXPORT
// ============================================================================

/// All factor tables keyed by questionnaire label, for display and the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorTables {
    pub transport: Vec<(&'static str, f64)>,
    pub accommodation: Vec<(&'static str, f64)>,
    pub room_occupancy: Vec<(&'static str, f64)>,
    pub electricity: Vec<(&'static str, f64)>,
    pub food: Vec<(&'static str, f64)>,
    pub co2_per_tree_kg: f64,
    pub round_trip_factor: f64,
}

pub fn factor_tables() -> FactorTables {
    let mut transport: Vec<(&'static str, f64)> = TransportMode::ALL
        .iter()
        .filter(|m| **m != TransportMode::Car)
        .map(|m| (m.label(), transport_factor(*m, None)))
        .collect();
    transport.push(("car (conventional)", CAR_CONVENTIONAL_FACTOR));
    transport.push(("car (electric)", CAR_ELECTRIC_FACTOR));

    FactorTables {
        transport,
        accommodation: AccommodationCategory::ALL.iter().map(|c| (c.label(), c.factor())).collect(),
        room_occupancy: RoomOccupancy::ALL.iter().map(|o| (o.label(), o.factor())).collect(),
        electricity: Electricity::ALL.iter().map(|e| (e.label(), e.factor())).collect(),
        food: MeatFrequency::ALL.iter().map(|f| (f.label(), f.factor())).collect(),
        co2_per_tree_kg: CO2_PER_TREE_KG,
        round_trip_factor: ROUND_TRIP_FACTOR,
    }
}
