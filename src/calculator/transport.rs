//! TRANSPORT: per-participant travel to the project
//!
//! Each answered one-way distance contributes `km × factor`. The car leg is
//! split across the people sharing it and uses the electric factor when the
//! participant says so. The one-way sum is doubled to model the return trip,
//! which the questionnaire does not ask about separately.

use crate::answers::ParticipantAnswers;
use crate::factors::{transport_factor, TransportMode, ROUND_TRIP_FACTOR};
use serde::Serialize;
use smallvec::SmallVec;

/// Order in which one-way legs are summed
const MODES: [TransportMode; 5] = [
    TransportMode::Flight,
    TransportMode::Boat,
    TransportMode::Train,
    TransportMode::Bus,
    TransportMode::Car,
];

/// One-way contribution of a single mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeContribution {
    pub mode: TransportMode,
    pub distance_km: f64,
    #[serde(rename = "oneWayCO2")]
    pub one_way_co2: f64,
}

/// Per-mode transport breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportBreakdown {
    /// Modes with a contributing distance, in summation order
    pub legs: SmallVec<[ModeContribution; 5]>,
    #[serde(rename = "oneWayCO2")]
    pub one_way_co2: f64,
    /// Round trip total (this is the transport component)
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
}

/// Transport breakdown for a participant
pub fn calculate_transport(answers: &ParticipantAnswers) -> TransportBreakdown {
    let mut legs: SmallVec<[ModeContribution; 5]> = SmallVec::new();
    let mut one_way_co2 = 0.0;

    for mode in MODES {
        let Some(km) = answers.contributing_km(mode) else {
            continue;
        };

        let co2 = match mode {
            TransportMode::Car => {
                let factor = transport_factor(mode, answers.car_type);
                (km * factor) / answers.car_occupants()
            }
            _ => km * transport_factor(mode, None),
        };

        one_way_co2 += co2;
        legs.push(ModeContribution {
            mode,
            distance_km: km,
            one_way_co2: co2,
        });
    }

    TransportBreakdown {
        legs,
        one_way_co2,
        total_co2: one_way_co2 * ROUND_TRIP_FACTOR,
    }
}
