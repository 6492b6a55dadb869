//! Calculator Property Tests
//!
//! Checks the published invariants of the emissions breakdown against a
//! spread of hand-built participants.

use approx::assert_relative_eq;
use greendex_calculator::{
    calculate_emissions, AccommodationCategory, ActivityType, CarType, Electricity,
    MeatFrequency, ParticipantAnswers, ProjectActivity, RoomOccupancy,
};

fn sample_participants() -> Vec<ParticipantAnswers> {
    let mut participants = vec![ParticipantAnswers::default()];

    for (i, category) in AccommodationCategory::ALL.iter().enumerate() {
        let occupancy = RoomOccupancy::ALL[i % RoomOccupancy::ALL.len()];
        let electricity = Electricity::ALL[i % Electricity::ALL.len()];
        let food = MeatFrequency::ALL[i % MeatFrequency::ALL.len()];

        participants.push(ParticipantAnswers {
            days: Some(3.0 + i as f64),
            accommodation_category: Some(*category),
            room_occupancy: Some(occupancy),
            electricity: Some(electricity),
            food: Some(food),
            flight_km: Some(if i % 2 == 0 { 650.0 } else { 0.0 }),
            train_km: Some(120.0 * i as f64),
            bus_km: Some(15.5),
            car_km: Some(40.0 * i as f64),
            car_type: Some(if i % 3 == 0 { CarType::Electric } else { CarType::Conventional }),
            car_passengers: Some(i as f64),
            ..Default::default()
        });
    }

    participants
}

fn sample_activities() -> Vec<ProjectActivity> {
    vec![
        ProjectActivity::new(ActivityType::Bus, 180.0),
        ProjectActivity::new(ActivityType::Car, 42.0),
        ProjectActivity::new(ActivityType::Boat, 12.0),
        ProjectActivity::new(ActivityType::Train, 310.0),
    ]
}

// ============================================================================
// Section 1: Structural invariants
// ============================================================================

#[test]
fn test_total_is_sum_of_components() {
    let activities = sample_activities();
    for answers in sample_participants() {
        let r = calculate_emissions(&answers, &activities);
        assert_eq!(
            r.total_co2,
            r.transport_co2 + r.accommodation_co2 + r.food_co2 + r.project_activities_co2
        );
    }
}

#[test]
fn test_trees_needed_is_ceiling() {
    for answers in sample_participants() {
        let r = calculate_emissions(&answers, &sample_activities());
        assert_eq!(r.trees_needed, (r.total_co2 / 22.0).ceil() as u64);
    }
}

#[test]
fn test_components_non_negative() {
    for answers in sample_participants() {
        let r = calculate_emissions(&answers, &sample_activities());
        assert!(r.transport_co2 >= 0.0);
        assert!(r.accommodation_co2 >= 0.0);
        assert!(r.food_co2 >= 0.0);
        assert!(r.project_activities_co2 >= 0.0);
    }
}

#[test]
fn test_deterministic() {
    let activities = sample_activities();
    for answers in sample_participants() {
        assert_eq!(
            calculate_emissions(&answers, &activities),
            calculate_emissions(&answers, &activities)
        );
    }
}

#[test]
fn test_all_absent_is_zero() {
    let r = calculate_emissions(&ParticipantAnswers::default(), &[]);
    assert_eq!(r.total_co2, 0.0);
    assert_eq!(r.trees_needed, 0);
}

// ============================================================================
// Section 2: Reference values
// ============================================================================

#[test]
fn test_reference_values() {
    let flight = ParticipantAnswers {
        flight_km: Some(100.0),
        ..Default::default()
    };
    assert_relative_eq!(calculate_emissions(&flight, &[]).transport_co2, 51.0, epsilon = 1e-9);

    let shared_car = ParticipantAnswers {
        car_km: Some(100.0),
        car_type: Some(CarType::Conventional),
        car_passengers: Some(4.0),
        ..Default::default()
    };
    assert_relative_eq!(calculate_emissions(&shared_car, &[]).transport_co2, 9.6, epsilon = 1e-9);

    let electric = ParticipantAnswers {
        car_km: Some(100.0),
        car_type: Some(CarType::Electric),
        car_passengers: Some(1.0),
        ..Default::default()
    };
    assert_relative_eq!(calculate_emissions(&electric, &[]).transport_co2, 10.6, epsilon = 1e-9);

    let hostel = ParticipantAnswers {
        days: Some(7.0),
        accommodation_category: Some(AccommodationCategory::Hostel),
        room_occupancy: Some(RoomOccupancy::TwoPeople),
        electricity: Some(Electricity::Green),
        food: Some(MeatFrequency::Sometimes),
        ..Default::default()
    };
    let r = calculate_emissions(&hostel, &[]);
    assert_relative_eq!(r.accommodation_co2, 9.45, epsilon = 1e-9);
    assert_relative_eq!(r.food_co2, 28.0, epsilon = 1e-9);
}

#[test]
fn test_reference_scenario_from_json() {
    let json = r#"{
        "days": 7,
        "accommodationCategory": "Camping",
        "roomOccupancy": "4+ people",
        "electricity": "green energy",
        "food": "never",
        "flightKm": 500,
        "boatKm": 0,
        "trainKm": 0,
        "busKm": 0,
        "carKm": 0
    }"#;
    let answers: ParticipantAnswers = serde_json::from_str(json).unwrap();
    let r = calculate_emissions(&answers, &[]);

    assert_relative_eq!(r.transport_co2, 255.0, epsilon = 1e-9);
    assert_relative_eq!(r.accommodation_co2, 2.3625, epsilon = 1e-9);
    assert_relative_eq!(r.food_co2, 10.5, epsilon = 1e-9);
    assert_relative_eq!(r.total_co2, 267.8625, epsilon = 1e-9);
    assert_eq!(r.trees_needed, 13);
}

// ============================================================================
// Section 3: Project activities
// ============================================================================

#[test]
fn test_activity_order_does_not_matter() {
    let answers = ParticipantAnswers::default();
    let mut activities = sample_activities();
    let forward = calculate_emissions(&answers, &activities).project_activities_co2;

    activities.reverse();
    let reversed = calculate_emissions(&answers, &activities).project_activities_co2;

    activities.rotate_left(1);
    let rotated = calculate_emissions(&answers, &activities).project_activities_co2;

    assert_relative_eq!(forward, reversed, epsilon = 1e-9);
    assert_relative_eq!(forward, rotated, epsilon = 1e-9);
}

#[test]
fn test_bad_activity_distances_excluded() {
    let json = r#"[
        {"activityType": "bus", "distanceKm": 100},
        {"activityType": "train", "distanceKm": -40},
        {"activityType": "boat", "distanceKm": "n/a"},
        {"activityType": "car"}
    ]"#;
    let activities: Vec<ProjectActivity> = serde_json::from_str(json).unwrap();
    let r = calculate_emissions(&ParticipantAnswers::default(), &activities);

    assert_relative_eq!(r.project_activities_co2, 8.9, epsilon = 1e-9);
    assert!(r.total_co2.is_finite());
}

#[test]
fn test_activities_not_doubled_or_shared() {
    let answers = ParticipantAnswers {
        car_type: Some(CarType::Electric),
        car_passengers: Some(5.0),
        ..Default::default()
    };
    let activities = vec![ProjectActivity::new(ActivityType::Car, 100.0)];
    let r = calculate_emissions(&answers, &activities);

    // conventional factor, no division, no doubling
    assert_relative_eq!(r.project_activities_co2, 19.2, epsilon = 1e-9);
    assert_eq!(r.transport_co2, 0.0);
}
