//! Integration tests for exhaustive input validation by the builder.

use dike_revetment::builder::{
    CalculationInputBuilder, GrassWaveImpactLocationConstructionProperties,
    GrassWaveOvertoppingLocationConstructionProperties,
    NaturalStoneWaveImpactLocationConstructionProperties,
};
use dike_revetment::mechanisms::TopLayerType;
use dike_revetment::profile::CharacteristicPointType;
use dike_revetment::testkit::{add_time_steps, dike_profile_builder, hourly_time_steps};
use dike_revetment::{assert_data_failure, assert_data_success, EventType};
use pretty_assertions::assert_eq;

#[test]
fn test_two_bad_locations_are_both_reported() {
    let mut builder = dike_profile_builder();
    add_time_steps(&mut builder, &hourly_time_steps(2));
    builder
        .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
            1.0,
            TopLayerType::ClosedSod,
        ))
        .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
            20.0,
            TopLayerType::ClosedSod,
        ))
        .add_natural_stone_wave_impact_location(
            NaturalStoneWaveImpactLocationConstructionProperties::new(
                15.0,
                TopLayerType::ClosedSod,
                0.3,
            ),
        );

    let messages = assert_data_failure!(builder.build());
    assert_eq!(
        messages,
        vec![
            "Location 0 (X = 1): X must be in range (5, 30) between OuterToe and OuterCrest.",
            "Location 2 (X = 15): The top layer type ClosedSod is not valid for natural stone \
             wave impact.",
        ]
    );
}

#[test]
fn test_structural_problems_are_collected_in_one_pass() {
    let mut builder = CalculationInputBuilder::new();
    builder
        .add_dike_profile_segment(0.0, 0.0, 10.0, 3.0, None)
        .add_dike_profile_segment(10.5, 3.0, 20.0, 3.0, None)
        .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
        .add_dike_profile_point(10.0, CharacteristicPointType::OuterCrest)
        .add_time_step(0, 3600, 2.0, 1.0, 4.0, 0.0)
        .add_time_step(3000, 7200, 2.0, 1.0, 4.0, 0.0)
        .add_grass_wave_overtopping_rayleigh_analytical_location(
            GrassWaveOvertoppingLocationConstructionProperties::new(15.0, TopLayerType::OpenSod),
        );

    let messages = assert_data_failure!(builder.build());
    assert_eq!(
        messages,
        vec![
            "Profile segment 1 must start where profile segment 0 ends.",
            "The characteristic point InnerCrest is required.",
            "The characteristic point InnerToe is required.",
            "The begin time of time step 1 must equal the end time of time step 0.",
        ]
    );
}

#[test]
fn test_overtopping_warning_keeps_the_build_successful() {
    let mut builder = dike_profile_builder();
    builder
        .add_time_step(0, 3600, 5.0, 1.0, 4.0, 0.0)
        .add_time_step(3600, 7200, 8.0, 1.0, 4.0, 0.0)
        .add_grass_wave_overtopping_rayleigh_discrete_location(
            GrassWaveOvertoppingLocationConstructionProperties::new(40.0, TopLayerType::OpenSod),
        );

    let result = builder.build();
    assert!(result.successful());
    assert_eq!(result.events().len(), 1);
    assert_eq!(result.events()[0].event_type, EventType::Warning);
    assert!(result.events()[0].message.starts_with("Location 0 (X = 40): The water level (8)"));
    let input = assert_data_success!(result);
    assert_eq!(input.locations().len(), 1);
}

#[test]
fn test_defaults_are_resolved_per_location() {
    let mut builder = dike_profile_builder();
    add_time_steps(&mut builder, &hourly_time_steps(1));

    let mut properties = GrassWaveImpactLocationConstructionProperties::new(
        20.0,
        TopLayerType::OpenSod,
    );
    properties.common.initial_damage = Some(0.2);
    properties.common.failure_number = Some(0.8);
    builder.add_grass_wave_impact_location(properties);
    builder.add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
        21.0,
        TopLayerType::OpenSod,
    ));

    let input = assert_data_success!(builder.build());
    let locations = input.locations();
    assert_eq!(locations[0].initial_damage(), 0.2);
    assert_eq!(locations[0].failure_number(), 0.8);
    assert_eq!(locations[1].initial_damage(), 0.0);
    assert_eq!(locations[1].failure_number(), 1.0);
}
