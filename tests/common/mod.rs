//! Inputs shared by the integration tests.

use dike_revetment::builder::{
    AsphaltWaveImpactLocationConstructionProperties, CalculationInputBuilder,
    GrassWaveImpactLocationConstructionProperties,
    GrassWaveOvertoppingLocationConstructionProperties,
    GrassWaveRunupLocationConstructionProperties,
    NaturalStoneWaveImpactLocationConstructionProperties,
};
use dike_revetment::mechanisms::TopLayerType;
use dike_revetment::testkit::storm_builder;

/// The storm on the reference dike with a location of every mechanism.
#[allow(dead_code)]
pub fn mixed_storm_builder() -> CalculationInputBuilder {
    let mut builder = storm_builder();
    builder
        .add_foreshore(0.004, -1.0)
        .add_asphalt_wave_impact_location(AsphaltWaveImpactLocationConstructionProperties::new(
            12.0,
            TopLayerType::HydraulicAsphaltConcrete,
            1.6,
            56.0,
            0.16,
            18_000.0,
        ))
        .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
            20.0,
            TopLayerType::ClosedSod,
        ))
        .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
            22.5,
            TopLayerType::OpenSod,
        ))
        .add_grass_wave_runup_rayleigh_discrete_location(
            GrassWaveRunupLocationConstructionProperties::new(24.0, TopLayerType::OpenSod),
        )
        .add_grass_wave_runup_battjes_groenendijk_analytical_location(
            GrassWaveRunupLocationConstructionProperties::new(26.0, TopLayerType::ClosedSod),
        )
        .add_grass_wave_overtopping_rayleigh_discrete_location(
            GrassWaveOvertoppingLocationConstructionProperties::new(32.0, TopLayerType::OpenSod),
        )
        .add_grass_wave_overtopping_rayleigh_analytical_location(
            GrassWaveOvertoppingLocationConstructionProperties::new(40.0, TopLayerType::ClosedSod),
        )
        .add_natural_stone_wave_impact_location(
            NaturalStoneWaveImpactLocationConstructionProperties::new(
                18.0,
                TopLayerType::NordicStone,
                0.3,
            ),
        );
    builder
}
