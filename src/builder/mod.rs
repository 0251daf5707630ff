//! Assembly of a [`CalculationInput`] from loose pieces.
//!
//! The builder only collects: nothing is checked while adding. [`build`]
//! resolves the defaults of every location, checks the complete input and
//! reports every problem it finds in one pass.
//!
//! ```rust
//! use dike_revetment::builder::{
//!     CalculationInputBuilder, GrassWaveImpactLocationConstructionProperties,
//! };
//! use dike_revetment::mechanisms::TopLayerType;
//! use dike_revetment::profile::CharacteristicPointType;
//!
//! let mut builder = CalculationInputBuilder::new();
//! builder
//!     .add_dike_profile_segment(0.0, 0.0, 25.0, 7.5, None)
//!     .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
//!     .add_dike_profile_point(25.0, CharacteristicPointType::OuterCrest)
//!     .add_time_step(0, 3600, 5.0, 1.0, 4.0, 0.0)
//!     .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
//!         15.0,
//!         TopLayerType::ClosedSod,
//!     ));
//!
//! let result = builder.build();
//! assert!(result.successful());
//! ```
//!
//! [`build`]: CalculationInputBuilder::build

mod locations;

pub use locations::{
    AsphaltWaveImpactLocationConstructionProperties, CommonConstructionProperties,
    GrassWaveImpactLocationConstructionProperties,
    GrassWaveOvertoppingLocationConstructionProperties,
    GrassWaveRunupLocationConstructionProperties, LocationConstructionProperties,
    NaturalStoneWaveImpactLocationConstructionProperties,
    RepresentativeWaveRunupConstructionProperties, DEFAULT_FAILURE_NUMBER,
    DEFAULT_INITIAL_DAMAGE,
};

use crate::effects::{self, combine_validations};
use crate::input::{CalculationInput, LocationDependentInput, TimeDependentInput};
use crate::profile::{
    CharacteristicPoint, CharacteristicPointType, Foreshore, ProfileData, ProfilePoint,
    ProfileSegment, DEFAULT_ROUGHNESS_COEFFICIENT,
};
use crate::result::DataResult;
use crate::validation::{self, ValidationReport};
use stillwater::Validation;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CalculationInputBuilder {
    segments: Vec<ProfileSegment>,
    characteristic_points: Vec<CharacteristicPoint>,
    foreshore: Option<Foreshore>,
    dike_orientation: Option<f64>,
    time_steps: Vec<TimeDependentInput>,
    locations: Vec<LocationConstructionProperties>,
}

impl CalculationInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment from (x1, z1) to (x2, z2). Segments are expected in
    /// order of increasing x.
    pub fn add_dike_profile_segment(
        &mut self,
        start_x: f64,
        start_z: f64,
        end_x: f64,
        end_z: f64,
        roughness_coefficient: Option<f64>,
    ) -> &mut Self {
        self.segments.push(ProfileSegment::new(
            ProfilePoint::new(start_x, start_z),
            ProfilePoint::new(end_x, end_z),
            roughness_coefficient.unwrap_or(DEFAULT_ROUGHNESS_COEFFICIENT),
        ));
        self
    }

    pub fn add_dike_profile_point(
        &mut self,
        x: f64,
        point_type: CharacteristicPointType,
    ) -> &mut Self {
        self.characteristic_points
            .push(CharacteristicPoint::new(x, point_type));
        self
    }

    pub fn add_foreshore(&mut self, slope: f64, bottom_z: f64) -> &mut Self {
        self.foreshore = Some(Foreshore::new(slope, bottom_z));
        self
    }

    /// Orientation of the dike normal in degrees; 0 when not set.
    pub fn set_dike_orientation(&mut self, dike_orientation: f64) -> &mut Self {
        self.dike_orientation = Some(dike_orientation);
        self
    }

    pub fn add_time_step(
        &mut self,
        begin_time: i64,
        end_time: i64,
        water_level: f64,
        wave_height_hm0: f64,
        wave_period_tm10: f64,
        wave_direction: f64,
    ) -> &mut Self {
        self.time_steps.push(TimeDependentInput::new(
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_direction,
        ));
        self
    }

    pub fn add_location(&mut self, properties: LocationConstructionProperties) -> &mut Self {
        self.locations.push(properties);
        self
    }

    pub fn add_asphalt_wave_impact_location(
        &mut self,
        properties: AsphaltWaveImpactLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(LocationConstructionProperties::AsphaltWaveImpact(properties))
    }

    pub fn add_grass_wave_impact_location(
        &mut self,
        properties: GrassWaveImpactLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(LocationConstructionProperties::GrassWaveImpact(properties))
    }

    pub fn add_grass_wave_runup_rayleigh_discrete_location(
        &mut self,
        properties: GrassWaveRunupLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(LocationConstructionProperties::GrassWaveRunupRayleighDiscrete(
            properties,
        ))
    }

    pub fn add_grass_wave_runup_battjes_groenendijk_analytical_location(
        &mut self,
        properties: GrassWaveRunupLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(
            LocationConstructionProperties::GrassWaveRunupBattjesGroenendijkAnalytical(properties),
        )
    }

    pub fn add_grass_wave_overtopping_rayleigh_discrete_location(
        &mut self,
        properties: GrassWaveOvertoppingLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(
            LocationConstructionProperties::GrassWaveOvertoppingRayleighDiscrete(properties),
        )
    }

    pub fn add_grass_wave_overtopping_rayleigh_analytical_location(
        &mut self,
        properties: GrassWaveOvertoppingLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(
            LocationConstructionProperties::GrassWaveOvertoppingRayleighAnalytical(properties),
        )
    }

    pub fn add_natural_stone_wave_impact_location(
        &mut self,
        properties: NaturalStoneWaveImpactLocationConstructionProperties,
    ) -> &mut Self {
        self.add_location(LocationConstructionProperties::NaturalStoneWaveImpact(
            properties,
        ))
    }

    fn profile_data(&self) -> ProfileData {
        let profile = ProfileData::new(
            self.segments.clone(),
            self.characteristic_points.clone(),
            self.foreshore,
        );
        match self.dike_orientation {
            Some(orientation) => profile.with_dike_orientation(orientation),
            None => profile,
        }
    }

    /// Build and validate the input.
    ///
    /// Every location is constructed with its defaults resolved and then
    /// validated against the time steps and the profile. Construction
    /// problems (such as a top layer the mechanism does not support),
    /// location problems and profile or time step problems are reported
    /// together. Warnings accompany a successful result.
    pub fn build(&self) -> DataResult<CalculationInput> {
        debug!(
            segments = self.segments.len(),
            locations = self.locations.len(),
            time_steps = self.time_steps.len(),
            "Building calculation input"
        );

        let profile_data = self.profile_data();
        let locations = combine_validations(
            self.locations
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, properties)| {
                    let x = properties.x();
                    let checked = match properties.build() {
                        Validation::Success(validated) => {
                            let mut report = ValidationReport::new();
                            validated
                                .value
                                .validate(&self.time_steps, &profile_data, &mut report);
                            effects::with_report(Validation::Success(validated), report)
                        }
                        failure => failure,
                    };
                    effects::map_issues(checked, |issue| {
                        validation::prefix_location(issue, index, x)
                    })
                })
                .collect(),
        );

        let mut report = ValidationReport::new();
        validation::validate_profile_and_time_steps(
            &profile_data,
            &self.time_steps,
            self.locations
                .iter()
                .any(LocationConstructionProperties::is_overtopping),
            &mut report,
        );
        if self.locations.is_empty() {
            report.error("At least 1 location is required.");
        }

        let validation = effects::validation_map(
            effects::with_report(locations, report),
            |locations| CalculationInput::new(profile_data, locations, self.time_steps.clone()),
        );
        effects::into_data_result(validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanisms::TopLayerType;
    use crate::result::EventType;
    use crate::testkit::helpers::dike_profile_builder;

    fn messages<T>(result: &DataResult<T>) -> Vec<&str> {
        result.events().iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_empty_builder_reports_everything_missing() {
        let result = CalculationInputBuilder::new().build();
        assert_eq!(
            messages(&result),
            vec![
                "At least 1 profile segment is required.",
                "The characteristic point OuterToe is required.",
                "The characteristic point OuterCrest is required.",
                "At least 1 time step is required.",
                "At least 1 location is required.",
            ]
        );
    }

    #[test]
    fn test_defaulted_location_builds() {
        let mut builder = dike_profile_builder();
        builder
            .add_time_step(0, 3600, 5.0, 1.0, 4.0, 0.0)
            .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
                20.0,
                TopLayerType::OpenSod,
            ));

        let input = builder.build().into_result().unwrap();
        assert_eq!(input.locations().len(), 1);
        assert_eq!(input.time_steps().len(), 1);
        assert_eq!(input.locations()[0].failure_number(), DEFAULT_FAILURE_NUMBER);
    }

    #[test]
    fn test_construction_and_time_step_errors_are_reported_together() {
        let mut builder = dike_profile_builder();
        builder
            .add_time_step(0, 3600, 5.0, 1.0, 4.0, 0.0)
            .add_time_step(3700, 7200, 5.0, 1.0, 4.0, 0.0)
            .add_natural_stone_wave_impact_location(
                NaturalStoneWaveImpactLocationConstructionProperties::new(
                    20.0,
                    TopLayerType::OpenSod,
                    0.3,
                ),
            );

        let result = builder.build();
        assert!(!result.successful());
        assert_eq!(
            messages(&result),
            vec![
                "Location 0 (X = 20): The top layer type OpenSod is not valid for natural stone \
                 wave impact.",
                "The begin time of time step 1 must equal the end time of time step 0.",
            ]
        );
        assert!(result
            .events()
            .iter()
            .all(|e| e.event_type == EventType::Error));
    }

    #[test]
    fn test_every_bad_location_is_reported() {
        let mut builder = dike_profile_builder();
        builder
            .add_time_step(0, 3600, 5.0, 1.0, 4.0, 0.0)
            .add_natural_stone_wave_impact_location(
                NaturalStoneWaveImpactLocationConstructionProperties::new(
                    20.0,
                    TopLayerType::OpenSod,
                    0.3,
                ),
            )
            .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
                2.0,
                TopLayerType::ClosedSod,
            ));

        assert_eq!(
            messages(&builder.build()),
            vec![
                "Location 0 (X = 20): The top layer type OpenSod is not valid for natural stone \
                 wave impact.",
                "Location 1 (X = 2): X must be in range (5, 30) between OuterToe and OuterCrest.",
            ]
        );
    }

    #[test]
    fn test_dike_orientation_is_applied() {
        let mut builder = dike_profile_builder();
        builder
            .set_dike_orientation(90.0)
            .add_time_step(0, 3600, 5.0, 1.0, 4.0, 0.0)
            .add_grass_wave_impact_location(GrassWaveImpactLocationConstructionProperties::new(
                20.0,
                TopLayerType::ClosedSod,
            ));
        let input = builder.build().into_result().unwrap();
        assert_eq!(input.profile_data().dike_orientation(), 90.0);
    }
}
