//! Factory functions for profiles and time series used across tests.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`dike_profile`] | Outer slope 1:3.33, 5 m crest, inner slope down to x = 60 |
//! | [`dike_profile_builder`] | The same profile, pre-loaded into a builder |
//! | [`hourly_time_steps`] | `n` contiguous one-hour steps with moderate waves |
//! | [`storm_time_steps`] | 16 hourly steps with the water level rising to 5.7 m and back |
//! | [`storm_builder`] | The reference dike with the storm, ready for locations |

use crate::builder::CalculationInputBuilder;
use crate::input::TimeDependentInput;
use crate::profile::{
    CharacteristicPoint, CharacteristicPointType, ProfileData, ProfilePoint, ProfileSegment,
};

/// Profile points (x, z) of the reference dike.
pub const DIKE_POINTS: [(f64, f64); 5] =
    [(0.0, 0.0), (5.0, 0.0), (30.0, 7.5), (35.0, 7.5), (60.0, 0.0)];

/// Characteristic points of the reference dike.
pub const DIKE_CHARACTERISTIC_POINTS: [(f64, CharacteristicPointType); 4] = [
    (5.0, CharacteristicPointType::OuterToe),
    (30.0, CharacteristicPointType::OuterCrest),
    (35.0, CharacteristicPointType::InnerCrest),
    (60.0, CharacteristicPointType::InnerToe),
];

const HOUR: i64 = 3600;

/// The reference dike as profile data.
pub fn dike_profile() -> ProfileData {
    let segments = DIKE_POINTS
        .windows(2)
        .map(|w| {
            ProfileSegment::new(
                ProfilePoint::new(w[0].0, w[0].1),
                ProfilePoint::new(w[1].0, w[1].1),
                1.0,
            )
        })
        .collect();
    let points = DIKE_CHARACTERISTIC_POINTS
        .iter()
        .map(|&(x, point_type)| CharacteristicPoint::new(x, point_type))
        .collect();
    ProfileData::new(segments, points, None)
}

/// A builder holding the reference dike, ready for locations and time steps.
pub fn dike_profile_builder() -> CalculationInputBuilder {
    let mut builder = CalculationInputBuilder::new();
    for w in DIKE_POINTS.windows(2) {
        builder.add_dike_profile_segment(w[0].0, w[0].1, w[1].0, w[1].1, None);
    }
    for (x, point_type) in DIKE_CHARACTERISTIC_POINTS {
        builder.add_dike_profile_point(x, point_type);
    }
    builder
}

/// `count` contiguous hourly steps at a water level of 5 m with 1 m waves.
pub fn hourly_time_steps(count: usize) -> Vec<TimeDependentInput> {
    (0..count as i64)
        .map(|i| TimeDependentInput::new(i * HOUR, (i + 1) * HOUR, 5.0, 1.0, 4.0, 0.0))
        .collect()
}

/// A 16 hour storm: the water level rises from 5.0 m to 5.7 m and falls
/// back while the waves grow and decay with it.
pub fn storm_time_steps() -> Vec<TimeDependentInput> {
    (0..16_i64)
        .map(|i| {
            let rise = if i < 8 { i } else { 15 - i } as f64;
            TimeDependentInput::new(
                i * HOUR,
                (i + 1) * HOUR,
                5.0 + 0.1 * rise,
                1.0 + 0.25 * rise,
                4.0 + 0.5 * rise,
                0.0,
            )
        })
        .collect()
}

/// Add `time_steps` to `builder` in order.
pub fn add_time_steps(builder: &mut CalculationInputBuilder, time_steps: &[TimeDependentInput]) {
    for step in time_steps {
        builder.add_time_step(
            step.begin_time,
            step.end_time,
            step.water_level,
            step.wave_height_hm0,
            step.wave_period_tm10,
            step.wave_direction,
        );
    }
}

/// The reference dike loaded by [`storm_time_steps`].
pub fn storm_builder() -> CalculationInputBuilder {
    let mut builder = dike_profile_builder();
    add_time_steps(&mut builder, &storm_time_steps());
    builder
}
