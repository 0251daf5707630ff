//! Benchmarks for the calculator comparing sequential and parallel runs.
//!
//! Two workloads are measured:
//! - the storm on the reference dike with a location of every mechanism,
//!   under each combination of the parallelism settings
//! - a growing number of grass wave impact locations over a long hourly
//!   series, sequential against fully parallel

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use dike_revetment::builder::{
    AsphaltWaveImpactLocationConstructionProperties, CalculationInputBuilder,
    GrassWaveImpactLocationConstructionProperties,
    GrassWaveOvertoppingLocationConstructionProperties,
    GrassWaveRunupLocationConstructionProperties,
    NaturalStoneWaveImpactLocationConstructionProperties,
};
use dike_revetment::mechanisms::TopLayerType;
use dike_revetment::testkit::{
    add_time_steps, dike_profile_builder, hourly_time_steps, storm_builder,
};
use dike_revetment::{Calculator, CalculatorSettings};
use std::hint::black_box;

fn mixed_storm_builder() -> CalculationInputBuilder {
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
        .add_grass_wave_runup_rayleigh_discrete_location(
            GrassWaveRunupLocationConstructionProperties::new(24.0, TopLayerType::OpenSod),
        )
        .add_grass_wave_runup_battjes_groenendijk_analytical_location(
            GrassWaveRunupLocationConstructionProperties::new(26.0, TopLayerType::ClosedSod),
        )
        .add_grass_wave_overtopping_rayleigh_discrete_location(
            GrassWaveOvertoppingLocationConstructionProperties::new(40.0, TopLayerType::OpenSod),
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

fn settings_label(settings: &CalculatorSettings) -> &'static str {
    match (
        settings.calculate_locations_in_parallel,
        settings.calculate_time_steps_in_parallel,
    ) {
        (false, false) => "sequential",
        (true, false) => "locations_parallel",
        (false, true) => "time_steps_parallel",
        (true, true) => "fully_parallel",
    }
}

/// Every mechanism over the storm, once per settings combination.
fn benchmark_settings_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_storm");
    let builder = mixed_storm_builder();

    for settings in CalculatorSettings::all_combinations() {
        group.bench_with_input(
            BenchmarkId::from_parameter(settings_label(&settings)),
            &settings,
            |b, settings| {
                b.iter_batched(
                    || builder.build().into_result().unwrap(),
                    |input| black_box(Calculator::calculate(input, settings).unwrap()),
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Scaling with the number of locations over a week of hourly steps.
fn benchmark_location_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("grass_wave_impact_locations");

    for &count in &[10, 50, 200] {
        let mut builder = dike_profile_builder();
        add_time_steps(&mut builder, &hourly_time_steps(168));
        for i in 0..count {
            let x = 10.0 + 15.0 * i as f64 / count as f64;
            builder.add_grass_wave_impact_location(
                GrassWaveImpactLocationConstructionProperties::new(x, TopLayerType::ClosedSod),
            );
        }

        group.throughput(Throughput::Elements(count as u64));
        for settings in [CalculatorSettings::sequential(), CalculatorSettings::parallel()] {
            group.bench_with_input(
                BenchmarkId::new(settings_label(&settings), count),
                &settings,
                |b, settings| {
                    b.iter_batched(
                        || builder.build().into_result().unwrap(),
                        |input| black_box(Calculator::calculate(input, settings).unwrap()),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_settings_combinations,
    benchmark_location_count
);
criterion_main!(benches);
