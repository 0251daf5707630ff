//! Rules for the hydraulic time series.

use super::ValidationReport;
use crate::input::TimeDependentInput;

pub fn validate_time_steps(time_steps: &[TimeDependentInput], report: &mut ValidationReport) {
    if time_steps.is_empty() {
        report.error("At least 1 time step is required.");
        return;
    }

    for (index, step) in time_steps.iter().enumerate() {
        if step.begin_time >= step.end_time {
            report.error(format!(
                "The begin time ({}) of time step {index} must be smaller than its end time ({}).",
                step.begin_time, step.end_time
            ));
        }
        if !step.water_level.is_finite() {
            report.error(format!(
                "The water level of time step {index} must be a finite number."
            ));
        }
        if !(step.wave_height_hm0.is_finite() && step.wave_height_hm0 >= 0.0) {
            report.error(format!(
                "WaveHeightHm0 of time step {index} must be equal to or larger than 0."
            ));
        }
        if !(step.wave_period_tm10.is_finite() && step.wave_period_tm10 > 0.0) {
            report.error(format!(
                "WavePeriodTm10 of time step {index} must be larger than 0."
            ));
        }
        if !(step.wave_direction >= 0.0 && step.wave_direction <= 360.0) {
            report.error(format!(
                "WaveDirection of time step {index} must be in range {{0, 360}}."
            ));
        }
    }

    for (index, pair) in time_steps.windows(2).enumerate() {
        if pair[0].end_time != pair[1].begin_time {
            report.error(format!(
                "The begin time of time step {} must equal the end time of time step {index}.",
                index + 1
            ));
        }
    }
}
