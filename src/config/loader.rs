use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::settings::CalculatorSettings;
use crate::errors::{CalculationError, Result};

fn read_settings_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse settings from TOML. Missing keys default to false; unknown keys
/// are rejected.
pub fn parse_settings(contents: &str) -> Result<CalculatorSettings> {
    Ok(toml::from_str::<CalculatorSettings>(contents)?)
}

/// Load settings from a TOML file.
pub fn load(path: &Path) -> Result<CalculatorSettings> {
    let contents = read_settings_file(path)
        .map_err(|e| CalculationError::file_system("Failed to read settings", path, e))?;
    let settings = parse_settings(&contents)?;
    tracing::debug!(
        path = %path.display(),
        locations_in_parallel = settings.calculate_locations_in_parallel,
        time_steps_in_parallel = settings.calculate_time_steps_in_parallel,
        "Loaded calculator settings"
    );
    Ok(settings)
}

impl CalculatorSettings {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        parse_settings(contents)
    }

    pub fn load(path: &Path) -> Result<Self> {
        load(path)
    }
}
