use crate::report::OutputLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dike-revetment")]
#[command(about = "Cumulative damage of dike revetments under wave loading", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a calculation described by a JSON input document
    Calculate {
        /// Input document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Calculator settings (TOML)
        #[arg(short, long, env = "DIKE_REVETMENT_SETTINGS")]
        settings: Option<PathBuf>,

        /// Calculate locations in parallel, overriding the settings file
        #[arg(long = "locations-in-parallel")]
        locations_in_parallel: bool,

        /// Calculate time steps in parallel, overriding the settings file
        #[arg(long = "time-steps-in-parallel")]
        time_steps_in_parallel: bool,

        /// How much of the output to report
        #[arg(long = "output-level", value_enum, default_value = "damage")]
        output_level: OutputLevel,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase logging (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Validate an input document without calculating
    Validate {
        /// Input document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Increase logging (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}
