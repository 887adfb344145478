//! Command implementations for the TWQ CLI.
//!
//! Provides subcommands for turning a directory of water-quality CSV extracts
//! into the JSON payloads the dashboard's map and chart collaborators render.

use clap::Subcommand;

pub mod load;
pub mod map;
pub mod station;

#[derive(Subcommand)]
pub enum Command {
    /// Build the station-marker map payload for one display parameter
    Map {
        /// Directory of WQX-style CSV extracts
        #[arg(short = 'd', long)]
        data_dir: String,

        /// Parameter to display on the map (e.g. "Dissolved oxygen (DO)")
        #[arg(short = 'p', long)]
        parameter: String,

        /// County boundary GeoJSON file to include as an overlay
        #[arg(short = 'b', long)]
        boundary: Option<String>,

        /// Output path for the map payload JSON (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Build the time-series/correlation analysis payload for one station
    Station {
        /// Directory of WQX-style CSV extracts
        #[arg(short = 'd', long)]
        data_dir: String,

        /// Station latitude (rounded to 5 decimals for identity)
        #[arg(long)]
        lat: f64,

        /// Station longitude (rounded to 5 decimals for identity)
        #[arg(long)]
        lon: f64,

        /// Parameters to plot; defaults to every parameter seen at the station
        #[arg(short = 'p', long)]
        parameters: Vec<String>,

        /// Output path for the analysis payload JSON (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Emit first/last dates, counts, and gap counts for every station
    Summaries {
        /// Directory of WQX-style CSV extracts
        #[arg(short = 'd', long)]
        data_dir: String,

        /// Output path for the summaries JSON (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// List the distinct parameter names present in the data
    Parameters {
        /// Directory of WQX-style CSV extracts
        #[arg(short = 'd', long)]
        data_dir: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Map {
            data_dir,
            parameter,
            boundary,
            output,
        } => map::run_map(&data_dir, &parameter, boundary.as_deref(), output.as_deref()),
        Command::Station {
            data_dir,
            lat,
            lon,
            parameters,
            output,
        } => station::run_station(&data_dir, lat, lon, &parameters, output.as_deref()),
        Command::Summaries { data_dir, output } => {
            station::run_summaries(&data_dir, output.as_deref())
        }
        Command::Parameters { data_dir } => station::run_parameters(&data_dir),
    }
}
