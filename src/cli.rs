//! CLI interface for bitmex-index
//!
//! Two positional parameters, both optional on the command line because
//! they can come from the environment instead (see the config module).

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bitmex-index")]
#[command(about = "Polls BitMEX for recent index trades and records them to InfluxDB")]
#[command(version)]
pub struct Cli {
    /// InfluxDB hostname that points are written to
    /// (falls back to the INFLUXDB_HOST environment variable)
    pub host: Option<String>,

    /// Index symbol to record: .BXBT, .BETH, .BETHXBT, .BXRPXBT, .BBCHXBT,
    /// .BLTCXBT, .BEOSXBT, .BADAXBT or .BTRXXBT
    /// (falls back to the SYMBOL environment variable)
    pub symbol: Option<String>,

    /// Log level filter
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Usage line printed when required parameters are missing
pub const USAGE: &str = "usage: bitmex-index <influxdb_host> <symbol>";
