use bitmex_index::cli::{Cli, USAGE};
use bitmex_index::config::{Config, TRADE_COUNT};
use bitmex_index::exchange::BitmexClient;
use bitmex_index::store::InfluxWriter;
use bitmex_index::{pipeline, telemetry};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve parameters before any network activity
    let config = match Config::resolve(cli.host, cli.symbol) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    telemetry::init_logging(&cli.log_level)?;

    tracing::info!(host = %config.host, symbol = %config.symbol, "Parameters resolved");

    let source = BitmexClient::new();
    let sink = InfluxWriter::new(config.host.as_str());

    pipeline::run(&source, &sink, &config.symbol, TRADE_COUNT).await
}
