use aqi_enricher::cli::{run, Cli};
use aqi_enricher::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
