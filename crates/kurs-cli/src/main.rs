mod cli;

use anyhow::Result;
use clap::Parser;
use cli::opt;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = opt::Cli::parse();
    let default_level = if opt.debug { LevelFilter::DEBUG } else { LevelFilter::WARN };
    kurs_utils::tracing::setup(
        kurs_utils::tracing::TracingConfig::builder()
            .default_level(default_level)
            .build(),
    )?;
    cli::exec(opt).await
}
