use byte_unit::Byte;
use clap::Parser;
use std::path::PathBuf;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod chunk;
mod cmd;
mod error;
mod executor;
mod plan;
mod progress;
#[cfg(test)]
mod test_utils;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    source: PathBuf,
    destination: PathBuf,
    #[arg(short, long, default_value = "1MiB")]
    chunk_size: Byte,
}

fn main() -> anyhow::Result<()> {
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.destination)?;
    cmd::split::split(&args.source, &args.destination, args.chunk_size)?;
    Ok(())
}
