use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use top_destinations::slideshow;

/// Top Detox & Wellness Destinations slideshow
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the bundled slide images
    #[arg(long, default_value = "resources")]
    resources: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    slideshow::app::run(&args.resources)
}
