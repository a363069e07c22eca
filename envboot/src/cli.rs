use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Envboot {
    /// The directory holding the `.env.example`, the `.env` is written next to it
    #[arg(long, short, default_value = ".")]
    pub dir: PathBuf,

    /// One of error, warn, info, debug, trace or off
    #[arg(long, short, default_value = "warn")]
    pub log_level: String,
}
