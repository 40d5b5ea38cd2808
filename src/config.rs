//! Command-line configuration.
//!
//! Only the environment around the game is configurable; every gameplay
//! number is a constant.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Parser)]
#[command(name = "pixel_raiders", version, about = "Top-down pixel-mask arcade shooter")]
pub struct Config {
    /// Seed for a reproducible game; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding the PNG sprites; built-in sprites are used when omitted.
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Log file (the terminal itself is taken over by the game).
    #[arg(long, value_name = "PATH", default_value = "pixel_raiders.log")]
    pub log_file: PathBuf,

    /// Log filter (env_logger syntax) used when RUST_LOG is not set.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
