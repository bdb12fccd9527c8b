// CLI module for img-alt-api
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;

/// img-alt-api - image to alt-text relay service
#[derive(Parser, Debug)]
#[command(name = "img-alt-api", version, about, long_about = None)]
pub struct Args {
    /// Bind address override (takes precedence over config file and environment)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port override
    #[arg(long)]
    pub port: Option<u16>,
}
