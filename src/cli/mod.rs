pub mod init;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "A JSON-file-backed product and hashtag catalog", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "catalog.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and empty collection documents
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Run the HTTP server
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
}
