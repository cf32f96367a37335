use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediafile")]
#[command(author, version, about = "Validate and normalize media file descriptors")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate media file records and print them normalized as JSON
    Validate {
        /// JSON file holding one record or an array of records (stdin if omitted or "-")
        input: Option<PathBuf>,

        /// Print compact JSON regardless of config
        #[arg(long)]
        compact: bool,
    },

    /// Show how a MIME type is classified
    Classify {
        /// MIME type to classify
        #[arg(required = true)]
        mime_type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recognized stereoscopic layouts
    Layouts,

    /// Validate configuration file
    CheckConfig {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
