mod cli;

use mediafile::{config, mime, MediaFile, StereoscopicLayout};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediafile=trace,mediafile_common=debug".to_string()
        } else {
            config.logging.filter.clone()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.config.as_deref() {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config locations"),
    }

    match cli.command {
        Commands::Validate { input, compact } => {
            validate_records(input.as_deref(), config.output.pretty && !compact)
        }
        Commands::Classify { mime_type, json } => classify(&mime_type, json),
        Commands::Layouts => {
            for layout in StereoscopicLayout::ALL {
                println!("{}", layout);
            }
            Ok(())
        }
        Commands::CheckConfig {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            check_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediafile {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("Input file does not exist: {:?}", path);
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {:?}", path))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn validate_records(input: Option<&Path>, pretty: bool) -> Result<()> {
    let content = read_input(input)?;
    let value: Value = serde_json::from_str(&content).context("Input is not valid JSON")?;

    let json_str = match &value {
        Value::Array(records) => {
            tracing::info!("Validating {} records", records.len());
            let mut files = Vec::with_capacity(records.len());
            for (i, record) in records.iter().enumerate() {
                let file = MediaFile::from_json(record)
                    .with_context(|| format!("Record {} is invalid", i))?;
                files.push(file);
            }
            to_json(&files, pretty)?
        }
        record => to_json(&MediaFile::from_json(record)?, pretty)?,
    };
    println!("{}", json_str);

    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn classify(mime_type: &str, json: bool) -> Result<()> {
    let is_pdf = mime::is_pdf_mime(mime_type);
    let is_hls = mime::is_hls_mime(mime_type);

    if json {
        let out = serde_json::json!({
            "mimeType": mime_type,
            "class": mime::classify(mime_type),
            "isPDF": is_pdf,
            "isHLS": is_hls,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("MIME type: {}", mime_type);
        println!("Class: {}", mime::classify(mime_type));
        println!("isPDF: {}", is_pdf);
        println!("isHLS: {}", is_hls);
    }

    Ok(())
}

fn check_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Pretty output: {}", config.output.pretty);
            println!("  Log filter: {}", config.logging.filter);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Pretty output: {}", config.output.pretty);
            println!("  Log filter: {}", config.logging.filter);
        }
    }

    Ok(())
}
