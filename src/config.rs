//! Configuration file support for io-styles.
//!
//! Provides YAML-based configuration through `io-styles.config.yml` files,
//! including loading, validation and merging with CLI arguments.

use anyhow::{bail, Context};
use io_styles::adapters::outbound::filesystem::MAX_CHUNK_SIZE;
use io_styles::application::dto::RunRequest;
use io_styles::io_examples::domain::{IoStyle, TextEncoding};
use io_styles::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;

const CONFIG_FILENAME: &str = "io-styles.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub encoding: Option<TextEncoding>,
    pub chunk_size: Option<usize>,
    pub styles: Option<Vec<IoStyle>>,
    pub fresh: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(chunk_size) = config.chunk_size {
        if !(1..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            bail!(
                "Invalid config: chunk_size must be between 1 and {} (got {}).\n\n\
                 💡 Hint: The channel example reads the file in chunks of this many bytes (default 10).",
                MAX_CHUNK_SIZE,
                chunk_size
            );
        }
    }
    if matches!(config.styles, Some(ref styles) if styles.is_empty()) {
        bail!(
            "Invalid config: styles must not be empty.\n\n\
             💡 Hint: Remove the key to run all styles, or list at least one of \
             raw-bytes, buffered-text, byte-stream, channel."
        );
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Resolve the run settings: CLI flag > config file > built-in default.
pub fn resolve_request(args: &Args, config: Option<&ConfigFile>) -> RunRequest {
    let defaults = RunRequest::default();
    let empty = ConfigFile::default();
    let config = config.unwrap_or(&empty);

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or(defaults.output_dir);
    let encoding = args
        .encoding
        .or(config.encoding)
        .unwrap_or(defaults.encoding);
    let chunk_size = args
        .chunk_size
        .or(config.chunk_size)
        .unwrap_or(defaults.chunk_size);
    let styles = if !args.styles.is_empty() {
        args.styles.clone()
    } else {
        config.styles.clone().unwrap_or(defaults.styles)
    };
    let fresh = args.fresh || config.fresh.unwrap_or(defaults.fresh);

    RunRequest::new(
        output_dir,
        encoding,
        chunk_size,
        dedup_styles(styles),
        fresh,
    )
}

/// Keeps the first occurrence of each style, preserving order.
fn dedup_styles(styles: Vec<IoStyle>) -> Vec<IoStyle> {
    let mut unique = Vec::with_capacity(styles.len());
    for style in styles {
        if !unique.contains(&style) {
            unique.push(style);
        }
    }
    unique
}
