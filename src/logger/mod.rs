//! Logger built on `tracing-subscriber`.
//!
//! Supports console output with color control and file output in full,
//! compact or JSON format.

pub mod config;

pub use config::*;

use std::fs::{self, File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Mutex;

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Initialize the global subscriber with the given configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let level = LevelFilter::from_level(config.parse_level()?);
    let filter = EnvFilter::default().add_directive(level.into());
    let layers = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    Ok(())
}

/// File layer goes first so ANSI codes from the console layer do not leak
/// into span fields written to the file.
fn build_layers(config: &LoggerConfig) -> anyhow::Result<Vec<BoxedLayer>> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.file.enabled {
        let writer = Mutex::new(open_log_file(&config.file)?);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        layers.push(match config.file.format {
            LogFormat::Full => layer.with_target(true).boxed(),
            LogFormat::Compact => layer.with_target(true).compact().boxed(),
            LogFormat::Json => layer.json().boxed(),
        });
    }

    if config.console.enabled {
        let use_ansi = config.console.colored && std::io::stdout().is_terminal();
        layers.push(
            fmt::layer()
                .with_ansi(use_ansi)
                .with_target(true)
                .with_level(true)
                .boxed(),
        );
    }

    Ok(layers)
}

fn open_log_file(config: &FileConfig) -> anyhow::Result<File> {
    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    options
        .open(&config.path)
        .with_context(|| format!("Failed to open log file {}", config.path.display()))
}
