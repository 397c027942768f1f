use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "HCKR_LOG";

pub fn log_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?
        .join("hckr-tui");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("hckr-tui.log"))
}

/// Send tracing output to a log file, since the terminal belongs to the UI.
///
/// Level comes from `HCKR_LOG` (e.g. `debug`, `hckr_tui=trace`), default `info`.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    Ok(path)
}
