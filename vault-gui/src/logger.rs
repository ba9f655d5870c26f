use crate::dir::VaultDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

pub const GUI_LOG_FILE_NAME: &str = "vault-gui.log";

// Targets of the rendering and windowing stack, too verbose at debug level.
const FILTERED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "gfx_backend_vulkan",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "tokio",
    "sctk",
];

pub fn setup_logger(
    log_level: filter::LevelFilter,
    datadir: &VaultDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(datadir.log_path())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Applies to both layers.
                .with_filter(filter::filter_fn(|metadata| {
                    !is_filtered_target(metadata.target())
                })),
        )
        .try_init()?;

    Ok(())
}

fn is_filtered_target(target: &str) -> bool {
    FILTERED_TARGETS.iter().any(|t| target.starts_with(t))
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
