#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod gui;

use std::path::Path;

use tracing_subscriber::EnvFilter;

use tabstrip::config::{load_config, load_config_from};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // An explicit config path must load; the default location may be absent.
    let config = match std::env::args_os().nth(1) {
        Some(path) => load_config_from(Path::new(&path))?,
        None => load_config(),
    };
    gui::run(config)
}
