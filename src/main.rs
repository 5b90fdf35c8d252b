// src/main.rs
// Desktop entry point (feature `desktop`)

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use anyhow::Context;

use gamehub::application::desktop;
use gamehub::config::AppConfig;
use gamehub::logging::init_logging;
use gamehub::AppState;

fn main() -> anyhow::Result<()> {
    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("loading configuration")?;

    // 2. LOGGING
    init_logging(&config.log_level)?;
    log::info!("Starting GameHub (page size {})", config.page_size);

    // 3. SERVICES
    let state = AppState::bootstrap(&config).context("starting services")?;

    // 4. TAURI BOOTSTRAP
    desktop::run(state)
}
