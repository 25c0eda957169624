//! Checkers desktop application
//!
//! Play red against the computer at one of three difficulties:
//! - easy: random moves
//! - medium: heuristic moves
//! - hard: a hosted language model, falling back to the heuristic

mod app;
mod board;
mod styles;

use anyhow::Context;
use app::CheckersApp;
use checkers_core::Settings;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::discover().context("failed to load settings")?;

    application("Checkers", CheckersApp::update, CheckersApp::view)
        .theme(CheckersApp::theme)
        .window_size((900.0, 640.0))
        .run_with(move || CheckersApp::new(settings))?;
    Ok(())
}
