use anyhow::Context;
use checkers_cli::{Flow, Session};
use checkers_core::Settings;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the game, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let settings = Settings::discover().context("failed to load settings")?;
    let mut session = Session::new(settings);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.greet(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let flow = session.handle_line(&line, &mut stdout)?;
        stdout.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
