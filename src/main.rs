use anyhow::Context;
use walkabout::{app::App, config::Config};

fn main() {
    env_logger::init();
    log::info!("walkabout starting up");

    if let Err(e) = run() {
        log::error!("Fatal error: {e:#}");
        eprintln!("walkabout: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut app = App::new(Config::default()).context("could not set up the walker")?;
    app.run().context("terminal session failed")?;
    Ok(())
}
