use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cfg = ripple_pond::config::Config::parse();
    ripple_pond::app::run(cfg)?;
    Ok(())
}
