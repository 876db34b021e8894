use std::io;

use anyhow::Result;
use tracing::info;

use gomoku_engine::SearchConfig;
use gomoku_session::{Driver, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gomoku starting");

    let mut driver = Driver::new(SessionConfig::default(), SearchConfig::default(), io::stdout())?;
    driver.run(io::BufReader::new(io::stdin()))?;
    Ok(())
}
