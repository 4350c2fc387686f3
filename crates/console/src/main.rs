mod config;
mod error;
mod flows;
mod screen;
mod session;

use std::io;

use engine::{Inventory, StorageBackend};

use crate::error::Result;
use crate::session::Session;

fn main() -> Result<()> {
    let config = config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "scorta={level},engine={level}",
            level = config.level
        ))
        .init();

    let backend: StorageBackend = config.backend.parse()?;
    let inventory = Inventory::builder()
        .backend(backend, &config.storage)
        .build()?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut session =
        Session::new(stdin, stdout, inventory, true).strict_amounts(config.strict_amounts);
    session.run()?;

    Ok(())
}
