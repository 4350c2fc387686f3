//! Listing flow: render the whole collection and wait for the user.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::session::Session;

pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.screen.clear()?;
    session
        .screen
        .banner("======= Registered products =======")?;

    let products = session.inventory.all()?;
    if products.is_empty() {
        session.screen.plain("No products registered yet.")?;
    } else {
        session.screen.product_table(&products)?;
    }

    session.screen.prompt("Press Enter to continue")?;
    session.read_line()?;

    Ok(())
}
