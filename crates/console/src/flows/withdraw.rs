//! Stock withdrawal flow.
//!
//! The flow loops over two steps: pick a product from the stock table, then
//! enter the amount to withdraw. An unknown id offers a retry prompt; an
//! amount over the available stock reports the excess and restarts the flow
//! from the product list (the full round-trip is deliberate). A successful
//! withdrawal is persisted and the listing is shown again.

use std::io::{BufRead, Write};

use engine::EngineError;

use crate::error::Result;
use crate::flows::list;
use crate::session::Session;

pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    loop {
        session.screen.clear()?;
        session
            .screen
            .banner("======= Choose one of the products below =======")?;

        let products = session.inventory.all()?;
        session.screen.stock_table(&products)?;

        session.screen.prompt("Enter the product id:")?;
        let id = session.read_i64()?;

        let Some(mut product) = products.into_iter().find(|product| product.id == id) else {
            session.screen.clear()?;
            session
                .screen
                .error(&format!("Product with id {id} was not found in the list"))?;
            session
                .screen
                .banner("Do you want to enter the id again? (y/n)")?;
            let answer = session.read_line()?.trim().to_lowercase();
            session.screen.clear()?;
            if answer == "y" || answer == "yes" {
                continue;
            }
            return Ok(());
        };

        session.screen.clear()?;
        session.screen.prompt(&format!(
            "Enter the amount to withdraw from the stock of: {}",
            product.name
        ))?;
        session
            .screen
            .prompt(&format!("Current quantity: {}", product.quantity))?;
        let amount = session.read_i64()?;

        if session.strict_amounts && amount <= 0 {
            session
                .screen
                .error("The amount must be a positive number")?;
            session.screen.pause(3);
            continue;
        }

        match product.withdraw(amount) {
            Err(EngineError::InsufficientStock {
                requested,
                available,
            }) => {
                session.screen.error(&format!(
                    "The requested amount exceeds the stock by {}",
                    requested - available
                ))?;
                session.screen.pause(8);
                // Restart from the product list, not from the amount prompt.
            }
            Err(err) => return Err(err.into()),
            Ok(()) => {
                session.inventory.update(&product)?;
                session
                    .screen
                    .success("Withdrawal completed successfully!")?;
                session.screen.pause(3);
                return list::run(session);
            }
        }
    }
}
