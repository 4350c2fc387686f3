//! Registration flow: prompt for every field and persist a new product.
//!
//! The id is assigned from the creation timestamp by [`Product::new`], so
//! registering several products within the same second can repeat ids.

use std::io::{BufRead, Write};

use engine::Product;

use crate::error::Result;
use crate::session::Session;

pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    session.screen.clear()?;
    session.screen.plain("Starting product registration...")?;
    session.screen.pause(1);

    let name = loop {
        session.screen.prompt("Enter the product name:")?;
        let name = session.read_line()?.trim().to_string();
        if !name.is_empty() {
            break name;
        }
        session.screen.error("The name must not be empty")?;
    };

    session.screen.clear()?;
    session
        .screen
        .prompt(&format!("Enter the description of {name}:"))?;
    let description = session.read_line()?.trim().to_string();

    session.screen.clear()?;
    session
        .screen
        .prompt(&format!("Enter the price of {name}:"))?;
    let price = session.read_f64()?;

    session.screen.clear()?;
    session
        .screen
        .prompt(&format!("Enter the stock quantity of {name}:"))?;
    let quantity = session.read_i64()?;

    let product = Product::new(name.clone(), description, price, quantity);
    session.inventory.add(&product)?;

    session
        .screen
        .success(&format!("The product {name} was registered successfully!"))?;
    session.screen.pause(3);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::session::tests::{inventory_with, output_of, temp_store};

    #[test]
    fn registers_a_product_with_every_field() {
        let (inventory, path) = temp_store();
        let input = Cursor::new("Apple\nRed apple\n2.50\n20\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        run(&mut session).unwrap();

        let products = session.inventory.all().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Apple");
        assert_eq!(products[0].description, "Red apple");
        assert_eq!(products[0].price, 2.50);
        assert_eq!(products[0].quantity, 20);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn reprompts_until_the_name_is_not_empty() {
        let (inventory, path) = temp_store();
        let input = Cursor::new("\n\nApple\ncrisp\n1\n5\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        run(&mut session).unwrap();

        assert!(output_of(&session).contains("The name must not be empty"));
        assert_eq!(session.inventory.all().unwrap()[0].name, "Apple");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn junk_numeric_input_reads_as_zero() {
        let (inventory, path) = temp_store();
        let input = Cursor::new("Apple\n\nnot-a-price\nnot-a-quantity\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        run(&mut session).unwrap();

        let products = session.inventory.all().unwrap();
        assert_eq!(products[0].price, 0.0);
        assert_eq!(products[0].quantity, 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn seeded_store_keeps_existing_products() {
        let (inventory, path) = inventory_with(&[(1, "Apple", 20)]);
        let input = Cursor::new("Banana\nDwarf\n1.50\n30\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        run(&mut session).unwrap();

        assert_eq!(session.inventory.all().unwrap().len(), 2);
        std::fs::remove_file(path).unwrap();
    }
}
