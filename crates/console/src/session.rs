//! The module contains the interactive session: the menu loop plus the
//! input seam shared by the flows.
//!
//! Input and output are generic so the flows can be driven by scripted
//! buffers in tests and by stdin/stdout in the binary.

use std::io::{self, BufRead, Write};

use engine::Inventory;

use crate::error::Result;
use crate::flows;
use crate::screen::Screen;

pub struct Session<R, W> {
    pub(crate) input: R,
    pub(crate) screen: Screen<W>,
    pub(crate) inventory: Inventory,
    pub(crate) strict_amounts: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, inventory: Inventory, interactive: bool) -> Self {
        Self {
            input,
            screen: Screen::new(output, interactive),
            inventory,
            strict_amounts: false,
        }
    }

    pub fn strict_amounts(mut self, strict: bool) -> Self {
        self.strict_amounts = strict;
        self
    }

    /// Read one line of input, without the trailing newline.
    pub(crate) fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Permissive integer read: anything that does not parse is 0.
    pub(crate) fn read_i64(&mut self) -> io::Result<i64> {
        Ok(self.read_line()?.trim().parse().unwrap_or(0))
    }

    /// Permissive decimal read: anything that does not parse is 0.0.
    pub(crate) fn read_f64(&mut self) -> io::Result<f64> {
        Ok(self.read_line()?.trim().parse().unwrap_or(0.0))
    }

    /// Run the menu loop until the user quits.
    ///
    /// A flow failing on storage aborts that operation with a red message;
    /// the loop itself keeps running.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.screen.clear()?;
            self.screen.banner("======= Scorta: stock control =======")?;
            self.screen.plain("1. Register product")?;
            self.screen.plain("2. List products")?;
            self.screen.plain("3. Withdraw stock")?;
            self.screen.plain("0. Quit")?;
            self.screen.prompt("Choose an option:")?;

            let outcome = match self.read_i64()? {
                1 => flows::register::run(self),
                2 => flows::list::run(self),
                3 => flows::withdraw::run(self),
                0 => break,
                other => {
                    self.screen
                        .error(&format!("Unknown option: {other}"))?;
                    self.screen.pause(2);
                    Ok(())
                }
            };

            if let Err(err) = outcome {
                tracing::error!("operation failed: {err}");
                self.screen.error(&format!("Operation failed: {err}"))?;
                self.screen.pause(3);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    use engine::{Inventory, Product};
    use uuid::Uuid;

    use super::Session;

    pub(crate) fn temp_store() -> (Inventory, PathBuf) {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
        fs::create_dir_all(&root).unwrap();
        let path = root.join(format!("console_{}.csv", Uuid::new_v4()));
        let inventory = Inventory::builder().csv(&path).build().unwrap();

        (inventory, path)
    }

    pub(crate) fn inventory_with(products: &[(i64, &str, i64)]) -> (Inventory, PathBuf) {
        let (inventory, path) = temp_store();
        for (id, name, quantity) in products {
            inventory
                .add(&Product::with_id(
                    *id,
                    name.to_string(),
                    String::new(),
                    1.0,
                    *quantity,
                ))
                .unwrap();
        }

        (inventory, path)
    }

    pub(crate) fn output_of<R>(session: &Session<R, Vec<u8>>) -> String {
        String::from_utf8_lossy(session.screen.output()).into_owned()
    }

    #[test]
    fn menu_quits_on_zero() {
        let (inventory, path) = temp_store();
        let input = Cursor::new("0\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        session.run().unwrap();

        assert!(output_of(&session).contains("======= Scorta: stock control ======="));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn menu_reports_unknown_options_and_keeps_running() {
        let (inventory, path) = temp_store();
        let input = Cursor::new("7\n0\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        session.run().unwrap();

        assert!(output_of(&session).contains("Unknown option: 7"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn menu_dispatches_to_the_listing_flow() {
        let (inventory, path) = inventory_with(&[(1, "Apple", 20)]);
        let input = Cursor::new("2\n\n0\n");
        let mut session = Session::new(input, Vec::new(), inventory, false);

        session.run().unwrap();

        assert!(output_of(&session).contains("======= Registered products ======="));
        let _ = fs::remove_file(path);
    }
}
