//! Presentation helpers: screen clearing, colored status lines and the
//! product tables. Everything degrades to plain lines when the session is
//! not interactive, so scripted tests see readable output.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::style::Stylize;
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use engine::Product;

pub struct Screen<W> {
    out: W,
    interactive: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }
        execute!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Sleep so the user can read a status line before the next clear.
    pub fn pause(&mut self, seconds: u64) {
        if self.interactive {
            thread::sleep(Duration::from_secs(seconds));
        }
    }

    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        if self.interactive {
            writeln!(self.out, "{}", text.yellow())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.interactive {
            writeln!(self.out, "{}", text.blue())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        if self.interactive {
            writeln!(self.out, "{}", text.red())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        if self.interactive {
            writeln!(self.out, "{}", text.green())
        } else {
            writeln!(self.out, "{text}")
        }
    }

    pub fn plain(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Table of id, name and quantity, used by the withdrawal flow.
    pub fn stock_table(&mut self, products: &[Product]) -> io::Result<()> {
        let rows: Vec<[String; 3]> = products
            .iter()
            .map(|product| {
                [
                    product.id.to_string(),
                    product.name.clone(),
                    product.quantity.to_string(),
                ]
            })
            .collect();
        self.table(["Id", "Name", "Quantity"], &rows)
    }

    /// Table of every product field, used by the listing flow.
    pub fn product_table(&mut self, products: &[Product]) -> io::Result<()> {
        let rows: Vec<[String; 5]> = products
            .iter()
            .map(|product| {
                [
                    product.id.to_string(),
                    product.name.clone(),
                    format!("{:.2}", product.price),
                    product.quantity.to_string(),
                    product.description.clone(),
                ]
            })
            .collect();
        self.table(["Id", "Name", "Price", "Quantity", "Description"], &rows)
    }

    fn table<const N: usize>(&mut self, headers: [&str; N], rows: &[[String; N]]) -> io::Result<()> {
        let mut widths: [usize; N] = [0; N];
        for (index, header) in headers.iter().enumerate() {
            widths[index] = header.len();
        }
        for row in rows {
            for (index, cell) in row.iter().enumerate() {
                widths[index] = widths[index].max(cell.len());
            }
        }

        let mut line = String::new();
        for (index, header) in headers.iter().enumerate() {
            line.push_str(&format!("{:<width$}  ", header, width = widths[index]));
        }
        writeln!(self.out, "{}", line.trim_end())?;

        let mut rule = String::new();
        for width in widths {
            rule.push_str(&"-".repeat(width));
            rule.push_str("  ");
        }
        writeln!(self.out, "{}", rule.trim_end())?;

        for row in rows {
            let mut line = String::new();
            for (index, cell) in row.iter().enumerate() {
                line.push_str(&format!("{:<width$}  ", cell, width = widths[index]));
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
