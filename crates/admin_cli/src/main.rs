use std::error::Error;

use clap::{Args, Parser, Subcommand};
use engine::{EngineError, Inventory, Product, StorageBackend};

#[derive(Parser, Debug)]
#[command(name = "scorta_admin")]
#[command(about = "Admin utilities for Scorta (inspect and adjust the product store)")]
struct Cli {
    /// Storage file path (also read from `SCORTA_STORAGE`).
    #[arg(long, env = "SCORTA_STORAGE", default_value = "db/products.csv")]
    storage: String,

    /// Storage backend, csv or json (also read from `SCORTA_BACKEND`).
    #[arg(long, env = "SCORTA_BACKEND", default_value = "csv")]
    backend: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Product(ProductCmd),
}

#[derive(Args, Debug)]
struct ProductCmd {
    #[command(subcommand)]
    command: ProductCommand,
}

#[derive(Subcommand, Debug)]
enum ProductCommand {
    List,
    Add(ProductAddArgs),
    Withdraw(ProductWithdrawArgs),
}

#[derive(Args, Debug)]
struct ProductAddArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value_t = 0.0)]
    price: f64,
    #[arg(long, default_value_t = 0)]
    quantity: i64,
}

#[derive(Args, Debug)]
struct ProductWithdrawArgs {
    #[arg(long)]
    id: i64,
    #[arg(long)]
    amount: i64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let backend = match cli.backend.parse::<StorageBackend>() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let inventory = Inventory::builder()
        .backend(backend, &cli.storage)
        .build()?;

    match cli.command {
        Command::Product(ProductCmd {
            command: ProductCommand::List,
        }) => {
            for product in inventory.all()? {
                println!(
                    "{}\t{}\t{:.2}\t{}\t{}",
                    product.id, product.name, product.price, product.quantity, product.description
                );
            }
        }
        Command::Product(ProductCmd {
            command: ProductCommand::Add(args),
        }) => {
            if args.name.trim().is_empty() {
                eprintln!("the product name must not be empty");
                std::process::exit(2);
            }
            if args.price < 0.0 || args.quantity < 0 {
                eprintln!("price and quantity must not be negative");
                std::process::exit(2);
            }

            let product = Product::new(args.name, args.description, args.price, args.quantity);
            inventory.add(&product)?;
            println!("registered product: {} ({})", product.name, product.id);
        }
        Command::Product(ProductCmd {
            command: ProductCommand::Withdraw(args),
        }) => {
            let mut product = match inventory.find(args.id) {
                Ok(product) => product,
                Err(EngineError::ProductNotFound(id)) => {
                    eprintln!("product not found: {id}");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            };

            match product.withdraw(args.amount) {
                Ok(()) => {
                    inventory.update(&product)?;
                    println!(
                        "withdrew {} from {}: {} left",
                        args.amount, product.name, product.quantity
                    );
                }
                Err(err @ EngineError::InsufficientStock { .. }) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}
