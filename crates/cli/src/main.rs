//! Luxe CLI - shopping cart, catalog and contact form from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a ring to the cart and look at the totals
//! luxe cart add "Eternal Diamond Ring" 2499
//! luxe cart show --promo LUXE10
//!
//! # Adjust or drop a line item by id
//! luxe cart update 1718000000000 -1
//! luxe cart remove 1718000000000
//!
//! # Browse the catalog
//! luxe products --category rings --search diamond
//!
//! # Send the contact form
//! luxe contact -n "Ada" -e ada@example.com -m "Do you resize rings?"
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, update, remove, clear, show, count and check out
//! - `products` - List and filter the catalog
//! - `contact` - Validate a contact form submission
//!
//! Configuration comes from `LUXE_*` environment variables (see
//! `luxe_cart::CartConfig`). Logs go to stderr; set `RUST_LOG` to change
//! the level.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;

use clap::{Parser, Subcommand};
use luxe_cart::{AlwaysConfirm, CartConfig, CategoryFilter, ContactForm};
use luxe_core::{LineItemId, Price};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::cart::PromptConfirmation;

#[derive(Parser)]
#[command(name = "luxe")]
#[command(author, version, about = "Luxe jewelry storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// List products
    Products {
        /// Only show this category (`all` for every product)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Only show products whose name or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Submit the contact form
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,

        /// Subject line
        #[arg(short, long, default_value = "")]
        subject: String,

        /// Message body
        #[arg(short, long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Product name
        name: String,

        /// Unit price (e.g. 2499 or $2,499.00)
        price: Price,
    },
    /// Change a line item's quantity by a signed amount
    Update {
        /// Line item id
        id: LineItemId,

        /// Amount to add (negative to subtract)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove a line item
    Remove {
        /// Line item id
        id: LineItemId,
    },
    /// Remove every line item
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the cart and order summary
    Show {
        /// Promo code to price the order with
        #[arg(long)]
        promo: Option<String>,

        /// Print the cart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the number of units in the cart
    Count,
    /// Proceed to the demo checkout
    Checkout {
        /// Promo code to price the order with
        #[arg(long)]
        promo: Option<String>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("luxe_cart=info,luxe_cli=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Cart { action } => {
            let mut session = commands::cart::open(&config);
            match action {
                CartAction::Add { name, price } => {
                    commands::cart::add(&mut session, &mut out, &name, price)?;
                }
                CartAction::Update { id, delta } => {
                    commands::cart::update(&mut session, &mut out, id, delta)?;
                }
                CartAction::Remove { id } => {
                    commands::cart::remove(&mut session, &mut out, id)?;
                }
                CartAction::Clear { yes: true } => {
                    commands::cart::clear(&mut session, &mut out, &mut AlwaysConfirm)?;
                }
                CartAction::Clear { yes: false } => {
                    let mut prompt = PromptConfirmation::terminal();
                    commands::cart::clear(&mut session, &mut out, &mut prompt)?;
                }
                CartAction::Show { promo, json } => {
                    commands::cart::show(&mut session, &mut out, promo.as_deref(), json)?;
                }
                CartAction::Count => commands::cart::count(&session, &mut out)?,
                CartAction::Checkout { promo } => {
                    commands::cart::checkout(&mut session, &mut out, promo.as_deref())?;
                }
            }
        }
        Commands::Products { category, search } => {
            let catalog = commands::products::load_catalog(config.catalog_path.as_deref())?;
            commands::products::list(&catalog, &mut out, &category, search.as_deref())?;
        }
        Commands::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let form = ContactForm {
                name,
                email,
                phone,
                subject,
                message,
            };
            commands::contact::submit(&form, &mut out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_delta() {
        let cli = Cli::try_parse_from(["luxe", "cart", "update", "1718000000000", "-2"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cart {
                action: CartAction::Update { id, delta: -2 }
            } if id.as_i64() == 1_718_000_000_000
        ));
    }

    #[test]
    fn test_parse_price_with_symbol() {
        let cli = Cli::try_parse_from(["luxe", "cart", "add", "Gold Band", "$1,250.00"]).unwrap();
        let Commands::Cart {
            action: CartAction::Add { name, price },
        } = cli.command
        else {
            panic!("expected cart add");
        };
        assert_eq!(name, "Gold Band");
        assert_eq!(price, "1250".parse::<Price>().unwrap());
    }

    #[test]
    fn test_reject_negative_price() {
        assert!(Cli::try_parse_from(["luxe", "cart", "add", "Gold Band", "-5"]).is_err());
    }

    #[test]
    fn test_products_default_to_all() {
        let cli = Cli::try_parse_from(["luxe", "products"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Products {
                category: CategoryFilter::All,
                search: None
            }
        ));
    }
}
