//! Hearthside CLI - Drives the storefront widget from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add products to a cart and check out as a one-time order
//! hearth-cli order bundle bundle facecord
//!
//! # Sign up for a recurring delivery subscription
//! hearth-cli subscribe -p facecord -f quarterly -e a@example.com \
//!     --phone 207-555-0101 --address "12 Birch Lane" --city Bangor \
//!     --state ME --zip 04401
//!
//! # Send a contact message
//! hearth-cli contact -n Ann -e a@example.com -m "Do you deliver on weekends?"
//!
//! # View a customer's subscriptions
//! hearth-cli portal a@example.com
//!
//! # Manage a subscription
//! hearth-cli subscription pause <id>
//! ```
//!
//! Records persist as JSON files under `HEARTHSIDE_DATA_DIR` (default
//! `./data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hearth-cli")]
#[command(author, version, about = "Hearthside storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add products to the cart and show it (cart is per-invocation)
    Cart {
        /// Product keys (bundle, halffacecord, facecord, ibctote)
        products: Vec<String>,
    },
    /// Add products to the cart and check out as a one-time order
    Order {
        /// Product keys (bundle, halffacecord, facecord, ibctote)
        products: Vec<String>,
    },
    /// Sign up for a recurring delivery subscription
    Subscribe {
        /// Product key
        #[arg(short, long)]
        product: String,

        /// Delivery frequency (monthly, bimonthly, quarterly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Customer email
        #[arg(short, long)]
        email: String,

        /// Customer phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// City
        #[arg(long)]
        city: String,

        /// State
        #[arg(long)]
        state: String,

        /// ZIP code
        #[arg(long)]
        zip: String,
    },
    /// Send a contact message
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email
        #[arg(short, long)]
        email: String,

        /// Phone number (optional)
        #[arg(long, default_value = "")]
        phone: String,

        /// Message text
        #[arg(short, long)]
        message: String,
    },
    /// Show a customer's subscriptions
    Portal {
        /// Customer email
        email: String,
    },
    /// Manage an existing subscription
    Subscription {
        #[command(subcommand)]
        action: SubscriptionAction,
    },
}

#[derive(Subcommand)]
enum SubscriptionAction {
    /// Pause deliveries
    Pause { id: String },
    /// Resume deliveries
    Resume { id: String },
    /// Cancel the subscription
    Cancel { id: String },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { products } => commands::cart(&products)?,
        Commands::Order { products } => commands::order(&products).await?,
        Commands::Subscribe {
            product,
            frequency,
            email,
            phone,
            address,
            city,
            state,
            zip,
        } => {
            commands::subscribe(hearthside_storefront::form::SubscriptionForm {
                product,
                frequency,
                email,
                phone,
                address,
                city,
                state,
                zip,
            })
            .await?;
        }
        Commands::Contact {
            name,
            email,
            phone,
            message,
        } => {
            commands::contact(hearthside_storefront::form::ContactForm {
                name,
                email,
                phone,
                message,
            })?;
        }
        Commands::Portal { email } => commands::portal(&email)?,
        Commands::Subscription { action } => match action {
            SubscriptionAction::Pause { id } => commands::pause(&id)?,
            SubscriptionAction::Resume { id } => commands::resume(&id)?,
            SubscriptionAction::Cancel { id } => commands::cancel(&id)?,
        },
    }
    Ok(())
}
