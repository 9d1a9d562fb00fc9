//! PrintPro CLI - Drive the storefront demo flow from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Look up a directory user (mock login)
//! printpro login user@example.com
//!
//! # List one user's orders, or all orders (admin view)
//! printpro orders list --user user@example.com
//! printpro orders list --all
//!
//! # Walk the draft workflow and place an order
//! printpro orders place --user user@example.com \
//!     --file resume.pdf --file photo.png \
//!     --print-type color --print-size a4 --quantity 2 \
//!     --delivery courier --address "123 Main St"
//!
//! # Update an order's status (admin)
//! printpro orders set-status ORD-001 printed
//! ```
//!
//! # Environment Variables
//!
//! - `PRINTPRO_LATENCY_MS` - Simulated store latency (default: 500)
//! - `PRINTPRO_SEED` - Start with demo orders (default: true)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use print_pro_store::MockStore;
use print_pro_storefront::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "printpro")]
#[command(author, version, about = "PrintPro print shop demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a user in the directory (mock login)
    Login {
        /// Login email address
        email: String,
    },
    /// Inspect and manage orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders
    List {
        /// Show the orders of this user
        #[arg(short, long, conflicts_with = "all")]
        user: Option<String>,

        /// Show every order in the store (admin view)
        #[arg(long)]
        all: bool,
    },
    /// Walk the four-step draft workflow and place an order
    Place {
        /// Email of the ordering user
        #[arg(short, long)]
        user: String,

        /// File to upload (repeatable)
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,

        /// Print type for all files (`bw`, `color`)
        #[arg(long, default_value = "bw")]
        print_type: String,

        /// Print size for all files (`a4`, `a5`, `pvc`)
        #[arg(long, default_value = "a4")]
        print_size: String,

        /// Copies per file
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Delivery option (`pickup`, `courier`, `download`)
        #[arg(long, default_value = "pickup")]
        delivery: String,

        /// Shipping address (required for courier delivery)
        #[arg(long)]
        address: Option<String>,
    },
    /// Update an order's status (admin)
    SetStatus {
        /// Order identifier (`ORD-NNN`)
        order_id: String,

        /// New status (`pending`, `printed`, `dispatched`, `delivered`,
        /// `cancelled`)
        status: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = if config.seed_demo_data {
        MockStore::seeded(config.store_latency)
    } else {
        MockStore::new(config.store_latency)
    };

    match cli.command {
        Commands::Login { email } => commands::login::run(&store, &email).await?,
        Commands::Orders { action } => match action {
            OrdersAction::List { user, all } => {
                commands::orders::list(&store, user.as_deref(), all).await?;
            }
            OrdersAction::Place {
                user,
                files,
                print_type,
                print_size,
                quantity,
                delivery,
                address,
            } => {
                commands::orders::place(
                    &store,
                    &user,
                    &files,
                    &print_type,
                    &print_size,
                    quantity,
                    &delivery,
                    address.as_deref(),
                )
                .await?;
            }
            OrdersAction::SetStatus { order_id, status } => {
                commands::orders::set_status(&store, &order_id, &status).await?;
            }
        },
    }
    Ok(())
}
