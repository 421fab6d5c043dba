//! Shopfront CLI - command-line front end for the commerce client.
//!
//! # Usage
//!
//! ```bash
//! # Authenticate and persist the session token
//! shopfront login -u alice -p hunter2
//!
//! # Browse and buy
//! shopfront items
//! shopfront add 1
//! shopfront cart
//! shopfront checkout
//! shopfront orders
//!
//! # Drop the session
//! shopfront logout
//! ```
//!
//! Configuration comes from the environment: `SHOPFRONT_API_URL` for the
//! storefront base address and `SHOPFRONT_TOKEN_FILE` for where the
//! credential is persisted between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary is the presentation layer; printing is its job.
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfront_client::config::ClientConfig;
use shopfront_client::session::{FileCredentialStore, SessionManager};
use shopfront_client::storefront::{self, CommerceClient};
use shopfront_core::ItemId;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Storefront shopping client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session token
    Logout,
    /// List the item catalog
    Items,
    /// Add an item to the cart
    Add {
        /// Item identifier from the catalog listing
        item_id: u64,
    },
    /// Check out the current cart
    Checkout,
    /// Show the current cart contents
    Cart,
    /// Show order history
    Orders,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Failed to load configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &ClientConfig) -> Result<(), String> {
    let store = FileCredentialStore::new(config.token_file.clone());
    let mut session = SessionManager::new(Box::new(store));

    match command {
        Commands::Login { username, password } => {
            let credential = storefront::login(&config.api_url, &username, &password)
                .await
                .map_err(|error| format!("Login failed: {error}"))?;
            session
                .login(credential)
                .map_err(|error| format!("Could not persist session: {error}"))?;
            println!("Logged in as {username}");
            Ok(())
        }
        Commands::Logout => {
            session
                .logout()
                .map_err(|error| format!("Could not clear session: {error}"))?;
            println!("Logged out");
            Ok(())
        }
        Commands::Items => {
            let client = authenticated_client(&mut session, config)?;
            // The one load per session; failures degrade to an empty listing.
            client.refresh_catalog().await;
            let catalog = client.catalog();
            if catalog.is_empty() {
                println!("No items available");
                return Ok(());
            }
            for item in catalog {
                println!("[{}] {} - {}", item.id, item.name, item.price);
                if !item.description.is_empty() {
                    println!("    {}", item.description);
                }
            }
            Ok(())
        }
        Commands::Add { item_id } => {
            let client = authenticated_client(&mut session, config)?;
            println!("{}", client.add_to_cart(ItemId::new(item_id)).await.notice());
            Ok(())
        }
        Commands::Checkout => {
            let client = authenticated_client(&mut session, config)?;
            println!("{}", client.checkout().await.notice());
            Ok(())
        }
        Commands::Cart => {
            let client = authenticated_client(&mut session, config)?;
            println!("{}", client.view_cart().await.notice());
            Ok(())
        }
        Commands::Orders => {
            let client = authenticated_client(&mut session, config)?;
            println!("{}", client.order_history().await.notice());
            Ok(())
        }
    }
}

/// Restore the persisted session and build a commerce client from it.
fn authenticated_client(
    session: &mut SessionManager,
    config: &ClientConfig,
) -> Result<CommerceClient, String> {
    let credential = session
        .restore()
        .map_err(|error| format!("Could not read session: {error}"))?
        .ok_or_else(|| "Not logged in. Run `shopfront login` first.".to_string())?;
    Ok(CommerceClient::new(config, credential))
}
