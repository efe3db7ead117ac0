//! # Seed Catalog Utility
//!
//! This binary pushes the built-in seed catalog into the remote product
//! collection.
//!
//! **WARNING**: `--clear` deletes every existing product document first. That
//! cannot be undone.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package seed-catalog --bin seed_catalog -- [--clear] [--yes]
//! ```
//!
//! Reads `APPWRITE_*` settings from the environment (or `.env`). Writes need a
//! server key in `APPWRITE_API_KEY`. Seeded documents are owned by
//! `APPWRITE_SEED_OWNER_ID` (default `seed`).
//!
//! The program will:
//! 1. Load the backend configuration
//! 2. Look up existing products
//! 3. Ask for confirmation
//! 4. Delete existing products page by page if `--clear` was given
//! 5. Create one document per seed product and report the counts

use std::io::{self, Write};

use anyhow::Context;
use lib_appwrite::{clear_products, AppwriteClient, StorefrontBackend};
use lib_appwrite::queries::LIST_LIMIT;
use lib_core::config::init_config;
use lib_core::model::seed_catalog;
use lib_utils::envs::{get_env, get_env_or};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_OWNER_ID: &str = "seed";

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    clear: bool,
    assume_yes: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--clear" => options.clear = true,
            "--yes" | "-y" => options.assume_yes = true,
            other => anyhow::bail!("Unknown argument '{}'. Usage: seed_catalog [--clear] [--yes]", other),
        }
    }
    Ok(options)
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("seed_catalog=info,lib_appwrite=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let options = parse_args(std::env::args().skip(1))?;

    println!("============================================");
    println!("  Seed Catalog Utility");
    println!("============================================");
    println!();

    let config = init_config().context("Failed to load APPWRITE_* configuration")?;
    let client = match get_env("APPWRITE_API_KEY") {
        Ok(api_key) => AppwriteClient::new(config.clone()).with_api_key(api_key),
        Err(_) => {
            tracing::warn!("APPWRITE_API_KEY not set; writes will likely be rejected");
            AppwriteClient::new(config.clone())
        }
    };
    let owner_id = get_env_or("APPWRITE_SEED_OWNER_ID", DEFAULT_OWNER_ID);

    println!("Project:    {}", config.project_id);
    println!("Collection: {}", config.product_collection_id);
    println!();

    let existing = client
        .list_products()
        .await
        .context("Failed to list existing products")?;
    if existing.len() < LIST_LIMIT as usize {
        println!("Found {} existing product(s).", existing.len());
    } else {
        println!("Found at least {} existing product(s).", existing.len());
    }

    let seed = seed_catalog();
    if options.clear && !existing.is_empty() {
        println!("WARNING: --clear will delete ALL existing products!");
    }
    println!("About to create {} seed product(s).", seed.len());
    println!();

    if !options.assume_yes {
        print!("Continue? (yes/no): ");
        io::stdout().flush()?;

        let mut confirmation = String::new();
        io::stdin().read_line(&mut confirmation)?;
        if !is_confirmation(&confirmation) {
            println!("Operation cancelled.");
            return Ok(());
        }
        println!();
    }

    if options.clear {
        println!("Deleting existing products...");
        let deleted = clear_products(&client)
            .await
            .context("Failed to delete existing products")?;
        println!("Deleted {} product(s).", deleted);
    }

    println!("Creating seed products...");
    let mut created = 0usize;
    for product in &seed {
        let document = client
            .create_product(&product.to_product_data(&owner_id))
            .await
            .with_context(|| format!("Failed to create '{}'", product.name))?;
        tracing::info!(document_id = %document.id(), name = %product.name, "Seed product created");
        created += 1;
    }

    println!("Successfully created {} product(s).", created);
    println!();
    println!("Catalog seeded.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
        assert_eq!(
            parse_args(args(&["--clear", "-y"])).unwrap(),
            Options { clear: true, assume_yes: true }
        );
        assert!(parse_args(args(&["--force"])).is_err());
    }

    #[test]
    fn test_is_confirmation() {
        assert!(is_confirmation("yes\n"));
        assert!(is_confirmation(" Y "));
        assert!(!is_confirmation("no"));
        assert!(!is_confirmation(""));
    }

    #[test]
    fn test_seed_documents_are_valid() {
        for product in seed_catalog() {
            let data = product.to_product_data(DEFAULT_OWNER_ID);
            assert_eq!(data.user_id, DEFAULT_OWNER_ID);
            assert!(!data.image1.is_empty());
            assert!(data.price > 0);
        }
    }
}
