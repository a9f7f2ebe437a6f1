//! Maintenance entry point for the kitchen database.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin mealmax-kitchen -- migrate
//! cargo run --bin mealmax-kitchen -- check
//! cargo run --bin mealmax-kitchen -- roll
//! ```

use clap::{Parser, Subcommand};
use mealmax_kitchen::{
    KitchenConfig, RandomOrgClient,
    domain::RandomSource,
    infrastructure::repository::sqlite::{
        MEALS_TABLE, check_database_connection, check_table_exists, create_pool, migrate,
    },
};
use mealmax_shared::setup_logger;

#[derive(Debug, Parser)]
#[command(version, about = "MealMax kitchen maintenance")]
struct Cli {
    #[command(flatten)]
    config: KitchenConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the meals table if it does not exist
    Migrate,
    /// Verify the database is reachable and the meals table exists
    Check,
    /// Fetch one random number from the configured provider
    Roll,
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config;
    match cli.command {
        Command::Migrate => {
            let pool = create_pool(&config.database_url, config.max_connections).await?;
            migrate(&pool).await?;
            pool.close().await;
        }
        Command::Check => {
            let pool = create_pool(&config.database_url, config.max_connections).await?;
            check_database_connection(&pool).await?;
            check_table_exists(&pool, MEALS_TABLE).await?;
            tracing::info!("Database is healthy");
            pool.close().await;
        }
        Command::Roll => {
            let client = RandomOrgClient::new(config.random_url.clone(), config.random_timeout())?;
            let value = client.fetch().await?;
            println!("{value}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.config.log_level);

    if let Err(e) = run(cli).await {
        tracing::error!("Kitchen error: {}", e);
        std::process::exit(1);
    }
}
