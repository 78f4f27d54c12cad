//! Syndic Admin - command-line roster inspection.
//!
//! Fetches the user roster from the configured directory service and prints
//! it ordered by name. Mostly a smoke tool for operators; the real consumers
//! of this crate are UI shells embedding [`syndic_client::Synchronizer`].

use syndic_client::{Config, HttpDirectory, Synchronizer};
use syndic_engine::{
    ordering::{self, SortConfig, SortDirection},
    User, UserField,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syndic_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Connecting to directory at {}", config.api_url);

    let directory = HttpDirectory::new(&config)?;
    let synchronizer = Synchronizer::new(directory);

    synchronizer.refresh().await?;

    let roster = synchronizer.current_roster();
    let by_name = SortConfig::new(UserField::Name, SortDirection::Ascending);
    let ordered = ordering::sort(roster.users(), &by_name, User::sort_value);

    println!("{} users", ordered.len());
    for user in &ordered {
        println!(
            "{:<24} {:<8} {:<8} houses={:?}",
            user.name.as_deref().unwrap_or("-"),
            user.role.to_string(),
            user.status.to_string(),
            user.houses,
        );
    }

    Ok(())
}
