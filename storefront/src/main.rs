use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use storefront::{AppConfig, Migrator, StartupError, db, seed, server, telemetry};

#[derive(Parser)]
#[command(name = "storefront", version, about = "Catalog and order CRUD service")]
struct Cli {
    /// YAML configuration file (default: storefront.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Command {
    /// Apply pending migrations and serve the HTTP API
    #[default]
    Serve,
    /// Apply pending migrations
    Migrate,
    /// Revert the most recent migration
    Rollback,
    /// List applied and pending migrations
    Status,
    /// Apply pending migrations and insert the sample catalog
    Seed,
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    telemetry::init(&config.log);

    let db = db::connect(&config.database_url).await?;

    match cli.command.unwrap_or_default() {
        Command::Serve => {
            Migrator::up(&db, None).await?;
            if config.seed_on_start {
                seed::seed(&db).await?;
            }
            server::serve(&db, &config.bind_addr).await?;
        }
        Command::Migrate => {
            Migrator::up(&db, None).await?;
            tracing::info!("migrations applied");
        }
        Command::Rollback => {
            Migrator::down(&db, Some(1)).await?;
            tracing::info!("last migration reverted");
        }
        Command::Status => {
            for migration in Migrator::get_applied_migrations(&db).await? {
                println!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&db).await? {
                println!("pending  {}", migration.name());
            }
        }
        Command::Seed => {
            Migrator::up(&db, None).await?;
            let report = seed::seed(&db).await?;
            if report.is_empty() {
                println!("database already holds data; nothing seeded");
            } else {
                println!("{report:?}");
            }
        }
    }
    Ok(())
}
