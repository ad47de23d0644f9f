//! memo-migrate: move memos from a client-side store export into PostgreSQL.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_db::Database;
use memo_import::{sample_memos, ImportMode, LocalStoreFile, MemoImporter};

#[derive(Parser)]
#[command(name = "memo-migrate")]
#[command(author, version, about = "Migrate local memos into memo-keeper")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a local store export into the database
    Import {
        /// Path to the exported store (JSON array or {"memos": [...]})
        file: PathBuf,

        /// PostgreSQL connection string
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },

    /// Write the sample memos to a local store file if it has none
    Seed {
        /// Path to the local store file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_import=info,memo_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command fully succeeded.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Import { file, database_url } => cmd_import(file, &database_url).await,
        Commands::Seed { file } => cmd_seed(file).await,
    }
}

async fn cmd_import(file: PathBuf, database_url: &str) -> anyhow::Result<bool> {
    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;

    let importer = MemoImporter::new(Arc::new(db.memos.clone()));
    let source = LocalStoreFile::new(file);
    let result = importer.import_from(&source, ImportMode::Reconcile).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.success)
}

async fn cmd_seed(file: PathBuf) -> anyhow::Result<bool> {
    let store = LocalStoreFile::new(file);
    let wrote = store
        .seed_if_empty(&sample_memos(chrono::Utc::now()))
        .await
        .with_context(|| format!("Failed to seed {}", store.path().display()))?;

    if wrote {
        println!("Seeded sample memos into {}", store.path().display());
    } else {
        println!(
            "{} already holds memos; nothing written",
            store.path().display()
        );
    }
    Ok(true)
}
