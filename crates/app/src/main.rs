//! Stockroom administration CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use stockroom_app::{context::AppContext, database::PoolSettings};

#[derive(Debug, Parser)]
#[command(name = "stockroom-app", about = "Stockroom CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(DatabaseArgs),

    /// Print profit totals across every recorded sale
    Profit(DatabaseArgs),

    /// Delete every product and ledger entry
    Wipe(WipeArgs),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct WipeArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Migrate(args) => {
            let ctx = connect(&args, true).await?;

            println!("migrations applied");

            ctx.close().await;

            Ok(())
        }
        Commands::Profit(args) => profit(args).await,
        Commands::Wipe(args) => wipe(args).await,
    }
}

async fn connect(args: &DatabaseArgs, run_migrations: bool) -> Result<AppContext, String> {
    AppContext::from_database_url(&args.database_url, PoolSettings::default(), run_migrations)
        .await
        .map_err(|error| format!("{error}: {}", source_message(&error)))
}

fn source_message(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map(ToString::to_string)
        .unwrap_or_default()
}

async fn profit(args: DatabaseArgs) -> Result<(), String> {
    let ctx = connect(&args, false).await?;

    let report = ctx
        .profit
        .profit_report()
        .await
        .map_err(|error| format!("failed to compute profit report: {error}"))?;

    let summary = ctx
        .profit
        .profit_summary()
        .await
        .map_err(|error| format!("failed to compute profit summary: {error}"))?;

    println!("transaction_count: {}", report.transaction_count);
    println!("total_revenue: {}", report.total_revenue);
    println!("total_profit: {}", summary.total_profit);

    ctx.close().await;

    Ok(())
}

async fn wipe(args: WipeArgs) -> Result<(), String> {
    if !args.yes {
        return Err("refusing to delete all data without --yes".to_string());
    }

    let ctx = connect(&args.database, false).await?;

    let counts = ctx
        .maintenance
        .wipe_all()
        .await
        .map_err(|error| format!("failed to wipe data: {error}"))?;

    println!("deleted_products: {}", counts.products);
    println!("deleted_inbound: {}", counts.inbound);
    println!("deleted_outbound: {}", counts.outbound);

    ctx.close().await;

    Ok(())
}
