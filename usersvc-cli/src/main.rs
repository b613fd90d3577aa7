//! usersvc - CRUD HTTP service over a single `users` table
//!
//! Reads startup configuration from flags, the environment and an optional
//! `.env` file, then serves until Ctrl+C or SIGTERM.

use anyhow::Result;
use clap::Parser;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "usersvc",
    author,
    version,
    about = "REST API exposing CRUD operations over a users table"
)]
struct Cli {
    /// Enable debug logging (logs request bodies and query results)
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    serve: commands::serve::ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before parsing so env-backed flags can see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    commands::run_serve(cli.serve).await
}
