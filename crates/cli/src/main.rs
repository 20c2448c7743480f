//! VestiuBem CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! vb-cli migrate
//!
//! # Promote an existing user to admin
//! vb-cli admin promote -e admin@vestiubem.com
//!
//! # Seed the default admin and starter catalog
//! vb-cli seed -p <admin-password>
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations (includes the sessions table)
//! - `admin promote` - Escalate an existing user to administrator
//! - `seed` - Idempotently insert the default admin and catalog items

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vb-cli")]
#[command(author, version, about = "VestiuBem CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the default admin user and starter catalog
    Seed {
        /// Password for the seeded admin account
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Promote an existing user to administrator
    Promote {
        /// User's email address
        #[arg(short, long)]
        email: String,
    },
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
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Promote { email } => {
                commands::admin::promote(&email).await?;
            }
        },
        Commands::Seed { password } => commands::seed::run(&password).await?,
    }
    Ok(())
}
