//! Registration CLI
//!
//! Drives the portal's sign-up form from a terminal: registers a new account
//! against the configured backend, or shows where a path routes to.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use core_config::api::ApiConfig;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use eyre::Result;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "registration-cli")]
#[command(about = "Register portal accounts from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        /// Role selector value: 1 = usuario, any other value = admin
        #[arg(short, long, default_value = "")]
        role: String,

        /// Email address of the new account
        #[arg(short, long, default_value = "")]
        email: String,

        /// Password of the new account
        #[arg(short, long, default_value = "")]
        password: String,

        /// Password again, must match exactly
        #[arg(long, default_value = "")]
        repeat_password: String,
    },

    /// Show which page a path resolves to, or list all pages
    Route {
        /// Path to resolve, e.g. /logIn
        path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();

    match cli.command {
        Commands::Register {
            role,
            email,
            password,
            repeat_password,
        } => {
            let config = ApiConfig::from_env()?;
            let input = domain_registration::RegistrationInput::new(
                &role,
                email,
                password,
                repeat_password,
            );
            let registered = commands::register(&config, &input).await?;
            Ok(if registered {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Commands::Route { path } => {
            let mut stdout = std::io::stdout().lock();
            commands::route(path.as_deref(), &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
