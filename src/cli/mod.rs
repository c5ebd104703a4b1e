//! Command-line interface
//!
//! # Commands
//!
//! - `list-networks` - Networks with REStake validators and registry data
//! - `list-validators --network <id>` - REStake validators on one network
//! - `info` - Current delegations of an address
//! - `grant` - Print the authz grant commands for a Ledger key

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::directory::DirectoryClient;

pub mod commands;
pub mod utils;

/// Helps set up REStake authz grants for Ledger users
#[derive(Parser, Debug)]
#[command(name = "restake-authz-ledger")]
#[command(version)]
#[command(about = "A small application to help manually make ledger authz work on REStake", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output, especially errors
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List supported networks
    ListNetworks,

    /// List validators
    ListValidators {
        /// The network to list validators for
        #[arg(long)]
        network: String,
    },

    /// Print information about current delegations
    Info {
        /// Network identifier, skips the network prompt
        #[arg(long)]
        network: Option<String>,
    },

    /// Grant the required access to a validator
    Grant {
        /// Network identifier, skips the network prompt
        #[arg(long)]
        network: Option<String>,
    },
}

/// Shared state for one command invocation
pub struct Context {
    pub config: Config,
    pub directory: DirectoryClient,
}

impl Context {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let directory = DirectoryClient::new(config.clone())?;
        Ok(Self { config, directory })
    }
}

/// Run the CLI application
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new(Config::from_env())?;

    match cli.command {
        Commands::ListNetworks => commands::networks::list_networks(&ctx).await,
        Commands::ListValidators { network } => {
            commands::validators::list_validators(&ctx, &network).await
        }
        Commands::Info { network } => commands::info::execute(&ctx, network.as_deref()).await,
        Commands::Grant { network } => commands::grant::execute(&ctx, network.as_deref()).await,
    }
}

/// Report a failed command.
///
/// Verbose mode prints the full report (cause chain and, when captured, the
/// backtrace) to stdout. Otherwise a single line goes to stderr.
pub fn report_error(err: &anyhow::Error, verbose: bool) {
    let report = error_report(err, verbose);
    if verbose {
        println!("{}", report);
    } else {
        utils::print_error(&report);
    }
}

/// Text of the failure report: the `{:?}` report when verbose, else one line
pub fn error_report(err: &anyhow::Error, verbose: bool) -> String {
    if verbose {
        format!("{:?}", err)
    } else {
        format!("Error: {:#}", err)
    }
}
