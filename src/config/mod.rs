pub mod toml_config;

pub use toml_config::SiteConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "showcase-site")]
#[command(about = "Content and contact-form backend for the services showcase site")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load and print the services section
    Services {
        #[arg(long)]
        json: bool,
    },
    /// Load and print the portfolio section
    Portfolio {
        #[arg(long)]
        json: bool,
    },
    /// Send one contact message
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        service_type: String,
    },
    /// List outbound links and report malformed ones
    Links,
}
