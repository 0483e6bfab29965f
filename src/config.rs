use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::data::loader::{DataSource, DEFAULT_DATA_URL};

/// Default bind address for the HTTP dashboard.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";

/// Penguin Dash: explore the Palmer penguins measurements
#[derive(Parser, Debug)]
#[command(name = "penguin-dash", version, about, long_about = None)]
pub struct Cli {
    /// CSV/JSON file or http(s) URL to load the penguins from
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_URL)]
    pub data: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the dashboard over HTTP (default)
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_ADDR)]
        addr: SocketAddr,
    },
    /// Open the dashboard in a native window
    Desktop,
}

/// How the dashboard is presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frontend {
    Http(SocketAddr),
    Desktop,
}

/// Resolved start-up configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub frontend: Frontend,
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        let frontend = match cli.command {
            Some(Command::Serve { addr }) => Frontend::Http(addr),
            Some(Command::Desktop) => Frontend::Desktop,
            None => Frontend::Http(default_addr()),
        };
        DashboardConfig {
            source: DataSource::parse(&cli.data),
            frontend,
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8050))
}
