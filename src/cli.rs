use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "movie-search", version, about = "Movie search proxy and terminal client")]
pub struct Cli {
    /// Config file (default: <config dir>/movie-search/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the proxy server
    Serve {
        /// Listen port, overrides config and PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the interactive terminal client
    Tui {
        /// Proxy API root, e.g. http://localhost:3001/api
        #[arg(long, value_name = "URL")]
        api_base_url: Option<String>,
    },
    /// Search once and print the results
    Search {
        term: String,
        /// Pages to fetch in total
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
        #[arg(long, value_name = "URL")]
        api_base_url: Option<String>,
    },
    /// Print the full record for one title id
    Details {
        id: String,
        #[arg(long, value_name = "URL")]
        api_base_url: Option<String>,
    },
}
