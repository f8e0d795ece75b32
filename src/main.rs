//! futbol-links command-line tool.
//!
//! Resolves, validates and dispatches deep links the way the mobile client
//! does, for debugging link campaigns and push notification payloads.
//!
//! ```text
//! futbol-links parse futbolapp://match/123
//! futbol-links validate /comparison/results
//! futbol-links dispatch https://futbolapp.com/league/9
//! futbol-links share match 123
//! futbol-links routes
//! cat links.txt | futbol-links listen
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use futbol_links::config::{load_config, LinkConfig};
use futbol_links::deeplink::{
    share_link, try_parse_deep_link, universal_link, Dispatcher, LinkError, NavigationError,
    Navigator,
};
use futbol_links::observability::logging;
use futbol_links::routing::{resolve_route, RouteName, RouteRule, ROUTE_TABLE};
use futbol_links::source::{ChannelLinkSource, LinkListener};

#[derive(Parser)]
#[command(name = "futbol-links")]
#[command(about = "Resolve and dispatch futbolapp deep links", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a link and print the result as JSON
    Parse { url: String },
    /// Check whether a path names a known route
    Validate { path: String },
    /// Run the full dispatch pipeline against a printing navigator
    Dispatch { url: String },
    /// Build shareable links for a route
    Share { route: RouteName, id: Option<String> },
    /// List the route table
    Routes,
    /// Dispatch links read from stdin, one per line
    Listen,
}

/// Navigator that reports each transition on stdout.
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        println!("{path}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        },
        None => LinkConfig::default(),
    };

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    logging::init(level);

    match run(cli.command, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

async fn run(command: Commands, config: LinkConfig) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Commands::Parse { url } => match try_parse_deep_link(&url) {
            Ok(parsed) => {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
                Ok(parsed.is_valid)
            }
            Err(LinkError::Empty) => {
                println!("null");
                Ok(false)
            }
            Err(e) => {
                eprintln!("{e}");
                println!("null");
                Ok(false)
            }
        },
        Commands::Validate { path } => match resolve_route(&path) {
            Some(m) => {
                println!("{}", serde_json::to_string(&m)?);
                Ok(true)
            }
            None => {
                println!("invalid");
                Ok(false)
            }
        },
        Commands::Dispatch { url } => {
            let dispatcher = Dispatcher::with_config(PrintNavigator, config.dispatch);
            match dispatcher.dispatch(&url) {
                Ok(_) => Ok(true),
                Err(e) => {
                    eprintln!("{e}");
                    Ok(false)
                }
            }
        }
        Commands::Share { route, id } => {
            println!("{}", share_link(route, id.as_deref(), &config.links)?);
            println!("{}", universal_link(route, id.as_deref(), &config.links)?);
            Ok(true)
        }
        Commands::Routes => {
            for route in ROUTE_TABLE {
                let pattern = match route.rule() {
                    RouteRule::Literal(paths) => paths.join(" | "),
                    RouteRule::Detail(segment) => format!("/{segment}/<digits>"),
                };
                println!("{:<18} {}", route.as_str(), pattern);
            }
            Ok(true)
        }
        Commands::Listen => listen(config).await,
    }
}

async fn listen(config: LinkConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let source = ChannelLinkSource::default();
    let dispatcher = Arc::new(Dispatcher::with_config(PrintNavigator, config.dispatch));
    let handle = LinkListener::spawn(&source, dispatcher);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        source.publish(line).await;
    }
    source.close();

    let stats = handle.finished().await;
    tracing::info!(
        received = stats.received,
        navigated = stats.navigated,
        "Input exhausted"
    );
    Ok(stats.received == stats.navigated)
}
