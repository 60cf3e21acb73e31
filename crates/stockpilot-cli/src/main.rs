//! StockPilot CLI - a terminal front end for the StockPilot brokerage API.
//!
//! Every command first navigates to the screen it stands in for, so the
//! same route guard as the app decides whether a session is needed.

mod commands;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stockpilot_core::api::{ApiClient, Redirect};
use stockpilot_core::auth::{FileStore, KeychainStore, Session, TokenStore};
use stockpilot_core::config::{ClientConfig, Settings, TokenBackend};
use stockpilot_core::routes::Navigator;

use commands::{Command, Context as CommandContext};

/// Log file prefix inside the cache directory
const LOG_FILE_PREFIX: &str = "stockpilot.log";

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr (filtered by RUST_LOG, default `warn`) and to a daily
/// rolling file in the cache directory when it can be created.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file = Settings::cache_dir().ok().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        Some(tracing_appender::non_blocking(appender))
    });

    match file {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

/// Sends the user back to the login screen when the server ends the session.
struct TerminalRedirect;

impl Redirect for TerminalRedirect {
    fn redirect(&self, path: &str) {
        info!(path, "Redirecting after session expiry");
        eprintln!("Signed out by the server. Run `stockpilot login` to sign in again ({}).", path);
    }
}

/// Terminal client for the StockPilot brokerage API
#[derive(Parser, Debug)]
#[command(name = "stockpilot", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_tracing();

    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    let settings = Settings::load().unwrap_or_default();
    let store: Arc<dyn TokenStore> = match config.token_backend {
        TokenBackend::File => Arc::new(FileStore::in_dir(&Settings::cache_dir()?)),
        TokenBackend::Keychain => Arc::new(KeychainStore::new()),
    };
    let session = Session::new(store);

    let navigator = Navigator::new(session.clone(), config.build_mode);
    let client = ApiClient::new(&config, session, Arc::new(TerminalRedirect))
        .context("Failed to create API client")?;
    info!(base_url = client.base_url(), mode = %config.build_mode, "StockPilot CLI starting");

    let mut ctx = CommandContext {
        client,
        navigator,
        settings,
    };
    commands::run(&mut ctx, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use stockpilot_core::models::OrderSide;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order() {
        let cli = Cli::try_parse_from(["stockpilot", "order", "SELL", "AMZN", "2", "180.5"]).unwrap();
        match cli.command {
            Command::Order {
                side,
                symbol,
                quantity,
                price,
            } => {
                assert_eq!(side, OrderSide::Sell);
                assert_eq!(symbol, "AMZN");
                assert_eq!(quantity, 2);
                assert_eq!(price, 180.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_order_arguments_are_checked() {
        assert!(Cli::try_parse_from(["stockpilot", "order", "buy", "AMZN", "0", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["stockpilot", "order", "hold", "AMZN", "1", "1.0"]).is_err());
        assert!(Cli::try_parse_from(["stockpilot", "order", "buy", "AMZN", "1", "cheap"]).is_err());
    }

    #[test]
    fn test_parse_session_flags() {
        let cli = Cli::try_parse_from(["stockpilot", "login", "--remember"]).unwrap();
        assert!(matches!(cli.command, Command::Login { id: None, remember: true }));

        let cli = Cli::try_parse_from(["stockpilot", "logout", "--forget"]).unwrap();
        assert!(matches!(cli.command, Command::Logout { forget: true }));
    }

    #[test]
    fn test_parse_bot_action() {
        let cli = Cli::try_parse_from(["stockpilot", "bot", "off"]).unwrap();
        assert!(matches!(cli.command, Command::Bot { action: Some(commands::BotAction::Off) }));
        assert!(Cli::try_parse_from(["stockpilot", "bot", "pause"]).is_err());
        assert!(Cli::try_parse_from(["stockpilot", "search"]).is_err());
    }
}
