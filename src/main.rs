use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mentorbot::{
    is_valid_subdomain, serve, Commands, CompletionConfig, Container, ContainerConfig,
};

#[derive(Parser)]
#[command(name = "mentorbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer with an offline echo client instead of the remote model
    #[arg(long, global = true)]
    mock_completions: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let completion = CompletionConfig::from_env()?;
    let container = Arc::new(Container::new(ContainerConfig {
        completion,
        mock_completions: cli.mock_completions,
    })?);

    match cli.command {
        Commands::Serve {
            host,
            port,
            subdomain,
            domain,
        } => {
            if let Some(label) = subdomain.as_deref() {
                if !is_valid_subdomain(label) {
                    bail!("invalid subdomain '{label}': use lowercase letters, digits and inner hyphens (max 63)");
                }
                match domain.as_deref() {
                    Some(domain) => info!("Public URL: https://{label}.{domain}"),
                    None => info!("Published under subdomain '{label}'"),
                }
            }

            if cli.mock_completions {
                warn!("Mock completions enabled: replies will not come from the model");
            }

            info!("Starting Open Source Mentor Bot on port {port}");
            let listener = TcpListener::bind((host.as_str(), port)).await?;
            serve(listener, container).await?;
        }

        Commands::Ask {
            message,
            max_tokens,
        } => {
            let mut use_case = container.chat_use_case();
            if let Some(max_tokens) = max_tokens {
                use_case = use_case.with_max_tokens(max_tokens);
            }

            let reply = use_case.execute(&json!({ "message": message })).await?;
            println!("{}", reply.response);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["mentorbot", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, subdomain, .. } => {
                assert_eq!(host, "0.0.0.0");
                assert!(subdomain.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn domain_requires_subdomain() {
        let res = Cli::try_parse_from(["mentorbot", "serve", "--domain", "apps.example.com"]);
        assert!(res.is_err());
    }

    #[test]
    fn ask_accepts_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mentorbot", "ask", "hello", "--mock-completions"]).unwrap();
        assert!(cli.mock_completions);
        assert!(matches!(cli.command, Commands::Ask { .. }));
    }
}
