//! etsy3 - command-line access to the Etsy Open API v3.
//!
//! Runs the OAuth handshake and issues authenticated calls using the layered
//! configuration. Command output goes to stdout, logs to stderr.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use etsy3::Config;
use etsy3::api::receipts::GetShopReceiptsParams;
use etsy3::config::LoggingConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "etsy3", version, about = "Etsy Open API v3 client")]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "ETSY3_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print an authorization URL with its state and code verifier.
    Authorize,
    /// Exchange an authorization code for tokens.
    Token {
        #[arg(long)]
        code: String,
        /// Verifier printed by `authorize`.
        #[arg(long)]
        code_verifier: String,
    },
    /// Exchange a refresh token for a new access token.
    Refresh {
        #[arg(long)]
        refresh_token: String,
    },
    /// Fetch one shop receipt.
    Receipt {
        #[arg(long)]
        shop_id: u64,
        #[arg(long)]
        receipt_id: u64,
    },
    /// List shop receipts.
    Receipts {
        #[arg(long)]
        shop_id: u64,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Token-authenticated GET against an arbitrary API path.
    Get {
        path: String,
        /// Query parameter as `key=value`; repeatable.
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.filter.as_str().into());

    let (file_layer, guard) = if config.file || config.directory.is_some() {
        let dir = config.resolved_directory()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "etsy3.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn print_response(response: reqwest::Response) -> anyhow::Result<()> {
    let status = response.status();
    let body = response.text().await?;
    println!("{status}");
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{body}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { force } = cli.command {
        let target = cli.config.clone().unwrap_or_else(etsy3::config::config_file);
        if target.exists() && !force {
            bail!("{} already exists; pass --force to overwrite", target.display());
        }
        let written = Config::default().save(Some(target))?;
        println!("wrote {}", written.display());
        return Ok(());
    }

    let config = Config::load(cli.config.clone()).context("loading configuration")?;
    let _guard = init_logging(&config.logging)?;

    match cli.command {
        Command::InitConfig { .. } => {}
        Command::Authorize => {
            let oauth = config.oauth_client()?;
            let (url, state) = oauth.authorization_url();
            println!("url: {url}");
            println!("state: {state}");
            println!("code_verifier: {}", oauth.code_verifier());
        }
        Command::Token {
            code,
            code_verifier,
        } => {
            let oauth = config.oauth_client()?.with_code_verifier(code_verifier)?;
            let token = oauth.fetch_token(&code).await?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }
        Command::Refresh { refresh_token } => {
            let token = config.oauth_client()?.refresh_token(&refresh_token).await?;
            println!("{}", serde_json::to_string_pretty(&token)?);
        }
        Command::Receipt {
            shop_id,
            receipt_id,
        } => {
            let client = config.api_client()?;
            print_response(client.get_shop_receipt(shop_id, receipt_id).await?).await?;
        }
        Command::Receipts {
            shop_id,
            limit,
            offset,
        } => {
            let client = config.api_client()?;
            let params = GetShopReceiptsParams {
                limit,
                offset,
                ..Default::default()
            };
            print_response(client.get_shop_receipts(shop_id, &params).await?).await?;
        }
        Command::Get { path, params } => {
            let client = config.api_client()?;
            let params: BTreeMap<String, String> = params.into_iter().collect();
            print_response(client.get(&path, &params).await?).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("limit=10"),
            Ok(("limit".to_string(), "10".to_string()))
        );
        assert_eq!(
            parse_param("keywords=a=b"),
            Ok(("keywords".to_string(), "a=b".to_string()))
        );
        assert!(parse_param("=x").is_err());
        assert!(parse_param("novalue").is_err());
    }

    #[test]
    fn test_get_collects_params() {
        let cli = Cli::try_parse_from([
            "etsy3",
            "get",
            "/v3/application/listings/active",
            "--param",
            "limit=5",
            "--param",
            "keywords=lamp",
        ])
        .unwrap();
        match cli.command {
            Command::Get { path, params } => {
                assert_eq!(path, "/v3/application/listings/active");
                assert_eq!(params.len(), 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
