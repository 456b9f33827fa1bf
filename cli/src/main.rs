use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use tracing_subscriber::EnvFilter;
use wire::Status;

mod reorder;
mod sync;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned HTTP {status}: {body}")]
    ServerStatus { status: u16, body: String },
    #[error("sync failed: {0}")]
    SyncFailed(String),
    #[error("sync stream ended before completion")]
    StreamEnded,
    #[error("nothing to reorder; pass at least one card id")]
    EmptyBatch,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "taskboard-cli", about = "Task board sync and reorder client")]
struct Cli {
    #[arg(long, env = "TASKBOARD_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Raw `Cookie` header value of a logged-in session, e.g. `session=...`.
    #[arg(long, env = "TASKBOARD_SESSION_COOKIE")]
    session_cookie: Option<String>,

    #[arg(long, default_value_t = 30)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    session_cookie: Option<String>,
    connect_timeout: Duration,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a sync and print its log until it finishes.
    Sync(SyncArgs),
    /// Persist the full order of one category.
    Reorder(ReorderArgs),
}

#[derive(Args, Debug)]
struct SyncArgs {
    #[arg(long, default_value = "/work_status/sync_stream")]
    path: String,

    /// Print progress counts as they arrive.
    #[arg(long, default_value_t = false)]
    progress: bool,
}

#[derive(Args, Debug)]
struct ReorderArgs {
    #[arg(long, default_value = "/work_status/reorder")]
    path: String,

    /// Category every listed card ends up in.
    #[arg(long)]
    status: Status,

    /// Card ids in their new display order.
    ids: Vec<String>,

    /// Print the request body instead of sending it.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
        session_cookie: cli.session_cookie,
        connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
    };

    match cli.command {
        Command::Sync(args) => sync::run(&ctx, args).await,
        Command::Reorder(args) => reorder::run(&ctx, args).await,
    }
}

/// Join the base URL and an absolute endpoint path.
fn endpoint(base_url: &str, path: &str) -> Result<String, CliError> {
    let base = base_url.trim_end_matches('/');
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
    }
    let path = path.trim_start_matches('/');
    Ok(format!("{base}/{path}"))
}

/// Client carrying the session cookie.
///
/// Redirects are not followed: an expired session redirects to the login
/// page, which must surface as an error rather than a 200.
fn http_client(ctx: &CliContext) -> Result<reqwest::Client, CliError> {
    let mut headers = HeaderMap::new();
    if let Some(cookie) = ctx.session_cookie.as_deref() {
        headers.insert(COOKIE, HeaderValue::from_str(cookie)?);
    }
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(ctx.connect_timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(CliError::ServerStatus { status: status.as_u16(), body })
}
