//! # Command Line Interface
//!
//! Defines the CLI structure and the handler that drives one API call through
//! the Agile client.

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use jira_agile::ResponseScheme;
use tracing::info;

use crate::clients::{create_agile_runtime_and_client, get_jira_host};
use crate::output::{print_error, print_success, render_body, render_head};

/// Top-level CLI command for the agile tool
#[derive(Parser)]
#[command(name = "agile")]
#[command(about = "Call the Jira Agile REST API")]
#[command(
  long_about = "Sends requests to the Jira Agile REST API (rest/agile/1.0) of the configured host.\n\n\
        Paths are relative to the Agile API root, e.g. `board/1` or `sprint/5/issue`.\n\
        Credentials are read from ~/.netrc (machine <host> or atlassian.net)."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Jira host, e.g. company.atlassian.net (defaults to $JIRA_HOST)
  #[arg(long, global = true)]
  pub host: Option<String>,

  /// Custom User-Agent header
  #[arg(long, global = true)]
  pub user_agent: Option<String>,

  /// Print the status line and response headers before the body
  #[arg(short = 'i', long, global = true)]
  pub include: bool,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the agile tool
#[derive(Subcommand)]
pub enum Commands {
  /// Send a GET request
  Get(PathArgs),

  /// Send a POST request
  Post(BodyArgs),

  /// Send a PUT request
  Put(BodyArgs),

  /// Send a DELETE request
  Delete(PathArgs),
}

/// Arguments for requests without a body
#[derive(Args)]
pub struct PathArgs {
  /// API path relative to rest/agile/1.0/
  #[arg(required = true, index = 1)]
  pub path: String,
}

/// Arguments for requests that may carry a JSON body
#[derive(Args)]
pub struct BodyArgs {
  /// API path relative to rest/agile/1.0/
  #[arg(required = true, index = 1)]
  pub path: String,

  /// JSON request body
  #[arg(long, short = 'd')]
  pub data: Option<String>,
}

impl Commands {
  fn method(&self) -> &'static str {
    match self {
      Self::Get(_) => "GET",
      Self::Post(_) => "POST",
      Self::Put(_) => "PUT",
      Self::Delete(_) => "DELETE",
    }
  }

  fn path(&self) -> &str {
    match self {
      Self::Get(args) | Self::Delete(args) => &args.path,
      Self::Post(args) | Self::Put(args) => &args.path,
    }
  }

  fn data(&self) -> Option<&str> {
    match self {
      Self::Post(args) | Self::Put(args) => args.data.as_deref(),
      Self::Get(_) | Self::Delete(_) => None,
    }
  }
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  let payload = cli
    .command
    .data()
    .map(serde_json::from_str::<serde_json::Value>)
    .transpose()
    .context("--data is not valid JSON")?;

  let jira_host = get_jira_host(cli.host.as_deref())?;
  let (rt, client) = create_agile_runtime_and_client(&jira_host, cli.user_agent.as_deref())?;

  let method = cli.command.method();
  let path = cli.command.path();
  info!("{method} {path} on {}", client.site());

  match rt.block_on(client.send::<_, serde_json::Value>(method, path, payload.as_ref(), None)) {
    Ok(scheme) => {
      print_response(&scheme, cli.include);
      Ok(())
    }
    Err(error) => {
      if let Some(scheme) = error.response() {
        if cli.include {
          eprint!("{}", render_head(scheme));
        }
        for message in scheme.error_messages() {
          print_error(&message);
        }
      }
      Err(error).with_context(|| format!("{method} {path} failed"))
    }
  }
}

fn print_response(scheme: &ResponseScheme, include: bool) {
  if include {
    eprint!("{}", render_head(scheme));
  }

  if scheme.bytes.is_empty() {
    print_success(&format!("{} {} -> {}", scheme.method, scheme.endpoint, scheme.code));
  } else {
    println!("{}", render_body(scheme));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Test parsing a GET with a global --host
  #[test]
  fn test_parse_get() {
    let cli = Cli::try_parse_from(["agile", "--host", "example.atlassian.net", "get", "board/1"]).unwrap();

    assert_eq!(cli.command.method(), "GET");
    assert_eq!(cli.command.path(), "board/1");
    assert_eq!(cli.host.as_deref(), Some("example.atlassian.net"));
    assert!(cli.command.data().is_none());
  }

  /// Test parsing a POST body and stacked -v flags
  #[test]
  fn test_parse_post_with_data() {
    let cli = Cli::try_parse_from(["agile", "post", "sprint/5/issue", "-d", r#"{"issues":["PROJ-1"]}"#, "-vv"]).unwrap();

    assert_eq!(cli.command.method(), "POST");
    assert_eq!(cli.command.data(), Some(r#"{"issues":["PROJ-1"]}"#));
    assert_eq!(cli.verbose, 2);
  }

  #[test]
  fn test_get_does_not_accept_data() {
    let result = Cli::try_parse_from(["agile", "get", "board/1", "--data", "{}"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_path_is_required() {
    let result = Cli::try_parse_from(["agile", "delete"]);
    assert!(result.is_err());
  }
}
