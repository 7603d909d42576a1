//! `tally` — command-line client for the Tally ledger server.
//!
//! # Usage
//!
//! ```
//! tally add-expense 2024-01-05 12.50 food --subcategory lunch
//! tally edit-expense 3 --amount 9.75
//! tally summarize 2024-01-01 2024-01-31 --category food
//! tally --url http://ledger.local:5233 list-credits 2024-01-01 2024-12-31
//! ```
//!
//! Every command prints the server's JSON answer on stdout.

mod client;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client::ApiClient;
use serde::{Deserialize, Serialize};
use tally_core::entry::{
  CreditEdit, DateRange, EntryId, ExpenseEdit, NewCredit, NewExpense,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:5233";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tally", about = "Command-line client for the Tally ledger")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the tally server (default: http://localhost:5233).
  #[arg(long, env = "TALLY_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

/// An inclusive `START END` date pair.
#[derive(ClapArgs, Debug)]
struct RangeArgs {
  /// First date included (YYYY-MM-DD).
  start_date: String,
  /// Last date included (YYYY-MM-DD).
  end_date:   String,
}

impl From<RangeArgs> for DateRange {
  fn from(r: RangeArgs) -> Self { DateRange::new(r.start_date, r.end_date) }
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Record an expense.
  AddExpense {
    date:        String,
    #[arg(allow_negative_numbers = true)]
    amount:      f64,
    category:    String,
    #[arg(long, default_value = "")]
    subcategory: String,
    #[arg(long, default_value = "")]
    note:        String,
  },
  /// List expenses dated within a range, in insertion order.
  ListExpenses(RangeArgs),
  /// Change only the given fields of an expense.
  EditExpense {
    id:          EntryId,
    #[arg(long)]
    date:        Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    amount:      Option<f64>,
    #[arg(long)]
    category:    Option<String>,
    #[arg(long)]
    subcategory: Option<String>,
    #[arg(long)]
    note:        Option<String>,
  },
  /// Delete an expense by id.
  DeleteExpense { id: EntryId },
  /// Expense totals per category.
  Summarize {
    #[command(flatten)]
    range:    RangeArgs,
    #[arg(long)]
    category: Option<String>,
  },
  /// Record a credit (income).
  AddCredit {
    date:     String,
    #[arg(allow_negative_numbers = true)]
    amount:   f64,
    category: String,
    #[arg(long, default_value = "")]
    note:     String,
  },
  /// List credits dated within a range, in insertion order.
  ListCredits(RangeArgs),
  /// Change only the given fields of a credit.
  EditCredit {
    id:       EntryId,
    #[arg(long)]
    date:     Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    amount:   Option<f64>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    note:     Option<String>,
  },
  /// Delete a credit by id.
  DeleteCredit { id: EntryId },
  /// Credit totals per category.
  SummarizeCredits {
    #[command(flatten)]
    range:    RangeArgs,
    #[arg(long)]
    category: Option<String>,
  },
  /// Save a free-text salary summary.
  SaveSummary { summary_text: String },
  /// List saved salary summaries, most recent first.
  ListSummaries,
  /// List structured salary snapshots.
  ListSnapshots,
  /// Show the category catalog.
  Categories,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

/// `--url`/`TALLY_URL` beats the config file, which beats the default.
fn resolve_url(flag: Option<String>, file: &ConfigFile) -> String {
  flag
    .or_else(|| (!file.url.is_empty()).then(|| file.url.clone()))
    .unwrap_or_else(|| DEFAULT_URL.to_string())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  let url = resolve_url(args.url, &file_cfg);
  tracing::debug!(%url, "using tally server");
  let client = ApiClient::new(url)?;

  run(&client, args.command).await
}

async fn run(client: &ApiClient, command: Command) -> Result<()> {
  match command {
    Command::AddExpense { date, amount, category, subcategory, note } => {
      let input = NewExpense { date, amount, category, subcategory, note };
      print_json(&client.add_expense(&input).await?)
    }
    Command::ListExpenses(range) => {
      print_json(&client.list_expenses(&range.into()).await?)
    }
    Command::EditExpense { id, date, amount, category, subcategory, note } => {
      let edit = ExpenseEdit { date, amount, category, subcategory, note };
      print_json(&client.edit_expense(id, &edit).await?)
    }
    Command::DeleteExpense { id } => print_json(&client.delete_expense(id).await?),
    Command::Summarize { range, category } => {
      print_json(&client.summarize(&range.into(), category.as_deref()).await?)
    }
    Command::AddCredit { date, amount, category, note } => {
      let input = NewCredit { date, amount, category, note };
      print_json(&client.add_credit(&input).await?)
    }
    Command::ListCredits(range) => {
      print_json(&client.list_credits(&range.into()).await?)
    }
    Command::EditCredit { id, date, amount, category, note } => {
      let edit = CreditEdit { date, amount, category, note };
      print_json(&client.edit_credit(id, &edit).await?)
    }
    Command::DeleteCredit { id } => print_json(&client.delete_credit(id).await?),
    Command::SummarizeCredits { range, category } => {
      print_json(&client.summarize_credits(&range.into(), category.as_deref()).await?)
    }
    Command::SaveSummary { summary_text } => {
      print_json(&client.save_salary_summary(&summary_text).await?)
    }
    Command::ListSummaries => print_json(&client.list_salary_summaries().await?),
    Command::ListSnapshots => print_json(&client.list_salary_snapshots().await?),
    Command::Categories => print_json(&client.list_categories().await?),
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let out = serde_json::to_string_pretty(value).context("serialising output")?;
  println!("{out}");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_precedence() {
    let file = ConfigFile { url: "http://from-file:1".into() };
    assert_eq!(resolve_url(Some("http://flag:2".into()), &file), "http://flag:2");
    assert_eq!(resolve_url(None, &file), "http://from-file:1");
    assert_eq!(resolve_url(None, &ConfigFile::default()), DEFAULT_URL);
  }

  #[test]
  fn edit_flags_map_to_a_partial_edit() {
    let args = Args::try_parse_from(["tally", "edit-expense", "7", "--amount", "-3.5", "--note", ""])
      .unwrap();
    match args.command {
      Command::EditExpense { id, date, amount, category, subcategory, note } => {
        assert_eq!(id, 7);
        let edit = ExpenseEdit { date, amount, category, subcategory, note };
        assert_eq!(
          edit,
          ExpenseEdit { amount: Some(-3.5), note: Some(String::new()), ..Default::default() }
        );
      }
      other => panic!("unexpected command: {other:?}"),
    }
  }

  #[test]
  fn summarize_takes_an_optional_category() {
    let args =
      Args::try_parse_from(["tally", "summarize", "2024-01-01", "2024-01-31"]).unwrap();
    assert!(matches!(args.command, Command::Summarize { category: None, .. }));
  }
}
