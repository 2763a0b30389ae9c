//! `faq-admin` — administrative grids for the FAQ catalog.
//!
//! Opens the same SQLite file as the server and goes through the same
//! [`CatalogStore`] operations, so no rule can be bypassed from here.
//!
//! # Usage
//!
//! ```text
//! faq-admin --store faq.db subjects list
//! faq-admin --config config.toml topics edit 3 --title Algebra --description x --subject-id 1
//! ```

mod grid;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faq_core::{
  input::{SubjectInput, TopicInput, Validate},
  store::CatalogStore,
  subject::Subject,
  topic::Topic,
};
use faq_store_sqlite::{SqliteStore, expand_tilde};
use serde::Deserialize;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "faq-admin", about = "Administrative grids for the FAQ catalog")]
struct Args {
  /// Path to a TOML config file; only `store_path` is read.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// SQLite store file (default: faq.db).
  #[arg(long, env = "FAQ_STORE_PATH")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Manage subjects.
  #[command(subcommand)]
  Subjects(SubjectCommand),
  /// Manage topics.
  #[command(subcommand)]
  Topics(TopicCommand),
}

#[derive(Subcommand, Debug)]
enum SubjectCommand {
  /// List all subjects, newest first.
  List,
  /// Show one subject with its topics.
  Show { id: i64 },
  /// Replace a subject's title.
  Edit {
    id:    i64,
    #[arg(long)]
    title: String,
  },
  /// Delete a subject and all of its topics.
  Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
enum TopicCommand {
  /// List all topics, newest first.
  List,
  /// Show one topic.
  Show { id: i64 },
  /// Replace a topic's title, description and subject.
  Edit {
    id:          i64,
    #[arg(long)]
    title:       String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    subject_id:  i64,
  },
  /// Delete a topic.
  Delete { id: i64 },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// The part of the server's TOML config the admin tool cares about.
#[derive(Deserialize, Default)]
struct ConfigFile {
  store_path: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag overrides config file, which overrides the default.
  let store_path = args
    .store
    .or(file_cfg.store_path)
    .unwrap_or_else(|| PathBuf::from("faq.db"));
  let store_path = expand_tilde(&store_path);

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("opening store at {}", store_path.display()))?;

  let result = match args.command {
    Command::Subjects(cmd) => run_subjects(&store, cmd).await,
    Command::Topics(cmd) => run_topics(&store, cmd).await,
  };

  store.close().await.context("closing store")?;
  result
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn run_subjects<S>(store: &S, cmd: SubjectCommand) -> Result<()>
where
  S: CatalogStore,
{
  match cmd {
    SubjectCommand::List => {
      let subjects = store.list_subjects().await?;
      println!("{}", grid::render(&subjects));
    }
    SubjectCommand::Show { id } => {
      let found = store.get_subject(id).await?;
      print_subject(&found.subject);
      println!();
      println!("{}", grid::render(&found.topics));
    }
    SubjectCommand::Edit { id, title } => {
      let input = SubjectInput::new(title);
      input.validate()?;
      let subject = store.edit_subject(id, input).await?;
      print_subject(&subject);
    }
    SubjectCommand::Delete { id } => {
      store.delete_subject(id).await?;
      println!("deleted subject {id}");
    }
  }
  Ok(())
}

async fn run_topics<S>(store: &S, cmd: TopicCommand) -> Result<()>
where
  S: CatalogStore,
{
  match cmd {
    TopicCommand::List => {
      let topics = store.list_topics().await?;
      println!("{}", grid::render(&topics));
    }
    TopicCommand::Show { id } => {
      let topic = store.get_topic(id).await?;
      print_topic(&topic);
    }
    TopicCommand::Edit { id, title, description, subject_id } => {
      let input = TopicInput::new(title, description, subject_id);
      input.validate()?;
      let topic = store.edit_topic(id, input).await?;
      print_topic(&topic);
    }
    TopicCommand::Delete { id } => {
      store.delete_topic(id).await?;
      println!("deleted topic {id}");
    }
  }
  Ok(())
}

fn print_subject(subject: &Subject) {
  println!("{}", grid::render(std::slice::from_ref(subject)));
}

fn print_topic(topic: &Topic) {
  println!("{}", grid::render(std::slice::from_ref(topic)));
  println!();
  println!("subject_id:  {}", topic.subject_id);
  println!("description: {}", topic.description);
}
