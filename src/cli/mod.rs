//! CLI command definitions and handlers.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use speech_kanban::{
    storage::FileStorage, CardDraft, CardId, CardPatch, CardStore, Category, Filter, Notifier,
    RecordingNotifier, Storage, StoreConfig, Tag, TracingNotifier, DEFAULT_STORAGE_KEY,
};
use std::{path::PathBuf, sync::Arc};

mod output;

/// Kanban board for speech-technology experiments
#[derive(Parser)]
#[command(name = "speech-kanban")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the board data
    #[arg(long, global = true, env = "SPEECH_KANBAN_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Key the cards are stored under
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    pub key: String,

    /// Storage backend
    #[arg(long, global = true, value_enum, default_value_t = Backend::File)]
    pub backend: Backend,

    /// Print machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// One JSON file per key
    File,
    /// SQLite database (requires the sqlite-storage feature)
    Sqlite,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the board, one column per category
    Board(FilterArgs),

    /// List cards matching a search and tag filter
    List(ListArgs),

    /// Show a single card
    Show {
        /// Card ID (or a unique prefix)
        id: String,
    },

    /// Add a technology card
    Add(AddArgs),

    /// Edit fields of a card
    Edit(EditArgs),

    /// Remove a card
    #[command(alias = "rm")]
    Remove {
        /// Card ID (or a unique prefix)
        id: String,
    },

    /// Move a card to another category
    Move {
        /// Card ID (or a unique prefix)
        id: String,

        /// Target category (e.g. "Text to Speech", llms, voice-assistants)
        category: String,
    },

    /// List the tag vocabulary
    Tags,

    /// List the board categories
    Categories,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Case-insensitive search in name, description and notes
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only cards carrying this tag (repeatable; all must match)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> Filter {
        Filter::new(self.search.clone(), parse_tags(&self.tags))
    }
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Restrict to one category
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Technology name
    pub name: String,

    /// Short description
    #[arg(short, long)]
    pub description: String,

    /// Category the card starts in
    #[arg(short, long, default_value = "Other")]
    pub category: String,

    /// Tag (repeatable)
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Card ID (or a unique prefix)
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    /// Replace the tags (repeatable)
    #[arg(short, long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Remove all tags
    #[arg(long)]
    pub clear_tags: bool,

    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,

    /// Remove the notes
    #[arg(long)]
    pub clear_notes: bool,
}

impl EditArgs {
    fn to_patch(&self) -> Result<CardPatch> {
        let mut patch = CardPatch::default();
        if let Some(name) = &self.name {
            patch = patch.name(name.clone());
        }
        if let Some(description) = &self.description {
            patch = patch.description(description.clone());
        }
        if let Some(category) = &self.category {
            patch = patch.category(category.parse::<Category>()?);
        }
        if self.clear_tags {
            patch = patch.tags(Vec::new());
        } else if !self.tags.is_empty() {
            patch = patch.tags(parse_tags(&self.tags));
        }
        if self.clear_notes {
            patch = patch.notes(None);
        } else if let Some(notes) = &self.notes {
            patch = patch.notes(Some(notes.clone()));
        }
        Ok(patch)
    }
}

fn parse_tags(raw: &[String]) -> Vec<Tag> {
    raw.iter()
        .flat_map(|value| value.split(','))
        .filter(|value| !value.trim().is_empty())
        .filter_map(|value| value.parse::<Tag>().ok())
        .collect()
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    dirs::data_dir()
        .map(|dir| dir.join("speech-kanban"))
        .ok_or_else(|| anyhow!("No data directory available; pass --data-dir"))
}

fn open_storage(cli: &Cli) -> Result<Box<dyn Storage>> {
    let dir = data_dir(cli)?;
    match cli.backend {
        Backend::File => Ok(Box::new(FileStorage::new(dir))),
        #[cfg(feature = "sqlite-storage")]
        Backend::Sqlite => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let storage = speech_kanban::storage::SqliteStorage::new(dir.join("kanban.db"))?;
            Ok(Box::new(storage))
        }
        #[cfg(not(feature = "sqlite-storage"))]
        Backend::Sqlite => bail!("This build does not include SQLite storage"),
    }
}

/// Resolves a full ID or a unique prefix of one
fn resolve_id<S: Storage>(store: &CardStore<S>, input: &str) -> Result<CardId> {
    let wanted: CardId = input.parse()?;
    if store.get(&wanted).is_some() {
        return Ok(wanted);
    }

    let matches: Vec<&CardId> = store
        .cards()
        .iter()
        .map(|card| &card.id)
        .filter(|id| id.as_str().starts_with(wanted.as_str()))
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => bail!("No card with ID {}", input),
        _ => bail!("ID prefix {} is ambiguous ({} cards)", input, matches.len()),
    }
}

pub async fn execute(cli: Cli) -> Result<()> {
    let config = StoreConfig::default().with_storage_key(cli.key.clone());
    config.validate().context("Invalid --key")?;

    // JSON mode keeps stdout machine-readable; toasts go to the log instead
    let recorder = Arc::new(RecordingNotifier::new());
    let notifier: Arc<dyn Notifier> = if cli.json {
        Arc::new(TracingNotifier)
    } else {
        recorder.clone()
    };

    let storage = open_storage(&cli)?;
    let mut store = CardStore::load(storage, notifier, config).await;
    let json = cli.json;

    let result = run(cli.command, &mut store, json).await;
    store.close().await;

    if !json {
        output::print_notifications(&recorder.drain());
    }
    result
}

async fn run<S: Storage>(command: Commands, store: &mut CardStore<S>, json: bool) -> Result<()> {
    match command {
        Commands::Board(args) => {
            let filter = args.to_filter();
            let board = store.board(&filter);
            if json {
                let columns: Vec<output::ColumnJson<'_>> = board
                    .columns
                    .iter()
                    .map(|column| output::ColumnJson::from(column))
                    .collect();
                output::print_json(&columns)?;
            } else {
                output::print_board(&board, &filter);
            }
        }

        Commands::List(args) => {
            let filter = args.filter.to_filter();
            let cards = match &args.category {
                Some(category) => store.by_category(category.parse()?, &filter),
                None => store.filtered(&filter),
            };
            if json {
                output::print_json(&cards)?;
            } else {
                output::print_cards_table(&cards);
            }
        }

        Commands::Show { id } => {
            let id = resolve_id(store, &id)?;
            let card = store
                .get(&id)
                .ok_or_else(|| anyhow!("No card with ID {}", id))?;
            if json {
                output::print_json(card)?;
            } else {
                output::print_card(card);
            }
        }

        Commands::Add(args) => {
            let mut draft = CardDraft::new(args.name, args.description, args.category.parse()?)
                .with_tags(parse_tags(&args.tags));
            if let Some(notes) = args.notes {
                draft = draft.with_notes(notes);
            }

            let card = store.add(draft).await?;
            if json {
                output::print_json(&card)?;
            } else {
                println!(
                    "{} Added {} ({})",
                    "✓".green().bold(),
                    card.name.cyan(),
                    output::short_id(&card.id).dimmed()
                );
            }
        }

        Commands::Edit(args) => {
            let patch = args.to_patch()?;
            if patch.is_empty() {
                bail!("Nothing to change; pass at least one field");
            }
            let id = resolve_id(store, &args.id)?;
            let card = store
                .update(&id, patch)
                .await?
                .ok_or_else(|| anyhow!("No card with ID {}", id))?;
            if json {
                output::print_json(&card)?;
            } else {
                output::print_card(&card);
            }
        }

        Commands::Remove { id } => {
            let id = resolve_id(store, &id)?;
            if let Some(card) = store.remove(&id).await {
                if json {
                    output::print_json(&card)?;
                } else {
                    println!("{} Removed {}", "✓".green().bold(), card.name.cyan());
                }
            }
        }

        Commands::Move { id, category } => {
            let category: Category = category.parse()?;
            let id = resolve_id(store, &id)?;
            if let Some(card) = store.move_card(&id, category).await {
                if json {
                    output::print_json(&card)?;
                } else {
                    println!(
                        "{} {} → {}",
                        "✓".green().bold(),
                        card.name.cyan(),
                        output::paint(category.label(), category.hue()).bold()
                    );
                }
            }
        }

        Commands::Tags => {
            if json {
                output::print_json(&Tag::KNOWN)?;
            } else {
                output::print_tags(store);
            }
        }

        Commands::Categories => {
            if json {
                output::print_json(&Category::ALL)?;
            } else {
                output::print_categories(store);
            }
        }
    }

    Ok(())
}
