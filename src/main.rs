// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flashtree CLI entrypoint.
//!
//! Works against a workspace folder (`<root>/<workspace>/flashcards.json`). Logs go to stderr and
//! are filtered by `FLASHTREE_LOG` (default `warn`); stdout carries only command output.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use flashtree::layout::{layout_cards_with, LayoutSpacing};
use flashtree::model::{CardId, CardRow, Flashcard, WorkspaceId};
use flashtree::render::{render_outline, scene_schema, Scene};
use flashtree::store::{FlashcardStore, WorkspaceFolder, WriteDurability};

const LOG_ENV: &str = "FLASHTREE_LOG";

/// Browse, search, lay out, and edit binary-branching flashcard decks.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Folder holding one subfolder per workspace
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Workspace to operate on
    #[arg(long, short, default_value = "default")]
    workspace: String,

    /// Flush writes to stable storage (slower)
    #[arg(long)]
    durable_writes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List cards in index order
    List,
    /// Search by index (all digits) or by title/bullet text
    Search { query: String },
    /// Lay out the deck and print the renderer scene
    Layout {
        #[arg(long, value_enum, default_value_t = LayoutFormat::Json)]
        format: LayoutFormat,
        /// Horizontal distance between nodes in a row
        #[arg(long, default_value_t = 280.0)]
        x_gap: f64,
        /// Vertical distance between rows
        #[arg(long, default_value_t = 200.0)]
        y_gap: f64,
    },
    /// Create an untitled card numbered after the highest index
    New,
    /// Upsert every card row from a JSON array file
    Import { file: PathBuf },
    /// Delete one card by id
    Delete { card_id: String },
    /// Print the JSON schema of the renderer scene
    Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutFormat {
    Json,
    Text,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_cards(cards: &[Flashcard]) {
    for card in cards {
        println!(
            "{}. {}  ({} bullets)",
            card.index(),
            card.title(),
            card.bullets().len()
        );
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let workspace = WorkspaceId::new(cli.workspace)?;
    let durability = if cli.durable_writes {
        WriteDurability::Durable
    } else {
        WriteDurability::BestEffort
    };
    let mut folder = WorkspaceFolder::new(cli.root).with_durability(durability);

    match cli.command {
        Command::List => {
            print_cards(&folder.load_cards(&workspace)?);
        }
        Command::Search { query } => {
            print_cards(&folder.search(&workspace, &query)?);
        }
        Command::Layout {
            format,
            x_gap,
            y_gap,
        } => {
            let cards = folder.load_cards(&workspace)?;
            let layout = layout_cards_with(&cards, LayoutSpacing { x_gap, y_gap });
            let scene = Scene::from_layout(&cards, &layout);
            match format {
                LayoutFormat::Json => println!("{}", scene.to_json_pretty()?),
                LayoutFormat::Text => println!("{}", render_outline(&scene)),
            }
        }
        Command::New => {
            let draft = folder.create_card(&workspace)?;
            println!("created {} (#{})", draft.id(), draft.index());
        }
        Command::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let rows: Vec<CardRow> = serde_json::from_str(&raw)?;
            let mut cards = Vec::with_capacity(rows.len());
            for row in rows {
                cards.push(row.decode()?);
            }
            for card in &cards {
                folder.upsert_card(&workspace, card)?;
            }
            println!("imported {} cards into {workspace}", cards.len());
        }
        Command::Delete { card_id } => {
            let id = CardId::new(card_id)?;
            if !folder.delete_card(&workspace, &id)? {
                return Err(format!("no card {id} in workspace {workspace}").into());
            }
            println!("deleted {id}");
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&scene_schema())?);
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
