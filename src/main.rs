use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use tabletalk::ingest::ingest_boards;
use tabletalk::pbn;
use tabletalk::store::JsonStore;
use tabletalk::{BoardRecord, Seat};

#[derive(Parser)]
#[command(name = "tabletalk")]
#[command(about = "Decode PBN hand records and load boards into games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a PBN file and show what a game created from it would contain
    Preview {
        /// PBN file with hand records
        input: PathBuf,

        /// Emit the decoded boards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that each decoded board is a legal 52-card deal
    Validate {
        /// PBN file to validate
        input: PathBuf,
    },

    /// Decode a PBN file and store its boards under a game
    Ingest {
        /// PBN file with hand records
        input: PathBuf,

        /// JSON store file (created if absent)
        #[arg(long)]
        store: PathBuf,

        /// Game to attach the boards to
        #[arg(long)]
        game: String,
    },

    /// Display information about a PBN file
    Info {
        /// PBN file to inspect
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { input, json } => {
            preview(&input, json)?;
        }
        Commands::Validate { input } => {
            validate(&input)?;
        }
        Commands::Ingest { input, store, game } => {
            ingest(&input, &store, &game)?;
        }
        Commands::Info { input } => {
            info(&input)?;
        }
    }

    Ok(())
}

fn read_input(input: &PathBuf) -> Result<String> {
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read PBN file: {}", input.display()))
}

fn preview(input: &PathBuf, as_json: bool) -> Result<()> {
    let content = read_input(input)?;
    let decoded = pbn::decode_verbose(&content);

    if as_json {
        let body = json!({
            "boards": decoded.boards,
            "count": decoded.boards.len(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("PBN file: {}", input.display());
    println!("Boards: {}", decoded.boards.len());
    for board in &decoded.boards {
        println!("  {}", board.title());
    }

    if !decoded.warnings.is_empty() {
        println!();
        println!("Warnings: {}", decoded.warnings.len());
        for warning in &decoded.warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}

fn validate(input: &PathBuf) -> Result<()> {
    let content = read_input(input)?;
    let decoded = pbn::decode_verbose(&content);

    println!("Boards decoded: {}", decoded.boards.len());
    for warning in &decoded.warnings {
        println!("  warning: {}", warning);
    }

    let mut issues = 0;
    for board in &decoded.boards {
        let violations = pbn::validate_deck(&board.hands);
        for violation in &violations {
            println!("  Board {}: {}", board.number, violation);
        }
        issues += violations.len();
    }

    if issues == 0 {
        println!("No deck issues found");
    } else {
        println!("{} deck issues found", issues);
    }

    Ok(())
}

fn ingest(input: &PathBuf, store_path: &PathBuf, game_id: &str) -> Result<()> {
    let content = read_input(input)?;

    let mut store = JsonStore::open(store_path)
        .with_context(|| format!("Failed to open store: {}", store_path.display()))?;
    store.ensure_game(game_id);

    let summary = ingest_boards(&mut store, game_id, &content)
        .with_context(|| format!("Failed to ingest boards into game {}", game_id))?;

    store
        .save()
        .with_context(|| format!("Failed to save store: {}", store_path.display()))?;

    println!("Game: {}", game_id);
    println!("Boards decoded: {}", summary.decoded);
    println!("Boards created: {}", summary.created);
    if summary.created < summary.decoded {
        println!("  {} boards skipped by the store", summary.decoded - summary.created);
    }
    for warning in &summary.warnings {
        println!("  warning: {}", warning);
    }

    Ok(())
}

fn info(input: &PathBuf) -> Result<()> {
    let content = read_input(input)?;
    let boards = pbn::decode(&content);

    println!("PBN file: {}", input.display());
    println!("Boards: {}", boards.len());
    println!();

    for board in &boards {
        print_board_info(board);
    }

    Ok(())
}

fn print_board_info(board: &BoardRecord) {
    println!("{}", board.title());
    if !board.follows_standard_rotation() {
        println!(
            "  Note: off the standard rotation ({} deals, {})",
            tabletalk::dealer_from_board_number(board.number),
            tabletalk::Vulnerability::from_board_number(board.number)
        );
    }

    let hcp = board.all_hcp();
    println!("  HCP: N={} E={} S={} W={}", hcp[0], hcp[1], hcp[2], hcp[3]);

    for seat in Seat::ALL {
        let hand = board.hands.hand(seat);
        if !hand.is_empty() {
            let marker = if board.vulnerability.is_vulnerable(seat) {
                " (vul)"
            } else {
                ""
            };
            println!("  {}{}: {}", seat, marker, hand.to_group());
        }
    }
    println!();
}
