//! # priogrid CLI
//!
//! Command-line interface for the priogrid prioritization matrix.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use priogrid::commands::{self, ClassifyArgs, ExportArgs};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/priogrid/config      Optional preferences (TOML)

  export_path = \"matrix.png\"     Default output file for exports
  seed_items = false             Start sessions with an empty board

Quadrants (impact vs effort, 1-10 each):
  Quick Wins        impact >= 6, effort <= 5   High Priority
  Major Projects    impact >= 6, effort >= 6   Medium Priority
  Fill-ins          impact <= 5, effort <= 5   Low Priority
  Thankless Tasks   impact <= 5, effort >= 6   Consider Dropping

Getting Started:
  pg                             Open the interactive board
  pg classify -i 8 -e 3          Classify a score pair
  pg export -o matrix.png        Render the example matrix

Learn more:
  pg <COMMAND> --help            Show detailed help for a command";

#[derive(Parser)]
#[command(name = "priogrid")]
#[command(bin_name = "pg")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Interactive impact/effort prioritization matrix for the terminal")]
#[command(
    long_about = "priogrid plots a small set of items on a two-dimensional priority grid: \
impact on one axis, effort on the other, both scored 1-10. Each item lands in one of \
four quadrants (Quick Wins, Major Projects, Fill-ins, Thankless Tasks) that suggest \
what to do with it.

Running pg without a subcommand opens the interactive board, where items can be added, \
edited, deleted, and exported as a PNG image. Item state is session-only: nothing is \
written to disk except explicitly exported images (and optional preferences in the \
config file)."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive matrix board (default)
    #[command(
        long_about = "Open the interactive matrix board.\n\n\
The board starts with a small set of example items (disable with seed_items = false \
in the config) and supports:\n  \
a        Add an item (name plus impact/effort sliders)\n  \
e        Edit the selected item; changes are staged until saved\n  \
d        Delete the selected item (asks for confirmation)\n  \
x        Export the matrix as a PNG image\n  \
q        Quit the session (items are discarded)",
        after_help = "Examples:\n  \
pg                               Open the board\n  \
pg board                         Same, spelled out"
    )]
    Board,

    /// Classify a score pair into its quadrant
    #[command(
        long_about = "Classify an impact/effort score pair.\n\n\
Prints the quadrant name, its priority wording, the legend description, and the \
normalized plot position (x grows with effort, y shrinks as impact grows).",
        after_help = "Examples:\n  \
pg classify --impact 8 --effort 3     Quick Wins (High Priority)\n  \
pg classify -i 5 -e 6                 Thankless Tasks (Consider Dropping)"
    )]
    Classify {
        /// Impact score (1-10)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
        impact: u8,

        /// Effort score (1-10)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
        effort: u8,
    },

    /// Render a matrix image without opening the board
    #[command(
        long_about = "Render a matrix image without opening the board.\n\n\
Items are given as NAME:IMPACT:EFFORT specs; scores are read from the right, so \
names may contain colons. With no --item, the example seed set is rendered.\n\n\
The image is an 800x1000 PNG: title, the plotted grid with quadrant tints and \
corner labels, and the four-entry legend.",
        after_help = "Examples:\n  \
pg export                                         Render the example items\n  \
pg export --output docs/matrix.png                Choose the output path\n  \
pg export --item \"Dark Mode:3:2\" --item \"SSO:8:6\" Render specific items"
    )]
    Export {
        /// Item spec NAME:IMPACT:EFFORT (can be specified multiple times)
        #[arg(long = "item", value_name = "SPEC")]
        items: Vec<String>,

        /// Output file path (default: prioritization-matrix.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the four-quadrant legend
    #[command(after_help = "Examples:\n  \
pg legend                        Show all quadrants with descriptions")]
    Legend,

    /// Generate shell completions
    #[command(
        long_about = "Generate a completion script for the given shell and print it to stdout.",
        after_help = "Examples:\n  \
pg completions zsh > ~/.zfunc/_pg\n  \
pg completions bash > ~/.local/share/bash-completion/completions/pg"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Board) => commands::board(),

        Some(Commands::Classify { impact, effort }) => {
            commands::classify(ClassifyArgs { impact, effort })
        }

        Some(Commands::Export { items, output }) => commands::export(ExportArgs { items, output }),

        Some(Commands::Legend) => commands::legend(),

        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell, &mut Cli::command())
        }
    }
}
