mod commands;
mod input;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "syllacal")]
#[command(about = "Extract calendar events from a course syllabus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract events from a syllabus and print them
    Parse {
        /// Path to the syllabus (.pdf, or any plain-text file)
        file: PathBuf,

        /// Year substituted for dates without one (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Print raw JSON instead of the formatted list
        #[arg(long)]
        json: bool,
    },
    /// Extract events and write them to an .ics calendar file
    Export {
        /// Path to the syllabus (.pdf, or any plain-text file)
        file: PathBuf,

        /// Year substituted for dates without one (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Where to write the calendar file
        #[arg(short, long, default_value = "syllabus.ics")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, year, json } => commands::parse::run(&file, year, json),
        Commands::Export { file, year, output } => commands::export::run(&file, year, &output),
    }
}
