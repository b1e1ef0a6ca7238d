// src/main.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use canto_tool::{CantoNumber, CantoRepository, ReadOptions, cache, logging, success};

#[derive(Parser)]
#[command(name = "canto-tool")]
#[command(about = "Reads and analyzes a directory of Canto_<n>.txt files.", long_about = None)]
struct Cli {
    /// Directory holding the canto files
    #[arg(short, long, global = true, env = "CANTO_DIR", default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the verses of a canto
    Lines {
        canto: CantoNumber,
        #[arg(short, long)]
        strip: bool,
        #[arg(short, long)]
        max_lines: Option<usize>,
    },
    /// Count the verses of a canto
    Verses {
        canto: CantoNumber,
    },
    /// Count the complete tercets of a canto
    Tercets {
        canto: CantoNumber,
    },
    /// Count occurrences of a word in a canto
    Count {
        canto: CantoNumber,
        word: String,
    },
    /// Print the first verse containing a word
    First {
        canto: CantoNumber,
        word: String,
    },
    /// Print every verse containing a word
    Search {
        canto: CantoNumber,
        word: String,
    },
    /// Print the longest verse of a canto
    LongestVerse {
        canto: CantoNumber,
    },
    /// Report the canto with the most verses
    LongestCanto {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count several words and cache the result in words.json
    CountWords {
        canto: CantoNumber,
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the stripped verses of every canto
    AllVerses,
    /// Count the verses of every canto
    Total,
    /// Average verses per canto file
    Mean,
}

fn print_verse(verse: &str) {
    if verse.ends_with('\n') {
        print!("{verse}");
    } else {
        println!("{verse}");
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let repo = CantoRepository::new(&cli.dir);
    info!("Using canto directory: {}", repo.dir().display());

    match cli.command {
        Commands::Lines {
            canto,
            strip,
            max_lines,
        } => {
            let verses = repo
                .read_canto_lines(canto.get(), ReadOptions { strip, max_lines })
                .with_context(|| format!("Failed to read canto {canto}"))?;
            for verse in &verses {
                print_verse(verse);
            }
        }
        Commands::Verses { canto } => {
            let count = repo
                .verse_count(canto.get())
                .with_context(|| format!("Failed to count verses of canto {canto}"))?;
            println!("Verses: {count}");
        }
        Commands::Tercets { canto } => {
            let count = repo
                .tercet_count(canto.get())
                .with_context(|| format!("Failed to count tercets of canto {canto}"))?;
            println!("Tercets: {count}");
        }
        Commands::Count { canto, word } => {
            let count = repo
                .count_word_occurrences(canto.get(), &word)
                .with_context(|| format!("Failed to count '{word}' in canto {canto}"))?;
            println!("Occurrences of '{word}': {count}");
        }
        Commands::First { canto, word } => {
            match repo
                .first_verse_containing(canto.get(), &word)
                .with_context(|| format!("Failed to search canto {canto}"))?
            {
                Some(verse) => print_verse(&verse),
                None => println!("No verse of canto {canto} contains '{word}'"),
            }
        }
        Commands::Search { canto, word } => {
            let verses = repo
                .all_verses_containing(canto.get(), &word)
                .with_context(|| format!("Failed to search canto {canto}"))?;
            if verses.is_empty() {
                println!("No verse of canto {canto} contains '{word}'");
            }
            for verse in &verses {
                print_verse(verse);
            }
        }
        Commands::LongestVerse { canto } => {
            match repo
                .longest_verse(canto.get())
                .with_context(|| format!("Failed to read canto {canto}"))?
            {
                Some(verse) => println!("{verse}"),
                None => println!("Canto {canto} has no verses"),
            }
        }
        Commands::LongestCanto { json } => {
            let longest = repo
                .longest_canto()
                .with_context(|| format!("Failed to scan {}", repo.dir().display()))?;
            if json {
                println!("{}", serde_json::to_string(&longest)?);
                return Ok(());
            }
            match longest {
                Some(longest) => println!(
                    "Canto {}: {} verses",
                    longest.canto_number, longest.verse_count
                ),
                None => println!("No canto files in {}", repo.dir().display()),
            }
        }
        Commands::CountWords { canto, words } => {
            let counts = repo
                .count_words(canto.get(), &words)
                .with_context(|| format!("Failed to count words in canto {canto}"))?;
            println!("{}", serde_json::to_string_pretty(&counts)?);
            success!(
                "Cached {} word count(s) in {}",
                counts.len(),
                cache::cache_path(repo.dir()).display()
            );
        }
        Commands::AllVerses => {
            let verses = repo
                .all_verses_across_cantos()
                .with_context(|| format!("Failed to read cantos in {}", repo.dir().display()))?;
            for verse in &verses {
                println!("{verse}");
            }
        }
        Commands::Total => {
            let total = repo
                .total_verse_count_across_cantos()
                .with_context(|| format!("Failed to read cantos in {}", repo.dir().display()))?;
            println!("Total verses: {total}");
        }
        Commands::Mean => {
            let mean = repo
                .mean_verses_per_file()
                .with_context(|| format!("Failed to read cantos in {}", repo.dir().display()))?;
            println!("Mean verses per file: {mean:.2}");
        }
    }
    Ok(())
}
