mod catalog;
mod error;
mod models;
mod schedule;
mod session;
mod storage;
mod store;
mod tui;

use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use catalog::NEETCODE_150;
use error::{Error, StoreError};
use models::{JsonOutput, Match, ProblemEntry};
use session::PracticeSession;
use storage::JsonFile;
use store::ProblemStore;
use tui::widgets::truncate;

const DEFAULT_DATA_NAME: &str = "problems.json";

#[derive(Parser)]
#[command(name = "grind")]
#[command(about = "Track coding interview practice with spaced repetition")]
#[command(version)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Problems file (defaults to $GRIND_DATA, then the user config dir)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the problems file from the NeetCode 150 catalog
    Init {
        /// Reset catalog problems even if the file exists
        #[arg(long)]
        force: bool,
    },

    /// Mark a problem as completed
    #[command(alias = "done")]
    Completed {
        /// Problem name (case-insensitive, `_` reads as `-`)
        name: String,
    },

    /// Work through due and new problems one at a time
    Next,

    /// Show how many times a problem was completed
    Count {
        /// Problem name (typos are tolerated)
        name: String,
    },

    /// Track a new problem
    Add {
        /// Problem name
        name: String,

        /// Category tag
        tag: String,
    },

    /// Reset every catalog problem to its default state
    Reset,

    /// List tracked problems
    List {
        /// Filter by tag
        #[arg(long, short)]
        tag: Option<String>,

        /// Only problems due for review
        #[arg(long)]
        due: bool,
    },

    /// Look up a problem by name
    Search {
        /// Name or partial name
        query: String,
    },

    /// Show practice statistics
    Stats,

    /// Launch interactive terminal UI
    Tui,
}

fn get_data_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    if let Ok(path) = std::env::var("GRIND_DATA") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grind")
        .join(DEFAULT_DATA_NAME)
}

fn init_logging(verbose: bool) {
    let filter = match std::env::var("GRIND_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) if verbose => EnvFilter::new("grind=debug"),
        Err(_) => EnvFilter::new("grind=warn"),
    };

    // Logs go to stderr so --json output stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_store(file: &JsonFile) -> Result<ProblemStore, Error> {
    Ok(ProblemStore::load(file.load()?))
}

// Lookup failures are reported in-band for --json callers
fn lookup_failed(json: bool, err: StoreError) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let output = JsonOutput {
            success: false,
            data: Some(serde_json::json!({ "candidates": err.candidates() })),
            error: Some(err.to_string()),
        };
        println!("{}", serde_json::to_string(&output)?);
        Ok(())
    } else {
        Err(err.into())
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = JsonFile::new(get_data_path(cli.data));
    let now = Local::now().naive_local();
    let today = now.date();

    match cli.command {
        Commands::Init { force } => {
            if file.exists() && !force {
                if cli.json {
                    println!(
                        "{}",
                        serde_json::to_string(&JsonOutput::<()>::err("Problems file already exists"))?
                    );
                } else {
                    println!("Problems file already exists at: {}", file.path().display());
                    println!("Use `grind init --force` or `grind reset` to start over.");
                }
                return Ok(());
            }

            let mut store = if file.exists() {
                load_store(&file)?
            } else {
                ProblemStore::default()
            };
            store.reset(NEETCODE_150, now);
            file.save(store.records())?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "path": file.path(),
                        "problems": store.len()
                    })))?
                );
            } else {
                println!(
                    "Initialized {} problems ({} from NeetCode 150) at: {}",
                    store.len(),
                    catalog::problem_count(NEETCODE_150),
                    file.path().display()
                );
            }
        }

        Commands::Completed { name } => {
            let mut store = load_store(&file)?;
            let resolved = match store.resolve_strict(&name) {
                Ok(n) => n.to_string(),
                Err(e) => return lookup_failed(cli.json, e),
            };

            let count = store.increment_count(&resolved, now)?;
            file.save(store.records())?;

            let record = store.get(&resolved);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "name": resolved,
                        "count": count,
                        "revisit_date": record.and_then(|r| r.revisit_date)
                    })))?
                );
            } else {
                println!("✓ Marked '{}' as completed! Total count: {}", resolved, count);
                if let Some(date) = record.and_then(|r| r.revisit_date) {
                    println!("Next revisit: {}", date);
                }
            }
        }

        Commands::Next => {
            let mut store = load_store(&file)?;

            if cli.json {
                let queue: Vec<ProblemEntry> = store
                    .next_problems(today)
                    .map(|(name, record)| ProblemEntry { name, record })
                    .collect();
                println!("{}", serde_json::to_string(&JsonOutput::ok(&queue))?);
                return Ok(());
            }

            let stdin = io::stdin();
            let summary = PracticeSession::new(&mut store, NEETCODE_150, now).run(
                stdin.lock(),
                io::stdout(),
                |s| file.save(s.records()),
            )?;

            if summary.shown > 0 && !summary.reset {
                println!();
                println!(
                    "Session: {} shown, {} completed, {} skipped.",
                    summary.shown, summary.completed, summary.skipped
                );
            }
        }

        Commands::Count { name } => {
            let store = load_store(&file)?;
            let (resolved, count) = match store.get_count(&name) {
                Ok(found) => found,
                Err(e) => return lookup_failed(cli.json, e),
            };

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "name": resolved,
                        "count": count
                    })))?
                );
            } else if resolved != name {
                println!("Count for '{}' (matched '{}'): {}", name, resolved, count);
            } else {
                println!("Count for '{}': {}", name, count);
            }
        }

        Commands::Add { name, tag } => {
            let mut store = load_store(&file)?;
            let added = store.add_problem(&name, &tag, now);
            if added {
                file.save(store.records())?;
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&JsonOutput::ok(serde_json::json!({
                        "name": name,
                        "added": added
                    })))?
                );
            } else if added {
                println!("Added {}.", name);
            } else {
                println!("{} already exists.", name);
            }
        }

        Commands::Reset => {
            let mut store = load_store(&file)?;
            store.reset(NEETCODE_150, now);
            file.save(store.records())?;

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::<()>::ok(()))?);
            } else {
                println!("Problems database reset to default state.");
            }
        }

        Commands::List { tag, due } => {
            let store = load_store(&file)?;
            let problems = store.list(tag.as_deref(), due, today);

            if cli.json {
                let entries: Vec<ProblemEntry> = problems
                    .iter()
                    .map(|&(name, record)| ProblemEntry { name, record })
                    .collect();
                println!("{}", serde_json::to_string(&JsonOutput::ok(&entries))?);
            } else if problems.is_empty() {
                match tag {
                    Some(tag) => {
                        println!("No problems found for tag '{}'.", tag);
                        println!("Known tags: {}", store.tags().join(", "));
                    }
                    None => println!("No problems found."),
                }
            } else {
                println!(
                    "{:<42} {:<24} {:<6} {:<11} STATUS",
                    "NAME", "TAG", "COUNT", "REVISIT"
                );
                println!("{}", "-".repeat(96));
                for (name, record) in problems {
                    let revisit = record
                        .revisit_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<42} {:<24} {:<6} {:<11} {}",
                        truncate(name, 40),
                        truncate(&record.tag, 22),
                        record.count,
                        revisit,
                        record.status_label(today)
                    );
                }
            }
        }

        Commands::Search { query } => {
            let store = load_store(&file)?;
            let found = store.search(&query);

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&found))?);
            } else {
                match found {
                    Match::Found(name) => println!("Found: {}", name),
                    Match::Candidates(names) => {
                        println!("Possible matches for '{}':", query);
                        for name in names {
                            println!("  {}", name);
                        }
                    }
                    Match::NoMatch => println!("No match found for '{}'", query),
                }
            }
        }

        Commands::Stats => {
            let store = load_store(&file)?;
            let stats = store.stats(today);

            if cli.json {
                println!("{}", serde_json::to_string(&JsonOutput::ok(&stats))?);
            } else if store.is_empty() {
                println!("No problems tracked yet. Try `grind add` or `grind init --force`.");
            } else {
                println!("=== Practice Statistics ===");
                println!("Total problems: {}", stats.total_problems);
                println!(
                    "Attempted: {} ({:.0}%)",
                    stats.attempted,
                    stats.completion_rate()
                );
                println!("Not yet attempted: {}", stats.unattempted);
                println!("Due for review: {}", stats.due_now);
                println!("Scheduled: {}", stats.scheduled);
                println!("Total completions: {}", stats.total_completions);

                if !stats.tags.is_empty() {
                    println!();
                    println!("{:<30} ATTEMPTED", "TAG");
                    println!("{}", "-".repeat(42));
                    for summary in &stats.tags {
                        println!(
                            "{:<30} {}/{}",
                            truncate(&summary.tag, 28),
                            summary.attempted,
                            summary.problems
                        );
                    }
                }
            }
        }

        Commands::Tui => {
            let store = load_store(&file)?;
            tui::run(store, file)?;
        }
    }

    Ok(())
}
