use anyhow::{bail, Context, Result};
use app::{AddOutcome, App, Recommendations, RemoveOutcome};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Jitter, RatingFilter};
use std::path::PathBuf;
use std::sync::Arc;
use store::{Catalog, FileStore};

/// Film Report - box-office companion with a personal collection and
/// taste-based recommendations
#[derive(Parser)]
#[command(name = "film-report")]
#[command(about = "Movie collection and recommendation tool", long_about = None)]
struct Cli {
    /// Directory holding the catalog document and the user data store
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Log in as an existing user
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Log out of the current session
    Logout,

    /// Show the logged-in user and a collection summary
    Status,

    /// List your collection
    Collection,

    /// Add a movie to your collection
    Add {
        /// Movie title, as it appears in the catalog
        title: String,
    },

    /// Remove a movie from your collection
    Remove {
        title: String,
    },

    /// Review a movie in your collection
    Review {
        title: String,

        /// Star rating, 1-5
        #[arg(long)]
        rating: u8,

        /// Review text
        #[arg(long, default_value = "")]
        text: String,
    },

    /// Recommend movies based on your collection and reviews
    Recommend {
        /// "all" or one MPAA class present in the catalog
        #[arg(long, default_value = "all")]
        filter: String,

        /// Fix the tie-break jitter for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // The catalog must be fully loaded before any scoring; a failed load
    // degrades to an empty catalog inside Catalog::load.
    let catalog = Arc::new(Catalog::load(&cli.data_dir.join("movies.json")).await);
    let store = FileStore::open(cli.data_dir.join("store.json"))
        .context("Failed to open user data store")?;
    let app = App::new(catalog, store);
    tracing::debug!(movies = app.catalog().len(), "catalog ready");

    match cli.command {
        Commands::Signup { username, password } => {
            app.signup(&username, &password)?;
            println!("{} Account created. Log in to continue.", "✓".green());
        }
        Commands::Login { username, password } => {
            app.login(&username, &password)?;
            println!("{} Logged in as {}", "✓".green(), username.bold());
        }
        Commands::Logout => {
            app.logout()?;
            println!("Logged out.");
        }
        Commands::Status => handle_status(&app)?,
        Commands::Collection => handle_collection(&app)?,
        Commands::Add { title } => handle_add(&app, &title)?,
        Commands::Remove { title } => handle_remove(&app, &title)?,
        Commands::Review {
            title,
            rating,
            text,
        } => {
            app.add_review(&title, rating, &text)?;
            println!("{} Review recorded for {}", "✓".green(), title.bold());
        }
        Commands::Recommend { filter, seed } => handle_recommend(app, &filter, seed)?,
    }

    Ok(())
}

fn handle_status(app: &App<FileStore>) -> Result<()> {
    match app.current_user() {
        Some(username) => {
            let collection = app.collection()?;
            println!("Logged in as {}", username.bold());
            println!("Collection: {} movies", collection.len());
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

fn handle_collection(app: &App<FileStore>) -> Result<()> {
    let items = app.collection()?;
    if items.is_empty() {
        println!("Your collection is empty. Add movies with `film-report add <title>`.");
        return Ok(());
    }

    println!("{}", "Your collection:".bold().blue());
    for item in &items {
        let meta = match app.catalog().get(&item.title) {
            Some(entry) => format!(
                "{} • {}",
                entry.rating.as_deref().unwrap_or("NR"),
                entry
                    .runtime
                    .map(|r| format!("{r} min"))
                    .unwrap_or_else(|| "runtime unknown".to_string())
            ),
            None => "not in catalog".to_string(),
        };
        println!("  {} ({})", item.title, meta.dimmed());
    }
    Ok(())
}

fn handle_add(app: &App<FileStore>, title: &str) -> Result<()> {
    match app.add_to_collection(title)? {
        AddOutcome::Added => println!("{} \"{}\" added to your collection", "✓".green(), title),
        AddOutcome::AlreadyInCollection => {
            println!("\"{}\" is already in your collection", title)
        }
    }
    Ok(())
}

fn handle_remove(app: &App<FileStore>, title: &str) -> Result<()> {
    match app.remove_from_collection(title)? {
        RemoveOutcome::Removed => println!("{} \"{}\" removed", "✓".green(), title),
        RemoveOutcome::NotInCollection => println!("\"{}\" is not in your collection", title),
    }
    Ok(())
}

fn handle_recommend(app: App<FileStore>, filter: &str, seed: Option<u64>) -> Result<()> {
    let parsed = RatingFilter::parse(filter);
    if let RatingFilter::Class(class) = &parsed {
        let classes = app.rating_classes();
        if !classes.iter().any(|c| c == class) {
            bail!(
                "Unknown rating filter {:?}. Valid values: all, {}",
                class,
                classes.join(", ")
            );
        }
    }

    let app = match seed {
        Some(seed) => app.with_jitter(Jitter::Seeded(seed)),
        None => app,
    };

    match app.recommendations(&parsed)? {
        Recommendations::EmptyCollection => {
            println!("No recommendations yet: your collection is empty.");
            println!("Add a few movies first, then ask again.");
        }
        Recommendations::Ranked(cards) if cards.is_empty() => {
            println!("Nothing matched that filter. Try `--filter all`.");
        }
        Recommendations::Ranked(cards) => {
            println!("{}", "Recommended for you:".bold().blue());
            for (rank, card) in cards.iter().enumerate() {
                let meta = format!(
                    "{} • {}",
                    card.rating.as_deref().unwrap_or("NR"),
                    card.runtime
                        .map(|r| format!("{r} min"))
                        .unwrap_or_else(|| "runtime unknown".to_string())
                );
                println!(
                    "{:>2}. {} ({})  {}",
                    rank + 1,
                    card.title.bold(),
                    meta.dimmed(),
                    format!("{}% Match", card.match_percent).yellow()
                );
                for reason in &card.reasons {
                    println!("      • {reason}");
                }
            }
        }
    }
    Ok(())
}
