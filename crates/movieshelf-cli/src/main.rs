//! Movieshelf CLI
//!
//! Thin wrapper around movieshelf-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show the details view of a movie
//! movieshelf show 550
//!
//! # Simulate buying a movie (twice)
//! movieshelf purchase 550 --times 2
//!
//! # List trending movies
//! movieshelf trending
//!
//! # Search by title
//! movieshelf search "matrix"
//!
//! # Cast and reviews of a movie
//! movieshelf cast 550
//! movieshelf reviews 550
//!
//! # Use a custom snapshot
//! movieshelf --catalog ./catalog.json trending
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use movieshelf_core::{
    purchase, MovieCatalog, MovieDetails, MovieId, MovieSummary, NotificationRequest, Notifier,
    ShelfConfig, SnapshotCatalog,
};

/// Movieshelf - Movie Catalog Browser
#[derive(Parser)]
#[command(name = "movieshelf")]
#[command(version = "0.1.0")]
#[command(about = "Movieshelf - browse the movie catalog and simulate purchases")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Catalog snapshot (default: bundled demo catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Artificial latency for every catalog call, in milliseconds
    #[arg(long, global = true, default_value_t = 0)]
    latency_ms: u64,

    /// Image CDN prefix for poster URLs
    #[arg(long, global = true)]
    image_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show details of a movie
    Show {
        /// Movie ID
        movie_id: String,
    },

    /// Simulate purchasing a movie
    Purchase {
        /// Movie ID
        movie_id: String,

        /// Number of purchases to trigger
        #[arg(short, long, default_value_t = 1)]
        times: u32,
    },

    /// List trending movies
    Trending,

    /// Search movies by title
    Search {
        /// Title fragment
        query: String,
    },

    /// List the cast of a movie
    Cast {
        /// Movie ID
        movie_id: String,
    },

    /// List reviews of a movie
    Reviews {
        /// Movie ID
        movie_id: String,
    },
}

/// Prints notifications instead of showing toasts
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, request: NotificationRequest) {
        match request.icon {
            Some(icon) => println!("{} {}", icon, request.message),
            None => println!("{}", request.message),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a movie ID from its decimal form
fn parse_movie_id(s: &str) -> Result<MovieId> {
    s.parse::<MovieId>()
        .map_err(|e| anyhow::anyhow!("Invalid movie ID '{}': {}", s, e))
}

fn print_summaries(movies: &[MovieSummary]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }
    for movie in movies {
        println!("  [{}] {} ({})", movie.id, movie.title, movie.release_date);
    }
}

fn print_details(details: &MovieDetails) {
    println!("{}", details.title);
    println!();
    println!("Poster: {}", details.poster_url);
    println!();
    println!("Overview:");
    println!("  {}", details.overview);
    println!();
    println!("Statistics:");
    println!("  Release date: {}", details.release_date);
    println!("  Vote average: {}", details.vote_average);
    println!("  Votes: {}", details.vote_count);
    println!();
    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    println!("Genres: {}", genres.join(", "));
    println!("Price in US: ${}", details.price);
    println!("Availability: {}", details.availability.label());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = ShelfConfig::resolve(cli.catalog, cli.image_base, cli.latency_ms);
    let catalog = SnapshotCatalog::from_config(&config)
        .await
        .context("Failed to open catalog")?;

    match cli.command {
        Commands::Show { movie_id } => {
            let id = parse_movie_id(&movie_id)?;
            let record = catalog.fetch_movie_by_id(id).await?;
            print_details(&MovieDetails::from_record(&record, &config.image_base));
        }

        Commands::Purchase { movie_id, times } => {
            let id = parse_movie_id(&movie_id)?;
            let record = catalog.fetch_movie_by_id(id).await?;
            for _ in 0..times {
                purchase(&record, &ConsoleNotifier);
            }
        }

        Commands::Trending => {
            let movies = catalog.trending_movies().await?;
            println!("Trending today:");
            print_summaries(&movies);
        }

        Commands::Search { query } => {
            let movies = catalog.search_movies(&query).await?;
            println!("Results for \"{}\":", query);
            print_summaries(&movies);
        }

        Commands::Cast { movie_id } => {
            let id = parse_movie_id(&movie_id)?;
            let cast = catalog.fetch_movie_cast(id).await?;
            if cast.is_empty() {
                println!("No cast information.");
            }
            for member in cast {
                println!("  {} as {}", member.name, member.character);
            }
        }

        Commands::Reviews { movie_id } => {
            let id = parse_movie_id(&movie_id)?;
            let reviews = catalog.fetch_movie_reviews(id).await?;
            if reviews.is_empty() {
                println!("We don't have any reviews for this movie.");
            }
            for review in reviews {
                println!("Author: {}", review.author);
                println!("  {}", review.content);
                println!();
            }
        }
    }

    Ok(())
}
