mod session;

use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{
    evaluate_scenarios, load_scenarios, MovieAssistant, RatingRecorder, RatingResult,
    RecommendationBasis, RecommendationRanker, RecommendationResult, RecordError,
    DEFAULT_USER_ID,
};
use preferences::PreferenceStore;
use session::{parse_command, parse_rating, ChatCommand, HELP};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// Movie Agent - preference-aware movie recommendations
#[derive(Parser)]
#[command(name = "movie-agent")]
#[command(about = "Rate movies and get recommendations from a fixed catalog", long_about = None)]
struct Cli {
    /// JSON catalog to use instead of the built-in 50 movies
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// User whose preferences the session stores
    #[arg(short, long, default_value = DEFAULT_USER_ID)]
    user_id: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog movies
    Movies {
        /// Only movies whose genre contains this text
        #[arg(long)]
        genre: Option<String>,

        /// Only movies whose title contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Rate a movie and print the preference facts it produces
    Rate {
        /// Full or partial movie title
        #[arg(long)]
        title: String,

        /// Star rating from 1 to 5
        #[arg(long, value_parser = parse_rating)]
        rating: f32,

        /// The user did not like the movie
        #[arg(long)]
        disliked: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend movies from a preference history
    Recommend {
        /// Preference facts, as stored for the user; empty for a cold start
        #[arg(long, default_value = "")]
        memories: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Genre to filter by (substring, e.g. "sci")
        #[arg(long)]
        genre: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session with in-memory preferences
    Chat,

    /// Replay evaluation scenarios and grade the answers
    Eval {
        /// JSON scenario file
        #[arg(long)]
        scenarios: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
        concurrent: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = Arc::new(match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    });

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Movies { genre, search } => handle_movies(&catalog, genre, search),
        Commands::Rate {
            title,
            rating,
            disliked,
            json,
        } => handle_rate(catalog, &title, rating, !disliked, json),
        Commands::Recommend {
            memories,
            count,
            genre,
            json,
        } => handle_recommend(catalog, &memories, count as usize, genre.as_deref(), json),
        Commands::Chat => handle_chat(catalog, cli.user_id),
        Commands::Eval { scenarios, json } => handle_eval(catalog, cli.user_id, scenarios, json),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent as usize).await,
    }
}

/// Handle the 'movies' command
fn handle_movies(catalog: &Catalog, genre: Option<String>, search: Option<String>) -> Result<()> {
    let pool: Vec<&Movie> = match search.as_deref() {
        Some(query) => catalog.search(query),
        None => catalog.movies().iter().collect(),
    };
    let movies: Vec<&Movie> = pool
        .into_iter()
        .filter(|movie| {
            genre
                .as_deref()
                .is_none_or(|genre| movie.matches_genre_fragment(genre))
        })
        .collect();

    println!("{}", format!("{} movie(s):", movies.len()).bold().blue());
    for movie in movies {
        let series = movie
            .series
            .as_deref()
            .map(|s| format!(" (series: {})", s))
            .unwrap_or_default();
        println!(
            "{:>3}. {} ({}) [{}] {:.1}{}",
            movie.id,
            movie.title,
            movie.year,
            movie.genre_list(),
            movie.rating,
            series.dimmed()
        );
    }
    Ok(())
}

/// Handle the 'rate' command
fn handle_rate(catalog: Arc<Catalog>, title: &str, rating: f32, liked: bool, json: bool) -> Result<()> {
    let recorder = RatingRecorder::new(catalog);
    match recorder.record_rating(title, rating, liked) {
        Ok(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
        Ok(result) => print_rating(&result),
        Err(err) if json => println!("{}", serde_json::to_string_pretty(&err)?),
        Err(err) => print_not_found(&err),
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<Catalog>,
    memories: &str,
    count: usize,
    genre: Option<&str>,
    json: bool,
) -> Result<()> {
    let ranker = RecommendationRanker::new(catalog);
    let result = ranker.recommend(memories, count, genre)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_recommendations(&result);
    }
    Ok(())
}

/// Handle the 'chat' command
fn handle_chat(catalog: Arc<Catalog>, user_id: String) -> Result<()> {
    let mut assistant = MovieAssistant::in_memory(catalog, user_id);

    println!("{}", "🎬 Movie Recommendation Agent".bold());
    println!("Session for {}. Type 'help' for commands, 'quit' to exit.\n", assistant.user_id());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "🎬 You:".green());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                println!("{} {}\n", "Error:".red(), err);
                continue;
            }
        };

        match command {
            ChatCommand::Rate { rating, liked, title } => match assistant.rate(&title, rating, liked) {
                Ok(result) => print_rating(&result),
                Err(err) => print_not_found(&err),
            },
            ChatCommand::Recommend { count, genre_filter } => {
                let result = assistant.recommend(count, genre_filter.as_deref())?;
                print_recommendations(&result);
            }
            ChatCommand::Memories => {
                let memories = assistant.memories();
                if memories.is_empty() {
                    println!("No stored preferences.");
                }
                for stored in memories {
                    println!("  [{}] {}", stored.id, stored.fact);
                }
            }
            ChatCommand::Forget(id) => match assistant.forget(id) {
                Ok(()) => println!("Forgot preference {}.", id),
                Err(err) => println!("{} {}", "Error:".red(), err),
            },
            ChatCommand::Reset => {
                let removed = assistant.reset_memory();
                println!("Deleted {} stored preference(s).", removed);
            }
            ChatCommand::Help => println!("{}", HELP),
            ChatCommand::Quit => break,
        }
        println!();
    }

    println!(
        "Thanks for using the Movie Recommendation Agent! {} preference(s) were stored this session. 🎬",
        assistant.store().list(assistant.user_id()).len()
    );
    Ok(())
}

/// Handle the 'eval' command
fn handle_eval(catalog: Arc<Catalog>, user_id: String, scenarios: PathBuf, json: bool) -> Result<()> {
    let scenarios = load_scenarios(&scenarios)?;
    info!("Loaded {} scenario(s)", scenarios.len());
    let mut assistant = MovieAssistant::in_memory(catalog, user_id);
    let report = evaluate_scenarios(&mut assistant, &scenarios)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for evaluation in &report.evaluations {
        println!("{}", evaluation.scenario.bold().blue());
        println!("  Recommendations: {}", evaluation.recommendations.join(", "));
        println!(
            "  Memory:  {}/5  {}",
            evaluation.memory_score, evaluation.memory_explanation
        );
        println!(
            "  Quality: {}/5  {}",
            evaluation.quality_score, evaluation.quality_explanation
        );
        for error in &evaluation.step_errors {
            println!("  {} {}", "Step error:".yellow(), error);
        }
    }
    println!(
        "\nAverage memory score: {:.2}, average quality score: {:.2}",
        report.average_memory_score, report.average_quality_score
    );
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("Benchmark needs at least one request"));
    }

    let ranker = RecommendationRanker::new(catalog.clone());
    let recorder = RatingRecorder::new(catalog.clone());
    let limiter = Arc::new(Semaphore::new(concurrent));

    // A few realistic histories to sample from
    let histories: Arc<Vec<String>> = Arc::new(
        ["Matrix", "Inception", "Get Out", "La La Land", "Barbie"]
            .iter()
            .enumerate()
            .filter_map(|(i, title)| recorder.record_rating(title, (i % 5 + 1) as f32, i % 2 == 0).ok())
            .map(|result| {
                result
                    .facts
                    .iter()
                    .map(|fact| fact.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .chain(std::iter::once(String::new()))
            .collect(),
    );
    let filters: [Option<&'static str>; 4] = [None, Some("sci"), Some("comedy"), Some("drama")];

    info!(
        "Running benchmark: {} requests, {} concurrent",
        requests, concurrent
    );
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let history_index = rand::random::<u32>() as usize % histories.len();
        let filter = filters[rand::random::<u32>() as usize % filters.len()];
        let ranker = ranker.clone();
        let histories = histories.clone();
        let permit = limiter.clone().acquire_owned().await?;

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            ranker.recommend(&histories[history_index], 5, filter)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await.context("Benchmark task panicked")??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn print_rating(result: &RatingResult) {
    println!("{} {}", "✓".green(), result.message);
    if result.applied_to_series {
        println!("  Applied to the whole series: {}", result.rated_movies.join(", "));
    }
    println!("  Facts to remember:");
    for fact in &result.facts {
        println!("  - {}", fact);
    }
}

fn print_not_found(err: &RecordError) {
    let RecordError::NotFound { suggestions, .. } = err;
    println!("{} {}", "✗".red(), err);
    println!("  Try one of: {}", suggestions.join(", "));
}

/// Helper function to format and print recommendations
fn print_recommendations(result: &RecommendationResult) {
    print!("{}", "Movie Recommendations:\n".bold().blue());
    if result.recommendations.is_empty() {
        println!("  (no movies match)");
    }
    for (rank, rec) in result.recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - Rating: {:.1}",
            (rank + 1).to_string().green(),
            rec.title,
            rec.year,
            catalog::join_genres(&rec.genres),
            rec.rating
        );
        println!("   {}", rec.reason.dimmed());
    }

    match &result.basis {
        RecommendationBasis::ColdStart(info) => {
            println!(
                "{} ({} of {} movies considered)",
                info.note.italic(),
                info.filtered_movies,
                info.total_movies
            );
        }
        RecommendationBasis::Personalized(factors) => {
            println!(
                "Likes: [{}]  Dislikes: [{}]  Already rated: {}",
                catalog::join_genres(&factors.liked_genres),
                catalog::join_genres(&factors.disliked_genres),
                factors.rated_movies_count
            );
        }
    }
}
