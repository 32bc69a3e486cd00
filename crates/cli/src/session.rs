//! Line commands understood by the interactive `chat` session.
//!
//! ```text
//! rate 5 liked The Matrix
//! rate 2 disliked Get Out
//! recommend
//! recommend 3 comedy
//! memories
//! forget 4
//! reset
//! quit
//! ```

use anyhow::{anyhow, bail, Context, Result};
use preferences::FactId;

pub const DEFAULT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    Rate {
        rating: f32,
        liked: bool,
        title: String,
    },
    Recommend {
        count: usize,
        genre_filter: Option<String>,
    },
    Memories,
    Forget(FactId),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  rate <1-5> <liked|disliked> <title>   rate a movie (and its series)
  recommend [count] [genre]             get recommendations
  memories                              list stored preferences
  forget <id>                           delete one stored preference
  reset                                 delete all stored preferences
  help                                  show this help
  quit                                  leave the session";

/// Parse one input line. Blank lines are the caller's business.
pub fn parse_command(line: &str) -> Result<ChatCommand> {
    let mut words = line.split_whitespace();
    let verb = words
        .next()
        .ok_or_else(|| anyhow!("Empty command"))?
        .to_lowercase();
    let rest: Vec<&str> = words.collect();

    match verb.as_str() {
        "rate" => parse_rate(&rest),
        "recommend" | "rec" => parse_recommend(&rest),
        "memories" | "list" => Ok(ChatCommand::Memories),
        "forget" | "delete" => {
            let id = rest
                .first()
                .ok_or_else(|| anyhow!("Usage: forget <id>"))?
                .parse::<FactId>()
                .context("Fact id must be a number")?;
            Ok(ChatCommand::Forget(id))
        }
        "reset" => Ok(ChatCommand::Reset),
        "help" | "?" => Ok(ChatCommand::Help),
        "quit" | "exit" | "bye" => Ok(ChatCommand::Quit),
        other => bail!("Unknown command '{}'. Type 'help' for commands.", other),
    }
}

fn parse_rate(args: &[&str]) -> Result<ChatCommand> {
    let [rating, opinion, title @ ..] = args else {
        bail!("Usage: rate <1-5> <liked|disliked> <title>");
    };
    if title.is_empty() {
        bail!("Usage: rate <1-5> <liked|disliked> <title>");
    }

    let rating = parse_rating(rating).map_err(|msg| anyhow!(msg))?;
    let liked = match opinion.to_lowercase().as_str() {
        "liked" | "like" | "loved" | "yes" => true,
        "disliked" | "dislike" | "hated" | "no" => false,
        other => bail!("Expected 'liked' or 'disliked', got '{}'", other),
    };

    Ok(ChatCommand::Rate {
        rating,
        liked,
        title: title.join(" "),
    })
}

fn parse_recommend(args: &[&str]) -> Result<ChatCommand> {
    let (count, genre_words) = match args.split_first() {
        Some((first, rest)) => match first.parse::<usize>() {
            Ok(0) => bail!("Count must be at least 1"),
            Ok(count) => (count, rest),
            Err(_) => (DEFAULT_COUNT, args),
        },
        None => (DEFAULT_COUNT, args),
    };

    let genre_filter = if genre_words.is_empty() {
        None
    } else {
        Some(genre_words.join(" "))
    };

    Ok(ChatCommand::Recommend {
        count,
        genre_filter,
    })
}

/// Star rating in 1..=5, shared with the argument parser
pub fn parse_rating(s: &str) -> std::result::Result<f32, String> {
    let rating: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (1.0..=5.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(format!("Rating must be between 1 and 5, got {}", rating))
    }
}
