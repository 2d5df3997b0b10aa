//! Turns one line of input into a [`Command`]

use std::sync::LazyLock;

use regex::Regex;

/// A bare word (with at most one trailing whitespace) or a double-quoted string
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[A-Za-z0-9_]+\s?|"([^"]*)""#).expect("Invalid Regex"));

/// Which albums `show` lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    Unplayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        artist: String,
    },
    Play {
        title: String,
    },
    Show {
        listing: Listing,
        artist: Option<String>,
    },
    Help,
    Quit,
    Invalid,
}

/// Splits a line into tokens, stripping quotes and surrounding whitespace
///
/// Characters that belong to no token (punctuation, stray whitespace) are skipped.
pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN
        .find_iter(line)
        .map(|m| m.as_str().replace('"', "").trim().to_string())
        .collect()
}

/// Parses a line; `None` means nothing to do and the prompt is shown again
pub fn parse(line: &str) -> Option<Command> {
    let mut tokens = tokenize(line).into_iter();
    let name = tokens.next()?.to_lowercase();
    let args: Vec<String> = tokens.collect();

    let command = match name.as_str() {
        "add" => Command::Add {
            title: arg(&args, 0),
            artist: arg(&args, 1),
        },
        "play" => Command::Play {
            title: arg(&args, 0),
        },
        "show" => parse_show(&args),
        "help" => Command::Help,
        "quit" => Command::Quit,
        _ => Command::Invalid,
    };
    Some(command)
}

/// `show all|unplayed [by] [artist]`
///
/// The artist is whatever token sits second after the listing word, the word
/// `by` itself is never checked. Anything other than `all`/`unplayed` lists
/// everything unfiltered.
fn parse_show(args: &[String]) -> Command {
    let listing = match args.first().map(String::as_str) {
        Some("all") => Listing::All,
        Some("unplayed") => Listing::Unplayed,
        _ => {
            return Command::Show {
                listing: Listing::All,
                artist: None,
            };
        }
    };

    let artist = args.get(2).filter(|artist| !artist.is_empty()).cloned();
    Command::Show { listing, artist }
}

fn arg(args: &[String], index: usize) -> String {
    args.get(index).cloned().unwrap_or_default()
}
