//! Display text of the interactive shell

use crate::domain::album::Album;

pub const EMPTY_LISTING: &str = "No albums to display";
pub const INVALID_COMMAND: &str = "Invalid command. Type 'help' for a list of commands.";

pub const HELP: &str = r#"
add "$title" "$artist": adds an album to the collection with the given title and artist. All albums are unplayed by default.
play "$title": marks a given album as played.
show all: displays all of the albums in the collection
show unplayed: display all of the albums that are unplayed
show all by "$artist": shows all of the albums in the collection by the given artist
show unplayed by "$artist": shows the unplayed albums in the collection by the given artist
quit: quits the program"#;

pub fn added(title: &str, artist: &str) -> String {
    format!("Added \"{title}\" by {artist}")
}

pub fn playing(title: &str) -> String {
    format!("You're listening to \"{title}\"")
}

pub fn error(err: impl std::fmt::Display) -> String {
    format!("Error: {err}")
}

/// One line per album, each ending with a newline
///
/// With `with_played` every line carries a `(played)` / `(unplayed)` suffix.
pub fn albums(albums: &[&Album], with_played: bool) -> String {
    if albums.is_empty() {
        return EMPTY_LISTING.to_string();
    }

    albums
        .iter()
        .map(|album| {
            let mut line = format!("\"{}\" by {}", album.title(), album.artist());
            if with_played {
                let state = if album.is_played() { "played" } else { "unplayed" };
                line.push_str(&format!(" ({state})"));
            }
            line.push('\n');
            line
        })
        .collect()
}
