//! Interactive line shell over a [`Collection`]

use std::io::{BufRead, Write};

use anyhow::Context;
use log::debug;

use crate::{
    config::ShellConfig,
    shell::command::{Command, Listing},
    storage::collection::Collection,
};

pub mod command;
pub mod render;

/// What the loop does after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, W: Write> {
    collection: &'a mut Collection,
    config: ShellConfig,
    out: W,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(collection: &'a mut Collection, config: ShellConfig, out: W) -> Self {
        Self {
            collection,
            config,
            out,
        }
    }

    /// Prints the welcome message, then reads and executes lines until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R) -> anyhow::Result<()> {
        let welcome = self.config.welcome.clone();
        self.display(&welcome)?;

        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.config.prompt)?;
            self.out.flush().with_context(|| "failed to flush prompt")?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_context(|| "failed to read input line")?;
            if read == 0 {
                debug!("End of input, leaving the shell");
                return Ok(());
            }

            // invalid UTF-8 becomes U+FFFD, which no token matches
            let line = String::from_utf8_lossy(&buf);
            if self.execute(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Handles one line of input
    ///
    /// Collection errors are displayed and never returned, only output failures are.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Flow> {
        let Some(command) = command::parse(line) else {
            return Ok(Flow::Continue);
        };
        debug!("Executing {command:?}");

        match command {
            Command::Add { title, artist } => {
                let message = match self.collection.add(&title, &artist) {
                    Ok(added) => render::added(&added.title, &added.artist),
                    Err(e) => render::error(e),
                };
                self.display(&message)?;
            }
            Command::Play { title } => {
                let message = match self.collection.play(&title) {
                    Ok(()) => render::playing(&title),
                    Err(e) => render::error(e),
                };
                self.display(&message)?;
            }
            Command::Show { listing, artist } => {
                let artist = artist.as_deref();
                let message = match listing {
                    Listing::All => render::albums(&self.collection.list_all(artist), true),
                    Listing::Unplayed => {
                        render::albums(&self.collection.list_unplayed(artist), false)
                    }
                };
                self.display(&message)?;
            }
            Command::Help => self.display(render::HELP)?,
            Command::Quit => {
                let farewell = self.config.farewell.clone();
                self.display(&farewell)?;
                return Ok(Flow::Quit);
            }
            Command::Invalid => self.display(render::INVALID_COMMAND)?,
        }

        Ok(Flow::Continue)
    }

    /// Every message is followed by a blank line
    fn display(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{message}\n").with_context(|| "failed to write output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(collection: &mut Collection, input: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        Shell::new(collection, ShellConfig::default(), &mut out).run(input.as_bytes())?;
        Ok(String::from_utf8(out)?)
    }

    fn execute_lines(collection: &mut Collection, lines: &[&str]) -> anyhow::Result<String> {
        let mut out = Vec::new();
        let mut shell = Shell::new(collection, ShellConfig::default(), &mut out);
        for line in lines {
            shell.execute(line)?;
        }
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_add_command() -> anyhow::Result<()> {
        let mut collection = Collection::new();

        let output = execute_lines(&mut collection, &[r#"add "Abbey Road" "The Beatles""#])?;

        assert_eq!(output, "Added \"Abbey Road\" by The Beatles\n\n");
        let album = collection.find_by_title("Abbey Road").unwrap();
        assert_eq!(album.artist(), "The Beatles");
        assert!(!album.is_played());

        Ok(())
    }

    #[test]
    fn test_add_errors_are_displayed() -> anyhow::Result<()> {
        let mut collection = Collection::new();

        let output = execute_lines(
            &mut collection,
            &[
                "add",
                r#"add "Title""#,
                r#"add "Abbey Road" "The Beatles""#,
                r#"add "abbey road" "Someone""#,
            ],
        )?;

        assert_eq!(
            output,
            "Error: Invalid title\n\n\
             Error: Invalid artist\n\n\
             Added \"Abbey Road\" by The Beatles\n\n\
             Error: Could not add album; \"abbey road\" already exists in this collection.\n\n"
        );
        assert_eq!(collection.len(), 1);

        Ok(())
    }

    #[test]
    fn test_play_command() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        collection.add("Pauls Boutique", "Beastie Boys")?;

        let output = execute_lines(
            &mut collection,
            &[r#"play "pauls boutique""#, r#"play "Invalid Title""#],
        )?;

        assert_eq!(
            output,
            "You're listening to \"pauls boutique\"\n\n\
             Error: Could not play album; \"Invalid Title\" does not exist in this collection.\n\n"
        );
        assert!(collection.find_by_title("Pauls Boutique").unwrap().is_played());

        Ok(())
    }

    #[test]
    fn test_show_commands() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        collection.add("Licensed to Ill", "Beastie Boys")?;
        collection.add("Pauls Boutique", "Beastie Boys")?;
        collection.add("The Dark Side of the Moon", "Pink Floyd")?;
        collection.play("Pauls Boutique")?;

        let output = execute_lines(&mut collection, &["show all"])?;
        assert_eq!(
            output,
            "\"Licensed to Ill\" by Beastie Boys (unplayed)\n\
             \"Pauls Boutique\" by Beastie Boys (played)\n\
             \"The Dark Side of the Moon\" by Pink Floyd (unplayed)\n\n\n"
        );

        let output = execute_lines(&mut collection, &[r#"show all by "Pink Floyd""#])?;
        assert_eq!(
            output,
            "\"The Dark Side of the Moon\" by Pink Floyd (unplayed)\n\n\n"
        );

        let output = execute_lines(&mut collection, &[r#"show unplayed by "beastie boys""#])?;
        assert_eq!(output, "\"Licensed to Ill\" by Beastie Boys\n\n\n");

        let output = execute_lines(&mut collection, &["show unplayed"])?;
        assert_eq!(
            output,
            "\"Licensed to Ill\" by Beastie Boys\n\
             \"The Dark Side of the Moon\" by Pink Floyd\n\n\n"
        );

        let output = execute_lines(&mut collection, &[r#"show unplayed by "Nobody""#])?;
        assert_eq!(output, "No albums to display\n\n");

        Ok(())
    }

    #[test]
    fn test_show_fallback_lists_everything() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        collection.add("Abbey Road", "The Beatles")?;

        let expected = "\"Abbey Road\" by The Beatles (unplayed)\n\n\n";
        assert_eq!(execute_lines(&mut collection, &["show"])?, expected);
        assert_eq!(execute_lines(&mut collection, &["show everything"])?, expected);
        assert_eq!(execute_lines(&mut collection, &["show all by all"])?, expected);

        Ok(())
    }

    #[test]
    fn test_empty_collection() -> anyhow::Result<()> {
        let mut collection = Collection::new();

        let output = execute_lines(&mut collection, &["show all", "show unplayed"])?;

        assert_eq!(output, "No albums to display\n\nNo albums to display\n\n");

        Ok(())
    }

    #[test]
    fn test_invalid_command_leaves_collection_alone() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        collection.add("Abbey Road", "The Beatles")?;

        let output = execute_lines(&mut collection, &[r#"remove "Abbey Road""#, "   "])?;

        assert_eq!(
            output,
            "Invalid command. Type 'help' for a list of commands.\n\n"
        );
        assert_eq!(collection.len(), 1);

        Ok(())
    }

    #[test]
    fn test_help_command() -> anyhow::Result<()> {
        let mut collection = Collection::new();

        let output = execute_lines(&mut collection, &["HELP"])?;

        assert!(output.starts_with("\nadd \"$title\" \"$artist\": adds an album"));
        assert!(output.ends_with("quit: quits the program\n\n"));

        Ok(())
    }

    #[test]
    fn test_session_until_quit() -> anyhow::Result<()> {
        let mut collection = Collection::new();

        let output = run_session(
            &mut collection,
            "add \"Abbey Road\" \"The Beatles\"\n\nquit\nshow all\n",
        )?;

        assert_eq!(
            output,
            "Welcome to your music collection!\n\n\
             > Added \"Abbey Road\" by The Beatles\n\n\
             > > Bye!\n\n"
        );
        assert_eq!(collection.len(), 1);

        Ok(())
    }

    #[test]
    fn test_session_until_end_of_input() -> anyhow::Result<()> {
        let mut collection = Collection::new();

        let output = run_session(&mut collection, "show all\n")?;

        assert_eq!(
            output,
            "Welcome to your music collection!\n\n\
             > No albums to display\n\n\
             > "
        );

        Ok(())
    }

    #[test]
    fn test_session_survives_invalid_utf8() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        let input: &[u8] =
            b"add \"Abbey Road\" \"The Beatles\"\nplay \"caf\xe9\"\n\xff\xfe\nshow all\nquit\n";

        let mut out = Vec::new();
        Shell::new(&mut collection, ShellConfig::default(), &mut out).run(input)?;

        assert_eq!(
            String::from_utf8(out)?,
            "Welcome to your music collection!\n\n\
             > Added \"Abbey Road\" by The Beatles\n\n\
             > Error: Could not play album; \"caf\u{FFFD}\" does not exist in this collection.\n\n\
             > \
             > \"Abbey Road\" by The Beatles (unplayed)\n\n\n\
             > Bye!\n\n"
        );
        assert_eq!(collection.len(), 1);

        Ok(())
    }

    #[test]
    fn test_session_uses_configured_text() -> anyhow::Result<()> {
        let mut collection = Collection::new();
        let config = ShellConfig {
            prompt: "$ ".into(),
            welcome: "hi".into(),
            farewell: "later".into(),
        };

        let mut out = Vec::new();
        Shell::new(&mut collection, config, &mut out).run("quit\n".as_bytes())?;

        assert_eq!(String::from_utf8(out)?, "hi\n\n$ later\n\n");

        Ok(())
    }
}
