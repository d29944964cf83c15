use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};
use photogallery_core::navigation::Key;
use photogallery_core::view::Session;
use photogallery_core::{Action, Gallery};

use crate::render::TerminalRenderer;

const HELP: &str = "\
  open N      show image N in the lightbox
  next, prev  step through the lightbox (also: right, left)
  close, esc  close the lightbox
  tag T       toggle tag T in the filter
  all         clear the filter
  event K     open event K
  back        return to the event grid
  quit        leave";

#[derive(Debug, PartialEq)]
enum Command {
    Act(Action),
    Help,
    Quit,
}

fn parse_index(arg: Option<&str>, what: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| anyhow!("missing {what}"))?;
    arg.parse()
        .map_err(|_| anyhow!("invalid {what}: {arg}"))
}

/// Parse one input line. Blank lines yield `None`.
fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(key) = Key::from_name(line) {
        return Ok(Some(Command::Act(Action::Key(key))));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (line, None),
    };

    let command = match word {
        "open" | "o" => Command::Act(Action::OpenImage(parse_index(rest, "image index")?)),
        "next" | "n" => Command::Act(Action::NextImage),
        "prev" | "p" => Command::Act(Action::PrevImage),
        "right" => Command::Act(Action::Key(Key::ArrowRight)),
        "left" => Command::Act(Action::Key(Key::ArrowLeft)),
        "esc" => Command::Act(Action::Key(Key::Escape)),
        "close" => Command::Act(Action::CloseLightbox),
        "tag" | "t" => match rest {
            Some(tag) => Command::Act(Action::ToggleTag(tag.to_string())),
            None => bail!("missing tag"),
        },
        "all" => Command::Act(Action::SelectAll),
        "event" | "e" => Command::Act(Action::OpenEvent(parse_index(rest, "event index")?)),
        "back" | "b" => Command::Act(Action::BackToEvents),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("unknown command: {other} (try `help`)"),
    };
    Ok(Some(command))
}

pub fn run(gallery: Gallery, event: Option<usize>) -> Result<()> {
    let mut session = Session::new(gallery, TerminalRenderer);
    match event {
        Some(k) => session.dispatch(Action::OpenEvent(k))?,
        None => session.start(),
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Act(action))) => {
                if let Err(err) = session.dispatch(action) {
                    println!("  {err}");
                }
            }
            Err(err) => println!("  {err}"),
        }
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn act(line: &str) -> Action {
        match parse_command(line).unwrap() {
            Some(Command::Act(action)) => action,
            other => panic!("expected an action for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(act("open 3"), Action::OpenImage(3));
        assert_eq!(act("  o 0 "), Action::OpenImage(0));
        assert_eq!(act("next"), Action::NextImage);
        assert_eq!(act("p"), Action::PrevImage);
        assert_eq!(act("close"), Action::CloseLightbox);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(act("right"), Action::Key(Key::ArrowRight));
        assert_eq!(act("left"), Action::Key(Key::ArrowLeft));
        assert_eq!(act("esc"), Action::Key(Key::Escape));
        assert_eq!(act("Escape"), Action::Key(Key::Escape));
        assert_eq!(act("ArrowRight"), Action::Key(Key::ArrowRight));
    }

    #[test]
    fn test_parse_filters_and_events() {
        assert_eq!(act("tag Big Sur"), Action::ToggleTag("Big Sur".to_string()));
        assert_eq!(act("all"), Action::SelectAll);
        assert_eq!(act("event 2"), Action::OpenEvent(2));
        assert_eq!(act("back"), Action::BackToEvents);
    }

    #[test]
    fn test_parse_control() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(parse_command("help").unwrap(), Some(Command::Help));
        assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("open").is_err());
        assert!(parse_command("open x").is_err());
        assert!(parse_command("tag").is_err());
        assert!(parse_command("fly away").is_err());
    }
}
