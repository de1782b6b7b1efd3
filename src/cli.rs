pub mod command;
mod run;

pub use run::{browse, run_app};

use crate::prelude::{AppError, Card, LoadingIndicator, Page, Segment, Status};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

const LOADING_MESSAGE: &str = "Loading users...";

// OUTPUT FUNCTIONS
pub fn display_page(page: &Page, color: bool) -> String {
    let mut output = String::new();

    match &page.status {
        Status::Loading => output.push_str(LOADING_MESSAGE),
        Status::Failed(message) => output.push_str(message),
        Status::Ready if page.cards.is_empty() => output.push_str("No users found"),
        Status::Ready => {
            let cards: Vec<String> = page.cards.iter().map(|c| display_card(c, color)).collect();
            output.push_str(&cards.join("\n\n"));
        }
    }

    output.push_str(&format!(
        "\n\nFound: {} | Favorites: {} | Total: {}",
        page.found, page.favorites, page.total
    ));
    output
}

pub fn display_card(card: &Card, color: bool) -> String {
    let name: String = card.name.iter().map(|s| display_segment(s, color)).collect();
    let star = if card.favorite { "★" } else { "☆" };
    let star = if color && card.favorite {
        star.yellow().to_string()
    } else {
        star.to_string()
    };

    format!(
        "({}) {}  #{}  {}\n    {}\n    📧 {}\n    {}",
        card.avatar.unwrap_or('?'),
        name,
        card.id,
        star,
        card.city,
        card.email,
        card.profile_label
    )
}

fn display_segment(segment: &Segment, color: bool) -> String {
    match (segment.highlighted, color) {
        (false, _) => segment.text.clone(),
        (true, true) => segment.text.yellow().bold().to_string(),
        (true, false) => format!("[{}]", segment.text),
    }
}

pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\n")?;
    writeln!(out, "1. Search")?;
    writeln!(out, "2. Toggle sort")?;
    writeln!(out, "3. Toggle favorite")?;
    writeln!(out, "4. Exit")?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Prints the loading message to stderr while a fetch is running.
#[derive(Default)]
pub struct TerminalIndicator {
    shown: bool,
}

impl LoadingIndicator for TerminalIndicator {
    fn show(&mut self) {
        eprint!("{LOADING_MESSAGE}");
        flush_or_log(&mut io::stderr());
        self.shown = true;
    }

    fn hide(&mut self) {
        if !self.shown {
            return;
        }
        if io::stderr().is_terminal() {
            eprint!("\r{:width$}\r", "", width = LOADING_MESSAGE.len());
        } else {
            eprintln!();
        }
        self.shown = false;
    }
}

fn flush_or_log<W: Write>(out: &mut W) {
    if let Err(e) = out.flush() {
        tracing::debug!(error = %e, "could not flush loading message");
    }
}

// INPUT FUNCTIONS
/// Reads one trimmed line. `None` once the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
