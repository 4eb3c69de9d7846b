// UI layer: a simple interactive menu built on `dialoguer`. It collects
// input, asks for confirmation, calls a handler from `commands` and prints
// the returned outcome. All library logic lives in `commands`.

use crate::commands::{self, Outcome};
use crate::error::StoreError;
use crate::session::Session;
use anyhow::Result;
use crossterm::style::{style, Stylize};
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewLibrary,
    AddBook,
    RemoveBook,
    ViewBooks,
    SearchBooks,
    SaveAndExit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::ViewLibrary,
        MenuAction::AddBook,
        MenuAction::RemoveBook,
        MenuAction::ViewBooks,
        MenuAction::SearchBooks,
        MenuAction::SaveAndExit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewLibrary => "View Library",
            MenuAction::AddBook => "Add Book",
            MenuAction::RemoveBook => "Remove Book",
            MenuAction::ViewBooks => "View Books",
            MenuAction::SearchBooks => "Search Books",
            MenuAction::SaveAndExit => "Save & Exit",
        }
    }

    /// Subheader printed above the output of each action.
    pub fn heading(self) -> &'static str {
        match self {
            MenuAction::ViewLibrary => "Your Library",
            MenuAction::AddBook => "Add a New Book",
            MenuAction::RemoveBook => "Remove a Book",
            MenuAction::ViewBooks => "View All Books",
            MenuAction::SearchBooks => "Search for a Book",
            MenuAction::SaveAndExit => "Save and Exit",
        }
    }
}

/// Main interactive menu. Owns the session and runs a select loop until the
/// user confirms closing after "Save & Exit", or presses Esc on the menu.
///
/// Every add/remove is saved immediately, so leaving with Esc loses nothing.
pub fn main_menu(mut session: Session) -> Result<()> {
    println!("{}", style("Personal Library Manager").bold());
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let selection = Select::new()
            .with_prompt("Select an option")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let Some(selection) = selection else {
            break;
        };
        let action = MenuAction::ALL[selection];
        println!("\n{}", style(action.heading()).bold().underlined());

        match action {
            MenuAction::ViewLibrary | MenuAction::ViewBooks => {
                render(&commands::view(&session));
            }
            MenuAction::AddBook => handle_add(&mut session)?,
            MenuAction::RemoveBook => handle_remove(&mut session)?,
            MenuAction::SearchBooks => handle_search(&session)?,
            MenuAction::SaveAndExit => {
                if handle_save(&session)? {
                    break;
                }
            }
        }
        println!();
    }
    Ok(())
}

/// Collect title and author, then add the book once the user confirms.
fn handle_add(session: &mut Session) -> Result<()> {
    let title = prompt("Book Title")?;
    let author = prompt("Author Name")?;
    if !confirm("Add Book?")? {
        return Ok(());
    }
    report(commands::add(session, &title, &author), "Add");
    Ok(())
}

fn handle_remove(session: &mut Session) -> Result<()> {
    let title = prompt("Book Title to Remove")?;
    if !confirm("Remove Book?")? {
        return Ok(());
    }
    report(commands::remove(session, &title), "Remove");
    Ok(())
}

fn handle_search(session: &Session) -> Result<()> {
    let term = prompt("Enter title or author to search")?;
    if !confirm("Search?")? {
        return Ok(());
    }
    render(&commands::search(session, &term));
    Ok(())
}

/// Save with a spinner, then ask whether to close. Returns `true` when the
/// menu loop should stop.
fn handle_save(session: &Session) -> Result<bool> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Saving library...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = commands::save_and_exit(session);
    spinner.finish_and_clear();

    let saved = result.is_ok();
    report(result, "Save");
    if !saved {
        return Ok(false);
    }
    confirm("Close the app now?")
}

/// Text prompt that accepts empty input; validation happens in `commands`.
fn prompt(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn confirm(label: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(label).default(true).interact()?)
}

/// Print a handler result. A store failure aborts only this action, so it is
/// printed and the menu carries on.
fn report(result: std::result::Result<Outcome, StoreError>, action: &str) {
    match result {
        Ok(outcome) => render(&outcome),
        Err(e) => println!("{}", style(format!("{} failed: {}", action, e)).red()),
    }
}

/// Print an outcome using its `Display` form, coloured by kind.
fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Success(_) => println!("{}", style(outcome).green()),
        Outcome::Error(_) => println!("{}", style(outcome).red()),
        Outcome::Books { .. } | Outcome::Info(_) => println!("{}", outcome),
    }
}
