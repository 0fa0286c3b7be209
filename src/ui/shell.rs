//! Interactive navigation shell.
//!
//! A single-choice list of pages; selecting one renders it, and the
//! list comes back. Cancelling the prompt (Esc) leaves the shell. A
//! page that fails to render reports its error and navigation carries
//! on - no failure here is fatal to the shell.

use dialoguer::{Select, theme::ColorfulTheme};

use crate::core::error::Result;
use crate::data::store::DataStore;
use crate::reporting::logging;
use crate::ui::color::{Colors, colorize};
use crate::ui::pages::{Page, RenderOptions, render_page};

/// Run the navigation loop until the user cancels the prompt.
pub fn run_shell(store: &DataStore, options: &RenderOptions) -> Result<()> {
    let titles: Vec<&str> = Page::ALL.iter().map(|p| p.title()).collect();
    let theme = ColorfulTheme::default();
    let mut selected = 0usize;

    println!(
        "{}",
        colorize(
            &format!("{}Berlin Bicycle Theft Dashboard{}", Colors::BOLD, Colors::RESET),
            Colors::BRIGHT_CYAN
        )
    );
    println!("{}", colorize("(Esc to quit)", Colors::DIM));

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Navigation")
            .items(&titles)
            .default(selected)
            .interact_opt()?;

        let Some(index) = choice else {
            break;
        };
        selected = index;
        let page = Page::ALL[index];

        logging::log_page_selected(page.title());
        if let Err(e) = render_page(page, store, options) {
            logging::log_error(&format!("Could not render '{}'", page.title()), Some(&e));
            eprintln!(
                "{}",
                colorize(&format!("Error: {e}"), Colors::BRIGHT_RED)
            );
        }
        println!();
    }

    Ok(())
}
