use clap::Parser;
use dialoguer::{Input, Select};
use show_browser::{BrowserUi, EpisodeBrowser, Panel, Show, ShowSearch, TvMazeCatalog};
use std::process;

/// Search TV shows on TVMaze and browse their episodes.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Initial search term; prompted for interactively when omitted
    term: Option<String>,

    /// Base URL of the TVMaze-compatible API to query
    #[arg(long, default_value = "https://api.tvmaze.com")]
    base_url: String,
}

/// What the user picked from the show list.
enum Action {
    /// Browse the episodes of the show with this id
    Episodes(u64),
    /// Start a new search
    NewSearch,
    /// Leave the program
    Quit,
}

/// Prints a panel to stdout. Hidden panels print nothing.
fn print_panel(panel: &Panel) {
    if panel.is_visible() {
        print!("{}", panel.content());
    }
}

/// Asks for a search term. An empty term is allowed, as on the API side.
fn prompt_term() -> Result<String, dialoguer::Error> {
    Input::new()
        .with_prompt("Search shows")
        .allow_empty(true)
        .interact_text()
}

/// Presents the show list as a menu of per-show episode controls.
fn prompt_action(shows: &[Show]) -> Result<Action, dialoguer::Error> {
    let mut items: Vec<String> = shows
        .iter()
        .map(|show| format!("Episodes of {}", show.name))
        .collect();
    items.push("Search again".to_string());
    items.push("Quit".to_string());

    let picked = Select::new()
        .with_prompt("Pick a show")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match picked {
        i if i < shows.len() => Action::Episodes(shows[i].id),
        i if i == shows.len() => Action::NewSearch,
        _ => Action::Quit,
    })
}

fn run(args: Args) -> Result<(), dialoguer::Error> {
    let search = ShowSearch::new(TvMazeCatalog::with_base_url(&args.base_url));
    let browser = EpisodeBrowser::new(TvMazeCatalog::with_base_url(&args.base_url));
    let mut ui = BrowserUi::new();

    let mut initial_term = args.term;

    loop {
        let term = match initial_term.take() {
            Some(term) => term,
            None => prompt_term()?,
        };

        let shows = match search.search_and_display(&term, &mut ui) {
            Ok(shows) => shows,
            Err(e) => {
                // Prior panel content stays in place; just report and re-prompt
                eprintln!("Error: {}", e);
                continue;
            }
        };

        print_panel(&ui.show_list);

        if shows.is_empty() {
            println!("No shows found for '{}'.", term);
            continue;
        }

        loop {
            match prompt_action(&shows)? {
                Action::Episodes(show_id) => {
                    match browser.browse_and_display(show_id, &mut ui) {
                        Ok(_) => print_panel(&ui.episode_panel),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Action::NewSearch => break,
                Action::Quit => return Ok(()),
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
