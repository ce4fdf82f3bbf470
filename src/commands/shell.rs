//! Interactive session over a single controller.
//!
//! Mirrors the single-page flow: the list is fetched once at start, every
//! add/edit/delete goes through the controller, and the error banner sits
//! above the list until the next successful refresh replaces it.

use std::io::BufRead;

use crate::commands::teams::{render_details, render_list};
use crate::controller::{TeamsController, ViewState};
use crate::error::Result;
use crate::form::{CITY_LABEL, NAME_LABEL};
use crate::output::{self, heading};
use crate::prompt::{self, is_yes, Prompter};

const HELP: &str = "Commands:
  list             Show the current list
  refresh          Re-fetch the list from the server
  add              Create a team
  edit <id>        Edit a team from the list
  show <id>        Show a team's details
  delete <id>      Delete a team (asks first)
  help             Show this help
  quit             Leave the session";

pub async fn run(controller: &mut TeamsController) -> Result<()> {
    session(controller, &mut prompt::stdin()).await
}

async fn session<R: BufRead>(
    controller: &mut TeamsController,
    prompter: &mut Prompter<R>,
) -> Result<()> {
    println!("{}", heading("Teams Management"));
    println!("Type 'help' for commands.\n");

    controller.refresh().await;
    render_view(controller.state());

    loop {
        let Some(line) = prompter.read_line("teams> ")? else {
            println!();
            break;
        };

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match command {
            "list" | "ls" => render_view(controller.state()),
            "refresh" | "r" => {
                controller.refresh().await;
                render_view(controller.state());
            }
            "add" | "a" => {
                controller.open_add();
                run_form(controller, prompter).await?;
            }
            "edit" | "e" => {
                let Some(id) = parse_id(command, arg) else {
                    continue;
                };
                match controller.find(id).cloned() {
                    Some(team) => {
                        controller.open_edit(team);
                        run_form(controller, prompter).await?;
                    }
                    None => println!("No team with ID {id} in the list"),
                }
            }
            "show" | "s" => {
                let Some(id) = parse_id(command, arg) else {
                    continue;
                };
                match controller.find(id).cloned() {
                    Some(team) => {
                        controller.open_details(team);
                        let state = controller.state();
                        if let (true, Some(team)) = (state.details_visible(), state.selected_team()) {
                            render_details(team);
                        }
                        controller.close_details();
                    }
                    None => println!("No team with ID {id} in the list"),
                }
            }
            "delete" | "rm" => {
                let Some(id) = parse_id(command, arg) else {
                    continue;
                };
                if controller.delete(id, prompter).await {
                    render_view(controller.state());
                }
            }
            "help" | "?" => println!("{HELP}"),
            "quit" | "exit" | "q" => break,
            other => println!("Unknown command: {other}. Type 'help' for commands."),
        }
    }

    Ok(())
}

/// Error banner, then the list.
fn render_view(state: &ViewState) {
    if let Some(message) = state.error() {
        output::print_banner(message);
    }
    render_list(state.teams());
}

fn parse_id(command: &str, arg: Option<&str>) -> Option<i64> {
    match arg.map(str::parse::<i64>) {
        Some(Ok(id)) => Some(id),
        _ => {
            println!("Usage: {command} <id>");
            None
        }
    }
}

/// Prompt for the form fields and submit until it succeeds or the user gives up.
async fn run_form<R: BufRead>(
    controller: &mut TeamsController,
    prompter: &mut Prompter<R>,
) -> Result<()> {
    let title = if controller.state().editing() {
        "Edit Team"
    } else {
        "Add New Team"
    };
    println!("{}", heading(title));

    loop {
        let current = controller.state().form().name().to_string();
        let Some(name) = prompt_field(prompter, NAME_LABEL, &current)? else {
            return cancel(controller);
        };
        controller.set_form_name(name);

        let current = controller.state().form().city().to_string();
        let Some(city) = prompt_field(prompter, CITY_LABEL, &current)? else {
            return cancel(controller);
        };
        controller.set_form_city(city);

        controller.submit().await;
        if !controller.state().form_visible() {
            render_view(controller.state());
            return Ok(());
        }

        if let Some(message) = controller.state().error() {
            output::print_banner(message);
        }
        match prompter.read_line("Try again? [y/N] ")? {
            Some(answer) if is_yes(&answer) => continue,
            _ => return cancel(controller),
        }
    }
}

fn cancel(controller: &mut TeamsController) -> Result<()> {
    controller.cancel_form();
    println!("Cancelled.");
    Ok(())
}

/// Read a required field. Empty input keeps `current`; end of input cancels.
fn prompt_field<R: BufRead>(
    prompter: &mut Prompter<R>,
    label: &str,
    current: &str,
) -> Result<Option<String>> {
    loop {
        let prompt = if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };
        let Some(input) = prompter.read_line(&prompt)? else {
            return Ok(None);
        };

        match field_value(&input, current) {
            Some(value) => return Ok(Some(value)),
            None => println!("{label} is required"),
        }
    }
}

/// Blank input falls back to `current`. Values are kept as typed.
fn field_value(input: &str, current: &str) -> Option<String> {
    let value = if input.trim().is_empty() { current } else { input };
    (!value.trim().is_empty()).then(|| value.to_string())
}
