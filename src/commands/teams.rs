use tabled::Tabled;

use crate::cli::{AddArgs, EditArgs, OutputFormat};
use crate::controller::{TeamsController, ViewState};
use crate::error::{Result, TeamsError};
use crate::form::{CITY_LABEL, NAME_LABEL};
use crate::output::{self, heading, truncate};
use crate::prompt::{self, AssumeYes};
use crate::types::Team;

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: truncate(&team.name, 40),
            city: truncate(&team.city, 30),
        }
    }
}

fn compact_line(team: &Team) -> String {
    format!("{}\t{}\t{}", team.id, team.name, team.city)
}

pub fn render_list(teams: &[Team]) {
    if teams.is_empty() && !matches!(output::format(), OutputFormat::Json) {
        output::print_message("No teams found");
        return;
    }
    output::print_table(teams, |t| TeamRow::from(t), compact_line);
}

pub fn render_details(team: &Team) {
    output::print_item(team, |t| {
        println!("{}", heading("Team Details"));
        println!("  {NAME_LABEL}: {}", t.name);
        println!("  {CITY_LABEL}: {}", t.city);
        println!("  ID: {}", t.id);
    });
}

/// Turn a banner left by the last action into a command failure.
fn check(state: &ViewState) -> Result<()> {
    match state.error() {
        Some(message) => Err(TeamsError::Failed(message.to_string())),
        None => Ok(()),
    }
}

/// Success message followed by the refreshed list. JSON output gets the list only.
fn report(state: &ViewState, message: &str) {
    if !matches!(output::format(), OutputFormat::Json) {
        output::print_message(message);
    }
    render_list(state.teams());
}

pub async fn list(controller: &mut TeamsController) -> Result<()> {
    controller.refresh().await;
    check(controller.state())?;
    render_list(controller.state().teams());
    Ok(())
}

pub async fn show(controller: &mut TeamsController, id: i64) -> Result<()> {
    controller.view(id).await;
    check(controller.state())?;

    if let Some(team) = controller.state().selected_team() {
        render_details(team);
    }
    Ok(())
}

pub async fn add(controller: &mut TeamsController, args: AddArgs) -> Result<()> {
    controller.open_add();
    controller.set_form_name(args.name);
    controller.set_form_city(args.city);
    controller.submit().await;
    check(controller.state())?;

    report(controller.state(), "Created team");
    Ok(())
}

pub async fn edit(controller: &mut TeamsController, args: EditArgs) -> Result<()> {
    if args.name.is_none() && args.city.is_none() {
        return Err(TeamsError::Failed(
            "Nothing to update: pass --name and/or --city".to_string(),
        ));
    }

    controller.edit_by_id(args.id).await;
    check(controller.state())?;

    if let Some(name) = args.name {
        controller.set_form_name(name);
    }
    if let Some(city) = args.city {
        controller.set_form_city(city);
    }
    controller.submit().await;
    check(controller.state())?;

    report(controller.state(), &format!("Updated team {}", args.id));
    Ok(())
}

pub async fn delete(controller: &mut TeamsController, id: i64, yes: bool) -> Result<()> {
    let confirmed = if yes {
        controller.delete(id, &mut AssumeYes).await
    } else {
        controller.delete(id, &mut prompt::stdin()).await
    };

    if !confirmed {
        output::print_message("Aborted.");
        return Ok(());
    }
    check(controller.state())?;

    report(controller.state(), &format!("Deleted team {id}"));
    Ok(())
}
