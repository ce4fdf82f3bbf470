//! View state for the team list and the actions that drive it.
//!
//! The controller owns the only copy of the UI state. Every mutation goes
//! through one of its methods, and every successful create, update or delete
//! is followed by a full re-fetch: the local list is replaced with the
//! server's snapshot, never patched.
//!
//! Actions take `&mut self`, so a second action cannot start while one is
//! still awaiting the server.

use tracing::debug;

use crate::client::TeamsClient;
use crate::form::TeamForm;
use crate::types::Team;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this team?";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    teams: Vec<Team>,
    loading: bool,
    error: Option<String>,
    form_visible: bool,
    selected_team: Option<Team>,
    details_visible: bool,
    form: TeamForm,
}

impl ViewState {
    /// Last snapshot fetched from the server.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    // Actions await their requests inline, so the surfaces never see this set.
    #[allow(dead_code)]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message for the error banner, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.selected_team.as_ref()
    }

    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    pub fn form(&self) -> &TeamForm {
        &self.form
    }

    /// Whether submitting the form updates an existing team.
    pub fn editing(&self) -> bool {
        self.selected_team.is_some()
    }
}

pub struct TeamsController {
    client: TeamsClient,
    surface_list_errors: bool,
    state: ViewState,
}

impl TeamsController {
    pub fn new(client: TeamsClient) -> Self {
        Self {
            client,
            surface_list_errors: false,
            state: ViewState::default(),
        }
    }

    /// Let list failures reach the error banner instead of showing no teams.
    pub fn surface_list_errors(mut self, enabled: bool) -> Self {
        self.surface_list_errors = enabled;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Look a team up in the current snapshot.
    pub fn find(&self, id: i64) -> Option<&Team> {
        self.state.teams.iter().find(|t| t.id == id)
    }

    /// Replace the local list with the server's current set.
    pub async fn refresh(&mut self) {
        self.state.loading = true;

        let result = if self.surface_list_errors {
            self.client.try_list_all().await
        } else {
            Ok(self.client.list_all().await)
        };

        match result {
            Ok(teams) => {
                debug!(count = teams.len(), "refreshed teams");
                self.state.teams = teams;
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.banner_message()),
        }

        self.state.loading = false;
    }

    /// Open an empty form for a new team.
    pub fn open_add(&mut self) {
        self.state.selected_team = None;
        self.state.form = TeamForm::default();
        self.state.form_visible = true;
    }

    /// Open the form pre-populated from `team`.
    pub fn open_edit(&mut self, team: Team) {
        self.state.form = TeamForm::from_team(&team);
        self.state.selected_team = Some(team);
        self.state.form_visible = true;
    }

    pub fn open_details(&mut self, team: Team) {
        self.state.selected_team = Some(team);
        self.state.details_visible = true;
    }

    pub fn close_details(&mut self) {
        self.state.details_visible = false;
    }

    pub fn cancel_form(&mut self) {
        self.state.form_visible = false;
        self.state.selected_team = None;
    }

    pub fn set_form_name(&mut self, name: impl Into<String>) {
        self.state.form.set_name(name);
    }

    pub fn set_form_city(&mut self, city: impl Into<String>) {
        self.state.form.set_city(city);
    }

    /// Fetch one team from the server and open the edit form for it.
    pub async fn edit_by_id(&mut self, id: i64) {
        self.state.loading = true;
        match self.client.get_by_id(id).await {
            Ok(team) => {
                self.open_edit(team);
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.banner_message()),
        }
        self.state.loading = false;
    }

    /// Fetch one team from the server and show its details.
    pub async fn view(&mut self, id: i64) {
        self.state.loading = true;
        match self.client.get_by_id(id).await {
            Ok(team) => {
                self.open_details(team);
                self.state.error = None;
            }
            Err(e) => self.state.error = Some(e.banner_message()),
        }
        self.state.loading = false;
    }

    /// Create or update depending on whether a team is selected.
    ///
    /// On success the list is refreshed and the form closed. On failure the
    /// form stays open with its values and the banner shows the message.
    pub async fn submit(&mut self) {
        if !self.state.form_visible {
            debug!("submit ignored, form is closed");
            return;
        }

        let data = match self.state.form.validate() {
            Ok(data) => data,
            Err(e) => {
                self.state.error = Some(e.banner_message());
                return;
            }
        };

        self.state.loading = true;

        let selected = self.state.selected_team.as_ref().map(|t| t.id);
        let result = match selected {
            Some(id) => self.client.update(id, &data).await.map(|_| ()),
            None => self.client.create(&data).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.refresh().await;
                self.state.form_visible = false;
                self.state.selected_team = None;
            }
            Err(e) => self.state.error = Some(e.banner_message()),
        }

        self.state.loading = false;
    }

    /// Delete after confirmation. Declining makes no request.
    ///
    /// Returns whether the user confirmed.
    pub async fn delete(&mut self, id: i64, confirm: &mut impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id, "delete declined");
            return false;
        }

        self.state.loading = true;
        match self.client.delete_by_id(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.state.error = Some(e.banner_message()),
        }
        self.state.loading = false;
        true
    }
}
