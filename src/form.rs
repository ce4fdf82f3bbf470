use crate::error::{Result, TeamsError};
use crate::types::{Team, TeamFormData};

pub const NAME_LABEL: &str = "Team name";
pub const CITY_LABEL: &str = "City";

/// Field values of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamForm {
    name: String,
    city: String,
}

impl TeamForm {
    /// Form pre-populated from an existing team.
    pub fn from_team(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            city: team.city.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Both fields are required; whitespace-only counts as empty.
    ///
    /// Accepted values are sent exactly as typed.
    pub fn validate(&self) -> Result<TeamFormData> {
        if self.name.trim().is_empty() {
            return Err(TeamsError::MissingField(NAME_LABEL));
        }
        if self.city.trim().is_empty() {
            return Err(TeamsError::MissingField(CITY_LABEL));
        }

        Ok(TeamFormData {
            name: self.name.clone(),
            city: self.city.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_team_copies_name_and_city() {
        let team = Team {
            id: 3,
            name: "Eagles".to_string(),
            city: "Denver".to_string(),
        };
        let form = TeamForm::from_team(&team);
        assert_eq!(form.name(), "Eagles");
        assert_eq!(form.city(), "Denver");
    }

    #[test]
    fn test_validate_requires_both_fields() {
        let mut form = TeamForm::default();
        assert!(matches!(
            form.validate(),
            Err(TeamsError::MissingField(NAME_LABEL))
        ));

        form.set_name("Eagles");
        form.set_city("   ");
        assert!(matches!(
            form.validate(),
            Err(TeamsError::MissingField(CITY_LABEL))
        ));
    }

    #[test]
    fn test_validate_keeps_values_as_typed() {
        let mut form = TeamForm::default();
        form.set_name("  Eagles ");
        form.set_city("Denver");
        assert_eq!(
            form.validate().unwrap(),
            TeamFormData {
                name: "  Eagles ".to_string(),
                city: "Denver".to_string(),
            }
        );
    }
}
