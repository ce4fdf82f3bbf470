mod team;

pub use team::{Team, TeamFormData};
