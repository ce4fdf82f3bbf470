use serde::{Deserialize, Serialize};

/// A team record as stored by the server.
///
/// `id` is assigned by the server and never sent back in request bodies.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub city: String,
}

/// Request body for create and update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TeamFormData {
    pub name: String,
    pub city: String,
}
