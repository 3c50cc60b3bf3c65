use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: String,
}

impl UserRecord {
    /// Avatar initials: first letter of each word, at most two.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    pub fn list_from_json(json: &str) -> AppResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
