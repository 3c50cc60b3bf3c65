//! Embedded demo dataset: user table and search index.

use crate::errors::AppResult;
use crate::models::search_record::SearchRecord;
use crate::models::user::UserRecord;

const USERS_JSON: &str = include_str!("users.json");
const SEARCH_INDEX_JSON: &str = include_str!("search_index.json");

/// Static data the application works over. Fixed at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub index: Vec<SearchRecord>,
}

impl Dataset {
    pub fn sample() -> AppResult<Self> {
        Ok(Self {
            users: UserRecord::list_from_json(USERS_JSON)?,
            index: SearchRecord::list_from_json(SEARCH_INDEX_JSON)?,
        })
    }
}
