use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::AccountId;

/// Query string of the list endpoints. `search` is left out entirely when
/// there is nothing to search for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    pub fn new(search: &str, page: u32, limit: u32) -> Self {
        let search = Some(search.to_string()).filter(|s| !s.is_empty());
        Self {
            search,
            page,
            limit,
        }
    }
}

/// List response envelope. `data` is kept as raw JSON: the backend answers
/// with `null` when nothing matched, and callers decide how to read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: AccountId,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub phone: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
}
